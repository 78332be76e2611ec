use std::collections::HashSet;

use crate::error::CborError;
use crate::value::Value;

/// The deepest nesting of arrays, maps and tags accepted by default. Attestation objects and
/// COSE keys nest at most three levels.
pub const DEFAULT_MAX_DEPTH: usize = 64;

const MAJOR_UNSIGNED: u8 = 0;
const MAJOR_NEGATIVE: u8 = 1;
const MAJOR_BYTES: u8 = 2;
const MAJOR_TEXT: u8 = 3;
const MAJOR_ARRAY: u8 = 4;
const MAJOR_MAP: u8 = 5;
const MAJOR_TAG: u8 = 6;
const MAJOR_SIMPLE: u8 = 7;

const INFO_INDEFINITE: u8 = 31;

/// What makes two map keys the same. Integer and string keys compare by value, so a non minimal
/// length encoding can not disguise a repeated label. Other keys compare by their encoding.
#[derive(PartialEq, Eq, Hash)]
enum KeyIdentity<'a> {
    Integer(i128),
    Text(String),
    Bytes(Vec<u8>),
    Encoded(&'a [u8]),
}

/// The argument that follows a header byte.
enum Argument {
    Definite(u64),
    Indefinite,
}

/// Decode exactly one data item from `input`. Fails if anything follows it.
pub fn from_slice(input: &[u8]) -> Result<Value, CborError> {
    let mut decoder = Decoder::new(input);
    let value = decoder.decode_value()?;
    if decoder.is_empty() {
        Ok(value)
    } else {
        Err(CborError::TrailingData(decoder.remaining().len()))
    }
}

/// A cursor over a byte buffer that decodes one data item at a time.
///
/// Use this rather than [from_slice] when the item is followed by other data, such as the
/// credential public key inside authenticator data.
#[derive(Debug)]
pub struct Decoder<'a> {
    input: &'a [u8],
    offset: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    /// Start decoding at the beginning of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Decoder {
            input,
            offset: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// How many bytes have been consumed.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Decode the next data item. A break marker here is an error.
    pub fn decode_value(&mut self) -> Result<Value, CborError> {
        self.expect_item(0)
    }

    fn expect_item(&mut self, depth: usize) -> Result<Value, CborError> {
        let start = self.offset;
        self.decode_item(depth)?
            .ok_or(CborError::UnexpectedBreak(start))
    }

    /// Decode one item, or return `None` if the next byte is the break marker. Only the loops
    /// reading indefinite length items may accept `None`; everything else goes through
    /// `expect_item`.
    fn decode_item(&mut self, depth: usize) -> Result<Option<Value>, CborError> {
        if depth > self.max_depth {
            return Err(CborError::DepthLimitExceeded(self.max_depth));
        }

        let start = self.offset;
        let header = self.read_u8()?;
        let major = header >> 5;
        let info = header & 0x1f;

        if major == MAJOR_SIMPLE {
            return self.decode_simple(start, info);
        }

        let argument = self.read_argument(start, info)?;

        let value = match (major, argument) {
            (MAJOR_UNSIGNED, Argument::Definite(n)) => Value::Integer(i128::from(n)),
            (MAJOR_NEGATIVE, Argument::Definite(n)) => Value::Integer(-1 - i128::from(n)),
            (MAJOR_BYTES, Argument::Definite(len)) => {
                Value::Bytes(self.take(start, len)?.to_vec())
            }
            (MAJOR_BYTES, Argument::Indefinite) => {
                Value::Bytes(self.decode_chunks(MAJOR_BYTES, depth)?)
            }
            (MAJOR_TEXT, Argument::Definite(len)) => {
                let bytes = self.take(start, len)?;
                let s = std::str::from_utf8(bytes).map_err(|_| CborError::InvalidUtf8(start))?;
                Value::Text(s.to_string())
            }
            (MAJOR_TEXT, Argument::Indefinite) => {
                let bytes = self.decode_chunks(MAJOR_TEXT, depth)?;
                let s = String::from_utf8(bytes).map_err(|_| CborError::InvalidUtf8(start))?;
                Value::Text(s)
            }
            (MAJOR_ARRAY, Argument::Definite(count)) => {
                let mut items = Vec::with_capacity(self.bounded_capacity(count));
                for _ in 0..count {
                    items.push(self.expect_item(depth + 1)?);
                }
                Value::Array(items)
            }
            (MAJOR_ARRAY, Argument::Indefinite) => {
                let mut items = Vec::new();
                while let Some(item) = self.decode_item(depth + 1)? {
                    items.push(item);
                }
                Value::Array(items)
            }
            (MAJOR_MAP, Argument::Definite(count)) => {
                let mut entries = Vec::with_capacity(self.bounded_capacity(count));
                let mut seen = HashSet::with_capacity(entries.capacity());
                for _ in 0..count {
                    let key_start = self.offset;
                    let key = self.expect_item(depth + 1)?;
                    self.push_entry(&mut entries, &mut seen, key_start, key, depth)?;
                }
                Value::Map(entries)
            }
            (MAJOR_MAP, Argument::Indefinite) => {
                let mut entries = Vec::new();
                let mut seen = HashSet::new();
                loop {
                    let key_start = self.offset;
                    match self.decode_item(depth + 1)? {
                        Some(key) => {
                            self.push_entry(&mut entries, &mut seen, key_start, key, depth)?
                        }
                        None => break,
                    }
                }
                Value::Map(entries)
            }
            (MAJOR_TAG, Argument::Definite(tag)) => {
                Value::Tag(tag, Box::new(self.expect_item(depth + 1)?))
            }
            (major, _) => {
                return Err(CborError::UnexpectedIndefiniteLength {
                    offset: start,
                    major,
                })
            }
        };

        Ok(Some(value))
    }

    /// Read the value for `key` and append the pair. A break between a key and its value is
    /// malformed, and so is a key that already appeared in the same map.
    fn push_entry(
        &mut self,
        entries: &mut Vec<(Value, Value)>,
        seen: &mut HashSet<KeyIdentity<'a>>,
        key_start: usize,
        key: Value,
        depth: usize,
    ) -> Result<(), CborError> {
        let input = self.input;
        let identity = match &key {
            Value::Integer(i) => KeyIdentity::Integer(*i),
            Value::Text(t) => KeyIdentity::Text(t.clone()),
            Value::Bytes(b) => KeyIdentity::Bytes(b.clone()),
            _ => KeyIdentity::Encoded(&input[key_start..self.offset]),
        };
        if !seen.insert(identity) {
            return Err(CborError::DuplicateMapKey(key_start));
        }

        let value = self.expect_item(depth + 1)?;
        entries.push((key, value));
        Ok(())
    }

    /// Major type 7: floats, simple values and the break marker.
    fn decode_simple(&mut self, start: usize, info: u8) -> Result<Option<Value>, CborError> {
        let value = match info {
            0..=19 => Value::Simple(info),
            20 => Value::Bool(false),
            21 => Value::Bool(true),
            22 => Value::Null,
            23 => Value::Undefined,
            24 => {
                let value = self.read_u8()?;
                if value < 32 {
                    return Err(CborError::UnsupportedSimpleValue {
                        offset: start,
                        value,
                    });
                }
                Value::Simple(value)
            }
            25 => {
                let bits = self.read_be(2)? as u16;
                Value::Float(f16_to_f64(bits))
            }
            26 => {
                let bits = self.read_be(4)? as u32;
                Value::Float(f64::from(f32::from_bits(bits)))
            }
            27 => Value::Float(f64::from_bits(self.read_be(8)?)),
            INFO_INDEFINITE => return Ok(None),
            _ => {
                return Err(CborError::ReservedAdditionalInfo {
                    offset: start,
                    info,
                })
            }
        };
        Ok(Some(value))
    }

    /// Join the chunks of an indefinite length byte or text string. Each chunk must be a
    /// definite length string of the same major type.
    fn decode_chunks(&mut self, major: u8, depth: usize) -> Result<Vec<u8>, CborError> {
        let mut joined = Vec::new();
        loop {
            let chunk_start = self.offset;
            let header = *self
                .input
                .get(chunk_start)
                .ok_or(CborError::UnexpectedEof(chunk_start))?;

            let is_break = header == (MAJOR_SIMPLE << 5) | INFO_INDEFINITE;
            let is_definite_chunk = header >> 5 == major && header & 0x1f != INFO_INDEFINITE;
            if !is_break && !is_definite_chunk {
                return Err(CborError::InvalidStringChunk(chunk_start));
            }

            match self.decode_item(depth + 1)? {
                None => break,
                Some(Value::Bytes(b)) => joined.extend_from_slice(&b),
                Some(Value::Text(s)) => joined.extend_from_slice(s.as_bytes()),
                Some(_) => return Err(CborError::InvalidStringChunk(chunk_start)),
            }
        }
        Ok(joined)
    }

    fn read_argument(&mut self, start: usize, info: u8) -> Result<Argument, CborError> {
        match info {
            0..=23 => Ok(Argument::Definite(u64::from(info))),
            24 => self.read_be(1).map(Argument::Definite),
            25 => self.read_be(2).map(Argument::Definite),
            26 => self.read_be(4).map(Argument::Definite),
            27 => self.read_be(8).map(Argument::Definite),
            INFO_INDEFINITE => Ok(Argument::Indefinite),
            _ => Err(CborError::ReservedAdditionalInfo {
                offset: start,
                info,
            }),
        }
    }

    fn read_u8(&mut self) -> Result<u8, CborError> {
        let b = *self
            .input
            .get(self.offset)
            .ok_or(CborError::UnexpectedEof(self.offset))?;
        self.offset += 1;
        Ok(b)
    }

    /// Read a big endian unsigned integer of `width` (at most 8) bytes.
    fn read_be(&mut self, width: usize) -> Result<u64, CborError> {
        let bytes = self
            .input
            .get(self.offset..self.offset + width)
            .ok_or(CborError::UnexpectedEof(self.input.len()))?;
        self.offset += width;
        Ok(bytes
            .iter()
            .fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
    }

    /// Slice off `len` bytes, checking the claimed length against what is left first.
    fn take(&mut self, start: usize, len: u64) -> Result<&'a [u8], CborError> {
        let remaining = self.input.len() - self.offset;
        let len = usize::try_from(len)
            .ok()
            .filter(|len| *len <= remaining)
            .ok_or(CborError::LengthOutOfBounds {
                offset: start,
                len,
                remaining,
            })?;
        let bytes = &self.input[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    /// Every element needs at least one byte, so never reserve more slots than bytes remain.
    fn bounded_capacity(&self, count: u64) -> usize {
        let remaining = self.input.len() - self.offset;
        usize::try_from(count).map_or(remaining, |count| count.min(remaining))
    }
}

/// Widen an IEEE 754 half precision float.
fn f16_to_f64(bits: u16) -> f64 {
    let sign = if bits & 0x8000 == 0 { 1.0 } else { -1.0 };
    let exponent = i32::from((bits >> 10) & 0x1f);
    let fraction = bits & 0x03ff;
    let mantissa = f64::from(fraction);

    match exponent {
        // Zero and subnormals: mantissa * 2^-24
        0 => sign * mantissa * 2f64.powi(-24),
        31 => {
            if fraction == 0 {
                sign * f64::INFINITY
            } else {
                f64::NAN
            }
        }
        // (1 + mantissa / 2^10) * 2^(exponent - 15)
        _ => sign * (1024.0 + mantissa) * 2f64.powi(exponent - 25),
    }
}
