/// A decoded data item.
///
/// Maps keep their entries in wire order as key/value pairs, so lookups are linear. The maps
/// found in attestation objects and COSE keys have a handful of entries. The decoder refuses
/// repeated keys, so a decoded map has at most one entry per key.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Major types 0 and 1. A negative integer `n` on the wire decodes to `-1 - n`.
    Integer(i128),
    /// Major type 2, with indefinite length chunks already joined.
    Bytes(Vec<u8>),
    /// Major type 3, with indefinite length chunks already joined.
    Text(String),
    /// Major type 4.
    Array(Vec<Value>),
    /// Major type 5.
    Map(Vec<(Value, Value)>),
    /// Major type 6: a tag number and the tagged item.
    Tag(u64, Box<Value>),
    /// Half, single or double precision floats, widened.
    Float(f64),
    /// Simple values 20 and 21.
    Bool(bool),
    /// Simple value 22.
    Null,
    /// Simple value 23.
    Undefined,
    /// Any other simple value (0 to 19, or 32 to 255).
    Simple(u8),
}

impl Value {
    /// The integer, if this is one.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The byte string, if this is one.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// The text string, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The array elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a.as_slice()),
            _ => None,
        }
    }

    /// The map entries, if this is a map.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(m) => Some(m.as_slice()),
            _ => None,
        }
    }

    /// Look up the entry whose key equals `key`. Returns `None` if this is not a map.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.as_map()
            .and_then(|m| m.iter().find(|(k, _)| k == key).map(|(_, v)| v))
    }

    /// Look up an integer keyed entry, as used by COSE keys.
    pub fn get_int(&self, key: i128) -> Option<&Value> {
        self.as_map().and_then(|m| {
            m.iter()
                .find(|(k, _)| k.as_integer() == Some(key))
                .map(|(_, v)| v)
        })
    }

    /// Look up a text keyed entry, as used by attestation objects.
    pub fn get_text(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| {
            m.iter()
                .find(|(k, _)| k.as_text() == Some(key))
                .map(|(_, v)| v)
        })
    }
}

impl From<i128> for Value {
    fn from(i: i128) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}
