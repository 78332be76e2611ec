use std::fmt;

use fido_rp_proto::Base64UrlSafeData;
use serde::{Deserialize, Serialize};

use crate::crypto::{constant_time_eq, random_challenge_bytes};

/// A server issued nonce. Generate a new one for every ceremony and never reuse it.
///
/// Equality is constant time.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "Base64UrlSafeData", into = "Base64UrlSafeData")]
pub struct Challenge(Vec<u8>);

impl Challenge {
    /// A fresh challenge from the system CSPRNG.
    pub fn generate() -> Self {
        Challenge(random_challenge_bytes())
    }

    /// Wrap known challenge bytes, for example when they were kept in a session store.
    pub fn new(challenge: Vec<u8>) -> Self {
        Challenge(challenge)
    }

    /// The raw challenge.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Challenge {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for Challenge {}

impl From<Base64UrlSafeData> for Challenge {
    fn from(data: Base64UrlSafeData) -> Self {
        Challenge(data.0)
    }
}

impl From<Challenge> for Base64UrlSafeData {
    fn from(chal: Challenge) -> Self {
        Base64UrlSafeData(chal.0)
    }
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Challenge({})", self)
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Base64UrlSafeData(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CHALLENGE_SIZE_BYTES;

    #[test]
    fn generate_is_unique() {
        let a = Challenge::generate();
        let b = Challenge::generate();
        assert_eq!(a.as_bytes().len(), CHALLENGE_SIZE_BYTES);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn display_is_base64url() {
        let c = Challenge::new(vec![0x00, 0x01, 0x02, 0xff]);
        assert_eq!(c.to_string(), "AAEC_w");
        assert_eq!(serde_json::to_string(&c).unwrap(), r#""AAEC_w""#);
        assert_ne!(c, Challenge::new(vec![0x00, 0x01, 0x02]));
    }
}
