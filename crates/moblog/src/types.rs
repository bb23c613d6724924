//! Request-side value types: parameters, flags, and the binary payload.
//!
//! A [`Param`] is one positional argument of a remote call. Parameters are
//! always scalars on the wire: text, a 32-bit integer, or base64 text produced
//! from a [`Payload`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// One positional argument of a remote procedure call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Param {
    /// A plain string argument (credentials, titles, flags, filters).
    Text(String),
    /// A numeric argument (moblog, entry, list and template identifiers).
    Int(i32),
    /// Base64 text of an uploaded file. Transports send it as a string.
    Base64(String),
}

impl Param {
    /// Returns the text carried by a [`Param::Text`] or [`Param::Base64`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Base64(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer carried by a [`Param::Int`].
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Base64(s) => write!(f, "<base64, {} chars>", s.len()),
        }
    }
}

// ---------------------------------------------------------------------------
// Character-coded flags
// ---------------------------------------------------------------------------

// Generates a String-backed flag type constructible from `char`, `&str` and
// `String`, plus the known codes as `char` constants. No membership check:
// the service rejects codes it does not understand.
macro_rules! flag_code {
    (
        $(#[$attr:meta])*
        $name:ident {
            $(
                $(#[$code_attr:meta])*
                $code:ident = $ch:literal
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            $(
                $(#[$code_attr])*
                pub const $code: char = $ch;
            )*

            /// Returns the flag as it is sent on the wire.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<char> for $name {
            fn from(value: char) -> Self {
                Self(value.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

flag_code! {
    /// Whether posts to a moblog need the owner's approval.
    ApprovalType {
        /// Community moblog: images must be approved by the owner.
        COMMUNITY = 'C',
        /// Private moblog (service default): images post immediately.
        PRIVATE = 'P',
    }
}

flag_code! {
    /// Whether visitors may comment on a moblog's entries.
    AllowComments {
        /// Comments allowed (service default).
        YES = 'Y',
        /// Comments disabled.
        NO = 'N',
    }
}

// ---------------------------------------------------------------------------
// Binary payload
// ---------------------------------------------------------------------------

/// File contents encoded for upload as a single base64 text parameter.
///
/// Uses the standard alphabet with padding and no line breaks. The encoded
/// text is materialized as one contiguous string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    encoded: String,
    raw_len: usize,
}

impl Payload {
    /// Encodes raw file bytes.
    pub fn encode(bytes: &[u8]) -> Self {
        Self {
            encoded: STANDARD.encode(bytes),
            raw_len: bytes.len(),
        }
    }

    /// Returns the base64 text.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Returns the number of raw bytes before encoding.
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Decodes the payload back to the original bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.encoded)
    }

    /// Converts the payload into its wire parameter.
    pub fn into_param(self) -> Param {
        Param::Base64(self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_and_string_flags_normalize_identically() {
        assert_eq!(ApprovalType::from('C'), ApprovalType::from("C"));
        assert_eq!(
            AllowComments::from(AllowComments::NO),
            AllowComments::from(String::from("N"))
        );
        assert_eq!(ApprovalType::from(ApprovalType::PRIVATE).as_str(), "P");
    }

    #[test]
    fn flags_are_not_validated() {
        assert_eq!(AllowComments::from('x').as_str(), "x");
    }

    #[test]
    fn payload_round_trips_through_base64() {
        let bytes: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();
        let payload = Payload::encode(&bytes);

        assert_eq!(payload.raw_len(), 512);
        assert!(!payload.as_str().contains('\n'));
        assert_eq!(payload.decode().unwrap(), bytes);
    }

    #[test]
    fn empty_payload_encodes_to_empty_text() {
        let payload = Payload::encode(&[]);
        assert_eq!(payload.as_str(), "");
        assert_eq!(payload.into_param(), Param::Base64(String::new()));
    }

    #[test]
    fn param_accessors_match_variants() {
        assert_eq!(Param::from(7).as_int(), Some(7));
        assert_eq!(Param::from("abc").as_text(), Some("abc"));
        assert_eq!(Param::Base64("AAE=".into()).as_text(), Some("AAE="));
        assert_eq!(Param::from("abc").as_int(), None);
    }

    #[test]
    fn params_serialize_with_a_type_tag() {
        let json = serde_json::to_value(Param::Int(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "int", "value": 42 }));
    }
}
