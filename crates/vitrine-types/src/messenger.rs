//! Messenger identity types: recipients and routing tokens.
//!
//! A registration on the messenger bus is keyed by a `(RecipientId, Token)`
//! pair. `RecipientId` carries identity equality (freshly minted ids never
//! collide), while `Token` is a value-equality routing key shared between
//! publisher and subscriber.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a subscribing component.
///
/// Backed by UUID v7, so a freshly minted id is unique and comparing ids is
/// the moral equivalent of comparing object identity. The bus stores only
/// the id, never the component itself. The nil UUID stands for "no
/// recipient" and is rejected at the bus boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipientId(pub Uuid);

impl RecipientId {
    /// Mint a new RecipientId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn fresh() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a RecipientId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Whether this id is the nil sentinel ("no recipient").
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for RecipientId {
    fn default() -> Self {
        Self::fresh()
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipientId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Opaque routing key matched between publisher and subscriber.
///
/// Tokens compare by value: two tokens holding the same text are the same
/// routing key. The empty string stands for "no token" and is rejected at
/// the bus boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Create a token from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this token is the empty sentinel ("no token").
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_recipient_ids_are_distinct() {
        let a = RecipientId::fresh();
        let b = RecipientId::fresh();
        assert_ne!(a, b);
        assert!(!a.is_nil());
    }

    #[test]
    fn test_nil_recipient_detected() {
        let nil = RecipientId::from_uuid(Uuid::nil());
        assert!(nil.is_nil());
    }

    #[test]
    fn test_recipient_id_serde_roundtrip() {
        let id = RecipientId::fresh();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: RecipientId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_recipient_id_display_parse_roundtrip() {
        let id = RecipientId::fresh();
        let parsed: RecipientId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_tokens_compare_by_value() {
        let a = Token::new("greet");
        let b: Token = "greet".into();
        assert_eq!(a, b);
        assert_ne!(a, Token::new("other"));
    }

    #[test]
    fn test_empty_token_detected() {
        assert!(Token::new("").is_empty());
        assert!(!Token::new("t1").is_empty());
    }

    #[test]
    fn test_token_serde_roundtrip() {
        let token = Token::new("token1");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"token1\"");
        let parsed: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, token);
    }
}
