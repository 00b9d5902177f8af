//! Room naming.

use crate::RoomError;
use std::fmt;

/// A validated room name: trimmed, non-empty, and within the configured
/// length limit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomName(String);

impl RoomName {
    /// Validates `raw` as a room name of at most `max_len` characters.
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, RoomError> {
        let name = raw.trim();
        let invalid = |reason: String| RoomError::InvalidRoomName {
            name: raw.to_string(),
            reason,
        };
        if name.is_empty() {
            return Err(invalid("name is blank".to_string()));
        }
        let len = name.chars().count();
        if len > max_len {
            return Err(invalid(format!(
                "{} characters, at most {} allowed",
                len, max_len
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("name contains whitespace".to_string()));
        }
        Ok(RoomName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_space() {
        let name = RoomName::parse("  lobby ", 20).unwrap();
        assert_eq!(name.as_str(), "lobby");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(
            RoomName::parse("   ", 20),
            Err(RoomError::InvalidRoomName { .. })
        ));
    }

    #[test]
    fn rejects_too_long() {
        assert!(RoomName::parse("abcdef", 5).is_err());
        assert!(RoomName::parse("abcde", 5).is_ok());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(RoomName::parse("체스방", 3).is_ok());
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert!(RoomName::parse("two words", 20).is_err());
    }
}
