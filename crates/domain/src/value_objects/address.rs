//! Monitored address value object
//!
//! Free-form location text entered by the user. Raw input is normalized
//! before validation: control characters and quote/slash/backslash/semicolon
//! characters are replaced by spaces, runs of whitespace collapse to a single
//! space, and leading/trailing whitespace is trimmed.

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Maximum accepted address length, counted in characters
pub const MAX_ADDRESS_CHARS: usize = 1024;

/// Normalize raw address input.
///
/// Idempotent: applying this twice yields the same result as applying it once.
#[must_use]
pub fn normalize_address(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '"' | '\'' | '\\' | ';') {
                ' '
            } else {
                c
            }
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A validated, normalized postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Normalize and validate raw user input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyAddress` if the input normalizes to an
    /// empty string, or `DomainError::AddressTooLong` if the normalized
    /// text exceeds [`MAX_ADDRESS_CHARS`] characters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_address(raw);
        if normalized.is_empty() {
            return Err(DomainError::EmptyAddress);
        }
        if normalized.chars().count() > MAX_ADDRESS_CHARS {
            return Err(DomainError::AddressTooLong {
                max: MAX_ADDRESS_CHARS,
            });
        }
        Ok(Self(normalized))
    }

    /// Get the address text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the address, returning the inner string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_address() {
        let addr = Address::parse("350 5th Ave, New York, NY 10018").unwrap();
        assert_eq!(addr.as_str(), "350 5th Ave, New York, NY 10018");
    }

    #[test]
    fn parse_trims_and_collapses_whitespace() {
        let addr = Address::parse("  350 5th Ave,\n New York, NY  10018\\").unwrap();
        assert_eq!(addr.as_str(), "350 5th Ave, New York, NY 10018");
    }

    #[test]
    fn parse_strips_forbidden_characters() {
        let addr = Address::parse("Omaha; \"NB\" / 'plains'").unwrap();
        assert_eq!(addr.as_str(), "Omaha NB plains");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Address::parse(""), Err(DomainError::EmptyAddress));
    }

    #[test]
    fn parse_rejects_whitespace_and_forbidden_only() {
        assert_eq!(Address::parse("  \r\n\\;\"  "), Err(DomainError::EmptyAddress));
    }

    #[test]
    fn parse_accepts_exactly_max_length() {
        let input = "a".repeat(MAX_ADDRESS_CHARS);
        let addr = Address::parse(&input).unwrap();
        assert_eq!(addr.as_str().chars().count(), MAX_ADDRESS_CHARS);
    }

    #[test]
    fn parse_rejects_over_max_length() {
        let input = "a".repeat(MAX_ADDRESS_CHARS + 1);
        assert_eq!(
            Address::parse(&input),
            Err(DomainError::AddressTooLong { max: 1024 })
        );
    }

    #[test]
    fn length_bound_counts_characters_not_bytes() {
        // Multibyte characters still count as one each
        let input = "ü".repeat(MAX_ADDRESS_CHARS);
        assert!(Address::parse(&input).is_ok());
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = "  Paris,\t France \\ 'rive gauche' ";
        let once = normalize_address(raw);
        let twice = normalize_address(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn parse_preserves_unicode_text() {
        let addr = Address::parse("北京市 东城区").unwrap();
        assert_eq!(addr.as_str(), "北京市 东城区");
    }

    #[test]
    fn display_matches_inner_text() {
        let addr = Address::parse("02134").unwrap();
        assert_eq!(addr.to_string(), "02134");
    }
}
