//! Owner-token parsing
//!
//! The owners cell lists departments separated by commas or line breaks.
//! A token is either a bare code (`IT`) or a code with an explicit count
//! (`IT-3`, `IT - 3`). The count is split off at the last hyphen that is
//! followed only by digits, so `IT-01-5` is five units for `IT-01`.

use serde::{Deserialize, Serialize};

use core_kernel::OwnerCode;

use crate::error::RowError;

/// One owner entry of the owners cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerToken {
    /// Code as written, trimmed
    pub base_code: String,
    /// Units assigned explicitly with a `-N` suffix
    pub quantity: Option<u64>,
}

impl OwnerToken {
    pub fn implicit(base_code: impl Into<String>) -> Self {
        Self {
            base_code: base_code.into(),
            quantity: None,
        }
    }

    pub fn explicit(base_code: impl Into<String>, quantity: u64) -> Self {
        Self {
            base_code: base_code.into(),
            quantity: Some(quantity),
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.quantity.is_some()
    }

    /// Directory key of the base code
    pub fn code(&self) -> OwnerCode {
        OwnerCode::normalize(&self.base_code)
    }
}

/// Parses a single token
///
/// # Errors
///
/// `RowError::InvalidOwnerQuantity` when the count after the hyphen does
/// not fit a `u64`.
pub fn parse_owner_token(text: &str) -> Result<OwnerToken, RowError> {
    let trimmed = text.trim();
    let head = trimmed.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &trimmed[head.len()..];

    if !digits.is_empty() {
        if let Some(base) = head.trim_end().strip_suffix('-') {
            let base = base.trim();
            let quantity = digits
                .parse::<u64>()
                .map_err(|_| RowError::InvalidOwnerQuantity {
                    owner: base.to_string(),
                    value: digits.to_string(),
                })?;
            return Ok(OwnerToken::explicit(base, quantity));
        }
    }

    Ok(OwnerToken::implicit(trimmed))
}

/// Splits the owners cell into trimmed, non-empty tokens in order
pub fn tokenize_owners(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenizes and parses the owners cell
///
/// # Errors
///
/// The first token error, see [`parse_owner_token`].
pub fn parse_owners(raw: &str) -> Result<Vec<OwnerToken>, RowError> {
    tokenize_owners(raw)
        .iter()
        .map(|token| parse_owner_token(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_code_is_implicit() {
        let token = parse_owner_token("  IT ").unwrap();
        assert_eq!(token, OwnerToken::implicit("IT"));
        assert!(!token.is_explicit());
    }

    #[test]
    fn test_explicit_count() {
        assert_eq!(parse_owner_token("IT-3").unwrap(), OwnerToken::explicit("IT", 3));
        assert_eq!(parse_owner_token("IT - 3").unwrap(), OwnerToken::explicit("IT", 3));
        assert_eq!(parse_owner_token(" fin-12 ").unwrap(), OwnerToken::explicit("fin", 12));
    }

    #[test]
    fn test_split_at_last_hyphen() {
        assert_eq!(parse_owner_token("IT-01-5").unwrap(), OwnerToken::explicit("IT-01", 5));
    }

    #[test]
    fn test_non_digit_suffix_stays_implicit() {
        assert_eq!(parse_owner_token("IT-A").unwrap(), OwnerToken::implicit("IT-A"));
        assert_eq!(parse_owner_token("IT-").unwrap(), OwnerToken::implicit("IT-"));
        assert_eq!(parse_owner_token("IT3").unwrap(), OwnerToken::implicit("IT3"));
    }

    #[test]
    fn test_tokenize_on_commas_and_lines() {
        assert_eq!(
            tokenize_owners("A-4,B-3\nC-3\r\n, ,"),
            vec!["A-4", "B-3", "C-3"]
        );
        assert!(tokenize_owners(" \n , ").is_empty());
    }

    #[test]
    fn test_token_code_is_normalized() {
        assert_eq!(parse_owner_token("it 01-2").unwrap().code().as_str(), "IT01");
    }

    #[test]
    fn test_count_out_of_range_is_rejected() {
        assert_eq!(
            parse_owner_token("A-99999999999999999999999"),
            Err(RowError::InvalidOwnerQuantity {
                owner: "A".to_string(),
                value: "99999999999999999999999".to_string(),
            })
        );
        assert!(parse_owners("B-2, A-99999999999999999999999").is_err());
    }
}
