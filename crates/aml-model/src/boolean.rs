//! The single truth table for boolean parameter values.
//!
//! Parsing and verification both go through [`parse_bool`], so the accepted
//! spellings cannot drift apart.

use crate::error::{ModelError, Result};

/// Spellings (upper case) that mean true.
pub const TRUE_SPELLINGS: [&str; 4] = ["YES", "Y", "TRUE", "T"];

/// Spellings (upper case) that mean false. The empty string is false.
pub const FALSE_SPELLINGS: [&str; 5] = ["", "NO", "N", "FALSE", "F"];

/// Interpret a boolean spelling, case-insensitively.
pub fn parse_bool(value: &str) -> Result<bool> {
    let upper = value.to_ascii_uppercase();
    if TRUE_SPELLINGS.contains(&upper.as_str()) {
        Ok(true)
    } else if FALSE_SPELLINGS.contains(&upper.as_str()) {
        Ok(false)
    } else {
        Err(ModelError::InvalidBoolean {
            value: value.to_string(),
        })
    }
}

/// Canonical stored spelling of a boolean.
pub fn bool_str(value: bool) -> &'static str {
    if value { "YES" } else { "NO" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_spelling_in_any_case() {
        for spelling in TRUE_SPELLINGS {
            assert!(parse_bool(spelling).unwrap());
            assert!(parse_bool(&spelling.to_ascii_lowercase()).unwrap());
        }
        for spelling in FALSE_SPELLINGS {
            assert!(!parse_bool(spelling).unwrap());
            assert!(!parse_bool(&spelling.to_ascii_lowercase()).unwrap());
        }
    }

    #[test]
    fn rejects_unknown_spellings() {
        assert_eq!(
            parse_bool("cccc"),
            Err(ModelError::InvalidBoolean {
                value: "cccc".to_string()
            })
        );
        assert!(parse_bool(" yes").is_err());
        assert!(parse_bool("1").is_err());
    }

    #[test]
    fn canonical_spelling_round_trips() {
        assert!(parse_bool(bool_str(true)).unwrap());
        assert!(!parse_bool(bool_str(false)).unwrap());
    }
}
