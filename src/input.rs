//! Parsing of user-supplied term lists.

use crate::error::{Error, Result};

/// Parses a list of non-negative integers separated by whitespace and/or commas.
///
/// Returns the distinct values in ascending order.
pub fn parse_terms(line: &str) -> Result<Vec<u64>> {
    let mut terms = Vec::new();
    for token in line.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
        terms.push(parse_term(token)?);
    }
    terms.sort_unstable();
    terms.dedup();
    Ok(terms)
}

fn parse_term(token: &str) -> Result<u64> {
    if let Ok(value) = token.parse::<u64>() {
        return Ok(value);
    }
    match token.parse::<i128>() {
        Ok(value) if value < 0 => Err(Error::NegativeTerm { value }),
        _ => Err(Error::InvalidToken {
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_terms("0 1 2 5 6 7").unwrap(), vec![0, 1, 2, 5, 6, 7]);
        assert_eq!(parse_terms("7, 2,5\t0").unwrap(), vec![0, 2, 5, 7]);
        assert_eq!(parse_terms("3 3 1").unwrap(), vec![1, 3]);
        assert_eq!(parse_terms("").unwrap(), Vec::<u64>::new());
        assert_eq!(parse_terms("   ").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_negative() {
        assert_eq!(parse_terms("1 -4 2"), Err(Error::NegativeTerm { value: -4 }));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            parse_terms("1 two 3"),
            Err(Error::InvalidToken {
                token: "two".to_string()
            })
        );
        assert_eq!(
            parse_terms("1.5"),
            Err(Error::InvalidToken {
                token: "1.5".to_string()
            })
        );
    }

    #[test]
    fn test_too_large() {
        // Out of range for a term, but not negative.
        assert_eq!(
            parse_terms("18446744073709551616"),
            Err(Error::InvalidToken {
                token: "18446744073709551616".to_string()
            })
        );
    }
}
