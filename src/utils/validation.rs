use crate::utils::error::{Result, SkylineError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SkylineError::ValidationError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(SkylineError::ValidationError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

/// A record delimiter must be one ASCII character that cannot appear inside
/// an integer field or end a line.
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<u8> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None)
            if c.is_ascii()
                && !c.is_ascii_digit()
                && !matches!(c, '-' | '+' | '\n' | '\r' | '"') =>
        {
            Ok(c as u8)
        }
        _ => Err(SkylineError::ValidationError {
            message: format!(
                "{}: '{}' is not a usable delimiter (one ASCII character, not a digit, sign, quote or line break)",
                field_name, value
            ),
        }),
    }
}

pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if input == output {
        return Err(SkylineError::ValidationError {
            message: format!("output file must differ from input file '{}'", input),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "city.txt").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "ci\0ty").is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("delimiter", ",").unwrap(), b',');
        assert_eq!(validate_delimiter("delimiter", "\t").unwrap(), b'\t');
        assert!(validate_delimiter("delimiter", "").is_err());
        assert!(validate_delimiter("delimiter", ";;").is_err());
        assert!(validate_delimiter("delimiter", "7").is_err());
        assert!(validate_delimiter("delimiter", "-").is_err());
        assert!(validate_delimiter("delimiter", "é").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("a.txt", "b.txt").is_ok());
        assert!(validate_distinct_paths("a.txt", "a.txt").is_err());
    }
}
