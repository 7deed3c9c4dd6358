// Configuration validation

use crate::{ConfigError, Result};

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Configuration validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate URL format
    pub fn is_url(value: &str, field: &str) -> Result<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("{} must be an http(s) URL", value),
            });
        }
        Ok(())
    }

    /// Validate that a number is positive
    pub fn positive(value: u64, field: &str) -> Result<()> {
        if value == 0 {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a boolean flag as written in environment variables
    pub fn parse_bool(value: &str, field: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("expected a boolean, got {:?}", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(ConfigValidator::is_url("https://example.com", "field").is_ok());
        assert!(ConfigValidator::is_url("http://example.com", "field").is_ok());
        assert!(ConfigValidator::is_url("example.com", "field").is_err());
    }

    #[test]
    fn test_positive_validation() {
        assert!(ConfigValidator::positive(30, "timeout_secs").is_ok());
        assert!(ConfigValidator::positive(0, "timeout_secs").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(ConfigValidator::parse_bool("true", "sandbox").unwrap(), true);
        assert_eq!(ConfigValidator::parse_bool(" 1 ", "sandbox").unwrap(), true);
        assert_eq!(ConfigValidator::parse_bool("FALSE", "sandbox").unwrap(), false);
        assert!(ConfigValidator::parse_bool("maybe", "sandbox").is_err());
    }
}
