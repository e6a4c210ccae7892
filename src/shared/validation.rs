//! Request Validation
//!
//! A small chain-style validator. Every check records a [`FieldError`] instead
//! of failing fast, so a response lists all offending fields at once.

use chrono::{DateTime, NaiveDate, Utc};

use crate::shared::error::{FieldError, SharedError};

/// Collects field errors across a chain of checks
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value must contain something other than whitespace
    pub fn required(mut self, field: &str, value: &str, msg: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::field(field, msg));
        }
        self
    }

    /// Arbitrary condition that must hold for `field`
    pub fn check(mut self, field: &str, ok: bool, msg: &str) -> Self {
        if !ok {
            self.errors.push(FieldError::field(field, msg));
        }
        self
    }

    /// Value must be present in the request, even if empty
    pub fn present<T>(mut self, field: &str, value: Option<&T>, msg: &str) -> Self {
        if value.is_none() {
            self.errors.push(FieldError::field(field, msg));
        }
        self
    }

    /// Value must look like an email address
    pub fn email(mut self, field: &str, value: &str, msg: &str) -> Self {
        if !is_valid_email(value) {
            self.errors.push(FieldError::field(field, msg));
        }
        self
    }

    /// Value must be at least `min` characters long
    pub fn min_len(mut self, field: &str, value: &str, min: usize, msg: &str) -> Self {
        if value.chars().count() < min {
            self.errors.push(FieldError::field(field, msg));
        }
        self
    }

    /// Optional value must parse as a date when supplied
    pub fn date(mut self, field: &str, value: Option<&str>, msg: &str) -> Self {
        if let Some(raw) = value.filter(|v| !v.trim().is_empty()) {
            if parse_date(raw).is_none() {
                self.errors.push(FieldError::field(field, msg));
            }
        }
        self
    }

    pub fn finish(self) -> Result<(), SharedError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SharedError::from_errors(self.errors))
        }
    }
}

/// Basic structural email check: `local@domain.tld`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC)
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_collects_every_failure() {
        let result = Validator::new()
            .required("name", "", "Name is required")
            .email("email", "nope", "Please add a valid email")
            .min_len("password", "abc", 6, "Please enter a password with 6 or more chars")
            .finish();

        match result {
            Err(SharedError::ValidationError { errors }) => {
                let params: Vec<_> = errors.iter().filter_map(|e| e.param.as_deref()).collect();
                assert_eq!(params, vec!["name", "email", "password"]);
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_passing_chain_is_ok() {
        let result = Validator::new()
            .required("text", "hello", "Text is required")
            .present("password", Some(&String::new()), "Password is required")
            .finish();
        assert!(result.is_ok());
    }

    #[test]
    fn test_whitespace_is_not_a_value() {
        let result = Validator::new()
            .required("status", "   ", "Status is required")
            .finish();
        assert!(result.is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("jane doe@example.com"));
    }

    #[test]
    fn test_parse_calendar_date() {
        let date = parse_date("2019-06-01").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2019, 6, 1));
        assert_eq!(date.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339() {
        let date = parse_date("2020-01-02T03:04:05Z").unwrap();
        assert_eq!(date.minute(), 4);
    }

    #[test]
    fn test_rejects_garbage_date() {
        assert!(parse_date("last tuesday").is_none());
        let result = Validator::new()
            .date("from", Some("13/45/2020"), "From date is invalid")
            .finish();
        assert!(result.is_err());
    }
}
