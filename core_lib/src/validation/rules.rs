//! Regex rule set and custom validators for the storage boundary

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Permissive local@domain.tld shape, not RFC 5322.
    pub static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();

    static ref GITHUB_LINK_REGEX: Regex = Regex::new(
        r"^https?://github\.com/[\w-]+/[\w.-]+"
    ).unwrap();

    static ref ABSOLUTE_URL_REGEX: Regex = Regex::new(
        r"^https?://.+"
    ).unwrap();
}

pub fn validate_github_link(link: &str) -> Result<(), ValidationError> {
    if !GITHUB_LINK_REGEX.is_match(link) {
        return Err(ValidationError::new("github_link"));
    }
    Ok(())
}

pub fn validate_absolute_url(url: &str) -> Result<(), ValidationError> {
    if !ABSOLUTE_URL_REGEX.is_match(url) {
        return Err(ValidationError::new("absolute_url"));
    }
    Ok(())
}

pub fn validate_tech_stack(stack: &[String]) -> Result<(), ValidationError> {
    if stack.is_empty() {
        return Err(ValidationError::new("tech_stack"));
    }
    if stack.iter().any(|entry| entry.trim().is_empty()) {
        return Err(ValidationError::new("tech_stack"));
    }
    Ok(())
}
