use regex::Regex;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Used both to validate addresses and to classify invite identifiers:
/// email-shaped identifiers resolve by email, everything else by username.
pub fn looks_like_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Usernames must not themselves look like email addresses.
pub fn valid_username(value: &str) -> bool {
    !value.is_empty() && !looks_like_email(value)
}
