use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Account record as returned by the backend. Stored verbatim on login and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
}

/// Local email-format check, applied before any network call is made.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
