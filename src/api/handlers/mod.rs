pub mod health;
pub use self::health::health;

pub mod root;
pub use self::root::root;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

pub mod user_profile;
pub use self::user_profile::profile;

pub mod auth;
pub(crate) mod storage;

// common types and functions for the handlers
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{message}` body used by every non-payload response.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Treat absent and empty fields the same way during request validation.
pub(crate) fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@x.com"));
        assert!(valid_email("first.last@sub.domain.dev"));
        assert!(!valid_email(""));
        assert!(!valid_email("plainaddress"));
        assert!(!valid_email("missing@tld"));
        assert!(!valid_email("spaces in@x.com"));
        assert!(!valid_email("two@@x.com"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("a".to_string())), Some("a".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_message_serializes_single_field() {
        let message = Message::new("ok");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({"message": "ok"}));
    }
}
