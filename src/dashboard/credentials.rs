use std::fmt;

use serde::Deserialize;

/// Bearer token for the dashboard api. Passed explicitly to every call.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    access_token: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// never print the token itself
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        assert_eq!(Credentials::new("abc").bearer(), "Bearer abc");
    }

    #[test]
    fn test_debug_redacts_token() {
        let printed = format!("{:?}", Credentials::new("super-secret"));
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_deserialize_login_response() {
        let creds: Credentials =
            serde_json::from_str(r#"{"access_token":"tok","token_type":"bearer"}"#).unwrap();
        assert_eq!(creds, Credentials::new("tok"));
    }
}
