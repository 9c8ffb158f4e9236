use std::time::Duration;

use serde::Serialize;

use crate::config::credentials::Credentials;
use crate::helpers::duration::DurationFormat;

/// Per-call options for a token request. The defaults (empty user id, zero
/// expiration, test mode off) are what a plain `request_token` sends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRequestOptions {
    pub user_id: String,
    pub expires_in: Duration,
    pub test_mode: bool,
}

impl TokenRequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }
}

/// `POST /token` body. Field names are part of the wire contract.
///
/// No `Debug`: it carries the secret in clear.
#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    id: &'a str,
    secret: &'a str,
    #[serde(rename = "test-mode")]
    test_mode: bool,
    #[serde(rename = "expires-in")]
    expires_in: u64,
    #[serde(rename = "user-id")]
    user_id: &'a str,
}

impl<'a> TokenRequest<'a> {
    pub(crate) fn new(
        credentials: &'a Credentials,
        options: &'a TokenRequestOptions,
        expires_in_format: DurationFormat,
    ) -> Self {
        Self {
            id: credentials.key(),
            secret: credentials.secret(),
            test_mode: options.test_mode,
            expires_in: expires_in_format.to_wire(options.expires_in),
            user_id: &options.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_options_serialize_to_five_fields() {
        let credentials = Credentials::new("key-1", "secret-1");
        let options = TokenRequestOptions::default();
        let body = serde_json::to_value(TokenRequest::new(&credentials, &options, DurationFormat::Seconds)).unwrap();

        assert_eq!(
            body,
            json!({
                "id": "key-1",
                "secret": "secret-1",
                "test-mode": false,
                "expires-in": 0,
                "user-id": ""
            })
        );
        assert_eq!(body.as_object().map(|o| o.len()), Some(5));
    }

    #[test]
    fn options_are_carried_through() {
        let credentials = Credentials::new("k", "s");
        let options = TokenRequestOptions::new()
            .with_user_id("patient-42")
            .with_expires_in(Duration::from_secs(900))
            .with_test_mode(true);
        let body = serde_json::to_value(TokenRequest::new(&credentials, &options, DurationFormat::Seconds)).unwrap();

        assert_eq!(body["user-id"], "patient-42");
        assert_eq!(body["expires-in"], 900);
        assert_eq!(body["test-mode"], true);
    }

    #[test]
    fn nanosecond_format_changes_only_expires_in() {
        let credentials = Credentials::new("k", "s");
        let options = TokenRequestOptions::new().with_expires_in(Duration::from_secs(2));
        let body =
            serde_json::to_value(TokenRequest::new(&credentials, &options, DurationFormat::Nanoseconds)).unwrap();

        assert_eq!(body["expires-in"], 2_000_000_000u64);
        assert_eq!(body["id"], "k");
        assert_eq!(body["secret"], "s");
    }
}
