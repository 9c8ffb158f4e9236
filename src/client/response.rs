use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Result of a successful token exchange. Ownership moves to the caller;
/// nothing is cached by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
}

impl TokenResponse {
    /// Decodes the first JSON value of the body and ignores whatever follows.
    ///
    /// A missing or `null` token, or a top-level `null`, yields an empty token.
    /// An empty body, invalid JSON or a non-string token is an error.
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        let decoded = Option::<TokenResponse>::deserialize(&mut deserializer)?;
        Ok(decoded.unwrap_or_default())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
