use std::env;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::utils::constants::{ENV_KEY, ENV_SECRET};

/// Key/secret pair identifying the calling application.
///
/// Values are resolved once and never change afterwards. The secret is
/// redacted from `Debug` output.
#[derive(Debug, Clone)]
pub struct Credentials {
    key: String,
    secret: SecretString,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    /// Reads `SETHEALTH_KEY` and `SETHEALTH_SECRET`.
    ///
    /// Missing variables become empty strings; rejecting them is left to the server.
    pub fn from_env() -> Self {
        Self::new(read_env(ENV_KEY), read_env(ENV_SECRET))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

fn read_env(name: &str) -> String {
    env::var(name).unwrap_or_else(|err| {
        debug!("{} is not usable ({}), falling back to empty value", name, err);
        String::new()
    })
}
