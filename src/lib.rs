//! # Sethealth client
//!
//! Exchanges a Sethealth API key and secret for a short-lived access token
//! that can be handed to client-side code.
//!
//! Modules:
//! - `client` — `TokenClient` and its request/response types
//! - `config` — credentials (explicit or from the environment) and client settings
//! - `error` — `SethealthError`
//! - `helpers` — wire encoding of the expiration duration
//! - `utils` — constants and logging setup
//!
//! ```no_run
//! use std::time::Duration;
//! use sethealth::{TokenClient, TokenRequestOptions};
//!
//! # async fn run() -> sethealth::Result<()> {
//! let client = TokenClient::new();
//! let options = TokenRequestOptions::new()
//!     .with_user_id("patient-42")
//!     .with_expires_in(Duration::from_secs(600));
//! let response = client.request_token_with_options(&options).await?;
//! println!("{}", response.token);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::client::request::TokenRequestOptions;
pub use crate::client::response::TokenResponse;
pub use crate::client::TokenClient;
pub use crate::config::credentials::Credentials;
pub use crate::config::settings::ClientSettings;
pub use crate::error::{Result, SethealthError};
pub use crate::helpers::duration::DurationFormat;
