// tests/common/mod.rs
pub use httpmock::Method::POST;
pub use httpmock::MockServer;
pub use serde_json::json;

use std::net::TcpListener;

use crate::config::settings::{LogFormat, LoggingConfig};
use crate::utils::logging;
use crate::{ClientSettings, Credentials, TokenClient};

/// Client pointed at the mock server instead of the production host.
pub fn client_for(server: &MockServer, credentials: Credentials) -> TokenClient {
    TokenClient::with_settings(credentials, ClientSettings::default().with_base_url(server.base_url()))
        .expect("reqwest client")
}

pub fn init_test_logging() {
    logging::init_logging(&LoggingConfig::new("debug".to_owned(), LogFormat::Compact));
}

/// Base URL of a local port nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind failed");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
