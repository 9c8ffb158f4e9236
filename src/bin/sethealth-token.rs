use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use sethealth::config::settings::LogFormat;
use sethealth::utils::constants::DEFAULT_HOST;
use sethealth::utils::logging::{self, LogLevel};
use sethealth::{ClientSettings, Credentials, DurationFormat, TokenClient, TokenRequestOptions};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Request a short-lived Sethealth token", long_about = None)]
struct Args {
    #[arg(long, env = "SETHEALTH_KEY", default_value = "", hide_env_values = true)]
    key: String,
    #[arg(long, env = "SETHEALTH_SECRET", default_value = "", hide_env_values = true)]
    secret: String,
    #[arg(long, env = "SETHEALTH_HOST", default_value = DEFAULT_HOST)]
    host: String,
    #[arg(long, default_value = "")]
    user_id: String,
    /// token lifetime in seconds, 0 lets the server decide
    #[arg(long, default_value_t = 0)]
    expires_in: u64,
    #[arg(long)]
    test_mode: bool,
    #[arg(long, value_enum, default_value_t = DurationFormat::Seconds)]
    expires_in_format: DurationFormat,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

impl Args {
    fn credentials(&self) -> Credentials {
        Credentials::new(self.key.as_str(), self.secret.as_str())
    }

    fn settings(&self) -> ClientSettings {
        ClientSettings::default()
            .with_base_url(self.host.as_str())
            .with_expires_in_format(self.expires_in_format)
    }

    fn options(&self) -> TokenRequestOptions {
        TokenRequestOptions::new()
            .with_user_id(self.user_id.as_str())
            .with_expires_in(Duration::from_secs(self.expires_in))
            .with_test_mode(self.test_mode)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(&logging::resolve(args.log_level, args.log_format));

    let client = TokenClient::with_settings(args.credentials(), args.settings())
        .context("failed to build token client")?;

    let response = client
        .request_token_with_options(&args.options())
        .await
        .with_context(|| format!("token request to {} failed", client.token_url()))?;

    info!("token issued");
    println!("{}", response.token);
    Ok(())
}
