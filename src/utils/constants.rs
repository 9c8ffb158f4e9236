//! Shared constants and invariants

pub const DEFAULT_HOST: &str = "https://api.set.health";
pub const TOKEN_PATH: &str = "/token";
pub const CONTENT_TYPE_JSON_UTF8: &str = "application/json; charset=utf-8";

// Environment variables
pub const ENV_KEY: &str = "SETHEALTH_KEY";
pub const ENV_SECRET: &str = "SETHEALTH_SECRET";
