use crate::error::{Result, VideolensError};

pub const VIDEODB_KEY_VAR: &str = "VIDEODB_KEY";
pub const GEMINI_KEY_VAR: &str = "GEMINI_PRO_KEY";

pub const VIDEODB_BASE_URL_VAR: &str = "VIDEODB_BASE_URL";
pub const DEFAULT_VIDEODB_BASE_URL: &str = "https://api.videodb.io";

#[derive(Clone, Debug)]
pub struct Config {
    pub videodb_api_key: String,
    pub videodb_base_url: String,
    pub gemini_api_key: String,
}

impl Config {
    /// Read both API keys from the environment. A missing key is fatal to startup.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            videodb_api_key: require(VIDEODB_KEY_VAR)?,
            videodb_base_url: std::env::var(VIDEODB_BASE_URL_VAR)
                .unwrap_or_else(|_| DEFAULT_VIDEODB_BASE_URL.to_string()),
            gemini_api_key: require(GEMINI_KEY_VAR)?,
        })
    }
}

fn require(env_var: &'static str) -> Result<String> {
    std::env::var(env_var).map_err(|_| VideolensError::MissingApiKey { env_var })
}
