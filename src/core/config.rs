use std::env;
use std::net::SocketAddr;

use crate::errors::DilemmaError;

pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub together_api_key: String,
    pub together_model: String,
    pub together_base_url: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `DilemmaError::Config` if `TOGETHER_API_KEY` is unset or
    /// `BIND_ADDR` is not a socket address.
    pub fn from_env() -> Result<Self, DilemmaError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DilemmaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let together_api_key = get("TOGETHER_API_KEY")
            .ok_or_else(|| DilemmaError::Config("TOGETHER_API_KEY is not set".to_string()))?;

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|e| DilemmaError::Config(format!("BIND_ADDR {bind_raw:?}: {e}")))?;

        Ok(Self {
            together_api_key,
            together_model: get("TOGETHER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            together_base_url: get("TOGETHER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            bind_addr,
        })
    }
}
