use crate::client_defaults::DEFAULT_TIMEOUT;
use crate::error::Error;
use std::time::Duration;

pub const ENV_HOST: &str = "BANYAN_HOST";
pub const ENV_REFRESH_TOKEN: &str = "BANYAN_REFRESH_TOKEN";
pub const ENV_API_KEY: &str = "BANYAN_API_KEY";

pub(crate) const DEFAULT_HOST: &str = "https://net.banyanops.com/";

/// Connection settings for [`Client`](crate::Client).
#[derive(Clone)]
pub struct ClientConfig {
    pub host: String,
    pub refresh_token: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("refresh_token", &"<redacted>")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            refresh_token: refresh_token.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `BANYAN_HOST` (optional), `BANYAN_REFRESH_TOKEN` (required) and
    /// `BANYAN_API_KEY` (optional) from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let host = non_empty(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let refresh_token = non_empty(ENV_REFRESH_TOKEN)
            .ok_or_else(|| Error::Config(format!("{ENV_REFRESH_TOKEN} is not set")))?;
        Ok(Self {
            host,
            refresh_token,
            api_key: non_empty(ENV_API_KEY),
            timeout: DEFAULT_TIMEOUT,
        })
    }
}
