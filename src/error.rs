use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;
pub(crate) const CONFIG_ERROR_MISSING_REFRESH_TOKEN: &str =
    "refresh token is required to build a client";

/// Error payload carried by a 2xx envelope whose `error_code` is non-zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiError {
    pub request_id: Option<String>,
    pub error_code: i64,
    pub error_description: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_description.as_deref() {
            Some(description) if !description.is_empty() => {
                write!(f, "code={}, description={}", self.error_code, description)?
            }
            _ => write!(f, "code={}", self.error_code)?,
        }
        if let Some(request_id) = self.request_id.as_deref() {
            write!(f, ", request_id={request_id}")?;
        }
        Ok(())
    }
}

/// A non-2xx response, kept verbatim for diagnostics.
#[derive(Debug, Clone)]
pub struct StatusError {
    pub status: u16,
    pub request: String,
    pub body: String,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status={} for {}", self.status, self.request)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected response: {0}")]
    Status(StatusError),
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("banyan api error: {0}")]
    Api(ApiError),
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("{resource} {name:?} not found")]
    NotFound {
        resource: &'static str,
        name: String,
    },
    #[error("{resource} lookup for {name:?} matched {count} entries")]
    Ambiguous {
        resource: &'static str,
        name: String,
        count: usize,
    },
    #[error("{resource} {id}: {step} failed: {source}")]
    Dependent {
        resource: &'static str,
        id: String,
        step: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// HTTP status of the response that caused this error, looking through
    /// dependent-step wrapping.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status(err) => Some(err.status),
            Error::Http(err) => err.status().map(|status| status.as_u16()),
            Error::Dependent { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Dependent { source, .. } => source.is_not_found(),
            _ => self.status() == Some(404),
        }
    }

    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn dependent(
        resource: &'static str,
        id: &str,
        step: impl Into<String>,
        source: Error,
    ) -> Self {
        Error::Dependent {
            resource,
            id: id.to_string(),
            step: step.into(),
            source: Box::new(source),
        }
    }
}

pub(crate) fn read_body_with_limit<R: Read>(
    reader: &mut R,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    reader.take(limit as u64).read_to_end(&mut body)?;
    Ok(body)
}
