use crate::client_defaults::{API_V1, REFRESH_TOKEN_COMPONENT};
use crate::error::Error;
use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::client::status_error;
use super::path::ResourcePath;

#[derive(Debug, Deserialize)]
struct RefreshTokenResponse {
    #[serde(rename = "Message")]
    message: String,
}

/// Trades a long-lived refresh token for the access token used on every
/// subsequent request.
pub(crate) fn exchange_refresh_token(
    http: &HttpClient,
    host: &Url,
    refresh_token: &str,
) -> Result<String, Error> {
    let url = ResourcePath::new(API_V1, REFRESH_TOKEN_COMPONENT).to_url(host)?;
    let request = format!("POST {url}");
    debug!("exchanging refresh token via {request}");
    let resp = http.post(url).bearer_auth(refresh_token).send()?;
    if resp.status() != StatusCode::OK {
        return Err(status_error(resp, request)?);
    }
    let body = resp.bytes()?;
    let parsed: RefreshTokenResponse = serde_json::from_slice(&body)
        .map_err(|err| Error::decode("refresh token response", err))?;
    if parsed.message.is_empty() {
        return Err(Error::Config(
            "refresh token exchange returned an empty access token".to_string(),
        ));
    }
    Ok(parsed.message)
}
