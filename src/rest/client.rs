use crate::client_defaults::DEFAULT_TIMEOUT;
use crate::error::{
    read_body_with_limit, Error, StatusError, CONFIG_ERROR_MISSING_REFRESH_TOKEN,
    MAX_ERROR_BODY_BYTES,
};
use log::debug;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::{Certificate, Method};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use url::Url;

use super::auth;
use super::path::ResourcePath;

pub struct RestClientBuilder {
    host: Url,
    refresh_token: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    ca_certs: Vec<Certificate>,
}

impl RestClientBuilder {
    pub fn new(host: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            host: Url::parse(host.as_ref())?,
            refresh_token: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            ca_certs: Vec::new(),
        })
    }

    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Uses the key directly as the bearer token instead of exchanging the
    /// refresh token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    pub fn build(self) -> Result<RestClient, Error> {
        let refresh_token = self.refresh_token.unwrap_or_default();
        if refresh_token.is_empty() {
            return Err(Error::Config(CONFIG_ERROR_MISSING_REFRESH_TOKEN.to_string()));
        }
        let mut builder = HttpClient::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none());
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        let access_token = match self.api_key.filter(|key| !key.is_empty()) {
            Some(key) => key,
            None => auth::exchange_refresh_token(&http, &self.host, &refresh_token)?,
        };
        Ok(RestClient {
            host: self.host,
            http,
            access_token,
        })
    }
}

/// Authenticated transport shared by every resource client.
///
/// The bearer token is captured once at construction and never renewed.
pub struct RestClient {
    host: Url,
    http: HttpClient,
    access_token: String,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("host", &self.host.as_str())
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl RestClient {
    pub fn builder(host: impl AsRef<str>) -> Result<RestClientBuilder, Error> {
        RestClientBuilder::new(host)
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    /// GET; returns the raw body of a 2xx response.
    pub fn read(&self, path: &ResourcePath) -> Result<Vec<u8>, Error> {
        self.execute(Method::GET, path, None::<&()>)
    }

    /// GET with extra query parameters, used for filtered lookups.
    pub fn read_query(
        &self,
        path: &ResourcePath,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, Error> {
        self.execute(Method::GET, &path.clone().with_query(query), None::<&()>)
    }

    /// POST with a JSON body.
    pub fn create<B: Serialize + ?Sized>(
        &self,
        path: &ResourcePath,
        body: &B,
    ) -> Result<Vec<u8>, Error> {
        self.execute(Method::POST, path, Some(body))
    }

    /// PUT with a JSON body; the server replaces the whole record.
    pub fn update<B: Serialize + ?Sized>(
        &self,
        path: &ResourcePath,
        body: &B,
    ) -> Result<Vec<u8>, Error> {
        self.execute(Method::PUT, path, Some(body))
    }

    pub fn delete(&self, path: &ResourcePath) -> Result<Vec<u8>, Error> {
        self.execute(Method::DELETE, path, None::<&()>)
    }

    /// DELETE for resources the server identifies by query rather than path.
    pub fn delete_query(
        &self,
        path: &ResourcePath,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, Error> {
        self.execute(Method::DELETE, &path.clone().with_query(query), None::<&()>)
    }

    fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &ResourcePath,
        body: Option<&B>,
    ) -> Result<Vec<u8>, Error> {
        let url = path.to_url(&self.host)?;
        let request = format!("{method} {url}");
        debug!("sending {request}");
        let mut req = self.apply_auth(self.http.request(method, url));
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send()?;
        self.expect_success(resp, request)
    }

    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(&self.access_token)
    }

    fn expect_success(&self, resp: Response, request: String) -> Result<Vec<u8>, Error> {
        if resp.status().is_success() {
            Ok(resp.bytes()?.to_vec())
        } else {
            Err(status_error(resp, request)?)
        }
    }
}

pub(crate) fn status_error(mut resp: Response, request: String) -> Result<Error, Error> {
    let status = resp.status().as_u16();
    let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
    Ok(Error::Status(StatusError {
        status,
        request,
        body: String::from_utf8_lossy(&body).into_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_refresh_token_is_a_config_error() {
        let err = RestClient::builder("https://net.example.com")
            .expect("builder")
            .refresh_token("")
            .api_key("key")
            .build()
            .expect_err("missing refresh token");
        match err {
            Error::Config(message) => assert_eq!(message, CONFIG_ERROR_MISSING_REFRESH_TOKEN),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_refresh_token_is_a_config_error() {
        let err = RestClient::builder("https://net.example.com")
            .expect("builder")
            .build()
            .expect_err("missing refresh token");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn api_key_skips_token_exchange() {
        let client = RestClient::builder("https://net.example.com/")
            .expect("builder")
            .refresh_token("refresh")
            .api_key("raw-key")
            .build()
            .expect("build");
        assert_eq!(client.access_token, "raw-key");
        assert_eq!(client.host().as_str(), "https://net.example.com/");
    }

    #[test]
    fn debug_output_hides_token() {
        let client = RestClient::builder("https://net.example.com")
            .expect("builder")
            .refresh_token("refresh")
            .api_key("super-secret")
            .build()
            .expect("build");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn invalid_host_is_rejected() {
        assert!(matches!(
            RestClient::builder("not a url"),
            Err(Error::Url(_))
        ));
    }
}
