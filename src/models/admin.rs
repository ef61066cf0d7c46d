use serde::{Deserialize, Serialize};

use super::common::Sanitize;

/// OIDC endpoints the control plane publishes for its own login flow.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OidcSettings {
    pub issuer_url: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub jwks_endpoint: String,
    pub userinfo_endpoint: String,
    pub redirect_url: String,
    pub scope: String,
}

/// Identity provider the organization's end users sign in with.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UserIdpConfig {
    pub idp_name: String,
    pub idp_protocol: String,
    pub idp_config: IdpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct IdpConfig {
    pub redirect_url: String,
    pub issuer_url: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl Sanitize for UserIdpConfig {
    fn sanitize(&mut self) {
        self.idp_config.client_secret = None;
    }
}
