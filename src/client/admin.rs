use crate::client_defaults::API_V1;
use crate::error::Error;
use crate::models::{OidcSettings, UserIdpConfig};
use crate::rest::envelope::decode_bare;
use crate::rest::{ResourcePath, RestClient};

const OIDC_COMPONENT: &str = "oidc_settings";
const IDP_COMPONENT: &str = "user_idp_config";

/// Organization login settings (legacy v1, no envelope).
pub struct Admin<'a> {
    rest: &'a RestClient,
}

impl<'a> Admin<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub fn oidc_settings(&self) -> Result<OidcSettings, Error> {
        let body = self.rest.read(&ResourcePath::new(API_V1, OIDC_COMPONENT))?;
        decode_bare(&body, OIDC_COMPONENT)
    }

    pub fn user_idp_config(&self) -> Result<UserIdpConfig, Error> {
        let body = self.rest.read(&ResourcePath::new(API_V1, IDP_COMPONENT))?;
        decode_bare(&body, IDP_COMPONENT)
    }

    pub fn update_user_idp_config(&self, config: &UserIdpConfig) -> Result<(), Error> {
        if config.idp_name.is_empty() {
            return Err(Error::Validation("idp name is required".to_string()));
        }
        self.rest
            .update(&ResourcePath::new(API_V1, IDP_COMPONENT), config)?;
        Ok(())
    }
}
