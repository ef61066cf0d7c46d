use crate::client_defaults::API_V2;
use crate::error::Error;
use crate::models::{ScimCredentials, ScimSettingsPost};
use crate::rest::{ResourcePath, RestClient};

const COMPONENT: &str = "scim";

/// Organization-wide SCIM provisioning settings.
pub struct Scim<'a> {
    rest: &'a RestClient,
}

impl<'a> Scim<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    fn path(&self) -> ResourcePath {
        ResourcePath::new(API_V2, COMPONENT)
    }

    pub fn get(&self) -> Result<ScimCredentials, Error> {
        self.rest.read_data(&self.path())
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<ScimCredentials, Error> {
        self.rest.update_data(
            &self.path(),
            &ScimSettingsPost {
                is_enabled: enabled,
            },
        )
    }

    /// Rotates the bearer token SCIM clients use. The returned record is the
    /// only place the new token appears.
    pub fn generate_token(&self) -> Result<ScimCredentials, Error> {
        self.rest
            .create_data(&self.path().segment("token"), &serde_json::Map::new())
    }
}
