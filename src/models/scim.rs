use serde::{Deserialize, Serialize};

use super::common::Sanitize;

/// SCIM provisioning endpoint settings. `token` is only present right after
/// it has been generated.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScimCredentials {
    pub base_url: String,
    pub is_enabled: bool,
    pub token: Option<String>,
    pub token_created_at: Option<i64>,
}

impl Sanitize for ScimCredentials {
    fn sanitize(&mut self) {
        self.token = None;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScimSettingsPost {
    pub is_enabled: bool,
}
