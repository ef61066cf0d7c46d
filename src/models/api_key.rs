use serde::{Deserialize, Serialize};

use super::common::Sanitize;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiKeyPost {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub scope: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ApiKeyData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub scope: String,
    pub org_id: Option<String>,
    pub secret: Option<String>,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub updated_at: i64,
    pub updated_by: Option<String>,
}

impl Sanitize for ApiKeyData {
    fn sanitize(&mut self) {
        self.secret = None;
    }
}
