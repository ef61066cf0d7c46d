use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfigPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nrpt_config: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub id: Option<String>,
    pub org_id: Option<String>,
    pub nrpt_config: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
