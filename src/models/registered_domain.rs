use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegisteredDomainPost {
    pub name: String,
    pub cluster_name: String,
    pub cname: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_domain_challenge_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RegisteredDomainInfo {
    pub id: String,
    pub name: String,
    pub cluster_name: String,
    pub cname: String,
    pub description: String,
    pub status: Option<String>,
    pub dns_setting: Vec<DnsSetting>,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub updated_at: i64,
    pub updated_by: Option<String>,
}

/// DNS record the domain owner must publish.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DnsSetting {
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegisteredDomainChallengePost {
    pub registered_domain_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RegisteredDomainChallengeInfo {
    pub id: String,
    pub label: String,
    pub value: String,
}
