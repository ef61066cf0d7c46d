use serde::{Deserialize, Serialize};

use super::access_tier::{AccessTierTunnelInfo, AccessTierTunnelInfoPost};
use super::common::ResourceKind;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessTierGroupPost {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_enduser: Option<AccessTierTunnelInfoPost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<serde_json::Value>,
}

impl ResourceKind for AccessTierGroupPost {
    const KIND: &'static str = "BanyanAccessTierGroup";
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AccessTierGroupInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub cluster_name: Option<String>,
    pub tunnel_enduser: Option<AccessTierTunnelInfo>,
    pub advanced_settings: Option<serde_json::Value>,
    pub access_tier_ids: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Body of the attach/detach calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessTierList {
    pub access_tier_ids: Vec<String>,
}
