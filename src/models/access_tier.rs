use serde::{Deserialize, Serialize};

use super::common::ResourceKind;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessTierTunnelInfoPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_port_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cidrs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_fqdn: Option<String>,
}

/// Body for creating or replacing an access tier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessTierPost {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_snat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_nat_cidr_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_satellite: Option<AccessTierTunnelInfoPost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_enduser: Option<AccessTierTunnelInfoPost>,
}

impl ResourceKind for AccessTierPost {
    const KIND: &'static str = "BanyanAccessTier";
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessTierTunnelInfo {
    #[serde(default)]
    pub udp_port_number: Option<i64>,
    #[serde(default)]
    pub keepalive: Option<i64>,
    #[serde(default)]
    pub cidrs: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub shared_fqdn: Option<String>,
    #[serde(default)]
    pub wireguard_public_key: Option<String>,
}

/// Access tier as stored by the control plane.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AccessTierInfo {
    pub id: String,
    pub name: String,
    pub address: String,
    pub domains: Vec<String>,
    pub description: Option<String>,
    pub cluster_name: Option<String>,
    pub status: Option<String>,
    pub api_key_id: Option<String>,
    pub deployment_method: Option<String>,
    pub disable_snat: Option<bool>,
    pub src_nat_cidr_range: Option<String>,
    pub tunnel_satellite: Option<AccessTierTunnelInfo>,
    pub tunnel_enduser: Option<AccessTierTunnelInfo>,
    pub netagents: Vec<Netagent>,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub updated_at: i64,
    pub updated_by: Option<String>,
}

/// Agent process registered under an access tier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Netagent {
    pub id: Option<String>,
    pub hostname: String,
    pub cluster_name: Option<String>,
    pub access_tier_id: Option<String>,
    pub status: Option<String>,
    pub version: Option<String>,
    pub ip_addresses: Vec<String>,
    pub last_status_updated_at: Option<i64>,
}
