use serde::{Deserialize, Serialize};

use super::common::{ResourceKind, Sanitize};
use super::service_tunnel::PeerAccessTier;

/// Connector (satellite) configuration, the body of create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SatelliteTunnelConfig {
    pub metadata: SatelliteMetadata,
    pub spec: SatelliteSpec,
}

impl ResourceKind for SatelliteTunnelConfig {
    const KIND: &'static str = "BanyanConnector";
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SatelliteMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SatelliteSpec {
    pub api_key_id: String,
    pub keepalive: i64,
    pub cidrs: Vec<String>,
    pub peer_access_tiers: Vec<PeerAccessTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_snat: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SatelliteInfo {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub api_key_id: Option<String>,
    pub tunnel_ip_address: Option<String>,
    pub keepalive: Option<i64>,
    pub cidrs: Vec<String>,
    pub domains: Vec<String>,
    pub peer_access_tiers: Vec<PeerAccessTier>,
    pub status: Option<String>,
    pub wireguard_public_key: Option<String>,
    /// Only returned right after creation.
    pub wireguard_private_key: Option<String>,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub updated_at: i64,
    pub updated_by: Option<String>,
}

impl Sanitize for SatelliteInfo {
    fn sanitize(&mut self) {
        self.wireguard_private_key = None;
    }
}
