use crate::error::Error;
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, Manifest, ResourceKind};
use super::encoding::decode_embedded;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServiceTunnel {
    pub metadata: ServiceTunnelMetadata,
    pub spec: ServiceTunnelSpec,
}

impl ResourceKind for ServiceTunnel {
    const KIND: &'static str = "BanyanServiceTunnel";
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceTunnelMetadata {
    pub name: String,
    pub friendly_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<ServiceTunnelTags>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceTunnelTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceTunnelSpec {
    pub peer_access_tiers: Vec<PeerAccessTier>,
}

/// Access tiers (or connectors) of one cluster a tunnel routes through.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PeerAccessTier {
    pub cluster: String,
    pub access_tiers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connectors: Vec<String>,
}

/// Service tunnel as stored by the control plane; `spec` is the
/// HTML-escaped manifest.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceTunnelInfo {
    pub id: String,
    pub name: String,
    pub friendly_name: String,
    pub description: String,
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub spec: String,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub updated_at: i64,
    pub updated_by: Option<String>,
}

impl ServiceTunnelInfo {
    pub fn decode_spec(&self) -> Result<Manifest<ServiceTunnel>, Error> {
        decode_embedded(&self.spec, "service tunnel spec")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServiceTunnelPolicyPost {
    pub policy_id: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceTunnelPolicyInfo {
    pub policy_id: String,
    pub attached_to_id: String,
    pub attached_to_type: String,
    pub enabled: bool,
    pub created_at: i64,
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::encoding::escape_html;

    #[test]
    fn decode_spec_unescapes_manifest() {
        let tunnel = ServiceTunnel {
            metadata: ServiceTunnelMetadata {
                name: "corp-vpn".to_string(),
                friendly_name: "Corp & Lab".to_string(),
                description: String::new(),
                tags: None,
            },
            spec: ServiceTunnelSpec {
                peer_access_tiers: vec![PeerAccessTier {
                    cluster: "cluster-1".to_string(),
                    access_tiers: vec!["at-east".to_string(), "at-west".to_string()],
                    connectors: Vec::new(),
                }],
            },
        };
        let encoded = serde_json::to_string(&Manifest::of(&tunnel)).expect("encode");
        let info = ServiceTunnelInfo {
            id: "st-1".to_string(),
            spec: escape_html(&encoded),
            ..Default::default()
        };
        let decoded = info.decode_spec().expect("decode");
        assert_eq!(decoded.kind, "BanyanServiceTunnel");
        assert_eq!(decoded.body, tunnel);
    }

    #[test]
    fn null_spec_reads_as_empty() {
        let info: ServiceTunnelInfo =
            serde_json::from_str(r#"{"id":"st-1","name":"corp","spec":null}"#).expect("decode");
        assert_eq!(info.id, "st-1");
        assert!(info.spec.is_empty());
        assert!(info.decode_spec().is_err());
    }
}
