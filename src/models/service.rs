use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::{Manifest, ResourceKind};
use super::encoding::decode_embedded;

/// Registered service, the body of create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Service {
    pub metadata: ServiceMetadata,
    pub spec: ServiceSpec,
}

impl ResourceKind for Service {
    const KIND: &'static str = "BanyanService";
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceMetadata {
    pub name: String,
    pub description: String,
    pub cluster: String,
    pub tags: ServiceTags,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_facing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_app_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceSpec {
    pub attributes: ServiceAttributes,
    pub backend: ServiceBackend,
    pub cert_settings: CertSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_settings: Option<serde_json::Value>,
    pub client_cidrs: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceAttributes {
    pub tls_sni: Vec<String>,
    pub frontend_addresses: Vec<FrontendAddress>,
    pub host_tag_selector: Vec<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FrontendAddress {
    pub cidr: String,
    pub port: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceBackend {
    pub target: BackendTarget,
    pub dns_overrides: BTreeMap<String, String>,
    pub whitelist: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BackendTarget {
    pub name: String,
    pub port: String,
    pub tls: bool,
    pub tls_insecure: bool,
    pub client_certificate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CertSettings {
    pub dns_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tls_cert: Option<CustomTlsCert>,
    pub letsencrypt: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CustomTlsCert {
    pub enabled: bool,
    pub cert_file: String,
    pub key_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceRecord {
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    #[serde(rename = "ServiceName")]
    pub service_name: String,
    #[serde(rename = "ClusterName")]
    pub cluster_name: String,
    #[serde(rename = "ServiceType")]
    pub service_type: String,
    #[serde(rename = "ServiceSpec")]
    pub service_spec: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Enabled")]
    pub enabled: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: i64,
    #[serde(rename = "CreatedBy")]
    pub created_by: String,
    #[serde(rename = "LastUpdatedAt")]
    pub last_updated_at: i64,
    #[serde(rename = "LastUpdatedBy")]
    pub last_updated_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub cluster_name: String,
    pub service_type: String,
    pub description: String,
    pub enabled: bool,
    pub service: Manifest<Service>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl TryFrom<ServiceRecord> for ServiceInfo {
    type Error = Error;

    fn try_from(record: ServiceRecord) -> Result<Self, Error> {
        let service = decode_embedded(&record.service_spec, "service spec")?;
        Ok(ServiceInfo {
            id: record.service_id,
            name: record.service_name,
            cluster_name: record.cluster_name,
            service_type: record.service_type,
            description: record.description,
            enabled: record.enabled.eq_ignore_ascii_case("true"),
            service,
            created_at: record.created_at,
            created_by: record.created_by,
            updated_at: record.last_updated_at,
            updated_by: record.last_updated_by,
        })
    }
}
