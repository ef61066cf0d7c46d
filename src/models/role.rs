use crate::error::Error;
use serde::{Deserialize, Serialize};

use super::common::{Manifest, ResourceKind};
use super::encoding::decode_embedded;

/// Attribute-based role, the body of create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Role {
    pub metadata: RoleMetadata,
    pub spec: RoleSpec,
}

impl ResourceKind for Role {
    const KIND: &'static str = "BanyanRole";
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RoleMetadata {
    pub name: String,
    pub description: String,
    pub tags: RoleTags,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RoleTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Attribute predicates a principal must satisfy. Unset options are left out
/// of the payload so the server does not read them as `false`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RoleSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_ownership: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platform: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_device_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdm_present: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_account: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub container_fqdn: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repo_tag: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RoleRecord {
    #[serde(rename = "RoleID")]
    pub role_id: String,
    #[serde(rename = "RoleName")]
    pub role_name: String,
    #[serde(rename = "RoleVersion")]
    pub role_version: i64,
    #[serde(rename = "RoleSpec")]
    pub role_spec: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "IsEnabled")]
    pub is_enabled: bool,
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
pub struct RoleInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: i64,
    pub enabled: bool,
    pub role: Manifest<Role>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl TryFrom<RoleRecord> for RoleInfo {
    type Error = Error;

    fn try_from(record: RoleRecord) -> Result<Self, Error> {
        let role = decode_embedded(&record.role_spec, "role spec")?;
        Ok(RoleInfo {
            id: record.role_id,
            name: record.role_name,
            description: record.description,
            version: record.role_version,
            enabled: record.is_enabled,
            role,
            created_at: record.created_at,
            created_by: record.created_by,
            updated_at: record.last_updated_at,
            updated_by: record.last_updated_by,
        })
    }
}
