use crate::client_defaults::USER_POLICY_TYPE;
use crate::error::Error;
use serde::{Deserialize, Serialize};

use super::common::{Manifest, ResourceKind};
use super::encoding::decode_embedded;

/// Attribute-based security policy, the body of create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Policy {
    pub metadata: PolicyMetadata,
    pub spec: PolicySpec,
}

impl ResourceKind for Policy {
    const KIND: &'static str = "BanyanPolicy";
    const TYPE: &'static str = USER_POLICY_TYPE;
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyMetadata {
    pub name: String,
    pub description: String,
    pub tags: PolicyTags,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicySpec {
    pub access: Vec<PolicyAccess>,
    pub exception: PolicyException,
    pub options: PolicyOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyAccess {
    pub roles: Vec<String>,
    pub rules: PolicyRules,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<PolicyConditions>,
    pub l7_access: Vec<L7Access>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l4_access: Option<L4Access>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct L7Access {
    pub resources: Vec<String>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct L4Access {
    pub allow: Vec<L4Rule>,
    pub deny: Vec<L4Rule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct L4Rule {
    pub cidrs: Vec<String>,
    pub protocols: Vec<String>,
    pub ports: Vec<String>,
    pub fqdns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyException {
    pub src_addr: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyOptions {
    pub disable_tls_client_authentication: bool,
    pub l7_protocol: String,
}

/// Row returned by the legacy policy endpoints. `PolicySpec` holds the
/// HTML-escaped manifest.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyRecord {
    #[serde(rename = "PolicyID")]
    pub policy_id: String,
    #[serde(rename = "PolicyName")]
    pub policy_name: String,
    #[serde(rename = "PolicyVersion")]
    pub policy_version: i64,
    #[serde(rename = "PolicySpec")]
    pub policy_spec: String,
    #[serde(rename = "Description")]
    pub description: String,
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
pub struct PolicyInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: i64,
    pub policy: Manifest<Policy>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl TryFrom<PolicyRecord> for PolicyInfo {
    type Error = Error;

    fn try_from(record: PolicyRecord) -> Result<Self, Error> {
        let policy = decode_embedded(&record.policy_spec, "policy spec")?;
        Ok(PolicyInfo {
            id: record.policy_id,
            name: record.policy_name,
            description: record.description,
            version: record.policy_version,
            policy,
            created_at: record.created_at,
            created_by: record.created_by,
            updated_at: record.last_updated_at,
            updated_by: record.last_updated_by,
        })
    }
}

/// Link between a legacy policy and the resource it protects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PolicyAttachmentPost {
    pub attached_to_type: String,
    pub attached_to_id: String,
    pub is_enabled: bool,
    pub enabled: String,
}

impl PolicyAttachmentPost {
    pub fn new(
        attached_to_type: impl Into<String>,
        attached_to_id: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            attached_to_type: attached_to_type.into(),
            attached_to_id: attached_to_id.into(),
            is_enabled: enabled,
            enabled: if enabled { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PolicyAttachmentInfo {
    #[serde(rename = "PolicyID")]
    pub policy_id: String,
    #[serde(rename = "PolicyName")]
    pub policy_name: String,
    #[serde(rename = "AttachedToType")]
    pub attached_to_type: String,
    #[serde(rename = "AttachedToID")]
    pub attached_to_id: String,
    #[serde(rename = "AttachedToName")]
    pub attached_to_name: String,
    #[serde(rename = "Enabled")]
    pub enabled: String,
    #[serde(rename = "AttachedAt")]
    pub attached_at: i64,
    #[serde(rename = "AttachedBy")]
    pub attached_by: String,
}

impl PolicyAttachmentInfo {
    pub fn is_enabled(&self) -> bool {
        self.enabled.eq_ignore_ascii_case("true")
    }
}
