use crate::client_defaults::{ATTRIBUTE_BASED_TYPE, RBAC_API_VERSION};
use serde::{Deserialize, Serialize};

/// Standard response wrapper of the v2 endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_description: Option<String>,
    pub data: T,
    #[serde(default)]
    pub count: Option<i64>,
}

/// Result of a filtered list query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListData<T> {
    pub items: Vec<T>,
    pub count: i64,
}

/// Schema literals the server uses to identify a manifest-wrapped resource.
pub trait ResourceKind {
    const KIND: &'static str;
    const API_VERSION: &'static str = RBAC_API_VERSION;
    const TYPE: &'static str = ATTRIBUTE_BASED_TYPE;
}

/// Canonical outer envelope for create/update bodies: the schema literals
/// followed by the resource's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest<T> {
    #[serde(default)]
    pub kind: String,
    #[serde(default, alias = "apiVersion")]
    pub api_version: String,
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(flatten)]
    pub body: T,
}

impl<'a, B: ResourceKind> Manifest<&'a B> {
    pub fn of(body: &'a B) -> Self {
        Manifest {
            kind: B::KIND.to_string(),
            api_version: B::API_VERSION.to_string(),
            type_: B::TYPE.to_string(),
            body,
        }
    }
}

/// Clears secret material before a record is displayed or logged.
pub trait Sanitize {
    fn sanitize(&mut self);

    fn sanitized(mut self) -> Self
    where
        Self: Sized,
    {
        self.sanitize();
        self
    }
}

impl<T: Sanitize> Sanitize for Vec<T> {
    fn sanitize(&mut self) {
        self.iter_mut().for_each(Sanitize::sanitize);
    }
}

/// Reads an explicit `null` as the field's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        enabled: Option<bool>,
    }

    impl ResourceKind for Sample {
        const KIND: &'static str = "BanyanSample";
    }

    #[test]
    fn manifest_flattens_body_after_literals() {
        let sample = Sample {
            name: "web".to_string(),
            enabled: Some(false),
        };
        let value = serde_json::to_value(Manifest::of(&sample)).expect("json");
        assert_eq!(
            value,
            json!({
                "kind": "BanyanSample",
                "api_version": "rbac.banyanops.com/v1",
                "type": "attribute-based",
                "name": "web",
                "enabled": false,
            })
        );
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let sample = Sample {
            name: "web".to_string(),
            enabled: None,
        };
        let value = serde_json::to_value(Manifest::of(&sample)).expect("json");
        assert!(value.get("enabled").is_none());
    }

    #[test]
    fn manifest_accepts_camel_case_api_version() {
        let manifest: Manifest<Sample> = serde_json::from_value(json!({
            "kind": "BanyanSample",
            "apiVersion": "rbac.banyanops.com/v1",
            "type": "attribute-based",
            "name": "web",
        }))
        .expect("decode");
        assert_eq!(manifest.api_version, "rbac.banyanops.com/v1");
        assert_eq!(manifest.body.name, "web");
    }
}
