#![forbid(unsafe_code)]
//! Blocking client for the Banyan security control plane.
//!
//! ```no_run
//! use banyan_rs::{AccessTierPost, Client};
//!
//! # fn main() -> Result<(), banyan_rs::Error> {
//! let client = Client::from_env()?;
//! let tier = client.access_tiers().create(&AccessTierPost {
//!     name: "at1".to_string(),
//!     address: "a.example.com".to_string(),
//!     ..Default::default()
//! })?;
//! client.access_tiers().delete(&tier.id)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod client_defaults;
mod config;
mod error;
mod models;
mod rest;

pub use client::{
    AccessTierGroups, AccessTiers, Admin, ApiKeys, AppConfigs, Client, ClientBuilder, Policies,
    RegisteredDomains, Roles, Satellites, Scim, ServiceTunnels, Services,
};
pub use client_defaults::{API_V1, API_V2};
pub use config::{ClientConfig, ENV_API_KEY, ENV_HOST, ENV_REFRESH_TOKEN};
pub use error::{ApiError, Error, StatusError};
pub use models::{
    unescape_html, AccessTierGroupInfo, AccessTierGroupPost, AccessTierInfo, AccessTierList,
    AccessTierPost, AccessTierTunnelInfo, AccessTierTunnelInfoPost, ApiKeyData, ApiKeyPost,
    AppConfig, AppConfigPost, BackendTarget, CertSettings, CustomTlsCert, DnsSetting, Envelope,
    FrontendAddress, IdpConfig, L4Access, L4Rule, L7Access, ListData, Manifest, Netagent,
    OidcSettings, PeerAccessTier, Policy, PolicyAccess, PolicyAttachmentInfo,
    PolicyAttachmentPost, PolicyConditions, PolicyException, PolicyInfo, PolicyMetadata,
    PolicyOptions, PolicyRecord, PolicyRules, PolicySpec, PolicyTags,
    RegisteredDomainChallengeInfo, RegisteredDomainChallengePost, RegisteredDomainInfo,
    RegisteredDomainPost, ResourceKind, Role, RoleInfo, RoleMetadata, RoleRecord, RoleSpec,
    RoleTags, Sanitize, SatelliteInfo, SatelliteMetadata, SatelliteSpec, SatelliteTunnelConfig,
    ScimCredentials, ScimSettingsPost, Service, ServiceAttributes, ServiceBackend, ServiceInfo,
    ServiceMetadata, ServiceRecord, ServiceSpec, ServiceTags, ServiceTunnel, ServiceTunnelInfo,
    ServiceTunnelMetadata, ServiceTunnelPolicyInfo, ServiceTunnelPolicyPost, ServiceTunnelSpec,
    ServiceTunnelTags, UserIdpConfig,
};
pub use rest::{ResourcePath, RestClient, RestClientBuilder};
