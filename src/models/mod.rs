mod access_tier;
mod access_tier_group;
mod admin;
mod api_key;
mod app_config;
mod common;
pub(crate) mod encoding;
mod policy;
mod registered_domain;
mod role;
mod satellite;
mod scim;
mod service;
mod service_tunnel;

pub use access_tier::{
    AccessTierInfo, AccessTierPost, AccessTierTunnelInfo, AccessTierTunnelInfoPost, Netagent,
};
pub use access_tier_group::{AccessTierGroupInfo, AccessTierGroupPost, AccessTierList};
pub use admin::{IdpConfig, OidcSettings, UserIdpConfig};
pub use api_key::{ApiKeyData, ApiKeyPost};
pub use app_config::{AppConfig, AppConfigPost};
pub use common::{Envelope, ListData, Manifest, ResourceKind, Sanitize};
pub use encoding::unescape_html;
pub use policy::{
    L4Access, L4Rule, L7Access, Policy, PolicyAccess, PolicyAttachmentInfo, PolicyAttachmentPost,
    PolicyConditions, PolicyException, PolicyInfo, PolicyMetadata, PolicyOptions, PolicyRecord,
    PolicyRules, PolicySpec, PolicyTags,
};
pub use registered_domain::{
    DnsSetting, RegisteredDomainChallengeInfo, RegisteredDomainChallengePost,
    RegisteredDomainInfo, RegisteredDomainPost,
};
pub use role::{Role, RoleInfo, RoleMetadata, RoleRecord, RoleSpec, RoleTags};
pub use satellite::{SatelliteInfo, SatelliteMetadata, SatelliteSpec, SatelliteTunnelConfig};
pub use scim::{ScimCredentials, ScimSettingsPost};
pub use service::{
    BackendTarget, CertSettings, CustomTlsCert, FrontendAddress, Service, ServiceAttributes,
    ServiceBackend, ServiceInfo, ServiceMetadata, ServiceRecord, ServiceSpec, ServiceTags,
};
pub use service_tunnel::{
    PeerAccessTier, ServiceTunnel, ServiceTunnelInfo, ServiceTunnelMetadata,
    ServiceTunnelPolicyInfo, ServiceTunnelPolicyPost, ServiceTunnelSpec, ServiceTunnelTags,
};
