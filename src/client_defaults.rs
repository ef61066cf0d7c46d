use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub const API_V1: &str = "v1";
pub const API_V2: &str = "v2";

pub(crate) const REFRESH_TOKEN_COMPONENT: &str = "refresh_token";

pub(crate) const RBAC_API_VERSION: &str = "rbac.banyanops.com/v1";
pub(crate) const ATTRIBUTE_BASED_TYPE: &str = "attribute-based";
pub(crate) const USER_POLICY_TYPE: &str = "USER";
