use crate::config::ClientConfig;
use crate::error::Error;
use crate::rest::{RestClient, RestClientBuilder};
use std::time::Duration;

mod access_tier;
mod access_tier_group;
mod admin;
mod api_key;
mod app_config;
mod policy;
mod registered_domain;
mod role;
mod satellite;
mod scim;
mod service;
mod service_tunnel;

pub use access_tier::AccessTiers;
pub use access_tier_group::AccessTierGroups;
pub use admin::Admin;
pub use api_key::ApiKeys;
pub use app_config::AppConfigs;
pub use policy::Policies;
pub use registered_domain::RegisteredDomains;
pub use role::Roles;
pub use satellite::Satellites;
pub use scim::Scim;
pub use service::Services;
pub use service_tunnel::ServiceTunnels;

pub struct ClientBuilder {
    rest: RestClientBuilder,
}

impl ClientBuilder {
    pub fn new(host: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            rest: RestClientBuilder::new(host)?,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = Self::new(&config.host)?
            .refresh_token(config.refresh_token.clone())
            .timeout(config.timeout);
        if let Some(api_key) = &config.api_key {
            builder = builder.api_key(api_key.clone());
        }
        Ok(builder)
    }

    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.rest = self.rest.refresh_token(token);
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.rest = self.rest.api_key(key);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.rest = self.rest.timeout(timeout);
        self
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.rest = self.rest.add_ca_cert_pem(ca_pem)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Client, Error> {
        Ok(Client {
            rest: self.rest.build()?,
        })
    }
}

/// Single handle over every resource client.
///
/// Resource accessors borrow the shared transport; they hold no state of
/// their own, so the handle can be shared across threads.
#[derive(Debug)]
pub struct Client {
    rest: RestClient,
}

impl Client {
    pub fn builder(host: impl AsRef<str>) -> Result<ClientBuilder, Error> {
        ClientBuilder::new(host)
    }

    /// Builds a client the way the control plane's own tooling does: the
    /// refresh token is mandatory, and a non-empty API key replaces the
    /// token exchange.
    pub fn new(host: &str, refresh_token: &str, api_key: &str) -> Result<Self, Error> {
        Self::builder(host)?
            .refresh_token(refresh_token)
            .api_key(api_key)
            .build()
    }

    pub fn from_env() -> Result<Self, Error> {
        ClientBuilder::from_config(&ClientConfig::from_env()?)?.build()
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn access_tiers(&self) -> AccessTiers<'_> {
        AccessTiers::new(&self.rest)
    }

    pub fn access_tier_groups(&self) -> AccessTierGroups<'_> {
        AccessTierGroups::new(&self.rest)
    }

    pub fn policies(&self) -> Policies<'_> {
        Policies::new(&self.rest)
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles::new(&self.rest)
    }

    pub fn services(&self) -> Services<'_> {
        Services::new(&self.rest)
    }

    pub fn service_tunnels(&self) -> ServiceTunnels<'_> {
        ServiceTunnels::new(&self.rest)
    }

    pub fn satellites(&self) -> Satellites<'_> {
        Satellites::new(&self.rest)
    }

    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(&self.rest)
    }

    pub fn registered_domains(&self) -> RegisteredDomains<'_> {
        RegisteredDomains::new(&self.rest)
    }

    pub fn scim(&self) -> Scim<'_> {
        Scim::new(&self.rest)
    }

    pub fn app_config(&self) -> AppConfigs<'_> {
        AppConfigs::new(&self.rest)
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin::new(&self.rest)
    }
}

pub(crate) fn require_id(resource: &str, id: &str) -> Result<(), Error> {
    if id.is_empty() {
        return Err(Error::Validation(format!("{resource} id is required")));
    }
    Ok(())
}

pub(crate) fn require_name(resource: &str, name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::Validation(format!("{resource} name is required")));
    }
    Ok(())
}
