use crate::client_defaults::API_V2;
use crate::error::Error;
use crate::models::{
    Manifest, ServiceTunnel, ServiceTunnelInfo, ServiceTunnelPolicyInfo, ServiceTunnelPolicyPost,
};
use crate::rest::envelope::single_match;
use crate::rest::{ResourcePath, RestClient};

use super::{require_id, require_name};

const RESOURCE: &str = "service tunnel";
const COMPONENT: &str = "service_tunnel";
const POLICY_SEGMENT: &str = "security_policy";

pub struct ServiceTunnels<'a> {
    rest: &'a RestClient,
}

impl<'a> ServiceTunnels<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    fn path(&self) -> ResourcePath {
        ResourcePath::new(API_V2, COMPONENT)
    }

    pub fn get(&self, id: &str) -> Result<ServiceTunnelInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest.read_data(&self.path().id(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<ServiceTunnelInfo, Error> {
        require_name(RESOURCE, name)?;
        let list = self.rest.read_list(&self.path(), &[("name", name)])?;
        single_match(RESOURCE, name, list.items, list.count)
    }

    pub fn create(&self, tunnel: &ServiceTunnel) -> Result<ServiceTunnelInfo, Error> {
        require_name(RESOURCE, &tunnel.metadata.name)?;
        self.rest.create_data(&self.path(), &Manifest::of(tunnel))
    }

    pub fn update(&self, id: &str, tunnel: &ServiceTunnel) -> Result<ServiceTunnelInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest
            .update_data(&self.path().id(id), &Manifest::of(tunnel))
    }

    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.delete(&self.path().id(id))?;
        Ok(())
    }

    pub fn attach_policy(
        &self,
        id: &str,
        policy_id: &str,
        enabled: bool,
    ) -> Result<ServiceTunnelPolicyInfo, Error> {
        require_id(RESOURCE, id)?;
        require_id("policy", policy_id)?;
        let body = ServiceTunnelPolicyPost {
            policy_id: policy_id.to_string(),
            enabled,
        };
        self.rest
            .create_data(&self.path().id(id).segment(POLICY_SEGMENT), &body)
    }

    /// Policy attached to the tunnel, or `None` when there is none.
    pub fn policy(&self, id: &str) -> Result<Option<ServiceTunnelPolicyInfo>, Error> {
        require_id(RESOURCE, id)?;
        self.rest
            .read_data(&self.path().id(id).segment(POLICY_SEGMENT))
    }

    pub fn detach_policy(&self, id: &str, policy_id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        require_id("policy", policy_id)?;
        self.rest.delete(
            &self
                .path()
                .id(id)
                .segment(POLICY_SEGMENT)
                .segment(policy_id),
        )?;
        Ok(())
    }
}
