use crate::client_defaults::{API_V1, API_V2};
use crate::error::Error;
use crate::models::{AccessTierInfo, AccessTierPost, Manifest, Netagent};
use crate::rest::envelope::single_match;
use crate::rest::{ResourcePath, RestClient};
use log::debug;

use super::{require_id, require_name};

const RESOURCE: &str = "access tier";
const COMPONENT: &str = "access_tier";
const NETAGENT_COMPONENT: &str = "netagent";

pub struct AccessTiers<'a> {
    rest: &'a RestClient,
}

impl<'a> AccessTiers<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    fn path(&self) -> ResourcePath {
        ResourcePath::new(API_V2, COMPONENT)
    }

    pub fn get(&self, id: &str) -> Result<AccessTierInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest.read_data(&self.path().id(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<AccessTierInfo, Error> {
        require_name(RESOURCE, name)?;
        let list = self.rest.read_list(&self.path(), &[("name", name)])?;
        single_match(RESOURCE, name, list.items, list.count)
    }

    pub fn create(&self, tier: &AccessTierPost) -> Result<AccessTierInfo, Error> {
        require_name(RESOURCE, &tier.name)?;
        self.rest.create_data(&self.path(), &Manifest::of(tier))
    }

    pub fn update(&self, id: &str, tier: &AccessTierPost) -> Result<AccessTierInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest
            .update_data(&self.path().id(id), &Manifest::of(tier))
    }

    /// Lists the agents registered under the access tier, in server order.
    pub fn netagents(&self, id: &str) -> Result<Vec<Netagent>, Error> {
        require_id(RESOURCE, id)?;
        let path = self.path().id(id).segment("netagents");
        let agents: Option<Vec<Netagent>> = self.rest.read_data(&path)?;
        Ok(agents.unwrap_or_default())
    }

    pub fn delete_netagent(&self, cluster_name: &str, hostname: &str) -> Result<(), Error> {
        if cluster_name.is_empty() || hostname.is_empty() {
            return Err(Error::Validation(
                "netagent cluster name and hostname are required".to_string(),
            ));
        }
        self.rest.delete_query(
            &ResourcePath::new(API_V1, NETAGENT_COMPONENT),
            &[("CLUSTERNAME", cluster_name), ("HOSTNAME", hostname)],
        )?;
        Ok(())
    }

    /// Removes every attached agent, one at a time, then the access tier.
    ///
    /// Stops at the first agent that cannot be removed; agents already
    /// removed stay removed.
    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        let agents = self
            .netagents(id)
            .map_err(|err| Error::dependent(RESOURCE, id, "list netagents", err))?;
        let mut tier_cluster = None;
        for agent in &agents {
            let cluster_name = self.agent_cluster(id, agent, &mut tier_cluster)?;
            let step = format!("delete netagent {}", agent.hostname);
            debug!("access tier {id}: {step}");
            self.delete_netagent(&cluster_name, &agent.hostname)
                .map_err(|err| Error::dependent(RESOURCE, id, step, err))?;
        }
        self.rest.delete(&self.path().id(id))?;
        Ok(())
    }

    /// Agents listed without a cluster run in the tier's own cluster, which
    /// is fetched at most once per delete.
    fn agent_cluster(
        &self,
        id: &str,
        agent: &Netagent,
        tier_cluster: &mut Option<String>,
    ) -> Result<String, Error> {
        if let Some(cluster_name) = agent.cluster_name.as_deref().filter(|c| !c.is_empty()) {
            return Ok(cluster_name.to_string());
        }
        if let Some(cluster_name) = tier_cluster {
            return Ok(cluster_name.clone());
        }
        let tier = self
            .get(id)
            .map_err(|err| Error::dependent(RESOURCE, id, "get access tier", err))?;
        let cluster_name = tier.cluster_name.unwrap_or_default();
        *tier_cluster = Some(cluster_name.clone());
        Ok(cluster_name)
    }
}
