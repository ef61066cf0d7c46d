use crate::client_defaults::API_V2;
use crate::error::Error;
use crate::models::{AccessTierGroupInfo, AccessTierGroupPost, AccessTierList, Manifest};
use crate::rest::envelope::single_match;
use crate::rest::{ResourcePath, RestClient};

use super::{require_id, require_name};

const RESOURCE: &str = "access tier group";
const COMPONENT: &str = "access_tier_group";

pub struct AccessTierGroups<'a> {
    rest: &'a RestClient,
}

impl<'a> AccessTierGroups<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    fn path(&self) -> ResourcePath {
        ResourcePath::new(API_V2, COMPONENT)
    }

    pub fn get(&self, id: &str) -> Result<AccessTierGroupInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest.read_data(&self.path().id(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<AccessTierGroupInfo, Error> {
        require_name(RESOURCE, name)?;
        let list = self.rest.read_list(&self.path(), &[("name", name)])?;
        single_match(RESOURCE, name, list.items, list.count)
    }

    pub fn create(&self, group: &AccessTierGroupPost) -> Result<AccessTierGroupInfo, Error> {
        require_name(RESOURCE, &group.name)?;
        self.rest.create_data(&self.path(), &Manifest::of(group))
    }

    pub fn update(
        &self,
        id: &str,
        group: &AccessTierGroupPost,
    ) -> Result<AccessTierGroupInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest
            .update_data(&self.path().id(id), &Manifest::of(group))
    }

    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.delete(&self.path().id(id))?;
        Ok(())
    }

    pub fn attach_access_tiers(
        &self,
        id: &str,
        access_tier_ids: &[String],
    ) -> Result<AccessTierGroupInfo, Error> {
        self.membership(id, "attach", access_tier_ids)
    }

    pub fn detach_access_tiers(
        &self,
        id: &str,
        access_tier_ids: &[String],
    ) -> Result<AccessTierGroupInfo, Error> {
        self.membership(id, "detach", access_tier_ids)
    }

    fn membership(
        &self,
        id: &str,
        action: &str,
        access_tier_ids: &[String],
    ) -> Result<AccessTierGroupInfo, Error> {
        require_id(RESOURCE, id)?;
        let body = AccessTierList {
            access_tier_ids: access_tier_ids.to_vec(),
        };
        self.rest
            .create_data(&self.path().id(id).segment(action), &body)
    }
}
