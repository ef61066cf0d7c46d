use crate::client_defaults::API_V2;
use crate::error::Error;
use crate::models::{
    RegisteredDomainChallengeInfo, RegisteredDomainChallengePost, RegisteredDomainInfo,
    RegisteredDomainPost,
};
use crate::rest::envelope::single_match;
use crate::rest::{ResourcePath, RestClient};

use super::{require_id, require_name};

const RESOURCE: &str = "registered domain";
const COMPONENT: &str = "registered_domain";
const CHALLENGE_COMPONENT: &str = "registered_domain_challenge";

pub struct RegisteredDomains<'a> {
    rest: &'a RestClient,
}

impl<'a> RegisteredDomains<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    fn path(&self) -> ResourcePath {
        ResourcePath::new(API_V2, COMPONENT)
    }

    pub fn get(&self, id: &str) -> Result<RegisteredDomainInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest.read_data(&self.path().id(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<RegisteredDomainInfo, Error> {
        require_name(RESOURCE, name)?;
        let list = self.rest.read_list(&self.path(), &[("name", name)])?;
        single_match(RESOURCE, name, list.items, list.count)
    }

    pub fn create(&self, domain: &RegisteredDomainPost) -> Result<RegisteredDomainInfo, Error> {
        require_name(RESOURCE, &domain.name)?;
        self.rest.create_data(&self.path(), domain)
    }

    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.delete(&self.path().id(id))?;
        Ok(())
    }

    /// Requests the TXT challenge that proves ownership of a wildcard domain.
    pub fn create_challenge(
        &self,
        domain_name: &str,
    ) -> Result<RegisteredDomainChallengeInfo, Error> {
        require_name(RESOURCE, domain_name)?;
        let body = RegisteredDomainChallengePost {
            registered_domain_name: domain_name.to_string(),
        };
        self.rest
            .create_data(&ResourcePath::new(API_V2, CHALLENGE_COMPONENT), &body)
    }
}
