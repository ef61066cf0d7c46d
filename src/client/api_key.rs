use crate::client_defaults::API_V2;
use crate::error::Error;
use crate::models::{ApiKeyData, ApiKeyPost};
use crate::rest::envelope::single_match;
use crate::rest::{ResourcePath, RestClient};

use super::{require_id, require_name};

const RESOURCE: &str = "api key";
const COMPONENT: &str = "api_key";

pub struct ApiKeys<'a> {
    rest: &'a RestClient,
}

impl<'a> ApiKeys<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    fn path(&self) -> ResourcePath {
        ResourcePath::new(API_V2, COMPONENT)
    }

    pub fn get(&self, id: &str) -> Result<ApiKeyData, Error> {
        require_id(RESOURCE, id)?;
        self.rest.read_data(&self.path().id(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<ApiKeyData, Error> {
        require_name(RESOURCE, name)?;
        let list = self.rest.read_list(&self.path(), &[("name", name)])?;
        single_match(RESOURCE, name, list.items, list.count)
    }

    pub fn create(&self, key: &ApiKeyPost) -> Result<ApiKeyData, Error> {
        require_name(RESOURCE, &key.name)?;
        self.rest.create_data(&self.path(), key)
    }

    pub fn update(&self, id: &str, key: &ApiKeyPost) -> Result<ApiKeyData, Error> {
        require_id(RESOURCE, id)?;
        self.rest.update_data(&self.path().id(id), key)
    }

    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.delete(&self.path().id(id))?;
        Ok(())
    }
}
