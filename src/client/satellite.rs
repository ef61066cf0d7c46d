use crate::client_defaults::API_V2;
use crate::error::Error;
use crate::models::{Manifest, SatelliteInfo, SatelliteTunnelConfig};
use crate::rest::envelope::single_match;
use crate::rest::{ResourcePath, RestClient};

use super::{require_id, require_name};

const RESOURCE: &str = "satellite";
const COMPONENT: &str = "satellite";

/// Connector endpoints. The record returned by `create` is the only one that
/// carries the WireGuard private key.
pub struct Satellites<'a> {
    rest: &'a RestClient,
}

impl<'a> Satellites<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    fn path(&self) -> ResourcePath {
        ResourcePath::new(API_V2, COMPONENT)
    }

    pub fn get(&self, id: &str) -> Result<SatelliteInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest.read_data(&self.path().id(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<SatelliteInfo, Error> {
        require_name(RESOURCE, name)?;
        let list = self.rest.read_list(&self.path(), &[("name", name)])?;
        single_match(RESOURCE, name, list.items, list.count)
    }

    pub fn create(&self, config: &SatelliteTunnelConfig) -> Result<SatelliteInfo, Error> {
        require_name(RESOURCE, &config.metadata.name)?;
        self.rest.create_data(&self.path(), &Manifest::of(config))
    }

    pub fn update(&self, id: &str, config: &SatelliteTunnelConfig) -> Result<SatelliteInfo, Error> {
        require_id(RESOURCE, id)?;
        self.rest
            .update_data(&self.path().id(id), &Manifest::of(config))
    }

    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.delete(&self.path().id(id))?;
        Ok(())
    }
}
