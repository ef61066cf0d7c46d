use crate::client_defaults::API_V1;
use crate::error::Error;
use crate::models::{Manifest, Service, ServiceInfo, ServiceRecord};
use crate::rest::envelope::{decode_bare, single_match};
use crate::rest::{ResourcePath, RestClient};
use log::{debug, warn};

use super::{require_id, require_name, Policies};

const RESOURCE: &str = "service";
const LIST_COMPONENT: &str = "registered_services";
const INSERT_COMPONENT: &str = "insert_registered_service";
const DISABLE_COMPONENT: &str = "disable_registered_service";
const DELETE_COMPONENT: &str = "delete_registered_service";
const ATTACHED_TO_TYPE: &str = "service";

/// Legacy v1 registered service endpoints.
///
/// Deletion walks `enabled -> disabled -> policy detached -> deleted`.
pub struct Services<'a> {
    rest: &'a RestClient,
}

impl<'a> Services<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// Returns `Ok(None)` when the server answers with an empty list.
    pub fn get(&self, id: &str) -> Result<Option<ServiceInfo>, Error> {
        require_id(RESOURCE, id)?;
        let records = self.list(&[("ServiceID", id)])?;
        records
            .into_iter()
            .next()
            .map(ServiceInfo::try_from)
            .transpose()
    }

    pub fn get_by_name(&self, name: &str) -> Result<ServiceInfo, Error> {
        require_name(RESOURCE, name)?;
        let records = self.list(&[("ServiceName", name)])?;
        let count = records.len() as i64;
        ServiceInfo::try_from(single_match(RESOURCE, name, records, count)?)
    }

    pub fn create(&self, service: &Service) -> Result<ServiceInfo, Error> {
        require_name(RESOURCE, &service.metadata.name)?;
        let body = self.rest.create(
            &ResourcePath::new(API_V1, INSERT_COMPONENT),
            &Manifest::of(service),
        )?;
        let record: ServiceRecord = decode_bare(&body, INSERT_COMPONENT)?;
        ServiceInfo::try_from(record)
    }

    /// Upsert through the insert endpoint.
    pub fn update(&self, id: &str, service: &Service) -> Result<ServiceInfo, Error> {
        require_id(RESOURCE, id)?;
        debug!("service {id}: updating via insert");
        self.create(service)
    }

    pub fn disable(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.create(
            &ResourcePath::new(API_V1, DISABLE_COMPONENT).query("ServiceID", id),
            &serde_json::Map::new(),
        )?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.disable(id)
            .map_err(|err| Error::dependent(RESOURCE, id, "disable", err))?;
        self.detach_policy(id);
        self.rest.delete_query(
            &ResourcePath::new(API_V1, DELETE_COMPONENT),
            &[("ServiceID", id)],
        )?;
        Ok(())
    }

    /// The attachment record may already be gone, so failures are logged and
    /// otherwise ignored.
    fn detach_policy(&self, id: &str) {
        let policies = Policies::new(self.rest);
        match policies.attachment_for(ATTACHED_TO_TYPE, id) {
            Ok(Some(attachment)) => {
                if let Err(err) = policies.detach(&attachment.policy_id, ATTACHED_TO_TYPE, id) {
                    warn!(
                        "service {id}: detaching policy {} failed: {err}",
                        attachment.policy_id
                    );
                }
            }
            Ok(None) => debug!("service {id}: no policy attached"),
            Err(err) => warn!("service {id}: looking up attached policy failed: {err}"),
        }
    }

    fn list(&self, query: &[(&str, &str)]) -> Result<Vec<ServiceRecord>, Error> {
        let body = self
            .rest
            .read_query(&ResourcePath::new(API_V1, LIST_COMPONENT), query)?;
        let records: Option<Vec<ServiceRecord>> = decode_bare(&body, LIST_COMPONENT)?;
        Ok(records.unwrap_or_default())
    }
}
