use crate::client_defaults::API_V1;
use crate::error::Error;
use crate::models::{Manifest, Role, RoleInfo, RoleRecord};
use crate::rest::envelope::{decode_bare, single_match};
use crate::rest::{ResourcePath, RestClient};
use log::debug;

use super::{require_id, require_name};

const RESOURCE: &str = "role";
const LIST_COMPONENT: &str = "security_roles";
const INSERT_COMPONENT: &str = "insert_security_role";
const DISABLE_COMPONENT: &str = "disable_security_role";
const DELETE_COMPONENT: &str = "delete_security_role";

/// Legacy v1 security role endpoints.
pub struct Roles<'a> {
    rest: &'a RestClient,
}

impl<'a> Roles<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// Returns `Ok(None)` when the server answers with an empty list.
    pub fn get(&self, id: &str) -> Result<Option<RoleInfo>, Error> {
        require_id(RESOURCE, id)?;
        let records = self.list(&[("RoleID", id)])?;
        records
            .into_iter()
            .next()
            .map(RoleInfo::try_from)
            .transpose()
    }

    pub fn get_by_name(&self, name: &str) -> Result<RoleInfo, Error> {
        require_name(RESOURCE, name)?;
        let records = self.list(&[("RoleName", name)])?;
        let count = records.len() as i64;
        RoleInfo::try_from(single_match(RESOURCE, name, records, count)?)
    }

    pub fn create(&self, role: &Role) -> Result<RoleInfo, Error> {
        require_name(RESOURCE, &role.metadata.name)?;
        let body = self.rest.create(
            &ResourcePath::new(API_V1, INSERT_COMPONENT),
            &Manifest::of(role),
        )?;
        let record: RoleRecord = decode_bare(&body, INSERT_COMPONENT)?;
        RoleInfo::try_from(record)
    }

    /// Upsert through the insert endpoint; see [`Policies::update`](super::Policies::update).
    pub fn update(&self, id: &str, role: &Role) -> Result<RoleInfo, Error> {
        require_id(RESOURCE, id)?;
        debug!("role {id}: updating via insert");
        self.create(role)
    }

    pub fn disable(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.create(
            &ResourcePath::new(API_V1, DISABLE_COMPONENT).query("RoleID", id),
            &serde_json::Map::new(),
        )?;
        Ok(())
    }

    /// Disables the role, then deletes it. The server refuses to delete an
    /// enabled role.
    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.disable(id)
            .map_err(|err| Error::dependent(RESOURCE, id, "disable", err))?;
        self.rest.delete_query(
            &ResourcePath::new(API_V1, DELETE_COMPONENT),
            &[("RoleID", id)],
        )?;
        Ok(())
    }

    fn list(&self, query: &[(&str, &str)]) -> Result<Vec<RoleRecord>, Error> {
        let body = self
            .rest
            .read_query(&ResourcePath::new(API_V1, LIST_COMPONENT), query)?;
        let records: Option<Vec<RoleRecord>> = decode_bare(&body, LIST_COMPONENT)?;
        Ok(records.unwrap_or_default())
    }
}
