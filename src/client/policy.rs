use crate::client_defaults::API_V1;
use crate::error::Error;
use crate::models::{
    Manifest, Policy, PolicyAttachmentInfo, PolicyAttachmentPost, PolicyInfo, PolicyRecord,
};
use crate::rest::envelope::{decode_bare, single_match};
use crate::rest::{ResourcePath, RestClient};
use log::debug;

use super::{require_id, require_name};

const RESOURCE: &str = "policy";
const LIST_COMPONENT: &str = "security_policies";
const INSERT_COMPONENT: &str = "insert_security_policy";
const DELETE_COMPONENT: &str = "delete_security_policy";
const POLICY_COMPONENT: &str = "security_policy";
const ATTACHMENTS_COMPONENT: &str = "security_policy_attachments";

/// Legacy v1 security policy endpoints. Records come back without an
/// envelope, with the manifest HTML-escaped inside `PolicySpec`.
pub struct Policies<'a> {
    rest: &'a RestClient,
}

impl<'a> Policies<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// Returns `Ok(None)` when the server answers with an empty list.
    pub fn get(&self, id: &str) -> Result<Option<PolicyInfo>, Error> {
        require_id(RESOURCE, id)?;
        let records = self.list(&[("PolicyID", id)])?;
        records
            .into_iter()
            .next()
            .map(PolicyInfo::try_from)
            .transpose()
    }

    pub fn get_by_name(&self, name: &str) -> Result<PolicyInfo, Error> {
        require_name(RESOURCE, name)?;
        let records = self.list(&[("PolicyName", name)])?;
        let count = records.len() as i64;
        PolicyInfo::try_from(single_match(RESOURCE, name, records, count)?)
    }

    pub fn create(&self, policy: &Policy) -> Result<PolicyInfo, Error> {
        require_name(RESOURCE, &policy.metadata.name)?;
        let path = ResourcePath::new(API_V1, INSERT_COMPONENT);
        let body = self.rest.create(&path, &Manifest::of(policy))?;
        let record: PolicyRecord = decode_bare(&body, INSERT_COMPONENT)?;
        PolicyInfo::try_from(record)
    }

    /// The legacy API has no update verb: inserting a policy with an existing
    /// name replaces it.
    pub fn update(&self, id: &str, policy: &Policy) -> Result<PolicyInfo, Error> {
        require_id(RESOURCE, id)?;
        debug!("policy {id}: updating via insert");
        self.create(policy)
    }

    pub fn delete(&self, id: &str) -> Result<(), Error> {
        require_id(RESOURCE, id)?;
        self.rest.delete_query(
            &ResourcePath::new(API_V1, DELETE_COMPONENT),
            &[("PolicyID", id)],
        )?;
        Ok(())
    }

    pub fn attach(
        &self,
        policy_id: &str,
        attachment: &PolicyAttachmentPost,
    ) -> Result<PolicyAttachmentInfo, Error> {
        require_id(RESOURCE, policy_id)?;
        let path = ResourcePath::new(API_V1, POLICY_COMPONENT)
            .id(policy_id)
            .segment("attach");
        let body = self.rest.create(&path, attachment)?;
        decode_bare(&body, POLICY_COMPONENT)
    }

    pub fn detach(
        &self,
        policy_id: &str,
        attached_to_type: &str,
        attached_to_id: &str,
    ) -> Result<(), Error> {
        require_id(RESOURCE, policy_id)?;
        let path = ResourcePath::new(API_V1, POLICY_COMPONENT)
            .id(policy_id)
            .segment("detach");
        self.rest.delete_query(
            &path,
            &[
                ("AttachedToType", attached_to_type),
                ("AttachedToID", attached_to_id),
            ],
        )?;
        Ok(())
    }

    /// Policy currently attached to a resource, if any.
    pub fn attachment_for(
        &self,
        attached_to_type: &str,
        attached_to_id: &str,
    ) -> Result<Option<PolicyAttachmentInfo>, Error> {
        let body = self.rest.read_query(
            &ResourcePath::new(API_V1, ATTACHMENTS_COMPONENT),
            &[
                ("AttachedToType", attached_to_type),
                ("AttachedToID", attached_to_id),
            ],
        )?;
        let attachments: Option<Vec<PolicyAttachmentInfo>> =
            decode_bare(&body, ATTACHMENTS_COMPONENT)?;
        Ok(attachments.unwrap_or_default().into_iter().next())
    }

    fn list(&self, query: &[(&str, &str)]) -> Result<Vec<PolicyRecord>, Error> {
        let body = self
            .rest
            .read_query(&ResourcePath::new(API_V1, LIST_COMPONENT), query)?;
        let records: Option<Vec<PolicyRecord>> = decode_bare(&body, LIST_COMPONENT)?;
        Ok(records.unwrap_or_default())
    }
}
