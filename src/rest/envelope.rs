use crate::error::{ApiError, Error};
use crate::models::{Envelope, ListData};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::RestClient;
use super::path::ResourcePath;

impl RestClient {
    /// GET and unwrap the envelope's `data`.
    pub fn read_data<T: DeserializeOwned>(&self, path: &ResourcePath) -> Result<T, Error> {
        let body = self.read(path)?;
        decode_data(&body, path.component())
    }

    /// Filtered GET whose `data` is a list, paired with the envelope `count`.
    pub fn read_list<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        query: &[(&str, &str)],
    ) -> Result<ListData<T>, Error> {
        let body = self.read_query(path, query)?;
        let envelope: Envelope<Option<Vec<T>>> = decode_envelope(&body, path.component())?;
        let items = envelope.data.unwrap_or_default();
        let count = envelope.count.unwrap_or(items.len() as i64);
        Ok(ListData { items, count })
    }

    pub fn create_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &ResourcePath,
        body: &B,
    ) -> Result<T, Error> {
        let body = self.create(path, body)?;
        decode_data(&body, path.component())
    }

    pub fn update_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &ResourcePath,
        body: &B,
    ) -> Result<T, Error> {
        let body = self.update(path, body)?;
        decode_data(&body, path.component())
    }
}

pub(crate) fn decode_data<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T, Error> {
    decode_envelope::<T>(body, context).map(|envelope| envelope.data)
}

pub(crate) fn decode_envelope<T: DeserializeOwned>(
    body: &[u8],
    context: &str,
) -> Result<Envelope<T>, Error> {
    // Failed envelopes usually carry `"data": null`, so the error code is
    // checked before `data` is decoded into `T`.
    let status: ApiError = serde_json::from_slice(body)
        .map_err(|err| Error::decode(format!("{context} response"), err))?;
    if status.error_code != 0 {
        return Err(Error::Api(status));
    }
    serde_json::from_slice(body).map_err(|err| Error::decode(format!("{context} response"), err))
}

/// Decodes a legacy v1 body, which carries no envelope.
pub(crate) fn decode_bare<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|err| Error::decode(format!("{context} response"), err))
}

/// Reduces a name lookup to its single result.
pub(crate) fn single_match<T>(
    resource: &'static str,
    name: &str,
    items: Vec<T>,
    count: i64,
) -> Result<T, Error> {
    if count == 0 || items.is_empty() {
        return Err(Error::NotFound {
            resource,
            name: name.to_string(),
        });
    }
    if items.len() > 1 {
        return Err(Error::Ambiguous {
            resource,
            name: name.to_string(),
            count: items.len(),
        });
    }
    let mut items = items;
    items.pop().ok_or_else(|| Error::NotFound {
        resource,
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn decode_data_returns_payload() {
        let body = br#"{"request_id":"r1","error_code":0,"error_description":"","data":{"name":"at1"},"count":1}"#;
        let item: Item = decode_data(body, "access_tier").expect("decode");
        assert_eq!(item.name, "at1");
    }

    #[test]
    fn decode_data_surfaces_envelope_error_code() {
        let body = br#"{"request_id":"r2","error_code":401,"error_description":"denied","data":null}"#;
        let err = decode_data::<Option<Item>>(body, "access_tier").expect_err("api error");
        match err {
            Error::Api(api) => {
                assert_eq!(api.error_code, 401);
                assert_eq!(api.error_description.as_deref(), Some("denied"));
                assert_eq!(api.request_id.as_deref(), Some("r2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_data_wraps_malformed_json() {
        let err = decode_data::<Item>(b"<html>", "satellite").expect_err("decode");
        match err {
            Error::Decode { context, .. } => assert_eq!(context, "satellite response"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_data_rejects_null_data_for_required_payload() {
        let err = decode_data::<Item>(br#"{"data":null}"#, "api_key").expect_err("decode");
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn single_match_distinguishes_zero_one_many() {
        let none: Vec<Item> = Vec::new();
        assert!(matches!(
            single_match("role", "admins", none, 0),
            Err(Error::NotFound { resource: "role", .. })
        ));

        let one = vec![Item {
            name: "admins".to_string(),
        }];
        assert_eq!(
            single_match("role", "admins", one, 1).expect("one").name,
            "admins"
        );

        let many = vec![
            Item {
                name: "admins".to_string(),
            },
            Item {
                name: "admins".to_string(),
            },
        ];
        match single_match("role", "admins", many, 2) {
            Err(Error::Ambiguous { count, .. }) => assert_eq!(count, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn single_match_honors_zero_count() {
        let stale = vec![Item {
            name: "ghost".to_string(),
        }];
        assert!(single_match("access tier", "ghost", stale, 0)
            .expect_err("count zero")
            .is_not_found());
    }
}
