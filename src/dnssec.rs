//! DNSSEC delegation signer entries of a domain.
//!
//! The server's listing shape is loosely documented, so every field of
//! [Dnssec] besides the ID is optional. Creation and deletion are sent
//! as-is, without an existence check.

use serde::{Deserialize, Serialize};

use crate::envelope::Method;
use crate::{Client, ClientError, Transport, utils};

/// A DNSSEC entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dnssec {
    #[serde(deserialize_with = "utils::deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub algorithm: Option<u8>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub digest_type: Option<u8>,
    #[serde(default)]
    pub key_tag: Option<u16>,
    #[serde(default)]
    pub public_key: Option<String>,
}

/// A DNSSEC entry to add to a domain.
#[derive(Debug, Clone, Serialize)]
pub struct NewDnssec {
    pub domain: String,
    pub algorithm: u8,
    pub digest: String,
    pub digest_type: u8,
    pub key_tag: u16,
    pub public_key: String,
}

#[derive(Serialize)]
struct RemoveParams<'a> {
    domain: &'a str,
    id: &'a str,
}

/// Client for DNSSEC entries, returned by [Client::dnssec].
pub struct DnssecClient<'a, T = reqwest::blocking::Client> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> DnssecClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists the DNSSEC entries of `domain`.
    pub fn list(&self, domain: &str) -> Result<Vec<Dnssec>, ClientError> {
        #[derive(Serialize)]
        struct Params<'p> {
            domain: &'p str,
        }

        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            dnssec: Vec<Dnssec>,
        }

        let resp: Response = self.client.call(Method::ListDnssec, &Params { domain })?;
        Ok(resp.dnssec)
    }

    /// Adds a DNSSEC entry. The server's answer is not inspected beyond the
    /// envelope.
    pub fn create(&self, entry: &NewDnssec) -> Result<(), ClientError> {
        self.client.execute(Method::AddDnssec, entry)
    }

    /// Deletes the DNSSEC entry `id` of `domain`.
    pub fn delete(&self, domain: &str, id: &str) -> Result<(), ClientError> {
        self.client
            .execute(Method::RemoveDnssec, &RemoveParams { domain, id })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mock::{MockTransport, client};

    #[test]
    fn list() {
        let mock = MockTransport::new().ok(json!({"dnssec": [
            {"id": 7, "algorithm": 13, "digest_type": 2, "key_tag": 2371, "digest": "abcd"},
            {"id": "8"}
        ]}));
        let entries = client(&mock).dnssec().list("example.com").unwrap();

        assert_eq!(entries[0].id, "7");
        assert_eq!(entries[0].key_tag, Some(2371));
        assert_eq!(entries[1].algorithm, None);
        assert_eq!(mock.methods(), ["list-dnssec"]);
        assert_eq!(mock.params(0), json!({"domain": "example.com"}));
    }

    #[test]
    fn list_without_entries() {
        let mock = MockTransport::new().ok(json!({}));
        assert!(client(&mock).dnssec().list("example.com").unwrap().is_empty());
    }

    #[test]
    fn create_is_unguarded() {
        let mock = MockTransport::new().ok(json!({}));
        let entry = NewDnssec {
            domain: "example.com".to_string(),
            algorithm: 13,
            digest: "abcd".to_string(),
            digest_type: 2,
            key_tag: 2371,
            public_key: "key".to_string(),
        };
        client(&mock).dnssec().create(&entry).unwrap();

        assert_eq!(mock.methods(), ["add-dnssec"]);
        assert_eq!(
            mock.params(0),
            json!({
                "domain": "example.com",
                "algorithm": 13,
                "digest": "abcd",
                "digest_type": 2,
                "key_tag": 2371,
                "public_key": "key"
            })
        );
    }

    #[test]
    fn delete_is_unguarded() {
        let mock = MockTransport::new().ok(json!({}));
        client(&mock).dnssec().delete("example.com", "7").unwrap();

        assert_eq!(mock.methods(), ["remove-dnssec"]);
        assert_eq!(mock.params(0), json!({"domain": "example.com", "id": "7"}));
    }
}
