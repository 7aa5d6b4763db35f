//! Mail forwards of a domain.

use serde::{Deserialize, Serialize};

use crate::envelope::Method;
use crate::{Client, ClientError, Transport, guard};

/// A forward from an address of the domain to another address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Forward {
    pub from: String,
    pub to: String,
}

/// Identifies a forward of a domain. Used both to create and to delete one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardParams {
    pub domain: String,
    pub from: String,
    pub to: String,
}

impl ForwardParams {
    /// Identifies the forward of `domain` from `from` to `to`.
    pub fn new(domain: &str, from: &str, to: &str) -> Self {
        Self {
            domain: domain.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn matches(&self, forward: &Forward) -> bool {
        forward.from == self.from && forward.to == self.to
    }

    fn key(&self) -> String {
        format!("{} -> {}", self.from, self.to)
    }
}

/// Client for mail forwards, returned by [Client::forward].
pub struct ForwardClient<'a, T = reqwest::blocking::Client> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ForwardClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists the forwards of `domain`.
    pub fn list(&self, domain: &str) -> Result<Vec<Forward>, ClientError> {
        #[derive(Serialize)]
        struct Params<'p> {
            domain: &'p str,
        }

        #[derive(Deserialize)]
        struct Response {
            forwards: Vec<Forward>,
        }

        let resp: Response = self.client.call(Method::ListForwards, &Params { domain })?;
        Ok(resp.forwards)
    }

    /// Creates a forward, returning it as echoed by the server.
    ///
    /// # Errors
    ///
    /// Will return `Conflict` if a forward with the same `from` and `to`
    /// exists. Another forward from the same address is not a conflict.
    pub fn create(&self, forward: &ForwardParams) -> Result<ForwardParams, ClientError> {
        let existing = self.list(&forward.domain)?;
        guard::ensure_absent(&existing, "forward", &forward.key(), |f| {
            forward.matches(f)
        })?;

        self.client.call(Method::AddForward, forward)
    }

    /// Deletes a forward.
    ///
    /// # Errors
    ///
    /// Will return `NotFound` if no forward has both the same `from` and `to`.
    pub fn delete(&self, forward: &ForwardParams) -> Result<(), ClientError> {
        let existing = self.list(&forward.domain)?;
        guard::ensure_present(&existing, "forward", &forward.key(), |f| {
            forward.matches(f)
        })?;

        self.client.execute(Method::RemoveForward, forward)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mock::{MockTransport, client};

    fn listing() -> serde_json::Value {
        json!({"forwards": [{"from": "a@example.com", "to": "c@example.org"}]})
    }

    #[test]
    fn list() {
        let mock = MockTransport::new().ok(listing());
        let forwards = client(&mock).forward().list("example.com").unwrap();

        assert_eq!(
            forwards,
            [Forward {
                from: "a@example.com".to_string(),
                to: "c@example.org".to_string()
            }]
        );
        assert_eq!(mock.methods(), ["list-forwards"]);
    }

    #[test]
    fn create_with_same_from_other_to() {
        let new = ForwardParams::new("example.com", "a@example.com", "b@example.net");
        let mock = MockTransport::new()
            .ok(listing())
            .ok(serde_json::to_value(&new).unwrap());
        let created = client(&mock).forward().create(&new).unwrap();

        assert_eq!(created, new);
        assert_eq!(mock.methods(), ["list-forwards", "add-forward"]);
        assert_eq!(
            mock.params(1),
            json!({"domain": "example.com", "from": "a@example.com", "to": "b@example.net"})
        );
    }

    #[test]
    fn create_duplicate_pair() {
        let mock = MockTransport::new().ok(listing());
        let new = ForwardParams::new("example.com", "a@example.com", "c@example.org");
        let err = client(&mock).forward().create(&new).unwrap_err();

        assert!(matches!(err, ClientError::Conflict { kind: "forward", .. }));
        assert_eq!(mock.methods(), ["list-forwards"]);
    }

    #[test]
    fn delete() {
        let mock = MockTransport::new().ok(listing()).ok(json!({}));
        let forward = ForwardParams::new("example.com", "a@example.com", "c@example.org");
        client(&mock).forward().delete(&forward).unwrap();

        assert_eq!(mock.methods(), ["list-forwards", "remove-forward"]);
    }

    #[test]
    fn delete_requires_both_addresses() {
        let mock = MockTransport::new().ok(listing());
        let forward = ForwardParams::new("example.com", "a@example.com", "b@example.net");
        let err = client(&mock).forward().delete(&forward).unwrap_err();

        assert_eq!(
            err.to_string(),
            "forward a@example.com -> b@example.net does not exist"
        );
        assert_eq!(mock.methods(), ["list-forwards"]);
    }
}
