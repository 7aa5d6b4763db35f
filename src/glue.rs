//! Glue records for nameservers inside a domain.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::envelope::Method;
use crate::{Client, ClientError, Transport, guard, utils};

/// A glue record as listed by the server.
///
/// Addresses are kept as the server formats them, and empty strings are read
/// as `None`. Use [Glue::ipv4] and [Glue::ipv6] to parse them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Glue {
    pub name: String,
    #[serde(default, deserialize_with = "utils::deserialize_empty_as_none")]
    pub address4: Option<String>,
    #[serde(default, deserialize_with = "utils::deserialize_empty_as_none")]
    pub address6: Option<String>,
}

impl Glue {
    /// Parses the IPv4 address, if there is one and it is well-formed.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        self.address4.as_deref().and_then(|a| a.parse().ok())
    }

    /// Parses the IPv6 address, if there is one and it is well-formed.
    pub fn ipv6(&self) -> Option<Ipv6Addr> {
        self.address6.as_deref().and_then(|a| a.parse().ok())
    }
}

/// A glue record to create, or the new addresses of an existing one.
#[derive(Debug, Clone, Serialize)]
pub struct GlueParams {
    pub domain: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address4: Option<Ipv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address6: Option<Ipv6Addr>,
}

impl GlueParams {
    /// Creates params for the glue record `name` of `domain`. An address left
    /// as `None` is not sent.
    pub fn new(
        domain: &str,
        name: &str,
        address4: Option<Ipv4Addr>,
        address6: Option<Ipv6Addr>,
    ) -> Self {
        Self {
            domain: domain.to_string(),
            name: name.to_string(),
            address4,
            address6,
        }
    }
}

#[derive(Serialize)]
struct NameParams<'a> {
    domain: &'a str,
    name: &'a str,
}

/// Client for glue records, returned by [Client::glue].
pub struct GlueClient<'a, T = reqwest::blocking::Client> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> GlueClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists the glue records of `domain`.
    pub fn list(&self, domain: &str) -> Result<Vec<Glue>, ClientError> {
        #[derive(Serialize)]
        struct Params<'p> {
            domain: &'p str,
        }

        #[derive(Deserialize)]
        struct Response {
            glue: Vec<Glue>,
        }

        let resp: Response = self.client.call(Method::ListGlue, &Params { domain })?;
        Ok(resp.glue)
    }

    /// Creates a glue record.
    ///
    /// # Errors
    ///
    /// Will return `Conflict` if the domain has a glue record with that name.
    pub fn create(&self, glue: &GlueParams) -> Result<(), ClientError> {
        let existing = self.list(&glue.domain)?;
        guard::ensure_absent(&existing, "glue record", &glue.name, |g| g.name == glue.name)?;

        self.client.execute(Method::AddGlue, glue)
    }

    /// Changes the addresses of a glue record.
    ///
    /// # Errors
    ///
    /// Will return `NotFound` if the domain has no glue record with that name.
    pub fn update(&self, glue: &GlueParams) -> Result<(), ClientError> {
        let existing = self.list(&glue.domain)?;
        guard::ensure_present(&existing, "glue record", &glue.name, |g| g.name == glue.name)?;

        self.client.execute(Method::EditGlue, glue)
    }

    /// Deletes the glue record `name` of `domain`.
    ///
    /// # Errors
    ///
    /// Will return `NotFound` if the domain has no glue record with that name.
    pub fn delete(&self, domain: &str, name: &str) -> Result<(), ClientError> {
        let existing = self.list(domain)?;
        guard::ensure_present(&existing, "glue record", name, |g| g.name == name)?;

        self.client
            .execute(Method::RemoveGlue, &NameParams { domain, name })
    }
}
