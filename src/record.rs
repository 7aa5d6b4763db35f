//! DNS records of a domain.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

use crate::envelope::Method;
use crate::{Client, ClientError, Transport, guard, utils};

/// Possible types a DNS record can have.
///
/// Types this crate doesn't know of are kept verbatim in `Other`, so a
/// listing never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Type {
    A,
    Aaaa,
    Aname,
    Caa,
    Cname,
    Dynamic,
    Https,
    Mx,
    Naptr,
    Ns,
    Ptr,
    Srv,
    Sshfp,
    Svcb,
    Tlsa,
    Txt,
    #[strum(default)]
    Other(String),
}

impl Type {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &str {
        match self {
            Type::Other(type_) => type_,
            known => known.into(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "utils::deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub prio: Option<u32>,
}

/// Fields of a record to create.
///
/// Which of the optional fields a type needs is left to the server.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    pub domain: String,
    #[serde(rename = "type")]
    pub type_: Type,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_algorithm: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_type: Option<u8>,
}

impl NewRecord {
    /// Creates a record of `domain` with the given type and name, and no
    /// other fields set.
    pub fn new(domain: &str, type_: Type, name: &str) -> Self {
        Self {
            domain: domain.to_string(),
            type_,
            name: name.to_string(),
            content: None,
            ttl: None,
            prio: None,
            weight: None,
            port: None,
            target: None,
            ssh_algorithm: None,
            ssh_type: None,
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn prio(mut self, prio: u32) -> Self {
        self.prio = Some(prio);
        self
    }
}

/// Fields of an existing record to change. Unset fields are left out of
/// the request.
#[derive(Debug, Clone, Serialize)]
pub struct RecordUpdate {
    pub id: String,
    pub domain: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_algorithm: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_type: Option<u8>,
}

impl RecordUpdate {
    /// Creates an update of the record with ID `id` that changes nothing yet.
    pub fn new(domain: &str, id: &str) -> Self {
        Self {
            id: id.to_string(),
            domain: domain.to_string(),
            type_: None,
            name: None,
            content: None,
            ttl: None,
            prio: None,
            weight: None,
            port: None,
            target: None,
            ssh_algorithm: None,
            ssh_type: None,
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

#[derive(Serialize)]
struct DomainParams<'a> {
    domain: &'a str,
}

#[derive(Serialize)]
struct RemoveParams<'a> {
    id: &'a str,
    domain: &'a str,
}

/// Client for the DNS records of a domain, returned by [Client::record].
pub struct RecordClient<'a, T = reqwest::blocking::Client> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> RecordClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists the records of `domain`.
    pub fn list(&self, domain: &str) -> Result<Vec<Record>, ClientError> {
        #[derive(Deserialize)]
        struct Response {
            records: Vec<Record>,
        }

        let resp: Response = self
            .client
            .call(Method::ListRecords, &DomainParams { domain })?;
        Ok(resp.records)
    }

    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Will return `Conflict` if the domain already has a record with the
    /// same name, whatever its type or content.
    pub fn create(&self, record: &NewRecord) -> Result<Record, ClientError> {
        let existing = self.list(&record.domain)?;
        guard::ensure_absent(&existing, "record", &record.name, |r| {
            r.name == record.name
        })?;

        self.client.call(Method::AddRecord, record)
    }

    /// Updates the record with the ID given in `update`.
    ///
    /// # Errors
    ///
    /// Will return `NotFound` if the domain has no record with that ID.
    pub fn update(&self, update: &RecordUpdate) -> Result<Record, ClientError> {
        let existing = self.list(&update.domain)?;
        guard::ensure_present(&existing, "record", &update.id, |r| r.id == update.id)?;

        self.client.call(Method::EditRecord, update)
    }

    /// Deletes the record of `domain` with the given ID.
    ///
    /// # Errors
    ///
    /// Will return `NotFound` if the domain has no record with that ID.
    pub fn delete(&self, domain: &str, id: &str) -> Result<(), ClientError> {
        let existing = self.list(domain)?;
        guard::ensure_present(&existing, "record", id, |r| r.id == id)?;

        self.client
            .execute(Method::RemoveRecord, &RemoveParams { id, domain })
    }
}
