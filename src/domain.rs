//! Domains registered to the account.

use serde::{Deserialize, Serialize};

use crate::envelope::{Method, NoParams};
use crate::{Client, ClientError, Transport, guard};

/// A domain as returned by `list-domains`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainSummary {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub autorenew: bool,
}

/// Full details of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainDetails {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub autorenew: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub mailforwarding: bool,
    #[serde(default)]
    pub maxnameservers: u32,
    #[serde(default)]
    pub dnssec_type: String,
    #[serde(default)]
    pub maxstaticpages: u32,
}

/// A domain matching a `find-domain` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainOffer {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub price: u32,
}

/// Settings to apply to a domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainUpdate {
    pub domain: String,
    pub mailforwarding: bool,
    pub dnssec: bool,
    pub lock: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
}

impl DomainUpdate {
    /// Creates an update that sets the given flags and leaves the
    /// nameservers unchanged.
    pub fn new(domain: &str, mailforwarding: bool, dnssec: bool, lock: bool) -> Self {
        Self {
            domain: domain.to_string(),
            mailforwarding,
            dnssec,
            lock,
            nameservers: Vec::new(),
        }
    }

    /// Sets the nameservers of the domain.
    pub fn nameservers<I, S>(mut self, nameservers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nameservers = nameservers.into_iter().map(Into::into).collect();
        self
    }
}

/// Client for the domains of the account, returned by [Client::domain].
pub struct DomainClient<'a, T = reqwest::blocking::Client> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> DomainClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Retrieves the details of `domain`.
    pub fn get(&self, domain: &str) -> Result<DomainDetails, ClientError> {
        #[derive(Serialize)]
        struct Params<'p> {
            domain: &'p str,
        }

        self.client.call(Method::GetDomain, &Params { domain })
    }

    /// Lists the domains of the account.
    pub fn list(&self) -> Result<Vec<DomainSummary>, ClientError> {
        #[derive(Deserialize)]
        struct Response {
            domains: Vec<DomainSummary>,
        }

        let resp: Response = self.client.call(Method::ListDomains, &NoParams::default())?;
        Ok(resp.domains)
    }

    /// Searches for registrable domains matching `query`.
    pub fn find(&self, query: &str) -> Result<Vec<DomainOffer>, ClientError> {
        #[derive(Serialize)]
        struct Params<'p> {
            query: &'p str,
        }

        #[derive(Deserialize)]
        struct Response {
            domains: Vec<DomainOffer>,
        }

        let resp: Response = self.client.call(Method::FindDomain, &Params { query })?;
        Ok(resp.domains)
    }

    /// Applies `update` to a domain of the account.
    ///
    /// # Errors
    ///
    /// Will return `NotFound` if the account has no domain with that name.
    pub fn update(&self, update: &DomainUpdate) -> Result<DomainDetails, ClientError> {
        let existing = self.list()?;
        guard::ensure_present(&existing, "domain", &update.domain, |d| {
            d.name == update.domain
        })?;

        self.client.call(Method::EditDomain, update)
    }
}
