use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{
    StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned, de::IgnoredAny};
use serde_json::value::RawValue;
use tracing::{debug, trace};
use url::Url;

use crate::dnssec::DnssecClient;
use crate::domain::DomainClient;
use crate::envelope::{self, Method};
use crate::forward::ForwardClient;
use crate::glue::GlueClient;
use crate::record::RecordClient;
use crate::{ClientBuilderError, ClientError, Transport};

/// Endpoint used when none is given to the builder.
pub const DEFAULT_ENDPOINT: &str = "https://njal.la/api/1/";

/// User agent sent by every client, prefixed by the application if one is set.
pub const BASE_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const AUTHORIZATION_SCHEME: &str = "Njalla";

lazy_static! {
    static ref APIKEY_RE: Regex = Regex::new(r"^[a-z0-9]{40}$").unwrap();
}

/// Checks that the given API key is 40 lowercase alphanumeric characters.
pub fn is_valid_apikey(apikey: &str) -> bool {
    APIKEY_RE.is_match(apikey)
}

/// Builds the user agent for the given application name and version.
///
/// Empty strings count as unset. A version without a name is ignored.
pub fn user_agent(name: &str, version: &str) -> String {
    match (name, version) {
        ("", _) => BASE_USER_AGENT.to_string(),
        (name, "") => format!("{name} {BASE_USER_AGENT}"),
        (name, version) => format!("{name}/{version} {BASE_USER_AGENT}"),
    }
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    apikey: Option<String>,
    app_name: String,
    app_version: String,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            apikey: None,
            app_name: String::new(),
            app_version: String::new(),
        }
    }

    /// Sets the API endpoint to the one given.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the API key to the one given.
    ///
    /// The key is not rejected here. A key that isn't 40 lowercase
    /// alphanumeric characters makes every call of the built client fail
    /// with `InvalidCredential`.
    pub fn apikey(mut self, apikey: &str) -> Self {
        self.apikey = Some(apikey.to_string());
        self
    }

    /// Sets the application name and version reported in the user agent.
    pub fn application(mut self, name: &str, version: &str) -> Self {
        self.app_name = name.to_string();
        self.app_version = version.to_string();
        self
    }

    /// Builds a [Client] using a blocking [reqwest] client as transport.
    ///
    /// In the case that no API endpoint is set, [DEFAULT_ENDPOINT] is used.
    ///
    /// # Errors
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        self.build_with_transport(reqwest::blocking::Client::new())
    }

    /// Builds a [Client] that sends its requests through `transport`.
    pub fn build_with_transport<T: Transport>(
        self,
        transport: T,
    ) -> Result<Client<T>, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let apikey_valid = self.apikey.as_deref().is_none_or(is_valid_apikey);

        Ok(Client {
            endpoint,
            apikey: self.apikey,
            apikey_valid,
            user_agent: user_agent(&self.app_name, &self.app_version),
            transport,
        })
    }
}

/// API client.
///
/// Immutable once built. The resource clients returned by [Client::domain],
/// [Client::record], [Client::forward], [Client::glue] and [Client::dnssec]
/// borrow it.
pub struct Client<T = reqwest::blocking::Client> {
    endpoint: Url,
    apikey: Option<String>,
    apikey_valid: bool,
    user_agent: String,
    transport: T,
}

impl Client {
    /// Creates a new Client with the default transport.
    pub fn new(endpoint: &Url, apikey: &str) -> Self {
        Self {
            endpoint: endpoint.clone(),
            apikey: Some(apikey.to_string()),
            apikey_valid: is_valid_apikey(apikey),
            user_agent: BASE_USER_AGENT.to_string(),
            transport: reqwest::blocking::Client::new(),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> Client<T> {
    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the user agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns a client for the domains of the account.
    pub fn domain(&self) -> DomainClient<'_, T> {
        DomainClient::new(self)
    }

    /// Returns a client for DNS records.
    pub fn record(&self) -> RecordClient<'_, T> {
        RecordClient::new(self)
    }

    /// Returns a client for mail forwards.
    pub fn forward(&self) -> ForwardClient<'_, T> {
        ForwardClient::new(self)
    }

    /// Returns a client for glue records.
    pub fn glue(&self) -> GlueClient<'_, T> {
        GlueClient::new(self)
    }

    /// Returns a client for DNSSEC entries.
    pub fn dnssec(&self) -> DnssecClient<'_, T> {
        DnssecClient::new(self)
    }

    /// Headers for a request carrying `body`.
    fn headers(&self, body: &[u8]) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        if let Some(apikey) = self.apikey.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("{AUTHORIZATION_SCHEME} {apikey}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        if !body.is_empty() {
            let json = HeaderValue::from_static("application/json");
            headers.insert(ACCEPT, json.clone());
            headers.insert(CONTENT_TYPE, json);
        }
        Ok(headers)
    }

    /// Sends an encoded request and unwraps the envelope of the response.
    ///
    /// The body is decoded even if the status isn't 200. An envelope error
    /// takes precedence over the status and carries it along.
    fn send(&self, body: Vec<u8>) -> Result<Box<RawValue>, ClientError> {
        if !self.apikey_valid {
            return Err(ClientError::InvalidCredential);
        }

        let headers = self.headers(&body)?;
        let resp = self.transport.post(&self.endpoint, headers, body)?;
        trace!(status = %resp.status, "received response");

        let status = (resp.status != StatusCode::OK).then_some(resp.status);
        let result = envelope::decode(&resp.body)
            .map_err(|source| ClientError::Envelope { status, source })?;
        if let Some(status) = status {
            return Err(ClientError::Status(status));
        }
        Ok(result)
    }

    /// Calls `method` with `params` and decodes the result into `R`.
    pub(crate) fn call<P, R>(&self, method: Method, params: &P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        debug!(%method, "sending request");
        let body = envelope::encode(method, params).map_err(ClientError::Encode)?;
        let result = self.send(body)?;
        envelope::decode_result(&result).map_err(ClientError::Decode)
    }

    /// Calls `method` with `params`, ignoring the content of the result.
    pub(crate) fn execute<P: Serialize>(&self, method: Method, params: &P) -> Result<(), ClientError> {
        self.call::<P, IgnoredAny>(method, params).map(|_| ())
    }
}
