//! Request and response envelopes shared by every API method.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::value::RawValue;
use strum_macros::{Display, IntoStaticStr};

use crate::EnvelopeError;

/// Remote procedures exposed by the Njalla API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Method {
    GetDomain,
    ListDomains,
    FindDomain,
    EditDomain,
    ListRecords,
    AddRecord,
    EditRecord,
    RemoveRecord,
    ListForwards,
    AddForward,
    RemoveForward,
    ListGlue,
    AddGlue,
    EditGlue,
    RemoveGlue,
    ListDnssec,
    AddDnssec,
    RemoveDnssec,
}

impl Method {
    /// Gets the wire name of the method.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Params for methods that take none. Serializes as `{}`.
#[derive(Debug, Default, Serialize)]
pub(crate) struct NoParams {}

#[derive(Serialize)]
struct Request<'a, P> {
    method: &'static str,
    params: &'a P,
}

/// Serializes `{"method": ..., "params": ...}` to bytes.
pub(crate) fn encode<P: Serialize>(method: Method, params: &P) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&Request {
        method: method.as_str(),
        params,
    })
}

/// Extracts the raw `result` of a response body without interpreting it.
///
/// The body must be a JSON object. Its `error` member is only looked at when
/// there is no `result`, and only if it has the `{code, message}` shape.
pub(crate) fn decode(body: &[u8]) -> Result<Box<RawValue>, EnvelopeError> {
    #[derive(Deserialize)]
    struct RemoteError {
        #[serde(default)]
        code: i64,
        #[serde(default)]
        message: String,
    }

    let mut members: HashMap<String, Box<RawValue>> =
        serde_json::from_slice(body).map_err(EnvelopeError::Malformed)?;
    match members.remove("result") {
        Some(result) if result.get() != "null" => Ok(result),
        _ => Err(members
            .get("error")
            .and_then(|error| serde_json::from_str::<RemoteError>(error.get()).ok())
            .map_or(EnvelopeError::MissingResult, |RemoteError { code, message }| {
                EnvelopeError::Remote { code, message }
            })),
    }
}

/// Deserializes an unwrapped `result` into the expected response type.
pub(crate) fn decode_result<T: DeserializeOwned>(result: &RawValue) -> Result<T, serde_json::Error> {
    serde_json::from_str(result.get())
}
