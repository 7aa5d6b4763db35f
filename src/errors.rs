use reqwest::{StatusCode, header::InvalidHeaderValue};
use thiserror::Error;

/// Failure to unwrap the `{"result": ...}` envelope of a response.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("malformed response envelope: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("missing result field in response")]
    MissingResult,
    #[error("Njalla API error: {code} - {message}")]
    Remote { code: i64, message: String },
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid API key")]
    InvalidCredential,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Header(#[from] InvalidHeaderValue),
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{prefix}{source}", prefix = status_prefix(.status))]
    Envelope {
        status: Option<StatusCode>,
        #[source]
        source: EnvelopeError,
    },
    #[error("server responded with status code {}", .0.as_u16())]
    Status(StatusCode),
    #[error("failed to decode result: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("{kind} {key} already exists")]
    Conflict { kind: &'static str, key: String },
    #[error("{kind} {key} does not exist")]
    NotFound { kind: &'static str, key: String },
}

fn status_prefix(status: &Option<StatusCode>) -> String {
    status.map_or_else(String::new, |s| {
        format!("server responded with status code {}: ", s.as_u16())
    })
}

impl From<EnvelopeError> for ClientError {
    fn from(source: EnvelopeError) -> Self {
        Self::Envelope {
            status: None,
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
