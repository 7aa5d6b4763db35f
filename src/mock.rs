//! Transport double for exercising clients without a network.

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;

use reqwest::{StatusCode, header::HeaderMap};
use serde_json::{Value as JsonValue, json};
use url::Url;

use crate::{Client, RawResponse, Transport};

pub(crate) const APIKEY: &str = "0123456789abcdefghij0123456789abcdefghij";

#[derive(Debug)]
pub(crate) struct Recorded {
    pub url: Url,
    pub headers: HeaderMap,
    pub body: JsonValue,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RefCell<VecDeque<RawResponse>>,
    requests: RefCell<Vec<Recorded>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and raw body.
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes().to_vec(),
        });
        self
    }

    /// Queues a 200 response wrapping `result` in an envelope.
    pub(crate) fn ok(self, result: JsonValue) -> Self {
        let body = json!({ "result": result }).to_string();
        self.respond(200, &body)
    }

    pub(crate) fn requests(&self) -> Ref<'_, Vec<Recorded>> {
        self.requests.borrow()
    }

    /// Method names of the recorded requests, in order.
    pub(crate) fn methods(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.body["method"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Params of the `n`th recorded request.
    pub(crate) fn params(&self, n: usize) -> JsonValue {
        self.requests()[n].body["params"].clone()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl Transport for MockTransport {
    fn post(&self, url: &Url, headers: HeaderMap, body: Vec<u8>) -> Result<RawResponse, reqwest::Error> {
        self.requests.borrow_mut().push(Recorded {
            url: url.clone(),
            headers,
            body: serde_json::from_slice(&body).unwrap(),
        });
        let resp = self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("unexpected request");
        Ok(resp)
    }
}

/// A client with a valid key that talks to `mock`.
pub(crate) fn client(mock: &MockTransport) -> Client<&MockTransport> {
    Client::builder()
        .endpoint(&"https://api.test/".parse().unwrap())
        .apikey(APIKEY)
        .build_with_transport(mock)
        .unwrap()
}
