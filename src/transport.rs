use reqwest::{StatusCode, header::HeaderMap};
use url::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Performs a single blocking POST round trip.
///
/// Implemented for [reqwest::blocking::Client]; other implementations can
/// stand in for it, e.g. to talk to a mock endpoint.
pub trait Transport {
    fn post(&self, url: &Url, headers: HeaderMap, body: Vec<u8>) -> Result<RawResponse, reqwest::Error>;
}

impl Transport for reqwest::blocking::Client {
    fn post(&self, url: &Url, headers: HeaderMap, body: Vec<u8>) -> Result<RawResponse, reqwest::Error> {
        let resp = reqwest::blocking::Client::post(self, url.clone())
            .headers(headers)
            .body(body)
            .send()?;
        let status = resp.status();
        let body = resp.bytes()?.to_vec();

        Ok(RawResponse { status, body })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, url: &Url, headers: HeaderMap, body: Vec<u8>) -> Result<RawResponse, reqwest::Error> {
        (**self).post(url, headers, body)
    }
}
