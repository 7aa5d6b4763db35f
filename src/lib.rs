//! # Simple and type-safe client for the Njalla API.
//!
//! Implements a blocking client for the JSON-RPC style [Njalla API], with
//! one sub-client per resource: domains, DNS records, mail forwards, glue
//! records and DNSSEC entries.
//!
//! Mutations that need an entry to exist (or not to exist) first list the
//! current collection and fail with [ClientError::NotFound] or
//! [ClientError::Conflict] without sending the mutation. The check and the
//! mutation are separate requests, so a concurrent change made elsewhere can
//! slip between them.
//!
//! ## Examples
//!
//! ```no_run
//! use njalla::Client;
//! use njalla::record::{NewRecord, Type};
//!
//! let client = Client::builder()
//!     .apikey("<APIKEY>")
//!     .application("my-ddns", "1.0")
//!     .build()
//!     .unwrap();
//!
//! let record = client
//!     .record()
//!     .create(&NewRecord::new("example.com", Type::A, "www").content("192.0.2.1"))
//!     .unwrap();
//! println!("created record {}", record.id);
//! ```
//!
//! [Njalla API]: https://njal.la/api/

mod client;
pub mod dnssec;
pub mod domain;
mod envelope;
mod errors;
pub mod forward;
pub mod glue;
mod guard;
#[cfg(test)]
mod mock;
pub mod record;
mod transport;
mod utils;

pub use client::*;
pub use envelope::Method;
pub use errors::*;
pub use transport::*;
