//! Cluster endpoint address resolution.
//!
//! This crate resolves a user-supplied `host:port` endpoint string to a
//! concrete, cached IPv4 address. Transient DNS failures are absorbed by a
//! bounded retry loop with a per-attempt deadline; persistent failure is
//! reported to a cluster-health collaborator rather than raised, so a
//! caller juggling several endpoints keeps running against the ones that
//! still resolve.
//!
//! The crate does not speak the DNS protocol itself. Lookups are delegated
//! to the platform resolver through [`tokio::net::lookup_host`], and only
//! IPv4 results are accepted.
//!
//! # Usage
//!
//! Parse an [`Endpoint`] from its spec, then hand it to a [`Resolver`]
//! together with the node tracking its reachability:
//!
//! ```
//! use endpoint_resolv::{Endpoint, ReachabilitySink, Resolver};
//! use std::time::Duration;
//!
//! struct Node;
//!
//! impl ReachabilitySink for Node {
//!     fn mark_down(&self) {
//!         // take the node out of rotation
//!     }
//! }
//!
//! # async fn example() {
//! let endpoint =
//!     Endpoint::new("db.example.com:27017", Duration::from_secs(5))
//!         .unwrap();
//! let resolver = Resolver::new();
//! if let Some(addr) = resolver.resolve(&endpoint, &Node).await {
//!     // connect to addr, e.g. "192.0.2.17:27017"
//! }
//! # }
//! ```
//!
//! Resolution is memoized: once an endpoint has resolved, later calls
//! return the cached `"ip:port"` string without touching the network.
//!
//! With the `sync` feature enabled,
//! [`Resolver::resolve_blocking`][crate::Resolver] offers the same
//! operation to synchronous callers.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::endpoint::{Endpoint, DEFAULT_PORT};
pub use self::error::{LookupError, ParseError};
pub use self::lookup::{Lookup, SystemLookup};
pub use self::resolver::Resolver;
pub use self::sink::{ReachabilitySink, TracingLog, WarningSink};

pub mod endpoint;
pub mod error;
pub mod lookup;
pub mod resolver;
pub mod sink;
