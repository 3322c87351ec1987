//! Endpoint specifications and their resolved addresses.
//!
//! An [`Endpoint`] is parsed once from a `host:port` string and afterwards
//! only ever mutated by the one-shot publication of its resolution result.
//! Parsing performs no I/O; resolving is the job of
//! [`Resolver`][crate::Resolver].

use crate::error::ParseError;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::OnceLock;
use std::time::Duration;

//------------ Module Configuration ------------------------------------------

/// The port assumed when a spec does not name one.
pub const DEFAULT_PORT: u16 = 27017;

//------------ Endpoint ------------------------------------------------------

/// A host:port specification plus its resolved address, once known.
///
/// The spec is split on the first `:`. A missing, empty, or unparseable
/// port segment falls back to [`DEFAULT_PORT`] rather than failing; only an
/// empty spec or an empty host is rejected.
///
/// The timeout is the nominal per-operation timeout for this endpoint. The
/// resolver widens it into the per-attempt deadline.
#[derive(Debug)]
pub struct Endpoint {
    /// The spec exactly as given, kept for warnings.
    original: String,

    /// The host part of the spec.
    host: String,

    /// The port part of the spec or the default.
    port: u16,

    /// The nominal timeout configured for this endpoint.
    timeout: Duration,

    /// The memoized resolution result.
    ///
    /// Written at most once. The ip and the canonical string are published
    /// together so no reader can observe one without the other.
    resolved: OnceLock<Resolved>,
}

impl Endpoint {
    /// Creates an endpoint from a `host` or `host:port` spec.
    pub fn new(
        spec: &str,
        timeout: Duration,
    ) -> Result<Endpoint, ParseError> {
        if spec.is_empty() {
            return Err(ParseError::EmptySpec);
        }
        let (host, port) = match spec.split_once(':') {
            Some((host, port)) => {
                (host, port.parse().unwrap_or(DEFAULT_PORT))
            }
            None => (spec, DEFAULT_PORT),
        };
        if host.is_empty() {
            return Err(ParseError::EmptyHost);
        }
        Ok(Endpoint {
            original: spec.into(),
            host: host.into(),
            port,
            timeout,
            resolved: OnceLock::new(),
        })
    }

    /// Returns the spec the endpoint was created from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the host part of the spec.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port of the endpoint.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the nominal timeout configured for this endpoint.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the resolved IPv4 address if resolution has succeeded.
    pub fn ip(&self) -> Option<Ipv4Addr> {
        self.resolved.get().map(|resolved| resolved.ip)
    }

    /// Returns the resolved `"ip:port"` string if resolution has succeeded.
    pub fn resolved(&self) -> Option<&str> {
        self.resolved.get().map(|resolved| resolved.addr.as_str())
    }

    /// Publishes a resolution result, returning the canonical address.
    ///
    /// The first publication wins. A concurrent resolver that raced to a
    /// different address gets the already published one back.
    pub(crate) fn publish(&self, ip: Ipv4Addr) -> &str {
        let resolved = self.resolved.get_or_init(|| Resolved {
            ip,
            addr: format!("{}:{}", ip, self.port),
        });
        &resolved.addr
    }
}

//--- Display

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

//------------ Resolved ------------------------------------------------------

/// A successfully resolved address.
#[derive(Clone, Debug)]
struct Resolved {
    /// The first IPv4 address the lookup produced.
    ip: Ipv4Addr,

    /// The canonical `"ip:port"` form.
    addr: String,
}

//============ Testing =======================================================
