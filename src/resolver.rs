//! Resolving endpoints to concrete addresses.

use crate::endpoint::Endpoint;
use crate::error::LookupError;
use crate::lookup::{Lookup, SystemLookup};
use crate::sink::{ReachabilitySink, TracingLog, WarningSink};
use std::net::{IpAddr, Ipv4Addr};
#[cfg(feature = "sync")]
use tokio::runtime;
use tokio::time::{timeout, Duration, Instant};

//------------ Module Configuration ------------------------------------------

/// How many times a failed attempt is retried before giving up.
const MAX_RETRIES: usize = 2;

/// Widening factor from an endpoint's nominal timeout to the per-attempt
/// deadline.
// TODO: remeasure whether the 10x widening is still needed now that slow
// resolver environments run through the blocking pool.
const DEADLINE_FACTOR: u32 = 10;

/// The tag warnings are emitted under.
const WARN_TAG: &str = "resolve";

//------------ Resolver ------------------------------------------------------

/// Resolves endpoints to concrete IPv4 addresses.
///
/// A resolver performs up to three lookup attempts per unresolved endpoint,
/// each bounded by a fresh deadline of ten times the endpoint's timeout.
/// The first IPv4 address a lookup produces wins and is memoized on the
/// endpoint; once all attempts have failed, the endpoint's node is marked
/// down instead of an error being returned.
///
/// The default resolver queries the platform resolver and warns through
/// [`mod@tracing`]. Both collaborators can be replaced with
/// [`with_parts`][Self::with_parts].
#[derive(Clone, Debug, Default)]
pub struct Resolver<L = SystemLookup, W = TracingLog> {
    /// Where addresses come from.
    lookup: L,

    /// Where retry warnings go.
    log: W,
}

impl Resolver {
    /// Creates a resolver atop the platform resolver.
    #[must_use]
    pub fn new() -> Self {
        Resolver::with_parts(SystemLookup, TracingLog)
    }
}

impl<L, W> Resolver<L, W> {
    /// Creates a resolver from its collaborators.
    pub fn with_parts(lookup: L, log: W) -> Self {
        Resolver { lookup, log }
    }
}

impl<L: Lookup, W: WarningSink> Resolver<L, W> {
    /// Resolves `endpoint`, flagging `node` on persistent failure.
    ///
    /// Returns the canonical `"ip:port"` string. A previously resolved
    /// endpoint returns its cached address without any network activity.
    ///
    /// Returns `None` once the retry budget is exhausted. That is not an
    /// error to react to: the node has been told it is down, and a caller
    /// holding several endpoints simply moves on to the next one. There is
    /// no negative cache, so a later call starts over with fresh attempts.
    pub async fn resolve<N: ReachabilitySink>(
        &self,
        endpoint: &Endpoint,
        node: &N,
    ) -> Option<String> {
        if let Some(resolved) = endpoint.resolved() {
            return Some(resolved.into());
        }
        let deadline = endpoint.timeout() * DEADLINE_FACTOR;
        let start = Instant::now();
        let mut retries = 0;
        loop {
            match self.attempt(endpoint.host(), deadline).await {
                Ok(ip) => return Some(endpoint.publish(ip).into()),
                Err(err) => {
                    if retries >= MAX_RETRIES {
                        node.mark_down();
                        return None;
                    }
                    self.log.warn(
                        WARN_TAG,
                        &format!(
                            "could not resolve address for {}: {}, \
                             elapsed {:.3}s, retry {}",
                            endpoint.original(),
                            err,
                            start.elapsed().as_secs_f64(),
                            retries,
                        ),
                        "n/a",
                    );
                    retries += 1;
                }
            }
        }
    }

    /// Runs one deadline-bound lookup for `host`.
    ///
    /// The deadline cancels the in-flight lookup only. The caller owns the
    /// retry budget, so a timed-out attempt counts like any other failure.
    async fn attempt(
        &self,
        host: &str,
        deadline: Duration,
    ) -> Result<Ipv4Addr, LookupError> {
        match timeout(deadline, self.lookup.lookup(host)).await {
            Ok(Ok(addrs)) => addrs
                .into_iter()
                .find_map(|addr| match addr {
                    IpAddr::V4(addr) => Some(addr),
                    IpAddr::V6(_) => None,
                })
                .ok_or(LookupError::NoIpv4Addr),
            Ok(Err(err)) => Err(err.into()),
            Err(_) => Err(LookupError::TimedOut),
        }
    }
}

#[cfg(feature = "sync")]
#[cfg_attr(docsrs, doc(cfg(feature = "sync")))]
impl<L: Lookup, W: WarningSink> Resolver<L, W> {
    /// Resolves `endpoint` from synchronous code.
    ///
    /// Spins up a current-thread runtime and blocks on
    /// [`resolve`][Self::resolve].
    pub fn resolve_blocking<N: ReachabilitySink>(
        &self,
        endpoint: &Endpoint,
        node: &N,
    ) -> Option<String> {
        let runtime = runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(self.resolve(endpoint, node))
    }
}
