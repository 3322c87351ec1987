//! The seam to the platform resolver.

use std::future::Future;
use std::io;
use std::net::IpAddr;
use std::pin::Pin;

//------------ Lookup --------------------------------------------------------

/// A source of addresses for a host name.
///
/// The production implementation is [`SystemLookup`]. The resolver only
/// ever sees this trait, so tests can substitute a scripted lookup and
/// drive the retry loop deterministically.
pub trait Lookup {
    /// Returns all addresses of `host`, in the order the resolver gave them.
    fn lookup<'a>(
        &'a self,
        host: &'a str,
    ) -> Pin<
        Box<dyn Future<Output = Result<Vec<IpAddr>, io::Error>> + Send + 'a>,
    >;
}

//------------ SystemLookup --------------------------------------------------

/// Host lookup through the platform resolver.
///
/// Delegates to [`tokio::net::lookup_host`], i.e. `getaddrinfo` on the
/// blocking pool. The port handed along is a placeholder; only the
/// addresses are kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLookup;

impl Lookup for SystemLookup {
    fn lookup<'a>(
        &'a self,
        host: &'a str,
    ) -> Pin<
        Box<dyn Future<Output = Result<Vec<IpAddr>, io::Error>> + Send + 'a>,
    > {
        Box::pin(async move {
            let addrs = tokio::net::lookup_host((host, 0)).await?;
            Ok(addrs.map(|addr| addr.ip()).collect())
        })
    }
}
