//! Error types for endpoint parsing and address lookup.

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::sync::Arc;

//------------ ParseError ----------------------------------------------------

/// An endpoint spec could not be parsed.
///
/// This is the only error the crate ever surfaces to a caller. Everything
/// that goes wrong during resolution is handled by the retry loop and ends
/// up as a liveness signal instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The spec was the empty string.
    EmptySpec,

    /// The host part in front of the port separator was empty.
    EmptyHost,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ParseError::EmptySpec => write!(f, "empty endpoint spec"),
            ParseError::EmptyHost => {
                write!(f, "endpoint spec with empty host")
            }
        }
    }
}

impl error::Error for ParseError {}

//------------ LookupError ---------------------------------------------------

/// A single resolution attempt failed.
///
/// These never reach the caller. They drive the retry loop and appear in
/// the warnings it emits.
#[derive(Clone, Debug)]
pub enum LookupError {
    /// The per-attempt deadline elapsed before the lookup finished.
    TimedOut,

    /// The lookup returned addresses but none of them was IPv4.
    NoIpv4Addr,

    /// The platform resolver reported an error.
    Io(Arc<io::Error>),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            LookupError::TimedOut => write!(f, "lookup timed out"),
            LookupError::NoIpv4Addr => {
                write!(f, "no IPv4 address found")
            }
            LookupError::Io(err) => write!(f, "lookup failed: {}", err),
        }
    }
}

impl error::Error for LookupError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LookupError::TimedOut => None,
            LookupError::NoIpv4Addr => None,
            LookupError::Io(err) => Some(err.as_ref()),
        }
    }
}

//--- From

impl From<io::Error> for LookupError {
    fn from(err: io::Error) -> Self {
        LookupError::Io(Arc::new(err))
    }
}
