use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub mod http;

/// Why a fetch failed. Callers branch on this to tell a missed deadline
/// apart from a broken network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// DNS, connect, or TLS failed before any response arrived. Also used
    /// for URLs that never parse, where no request is attempted at all.
    Network,
    /// The configured deadline expired before status and body were in.
    Timeout,
    /// A status line and headers arrived, but the body transfer broke.
    Read,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timed out"),
            FailureKind::Read => write!(f, "body read error"),
        }
    }
}

/// A completed GET: status code, full body, and how long the round trip took.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub status: u16,
    pub body: Vec<u8>,
    pub elapsed: Duration,
}

/// A failed GET. `elapsed` is how long the attempt ran before giving up;
/// `detail` is displayable as-is.
#[derive(Debug, Error)]
#[error("{kind} after {elapsed:?}: {detail}")]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub elapsed: Duration,
    pub detail: String,
}
