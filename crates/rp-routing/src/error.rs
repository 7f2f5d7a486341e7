//! Routing-subsystem error type.
//!
//! "No route" is not an error here: an unknown or unreachable endpoint is an
//! ordinary search outcome (empty path, infinite distance).  Errors are kept
//! for malformed input and for broken invariants.

use thiserror::Error;

use rp_core::{CoreError, NodeId};

/// Errors produced by `rp-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("edge {u}-{v} has invalid weight {weight}: expected finite and >= 0")]
    InvalidWeight { u: NodeId, v: NodeId, weight: f64 },

    /// A path handed to the metrics has a consecutive pair that is not an
    /// edge of the graph.  Paths from the router or the alternative finder
    /// never trigger this; a hand-built path can.
    #[error("broken path: no edge between {from} and {to}")]
    BrokenPath { from: NodeId, to: NodeId },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
