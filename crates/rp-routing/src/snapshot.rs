//! Rebuild-then-swap holder for the current graph.
//!
//! Requests take an `Arc<RouteGraph>` with [`GraphSnapshot::current`] and
//! run against it to completion.  A traffic refresh builds a whole new graph
//! and [`replace`](GraphSnapshot::replace)s the pointer; graphs already handed
//! out are untouched, so no request ever sees weights change under it.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::graph::RouteGraph;

pub struct GraphSnapshot {
    current: RwLock<Arc<RouteGraph>>,
}

impl GraphSnapshot {
    pub fn new(graph: RouteGraph) -> Self {
        Self { current: RwLock::new(Arc::new(graph)) }
    }

    /// The graph new requests should use.
    pub fn current(&self) -> Arc<RouteGraph> {
        // The lock only guards a pointer swap; a panicked writer cannot
        // leave it half-written.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Install `graph` for subsequent requests and return the previous one.
    pub fn replace(&self, graph: RouteGraph) -> Arc<RouteGraph> {
        let next = Arc::new(graph);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!(nodes = next.node_count(), edges = next.edge_count(), "swapped route graph");
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for GraphSnapshot {
    fn default() -> Self {
        Self::new(RouteGraph::empty())
    }
}
