//! The in-memory transit network.
//!
//! A weighted directed multigraph: each station maps to its outgoing edges
//! in insertion order. Parallel edges between the same pair of stations are
//! allowed (different lines, or the same line entered twice).
//!
//! The network is built once by ingestion and is immutable afterwards, so
//! the planner can borrow it for any number of concurrent queries.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{LineId, StationId};

/// A directed connection leaving a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Line serving this connection.
    pub line: LineId,

    /// Destination station.
    pub to: StationId,

    /// Travel cost. Non-negative by construction (unsigned), which the
    /// planner's relaxation step relies on.
    pub cost: u32,
}

/// The transit network.
///
/// A station with no outgoing edges (a terminus) need not appear as a key
/// at all; [`Network::outgoing`] treats an absent station and a present
/// station with an empty edge list identically.
#[derive(Debug, Clone, Default)]
pub struct Network {
    edges: HashMap<StationId, Vec<Edge>>,
}

impl Network {
    /// The outgoing edges of `station`, in insertion order.
    ///
    /// Returns an empty slice for unknown stations; this is never an error.
    pub fn outgoing(&self, station: &StationId) -> &[Edge] {
        self.edges.get(station).map_or(&[], Vec::as_slice)
    }

    /// Every station mentioned anywhere in the network, as either origin or
    /// destination, deduplicated and sorted by name.
    pub fn stations(&self) -> Vec<StationId> {
        let mut all: BTreeSet<StationId> = BTreeSet::new();
        for (origin, edges) in &self.edges {
            all.insert(origin.clone());
            for edge in edges {
                all.insert(edge.to.clone());
            }
        }
        all.into_iter().collect()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// True if the network has no edges at all.
    pub fn is_empty(&self) -> bool {
        self.edges.values().all(Vec::is_empty)
    }
}

/// Builder used by ingestion to populate a [`Network`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one directed edge from `from` to `to`, served by `line`.
    pub fn add_edge(&mut self, from: StationId, line: LineId, to: StationId, cost: u32) {
        self.inner
            .edges
            .entry(from)
            .or_default()
            .push(Edge { line, to, cost });
    }

    /// Finish building; the network is immutable from here on.
    pub fn build(self) -> Network {
        self.inner
    }
}
