//! Route planner: lowest-cost path search over the network.
//!
//! This module implements the core routing algorithm that answers:
//! "what is the cheapest route from this station to that one?"
//!
//! The search is Dijkstra's algorithm over the network's non-negative edge
//! costs, followed by reconstruction of the winning path into an
//! [`Itinerary`](crate::domain::Itinerary). Each query owns its working
//! state, so queries against a shared network can run concurrently.

mod search;

pub use search::{PathError, SearchObserver, find_route, find_route_observed};
