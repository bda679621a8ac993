//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// The network is published once at startup and never mutated, so handlers
/// may query it concurrently without locking; every query owns its own
/// working state inside the planner.
#[derive(Clone)]
pub struct AppState {
    /// The transit network loaded at startup.
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
