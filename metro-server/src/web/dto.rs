//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, LineChange, Segment};

/// Query parameters for a route request.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name (exact match, no normalization)
    pub from: String,

    /// Destination station name (exact match, no normalization)
    pub to: String,
}

/// One hop of a planned route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Origin station
    pub from: String,

    /// Destination station
    pub to: String,

    /// Line serving this hop
    pub line: String,

    /// Cost of this hop
    pub cost: u32,
}

/// A line change along a planned route.
#[derive(Debug, Serialize)]
pub struct ChangeResult {
    /// Station where the change happens
    pub at: String,

    /// Line ridden into the station
    pub from_line: String,

    /// Line ridden out of the station
    pub to_line: String,
}

/// Response for a successful route request.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Requested origin
    pub from: String,

    /// Requested destination
    pub to: String,

    /// Hops in travel order; empty when origin equals destination
    pub segments: Vec<SegmentResult>,

    /// Line changes, derived from the segments
    pub changes: Vec<ChangeResult>,

    /// Sum of segment costs
    pub total_cost: u32,
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// All known stations, sorted by name
    pub stations: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&Segment> for SegmentResult {
    fn from(segment: &Segment) -> Self {
        Self {
            from: segment.from.as_str().to_string(),
            to: segment.to.as_str().to_string(),
            line: segment.line.as_str().to_string(),
            cost: segment.cost,
        }
    }
}

impl From<&LineChange> for ChangeResult {
    fn from(change: &LineChange) -> Self {
        Self {
            at: change.at.as_str().to_string(),
            from_line: change.from_line.as_str().to_string(),
            to_line: change.to_line.as_str().to_string(),
        }
    }
}

impl RouteResponse {
    /// Build the response for a resolved itinerary.
    pub fn from_itinerary(from: &str, to: &str, itinerary: &Itinerary) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            segments: itinerary.segments().iter().map(SegmentResult::from).collect(),
            changes: itinerary.changes().iter().map(ChangeResult::from).collect(),
            total_cost: itinerary.total_cost(),
        }
    }
}
