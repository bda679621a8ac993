//! Domain types for the route planner.
//!
//! Station and line identifiers are opaque keys: the planner compares them
//! structurally and never normalizes them. The itinerary types represent a
//! resolved route and guarantee their contiguity invariant at construction
//! time, so code that receives them can trust it.

mod itinerary;
mod line;
mod station;

pub use itinerary::{Itinerary, LineChange, Segment};
pub use line::LineId;
pub use station::StationId;
