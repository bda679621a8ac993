//! Itinerary types: a resolved route and its derived annotations.

use super::{LineId, StationId};

/// One directed hop of a route: ride `line` from `from` to `to` at `cost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub from: StationId,
    pub to: StationId,
    pub line: LineId,
    pub cost: u32,
}

/// A point where the route switches line, derived from consecutive segments.
///
/// The change happens at `at`, which is the shared station between the
/// segment ridden on `from_line` and the one ridden on `to_line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub at: StationId,
    pub from_line: LineId,
    pub to_line: LineId,
}

/// The resolved lowest-cost route between two stations.
///
/// Immutable after construction. Consecutive segments are contiguous:
/// `segments[i].to == segments[i + 1].from`. An empty itinerary means the
/// start and target were the same station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    segments: Vec<Segment>,
    total_cost: u32,
}

impl Itinerary {
    /// The trivial itinerary for a query where start equals target.
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            total_cost: 0,
        }
    }

    /// Build an itinerary from start-to-target ordered segments.
    ///
    /// The total cost is derived as the sum of segment costs. Callers must
    /// pass a contiguous sequence (each segment starts where the previous
    /// one ended).
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(
            segments.windows(2).all(|pair| pair[0].to == pair[1].from),
            "segments must be contiguous"
        );
        let total_cost = segments.iter().map(|s| s.cost).sum();
        Self {
            segments,
            total_cost,
        }
    }

    /// The segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of all segment costs.
    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    /// True for the start-equals-target itinerary.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The first station of the route, if any segment exists.
    pub fn origin(&self) -> Option<&StationId> {
        self.segments.first().map(|s| &s.from)
    }

    /// The last station of the route, if any segment exists.
    pub fn destination(&self) -> Option<&StationId> {
        self.segments.last().map(|s| &s.to)
    }

    /// Where the route switches line.
    ///
    /// Derived on demand by scanning consecutive segments; nothing about
    /// changes is stored in the itinerary itself.
    pub fn changes(&self) -> Vec<LineChange> {
        self.segments
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .map(|pair| LineChange {
                at: pair[1].from.clone(),
                from_line: pair[0].line.clone(),
                to_line: pair[1].line.clone(),
            })
            .collect()
    }
}
