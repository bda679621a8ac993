//! Line identifier type.

use std::fmt;
use std::sync::Arc;

/// The name of a transit line, attached to every edge it serves.
///
/// Like [`StationId`](super::StationId), this is an opaque key with
/// structural equality and cheap clones. The planner compares consecutive
/// itinerary segments' line ids to find change points.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(Arc<str>);

impl LineId {
    /// Returns the line name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(name: &str) -> Self {
        LineId(Arc::from(name))
    }
}

impl From<String> for LineId {
    fn from(name: String) -> Self {
        LineId(Arc::from(name))
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.as_str())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
