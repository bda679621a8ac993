//! Station identifier type.

use std::fmt;
use std::sync::Arc;

/// An opaque station name used as a graph key.
///
/// Station ids compare and hash structurally: `"Epping"` and `"epping"` are
/// different stations, and surrounding whitespace is significant. No
/// normalization happens here; ingestion passes names through verbatim.
///
/// The name is held in a shared string, so cloning an id into the planner's
/// per-query working maps is a refcount bump rather than a copy.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let epping = StationId::from("Epping");
/// assert_eq!(epping.as_str(), "Epping");
/// assert_ne!(epping, StationId::from("epping"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(Arc<str>);

impl StationId {
    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(name: &str) -> Self {
        StationId(Arc::from(name))
    }
}

impl From<String> for StationId {
    fn from(name: String) -> Self {
        StationId(Arc::from(name))
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
