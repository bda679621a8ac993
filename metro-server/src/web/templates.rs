//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Itinerary;

/// Home page with the route search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Stations for the form's datalist, sorted by name.
    pub stations: Vec<String>,
}

/// Route results page.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub from: String,
    pub to: String,

    /// False when no route exists between the two stations.
    pub found: bool,

    /// Rendered rows in travel order; empty when `from == to`.
    pub steps: Vec<StepView>,
    pub total_cost: u32,
}

/// One rendered hop of the itinerary.
#[derive(Debug, Clone)]
pub struct StepView {
    /// Set when the rider changes to this hop's line at `from`.
    pub change_to: Option<String>,
    pub line: String,
    pub from: String,
    pub to: String,
    pub cost: u32,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

impl ItineraryTemplate {
    /// View of a resolved itinerary.
    pub fn from_itinerary(from: &str, to: &str, itinerary: &Itinerary) -> Self {
        let mut steps = Vec::with_capacity(itinerary.len());
        let mut prev_line = None;
        for segment in itinerary.segments() {
            let change_to = prev_line
                .is_some_and(|prev| prev != &segment.line)
                .then(|| segment.line.as_str().to_string());
            steps.push(StepView {
                change_to,
                line: segment.line.as_str().to_string(),
                from: segment.from.as_str().to_string(),
                to: segment.to.as_str().to_string(),
                cost: segment.cost,
            });
            prev_line = Some(&segment.line);
        }
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            steps,
            total_cost: itinerary.total_cost(),
        }
    }

    /// View for a pair of stations with no route between them.
    pub fn no_route(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            steps: Vec::new(),
            total_cost: 0,
        }
    }
}
