//! Plain-text itinerary rendering.
//!
//! A pure function of the itinerary; the planner itself never prints.
//! Consumed by the web layer's plain-text fallback and handy in tests.

use std::fmt::Write;

use crate::domain::Itinerary;

/// Render an itinerary as a console-style listing: one `Take line` row per
/// segment, a `Change at` row wherever the line switches, and the total.
///
/// An empty itinerary (start equals target) renders as a zero-cost
/// "no travel" note; it is a success, distinct from the no-route case,
/// which is an error the caller reports.
pub fn render_text(itinerary: &Itinerary) -> String {
    let mut out = String::new();

    if itinerary.is_empty() {
        out.push_str("No travel required.\n");
        out.push_str("Total cost: 0\n");
        return out;
    }

    let mut prev_line = None;
    for segment in itinerary.segments() {
        if prev_line.is_some_and(|prev| prev != &segment.line) {
            let _ = writeln!(out, "Change at {} to line {}", segment.from, segment.line);
        }
        let _ = writeln!(
            out,
            "Take line {} from {} to {} (cost: {})",
            segment.line, segment.from, segment.to, segment.cost
        );
        prev_line = Some(&segment.line);
    }
    let _ = writeln!(out, "Total cost: {}", itinerary.total_cost());

    out
}
