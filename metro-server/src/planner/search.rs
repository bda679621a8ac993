//! Dijkstra search and itinerary reconstruction.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::{Itinerary, LineId, Segment, StationId};
use crate::network::Network;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// No route exists from `from` to `to`.
    ///
    /// This is a normal query outcome, not a defect: it also covers a start
    /// station the network has never heard of (nothing is reachable from
    /// it, so nothing is found).
    #[error("no route from {from} to {to}")]
    Unreachable { from: StationId, to: StationId },

    /// The predecessor chain was inconsistent during reconstruction.
    ///
    /// A correct search never produces this state; it is detected and
    /// surfaced so a corrupted chain cannot send reconstruction into an
    /// endless walk.
    #[error("predecessor chain broken at {at}")]
    BrokenChain { at: StationId },
}

/// Observer invoked as the search improves its best-known costs.
///
/// The search itself performs no logging or output; callers that want
/// diagnostics wire this to `tracing` or a test probe. Implemented for
/// plain closures.
pub trait SearchObserver {
    /// `station`'s best-known cost improved to `cost`, reached via `line`.
    fn relaxed(&mut self, station: &StationId, cost: u32, line: &LineId);
}

impl<F: FnMut(&StationId, u32, &LineId)> SearchObserver for F {
    fn relaxed(&mut self, station: &StationId, cost: u32, line: &LineId) {
        self(station, cost, line);
    }
}

/// Frontier entry: the best-known cost of `station` at push time, plus an
/// insertion sequence number so equal costs pop in push order. The sequence
/// number makes extraction deterministic for a fixed input.
#[derive(Clone, PartialEq, Eq)]
struct FrontierEntry {
    cost: u32,
    seq: u64,
    station: StationId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both keys to pop the cheapest,
        // oldest entry first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How a station's best-known cost was reached: the predecessor station,
/// the line ridden, and that edge's own cost.
struct PrevLink {
    from: StationId,
    line: LineId,
    cost: u32,
}

/// Find the lowest-cost route from `start` to `target`.
///
/// Equal-cost alternatives resolve deterministically, so repeated queries
/// over the same network return the same itinerary.
pub fn find_route(
    network: &Network,
    start: &StationId,
    target: &StationId,
) -> Result<Itinerary, PathError> {
    find_route_observed(network, start, target, |_: &StationId, _: u32, _: &LineId| {})
}

/// [`find_route`] with a relaxation observer for search diagnostics.
pub fn find_route_observed(
    network: &Network,
    start: &StationId,
    target: &StationId,
    mut observer: impl SearchObserver,
) -> Result<Itinerary, PathError> {
    // Start equals target is a success with nothing to ride, even when the
    // station is entirely unknown to the network.
    if start == target {
        return Ok(Itinerary::empty());
    }

    // Per-query working state; discarded at return.
    let mut dist: HashMap<StationId, u32> = HashMap::new();
    let mut prev: HashMap<StationId, PrevLink> = HashMap::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq = 0u64;

    dist.insert(start.clone(), 0);
    frontier.push(FrontierEntry {
        cost: 0,
        seq,
        station: start.clone(),
    });

    while let Some(FrontierEntry { cost, station, .. }) = frontier.pop() {
        // With non-negative costs the first pop of the target is final.
        if &station == target {
            break;
        }

        // Stale entry: a cheaper path to this station was pushed after it.
        if dist.get(&station).is_some_and(|&best| cost > best) {
            continue;
        }

        // A station absent from the network is a sink with no outgoing
        // edges; `outgoing` yields an empty slice and the search moves on.
        for edge in network.outgoing(&station) {
            let candidate = cost + edge.cost;
            let improved = match dist.entry(edge.to.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(candidate);
                    true
                }
                Entry::Occupied(mut entry) => {
                    if candidate < *entry.get() {
                        *entry.get_mut() = candidate;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                observer.relaxed(&edge.to, candidate, &edge.line);
                prev.insert(
                    edge.to.clone(),
                    PrevLink {
                        from: station.clone(),
                        line: edge.line.clone(),
                        cost: edge.cost,
                    },
                );
                seq += 1;
                frontier.push(FrontierEntry {
                    cost: candidate,
                    seq,
                    station: edge.to.clone(),
                });
            }
        }
    }

    // The target's distance is final whether the loop broke on popping it
    // or the frontier drained first.
    if !dist.contains_key(target) {
        return Err(PathError::Unreachable {
            from: start.clone(),
            to: target.clone(),
        });
    }

    reconstruct(&prev, start, target)
}

/// Walk predecessor links backward from `target` to `start` and reverse the
/// collected segments into travel order.
fn reconstruct(
    prev: &HashMap<StationId, PrevLink>,
    start: &StationId,
    target: &StationId,
) -> Result<Itinerary, PathError> {
    let mut segments = Vec::new();
    let mut current = target.clone();

    // A valid chain consumes each link at most once, so any walk longer
    // than the link count means the map contains a cycle.
    for _ in 0..=prev.len() {
        if &current == start {
            segments.reverse();
            return Ok(Itinerary::from_segments(segments));
        }

        let Some(link) = prev.get(&current) else {
            return Err(PathError::BrokenChain { at: current });
        };

        segments.push(Segment {
            from: link.from.clone(),
            to: current,
            line: link.line.clone(),
            cost: link.cost,
        });
        current = link.from.clone();
    }

    Err(PathError::BrokenChain { at: current })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn station(name: &str) -> StationId {
        StationId::from(name)
    }

    fn line(name: &str) -> LineId {
        LineId::from(name)
    }

    fn build(edges: &[(&str, &str, &str, u32)]) -> Network {
        let mut builder = NetworkBuilder::new();
        for &(from, via, to, cost) in edges {
            builder.add_edge(station(from), line(via), station(to), cost);
        }
        builder.build()
    }

    #[test]
    fn start_equals_target_is_trivially_empty() {
        let network = build(&[("A", "lineX", "B", 4)]);
        let itinerary = find_route(&network, &station("A"), &station("A")).unwrap();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.total_cost(), 0);
    }

    #[test]
    fn start_equals_target_for_unknown_station() {
        let network = build(&[("A", "lineX", "B", 4)]);
        let itinerary = find_route(&network, &station("Nowhere"), &station("Nowhere")).unwrap();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.total_cost(), 0);
    }

    #[test]
    fn cheaper_two_hop_route_beats_direct_edge() {
        // Concrete scenario: the 4+3 route via B must win over the direct
        // 10-cost edge.
        let network = build(&[
            ("A", "lineX", "B", 4),
            ("B", "lineX", "C", 3),
            ("A", "lineY", "C", 10),
        ]);
        let itinerary = find_route(&network, &station("A"), &station("C")).unwrap();

        assert_eq!(itinerary.total_cost(), 7);
        assert_eq!(
            itinerary.segments(),
            &[
                Segment {
                    from: station("A"),
                    to: station("B"),
                    line: line("lineX"),
                    cost: 4,
                },
                Segment {
                    from: station("B"),
                    to: station("C"),
                    line: line("lineX"),
                    cost: 3,
                },
            ]
        );
        assert!(itinerary.changes().is_empty());
    }

    #[test]
    fn single_change_is_reported_at_shared_station() {
        let network = build(&[("A", "line1", "B", 5), ("B", "line2", "C", 2)]);
        let itinerary = find_route(&network, &station("A"), &station("C")).unwrap();

        assert_eq!(itinerary.total_cost(), 7);
        let changes = itinerary.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].at, station("B"));
        assert_eq!(changes[0].from_line, line("line1"));
        assert_eq!(changes[0].to_line, line("line2"));
    }

    #[test]
    fn unreachable_target_is_an_error() {
        // D is isolated: no edges in or out.
        let network = build(&[("A", "lineX", "B", 4), ("D", "lineZ", "E", 1)]);
        let result = find_route(&network, &station("A"), &station("D"));
        assert_eq!(
            result,
            Err(PathError::Unreachable {
                from: station("A"),
                to: station("D"),
            })
        );
    }

    #[test]
    fn unknown_start_is_unreachable_not_a_crash() {
        let network = build(&[("A", "lineX", "B", 4)]);
        let result = find_route(&network, &station("Nowhere"), &station("B"));
        assert!(matches!(result, Err(PathError::Unreachable { .. })));
    }

    #[test]
    fn sink_destination_does_not_abort_the_search() {
        // B has no outgoing edges and no key in the map, but the search
        // must still find the route around it.
        let network = build(&[
            ("A", "lineX", "B", 1),
            ("A", "lineY", "C", 5),
            ("C", "lineY", "D", 1),
        ]);
        let itinerary = find_route(&network, &station("A"), &station("D")).unwrap();
        assert_eq!(itinerary.total_cost(), 6);
    }

    #[test]
    fn parallel_edges_pick_the_cheaper() {
        let network = build(&[("A", "lineX", "B", 9), ("A", "lineY", "B", 2)]);
        let itinerary = find_route(&network, &station("A"), &station("B")).unwrap();
        assert_eq!(itinerary.total_cost(), 2);
        assert_eq!(itinerary.segments()[0].line, line("lineY"));
    }

    #[test]
    fn zero_cost_edges_are_traversed() {
        let network = build(&[("A", "lineX", "B", 0), ("B", "lineX", "C", 0)]);
        let itinerary = find_route(&network, &station("A"), &station("C")).unwrap();
        assert_eq!(itinerary.total_cost(), 0);
        assert_eq!(itinerary.len(), 2);
    }

    #[test]
    fn equal_cost_tie_breaks_by_insertion_order() {
        // Two distinct 5-cost routes A->C; the one relaxed first (via B,
        // pushed before via D) must win, and keep winning.
        let network = build(&[
            ("A", "line1", "B", 2),
            ("A", "line2", "D", 2),
            ("B", "line1", "C", 3),
            ("D", "line2", "C", 3),
        ]);
        let first = find_route(&network, &station("A"), &station("C")).unwrap();
        assert_eq!(first.total_cost(), 5);
        assert_eq!(first.segments()[0].to, station("B"));

        for _ in 0..10 {
            let again = find_route(&network, &station("A"), &station("C")).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn segments_are_contiguous() {
        let network = build(&[
            ("A", "line1", "B", 1),
            ("B", "line2", "C", 1),
            ("C", "line3", "D", 1),
        ]);
        let itinerary = find_route(&network, &station("A"), &station("D")).unwrap();

        assert_eq!(itinerary.segments()[0].from, station("A"));
        assert_eq!(itinerary.segments().last().unwrap().to, station("D"));
        for pair in itinerary.segments().windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn observer_sees_final_target_cost() {
        // The last relaxation of the target must agree with the itinerary's
        // total cost (the engine's distance map cross-check).
        let network = build(&[
            ("A", "lineX", "B", 4),
            ("B", "lineX", "C", 3),
            ("A", "lineY", "C", 10),
        ]);
        let target = station("C");
        let mut observed = None;
        let itinerary = find_route_observed(
            &network,
            &station("A"),
            &target,
            |s: &StationId, cost: u32, _: &LineId| {
                if s == &target {
                    observed = Some(cost);
                }
            },
        )
        .unwrap();
        assert_eq!(observed, Some(itinerary.total_cost()));
    }

    #[test]
    fn stale_frontier_entries_are_skipped() {
        // A's direct edge to C is relaxed first and later superseded, so a
        // stale (C, 10) entry sits in the frontier when (C, 7) arrives.
        let network = build(&[
            ("A", "lineY", "C", 10),
            ("A", "lineX", "B", 4),
            ("B", "lineX", "C", 3),
            ("C", "lineZ", "D", 1),
        ]);
        let itinerary = find_route(&network, &station("A"), &station("D")).unwrap();
        assert_eq!(itinerary.total_cost(), 8);
        assert_eq!(itinerary.len(), 3);
    }

    #[test]
    fn broken_chain_is_detected() {
        // Drive `reconstruct` directly with a corrupted predecessor map:
        // the target's chain dead-ends at a station with no link.
        let mut prev = HashMap::new();
        prev.insert(
            station("C"),
            PrevLink {
                from: station("B"),
                line: line("lineX"),
                cost: 3,
            },
        );
        let result = reconstruct(&prev, &station("A"), &station("C"));
        assert_eq!(
            result,
            Err(PathError::BrokenChain { at: station("B") })
        );
    }

    #[test]
    fn cyclic_chain_is_detected() {
        // A two-station predecessor cycle must terminate with an error
        // rather than walk forever.
        let mut prev = HashMap::new();
        prev.insert(
            station("C"),
            PrevLink {
                from: station("B"),
                line: line("lineX"),
                cost: 1,
            },
        );
        prev.insert(
            station("B"),
            PrevLink {
                from: station("C"),
                line: line("lineX"),
                cost: 1,
            },
        );
        let result = reconstruct(&prev, &station("A"), &station("C"));
        assert!(matches!(result, Err(PathError::BrokenChain { .. })));
    }

    #[test]
    fn graph_with_cycle_still_terminates() {
        let network = build(&[
            ("A", "lineX", "B", 1),
            ("B", "lineX", "A", 1),
            ("B", "lineX", "C", 1),
        ]);
        let itinerary = find_route(&network, &station("A"), &station("C")).unwrap();
        assert_eq!(itinerary.total_cost(), 2);
    }
}
