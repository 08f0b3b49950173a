use std::collections::{HashMap, HashSet};

use crate::models::FlightRecord;

/// Most frequent origin across all flights (the traveller's home base)
///
/// When several origins share the highest count, the one seen first in
/// input order wins. Returns `None` for an empty slice.
pub fn main_origin(flights: &[FlightRecord]) -> Option<&str> {
    // origin -> (occurrences, first index)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (index, flight) in flights.iter().enumerate() {
        counts
            .entry(flight.origin.as_str())
            .or_insert((0, index))
            .0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then_with(|| first_b.cmp(first_a))
        })
        .map(|(origin, _)| origin)
}

/// Distinct destinations in order of first appearance, excluding the main origin
pub fn resolve_destinations(flights: &[FlightRecord]) -> Vec<String> {
    let home = match main_origin(flights) {
        Some(origin) => origin,
        None => return Vec::new(),
    };

    let mut seen = HashSet::new();
    flights
        .iter()
        .map(|flight| flight.destination.as_str())
        .filter(|destination| *destination != home)
        .filter(|destination| seen.insert(*destination))
        .map(str::to_string)
        .collect()
}
