use chrono::NaiveDate;

use crate::core::destinations::resolve_destinations;
use crate::error::PlannerError;
use crate::models::{FlightRecord, RoundTripOption};

/// Pair outbound and return flights into round trips within `budget`
///
/// # Pipeline Stages
/// 1. Parse every flight date (an unparsable date fails the whole call)
/// 2. Resolve candidate destinations
/// 3. For each destination, pair outbound legs with later return legs
///
/// The result is unsorted: destinations come in resolver order and pairs in
/// input order. A negative or NaN budget never matches.
pub fn find_round_trip_options(
    flights: &[FlightRecord],
    budget: f64,
) -> Result<Vec<RoundTripOption>, PlannerError> {
    let dated: Vec<(&FlightRecord, NaiveDate)> = flights
        .iter()
        .map(|flight| flight.parsed_date().map(|date| (flight, date)))
        .collect::<Result<_, _>>()?;

    let mut options = Vec::new();

    for destination in resolve_destinations(flights) {
        let outbound_flights: Vec<_> = dated
            .iter()
            .filter(|(f, _)| f.destination == destination && f.origin != destination)
            .collect();

        let return_flights: Vec<_> = dated
            .iter()
            .filter(|(f, _)| f.origin == destination && f.destination != destination)
            .collect();

        for (outbound, outbound_date) in &outbound_flights {
            for (return_flight, return_date) in &return_flights {
                if return_date <= outbound_date {
                    continue;
                }

                let total_price = outbound.price + return_flight.price;
                // NaN on either side must not pass
                if !(total_price <= budget) {
                    continue;
                }

                options.push(RoundTripOption {
                    destination: destination.clone(),
                    outbound: (*outbound).clone(),
                    return_flight: (*return_flight).clone(),
                    outbound_date: *outbound_date,
                    return_date: *return_date,
                    total_price,
                    stay_duration: (*return_date - *outbound_date).num_days(),
                    total_availability: outbound.availability.min(return_flight.availability),
                    savings: budget - total_price,
                });
            }
        }
    }

    Ok(options)
}
