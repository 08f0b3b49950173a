use crate::models::{RankedOption, RankingThresholds, Summary, TripHighlight};

/// Build the digest for a ranked list
///
/// `cheapest` and `longest` are computed from the values, not from list
/// positions; on ties the earlier entry in ranked order wins.
pub fn summarize(ranked: &[RankedOption], budget: f64, thresholds: &RankingThresholds) -> Summary {
    let message = if ranked.is_empty() {
        format!("No round-trip options found within a budget of ${:.2}", budget)
    } else {
        format!(
            "Found {} round-trip option{} within a budget of ${:.2}",
            ranked.len(),
            if ranked.len() == 1 { "" } else { "s" },
            budget
        )
    };

    let cheapest = ranked
        .iter()
        .map(|r| &r.option)
        .reduce(|best, candidate| if candidate.total_price < best.total_price { candidate } else { best })
        .map(TripHighlight::from);

    let longest = ranked
        .iter()
        .map(|r| &r.option)
        .reduce(|best, candidate| if candidate.stay_duration > best.stay_duration { candidate } else { best })
        .map(TripHighlight::from);

    let family_options = ranked
        .iter()
        .filter(|r| r.option.total_availability >= thresholds.family_min_seats)
        .count();

    Summary {
        message,
        cheapest,
        longest,
        family_options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlightRecord, Recommendation, RoundTripOption, Season};
    use chrono::{Duration, NaiveDate};

    fn create_ranked(destination: &str, price: f64, stay: i64, seats: u32) -> RankedOption {
        let departure = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let arrival = departure + Duration::days(stay);

        RankedOption {
            option: RoundTripOption {
                destination: destination.to_string(),
                outbound: FlightRecord::new("EZE", destination, price / 2.0, seats, "2024-01-01"),
                return_flight: FlightRecord::new(destination, "EZE", price / 2.0, seats, &arrival.to_string()),
                outbound_date: departure,
                return_date: arrival,
                total_price: price,
                stay_duration: stay,
                total_availability: seats,
                savings: 1000.0 - price,
            },
            recommendation: Recommendation::Standard,
            season_info: Season::Summer,
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[], 500.0, &RankingThresholds::default());

        assert!(summary.message.starts_with("No round-trip options"));
        assert!(summary.cheapest.is_none());
        assert!(summary.longest.is_none());
        assert_eq!(summary.family_options, 0);
    }

    #[test]
    fn test_cheapest_and_longest() {
        let ranked = vec![
            create_ranked("BRC", 300.0, 4, 1),
            create_ranked("MDZ", 450.0, 14, 2),
            create_ranked("COR", 500.0, 14, 5),
        ];

        let summary = summarize(&ranked, 1000.0, &RankingThresholds::default());

        assert_eq!(summary.message, "Found 3 round-trip options within a budget of $1000.00");
        assert_eq!(summary.cheapest.unwrap().destination, "BRC");
        // ties go to the first in ranked order
        assert_eq!(summary.longest.unwrap().destination, "MDZ");
        assert_eq!(summary.family_options, 2);
    }

    #[test]
    fn test_cheapest_independent_of_order() {
        let ranked = vec![
            create_ranked("MDZ", 450.0, 3, 2),
            create_ranked("BRC", 300.0, 4, 2),
        ];

        let summary = summarize(&ranked, 1000.0, &RankingThresholds::default());
        assert_eq!(summary.cheapest.unwrap().destination, "BRC");
    }

    #[test]
    fn test_single_option_message() {
        let ranked = vec![create_ranked("BRC", 550.0, 10, 3)];
        let summary = summarize(&ranked, 800.0, &RankingThresholds::default());

        assert_eq!(summary.message, "Found 1 round-trip option within a budget of $800.00");
    }
}
