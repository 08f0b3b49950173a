// Unit tests for Trip Algo

use chrono::NaiveDate;
use trip_algo::core::{
    destinations::{main_origin, resolve_destinations},
    ranking::{rank_options, recommend, season_for},
    summary::summarize,
};
use trip_algo::models::domain::parse_flight_date;
use trip_algo::models::{FlightRecord, RankingThresholds, Recommendation, RoundTripOption, Season};
use trip_algo::services::{parse_flights, LoaderError};

fn create_option(destination: &str, price: f64, stay: i64, seats: u32) -> RoundTripOption {
    let departure = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let arrival = departure + chrono::Duration::days(stay);

    RoundTripOption {
        destination: destination.to_string(),
        outbound: FlightRecord::new("EZE", destination, price / 2.0, seats, "2024-07-01"),
        return_flight: FlightRecord::new(destination, "EZE", price / 2.0, seats, &arrival.to_string()),
        outbound_date: departure,
        return_date: arrival,
        total_price: price,
        stay_duration: stay,
        total_availability: seats,
        savings: 1000.0 - price,
    }
}

#[test]
fn test_main_origin_single_record() {
    let flights = vec![FlightRecord::new("AEP", "BRC", 100.0, 1, "2024-01-01")];

    assert_eq!(main_origin(&flights), Some("AEP"));
    assert_eq!(resolve_destinations(&flights), vec!["BRC"]);
}

#[test]
fn test_main_origin_tie_is_stable() {
    let flights = vec![
        FlightRecord::new("COR", "EZE", 100.0, 1, "2024-01-01"),
        FlightRecord::new("EZE", "COR", 100.0, 1, "2024-01-02"),
    ];

    for _ in 0..10 {
        assert_eq!(main_origin(&flights), Some("COR"));
    }
    assert_eq!(resolve_destinations(&flights), vec!["EZE"]);
}

#[test]
fn test_destinations_only_home_flights() {
    // Every destination equals the home base
    let flights = vec![
        FlightRecord::new("EZE", "EZE", 100.0, 1, "2024-01-01"),
        FlightRecord::new("EZE", "EZE", 100.0, 1, "2024-01-02"),
    ];

    assert!(resolve_destinations(&flights).is_empty());
}

#[test]
fn test_parse_flight_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

    assert_eq!(parse_flight_date("2024-03-09").unwrap(), expected);
    assert_eq!(parse_flight_date(" 2024-03-09 ").unwrap(), expected);
    assert_eq!(parse_flight_date("2024-03-09T18:45:00.250").unwrap(), expected);
    assert_eq!(parse_flight_date("2024-03-09T01:00:00-03:00").unwrap(), expected);
    assert!(parse_flight_date("March 9th").is_err());
}

#[test]
fn test_recommend_rules() {
    let thresholds = RankingThresholds::default();

    assert_eq!(recommend(0, &create_option("BRC", 100.0, 2, 1), &thresholds), Recommendation::Best);
    assert_eq!(recommend(1, &create_option("BRC", 100.0, 10, 1), &thresholds), Recommendation::LongStay);
    assert_eq!(recommend(2, &create_option("BRC", 100.0, 9, 1), &thresholds), Recommendation::Standard);
}

#[test]
fn test_season_for_july_departure() {
    assert_eq!(season_for(&create_option("BRC", 100.0, 2, 1)), Season::Winter);
}

#[test]
fn test_labels_are_distinct() {
    let labels = [
        Recommendation::Best.label(),
        Recommendation::LongStay.label(),
        Recommendation::Standard.label(),
    ];
    assert_ne!(labels[0], labels[1]);
    assert_ne!(labels[1], labels[2]);
    assert_eq!(Season::Spring.to_string(), "Spring");
}

#[test]
fn test_family_threshold() {
    let ranked = rank_options(
        vec![
            create_option("BRC", 300.0, 4, 1),
            create_option("MDZ", 400.0, 4, 2),
            create_option("COR", 500.0, 4, 4),
        ],
        &RankingThresholds::default(),
    );

    let default_summary = summarize(&ranked, 1000.0, &RankingThresholds::default());
    assert_eq!(default_summary.family_options, 2);

    let strict = RankingThresholds { family_min_seats: 4, ..Default::default() };
    assert_eq!(summarize(&ranked, 1000.0, &strict).family_options, 1);
}

#[test]
fn test_highlight_display() {
    let ranked = rank_options(vec![create_option("BRC", 550.0, 10, 3)], &RankingThresholds::default());
    let summary = summarize(&ranked, 800.0, &RankingThresholds::default());

    assert_eq!(
        summary.cheapest.unwrap().to_string(),
        "BRC for $550.00 (10 days, 2024-07-01 to 2024-07-11)"
    );
}

#[test]
fn test_loader_rejects_blank_destination() {
    let json = r#"[{"origin": "EZE", "destination": "", "price": 10, "availability": 1, "date": "2024-01-01"}]"#;

    assert!(matches!(parse_flights(json), Err(LoaderError::InvalidRecord { index: 0, .. })));
}

#[test]
fn test_loader_rejects_non_array() {
    let json = r#"{"origin": "EZE"}"#;

    assert!(matches!(parse_flights(json), Err(LoaderError::Json(_))));
}
