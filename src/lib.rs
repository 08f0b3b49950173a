//! Trip Algo - round-trip matching and ranking for budget travel planning
//!
//! This library pairs one-way flight records into round trips from the
//! traveller's home base, keeps the ones within budget and ranks them with
//! simple best-first heuristics.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{find_round_trip_options, rank_options, resolve_destinations, summarize, TripPlanner};
pub use crate::error::PlannerError;
pub use crate::models::{FlightRecord, RoundTripOption, RankedOption, Summary, RankingThresholds, PlanResult, ExportReport};
