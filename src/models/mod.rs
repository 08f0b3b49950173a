// Model exports
pub mod domain;
pub mod responses;

pub use domain::{FlightRecord, RoundTripOption, RankedOption, Recommendation, Season, Summary, TripHighlight, RankingThresholds};
pub use responses::{PlanResult, ExportReport};
