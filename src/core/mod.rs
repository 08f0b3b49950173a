// Core algorithm exports
pub mod destinations;
pub mod matcher;
pub mod planner;
pub mod ranking;
pub mod summary;

pub use destinations::{main_origin, resolve_destinations};
pub use matcher::find_round_trip_options;
pub use planner::TripPlanner;
pub use ranking::{rank_options, recommend, season_for};
pub use summary::summarize;
