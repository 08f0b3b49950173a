use tracing::{debug, info};

use crate::core::{
    matcher::find_round_trip_options,
    ranking::rank_options,
    summary::summarize,
};
use crate::error::PlannerError;
use crate::models::{FlightRecord, PlanResult, RankingThresholds};

/// Main planning orchestrator - runs the round-trip pipeline
///
/// # Pipeline Stages
/// 1. Destination resolution
/// 2. Round-trip matching within budget
/// 3. Ranking and labelling
/// 4. Summary
#[derive(Debug, Clone)]
pub struct TripPlanner {
    thresholds: RankingThresholds,
}

impl TripPlanner {
    pub fn new(thresholds: RankingThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: RankingThresholds::default(),
        }
    }

    pub fn thresholds(&self) -> &RankingThresholds {
        &self.thresholds
    }

    /// Compute ranked round trips for `flights` within `budget`
    ///
    /// Pure over its input: the same flights and budget always give the same
    /// result. Fails only when a flight date cannot be parsed.
    pub fn plan(&self, flights: &[FlightRecord], budget: f64) -> Result<PlanResult, PlannerError> {
        debug!(
            flights = flights.len(),
            budget,
            "Planning round trips"
        );

        let options = find_round_trip_options(flights, budget)?;
        debug!(options = options.len(), "Matched round trips within budget");

        let recommendations = rank_options(options, &self.thresholds);
        let summary = summarize(&recommendations, budget, &self.thresholds);

        info!(
            options = recommendations.len(),
            family_options = summary.family_options,
            "{}",
            summary.message
        );

        Ok(PlanResult {
            summary,
            recommendations,
        })
    }
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}
