use chrono::Datelike;
use std::cmp::Ordering;

use crate::models::{RankedOption, RankingThresholds, Recommendation, RoundTripOption, Season};

/// Sort round trips best-first and annotate them
///
/// Ordering: total price ascending, then stay duration descending. The sort
/// is stable, so full ties keep their input order.
pub fn rank_options(
    mut options: Vec<RoundTripOption>,
    thresholds: &RankingThresholds,
) -> Vec<RankedOption> {
    options.sort_by(|a, b| {
        a.total_price
            .partial_cmp(&b.total_price)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.stay_duration.cmp(&a.stay_duration))
    });

    options
        .into_iter()
        .enumerate()
        .map(|(index, option)| RankedOption {
            recommendation: recommend(index, &option, thresholds),
            season_info: season_for(&option),
            option,
        })
        .collect()
}

/// Recommendation for the option at `index` of the ranked list
#[inline]
pub fn recommend(index: usize, option: &RoundTripOption, thresholds: &RankingThresholds) -> Recommendation {
    if index == 0 {
        Recommendation::Best
    } else if option.stay_duration >= thresholds.long_stay_days {
        Recommendation::LongStay
    } else {
        Recommendation::Standard
    }
}

/// Season of the outbound departure
#[inline]
pub fn season_for(option: &RoundTripOption) -> Season {
    Season::from_month(option.outbound_date.month())
}
