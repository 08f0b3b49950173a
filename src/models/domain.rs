use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::PlannerError;

/// One scheduled flight leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FlightRecord {
    #[validate(length(min = 1))]
    pub origin: String,
    #[validate(length(min = 1))]
    pub destination: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub availability: u32,
    /// ISO-8601 calendar date, kept as supplied and parsed on use
    #[validate(length(min = 1))]
    pub date: String,
}

impl FlightRecord {
    pub fn new(origin: &str, destination: &str, price: f64, availability: u32, date: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price,
            availability,
            date: date.to_string(),
        }
    }

    /// Parse the flight date, dropping any time-of-day component
    pub fn parsed_date(&self) -> Result<NaiveDate, PlannerError> {
        parse_flight_date(&self.date)
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 timestamps.
pub fn parse_flight_date(raw: &str) -> Result<NaiveDate, PlannerError> {
    let trimmed = raw.trim();

    match trimmed.parse::<NaiveDate>() {
        Ok(date) => Ok(date),
        Err(source) => {
            if let Ok(datetime) = trimmed.parse::<NaiveDateTime>() {
                return Ok(datetime.date());
            }
            if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
                return Ok(datetime.date_naive());
            }
            Err(PlannerError::DateParse {
                date: raw.to_string(),
                source,
            })
        }
    }
}

/// An outbound leg paired with a later return leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTripOption {
    pub destination: String,
    pub outbound: FlightRecord,
    #[serde(rename = "return")]
    pub return_flight: FlightRecord,
    #[serde(rename = "outboundDate")]
    pub outbound_date: NaiveDate,
    #[serde(rename = "returnDate")]
    pub return_date: NaiveDate,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    #[serde(rename = "stayDuration")]
    pub stay_duration: i64,
    #[serde(rename = "totalAvailability")]
    pub total_availability: u32,
    pub savings: f64,
}

/// Recommendation category assigned after ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Best,
    LongStay,
    Standard,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Best => "Best option: maximum savings, family friendly",
            Recommendation::LongStay => "Long vacation",
            Recommendation::Standard => "Good savings, family friendly",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Season bucket of the outbound month (southern hemisphere calendar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    /// `month` is 1-based, as returned by `chrono::Datelike::month`
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Summer,
            3..=5 => Season::Autumn,
            6..=8 => Season::Winter,
            _ => Season::Spring,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Round trip annotated for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOption {
    #[serde(flatten)]
    pub option: RoundTripOption,
    pub recommendation: Recommendation,
    #[serde(rename = "seasonInfo")]
    pub season_info: Season,
}

/// Short description of a notable option in the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripHighlight {
    pub destination: String,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    #[serde(rename = "stayDuration")]
    pub stay_duration: i64,
    #[serde(rename = "outboundDate")]
    pub outbound_date: NaiveDate,
    #[serde(rename = "returnDate")]
    pub return_date: NaiveDate,
}

impl From<&RoundTripOption> for TripHighlight {
    fn from(option: &RoundTripOption) -> Self {
        Self {
            destination: option.destination.clone(),
            total_price: option.total_price,
            stay_duration: option.stay_duration,
            outbound_date: option.outbound_date,
            return_date: option.return_date,
        }
    }
}

impl fmt::Display for TripHighlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for ${:.2} ({} days, {} to {})",
            self.destination, self.total_price, self.stay_duration, self.outbound_date, self.return_date
        )
    }
}

/// Digest of a ranking pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub message: String,
    pub cheapest: Option<TripHighlight>,
    pub longest: Option<TripHighlight>,
    #[serde(rename = "familyOptions")]
    pub family_options: usize,
}

/// Ranking thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingThresholds {
    /// Minimum stay, in days, for the long vacation label
    pub long_stay_days: i64,
    /// Minimum seats on both legs for a family-friendly trip
    pub family_min_seats: u32,
}

impl Default for RankingThresholds {
    fn default() -> Self {
        Self {
            long_stay_days: 10,
            family_min_seats: 2,
        }
    }
}
