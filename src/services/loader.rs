use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use validator::{Validate, ValidationErrors};

use crate::models::FlightRecord;

/// Errors that can occur while loading flight records
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read flights file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid flights JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid flight record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationErrors,
    },
}

/// Parse a JSON array of flight records and validate each one
///
/// Dates are not parsed here; the planner rejects unparsable dates.
pub fn parse_flights(json: &str) -> Result<Vec<FlightRecord>, LoaderError> {
    let flights: Vec<FlightRecord> = serde_json::from_str(json)?;

    for (index, flight) in flights.iter().enumerate() {
        flight
            .validate()
            .map_err(|source| LoaderError::InvalidRecord { index, source })?;
    }

    debug!(count = flights.len(), "Parsed flight records");
    Ok(flights)
}

/// Load flight records from a JSON file
pub fn load_flights<P: AsRef<Path>>(path: P) -> Result<Vec<FlightRecord>, LoaderError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let flights = parse_flights(&contents)?;

    info!("Loaded {} flight records from {}", flights.len(), path.display());
    Ok(flights)
}
