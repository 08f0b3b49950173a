use thiserror::Error;

/// Errors raised by the planning pipeline
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid flight date '{date}': {source}")]
    DateParse {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}
