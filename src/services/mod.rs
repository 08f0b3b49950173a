// Collaborators around the planning core
pub mod exporter;
pub mod loader;

pub use exporter::{build_report, write_report, ExportError};
pub use loader::{load_flights, parse_flights, LoaderError};
