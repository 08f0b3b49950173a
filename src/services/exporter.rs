use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::{ExportReport, PlanResult};

/// Errors that can occur while exporting a plan
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wrap a plan result with report metadata
pub fn build_report(result: PlanResult, budget: f64, label: Option<String>) -> ExportReport {
    ExportReport::new(result, budget, label)
}

/// Write a report as pretty-printed JSON, creating parent directories
pub fn write_report<P: AsRef<Path>>(report: &ExportReport, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;

    info!(
        report_id = %report.report_id,
        recommendations = report.recommendations.len(),
        "Exported report to {}",
        path.display()
    );
    Ok(())
}
