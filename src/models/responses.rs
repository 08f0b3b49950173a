use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::domain::{RankedOption, Summary};

/// Output of one planning pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub summary: Summary,
    pub recommendations: Vec<RankedOption>,
}

/// Plan result wrapped with export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    #[serde(rename = "reportId")]
    pub report_id: Uuid,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub budget: f64,
    #[serde(default)]
    pub label: Option<String>,
    pub summary: Summary,
    pub recommendations: Vec<RankedOption>,
}

impl ExportReport {
    pub fn new(result: PlanResult, budget: f64, label: Option<String>) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            budget,
            label,
            summary: result.summary,
            recommendations: result.recommendations,
        }
    }
}
