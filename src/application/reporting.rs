use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::Assessment;
use crate::domain::Factor;

/// Serviceability figures for one application record, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceabilityReport {
    pub generated_at: DateTime<Utc>,
    pub factor: Factor,
    pub total_monthly_income: f64,
    pub total_monthly_expenses: f64,
    pub surplus: f64,
    pub serviceability: f64,
    pub skipped_income_entries: usize,
}

impl ServiceabilityReport {
    pub fn new(assessment: &Assessment, factor: Factor) -> Self {
        Self {
            generated_at: Utc::now(),
            factor,
            total_monthly_income: assessment.total_monthly_income,
            total_monthly_expenses: assessment.total_monthly_expenses,
            surplus: assessment.surplus,
            serviceability: assessment.serviceability,
            skipped_income_entries: assessment.warnings.len(),
        }
    }
}
