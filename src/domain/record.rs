use serde::{Deserialize, Serialize};

use super::{ExpenseEntry, IncomeEntry};

/// Top-level application record: the parsed input to an assessment.
///
/// Both sequences are required; a record missing either key fails at parse
/// time, before any computation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub income: Vec<IncomeEntry>,
    pub expenses: Vec<ExpenseEntry>,
}
