use serde::{Deserialize, Serialize};

/// Reporting period of an income entry, used to normalize reported amounts
/// to a monthly basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Yearly,
    Quarterly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Yearly => "yearly",
            Frequency::Quarterly => "quarterly",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yearly" => Some(Frequency::Yearly),
            "quarterly" => Some(Frequency::Quarterly),
            "monthly" => Some(Frequency::Monthly),
            _ => None,
        }
    }

    /// Convert an amount reported at this frequency to its monthly equivalent.
    pub fn to_monthly(&self, amount: f64) -> f64 {
        match self {
            Frequency::Yearly => amount / 12.0,
            Frequency::Quarterly => amount / 3.0,
            Frequency::Monthly => amount,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
