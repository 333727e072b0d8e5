use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered risk tiers. The discriminants are the ranks used when comparing a
/// fund's risk against a user's tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Looks up a canonical label. Matching is exact; callers normalize first.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trims a raw risk label and capitalizes it: first character upper case,
/// the rest lower case.
pub fn normalize_risk_label(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One row of the fund catalog. Field names on the wire match the catalog
/// column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    #[serde(rename = "Fund")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Risk")]
    pub risk: String,
    #[serde(rename = "Return_3Y")]
    pub return_3y: f64,
    #[serde(rename = "Volatility")]
    pub volatility: f64,
}

impl FundRecord {
    /// The record's risk tier, or `None` when the label is not canonical.
    pub fn risk_level(&self) -> Option<RiskLevel> {
        RiskLevel::from_label(&self.risk)
    }
}
