use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u8> = 18..=70;
pub const DEFAULT_AGE: u8 = 30;

pub const MIN_INCOME: u64 = 100_000;
pub const DEFAULT_INCOME: u64 = 1_000_000;

pub const HORIZON_RANGE: RangeInclusive<u8> = 1..=30;
pub const DEFAULT_HORIZON_YEARS: u8 = 5;

pub const RISK_TOLERANCE_CHOICES: [&str; 3] = ["Low", "Medium", "High"];
pub const INVESTMENT_GOAL_CHOICES: [&str; 3] = ["Growth", "Tax Saving", "Retirement"];

/// A user's investment profile.
///
/// Only `risk_tolerance` and `investment_goal` drive recommendations. Both are
/// kept as plain labels; the recommender decides what an unknown label means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u8,
    pub income: u64,
    pub risk_tolerance: String,
    pub investment_horizon_years: u8,
    pub investment_goal: String,
}

impl UserProfile {
    /// Builds a profile with the form defaults for the fields that don't
    /// affect ranking.
    pub fn new(risk_tolerance: impl Into<String>, investment_goal: impl Into<String>) -> Self {
        Self {
            age: DEFAULT_AGE,
            income: DEFAULT_INCOME,
            risk_tolerance: risk_tolerance.into(),
            investment_horizon_years: DEFAULT_HORIZON_YEARS,
            investment_goal: investment_goal.into(),
        }
    }
}
