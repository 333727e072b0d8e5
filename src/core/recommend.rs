//! Goal and risk based fund selection.
use crate::core::fund::{FundRecord, RiskLevel};
use crate::core::profile::UserProfile;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_TOP_N: usize = 3;

/// Fund categories acceptable for each investment goal.
pub const GOAL_CATEGORIES: &[(&str, &[&str])] = &[
    ("Growth", &["Equity", "Hybrid"]),
    ("Tax Saving", &["ELSS"]),
    ("Retirement", &["Debt", "Hybrid"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("invalid risk tolerance: '{0}' (expected Low, Medium or High)")]
    InvalidRiskTolerance(String),
}

/// Categories for a goal. Unknown goals map to no categories.
pub fn categories_for_goal(goal: &str) -> &'static [&'static str] {
    GOAL_CATEGORIES
        .iter()
        .find(|(name, _)| *name == goal)
        .map(|(_, categories)| *categories)
        .unwrap_or(&[])
}

/// Picks up to `top_n` funds matching the profile's goal whose risk does not
/// exceed the profile's tolerance, highest 3-year return first.
///
/// Funds with equal returns keep their catalog order. Funds whose risk label
/// is not canonical are never selected.
pub fn recommend<'a>(
    profile: &UserProfile,
    catalog: &'a [FundRecord],
    top_n: usize,
) -> Result<Vec<&'a FundRecord>, RecommendError> {
    let allowed = categories_for_goal(&profile.investment_goal);
    if allowed.is_empty() {
        debug!(
            goal = %profile.investment_goal,
            "Unrecognized investment goal, no categories match"
        );
    }

    let ceiling = RiskLevel::from_label(&profile.risk_tolerance)
        .ok_or_else(|| RecommendError::InvalidRiskTolerance(profile.risk_tolerance.clone()))?;

    let mut ranked: Vec<&FundRecord> = catalog
        .iter()
        .filter(|fund| allowed.contains(&fund.category.as_str()))
        .filter(|fund| fund.risk_level().is_some_and(|level| level <= ceiling))
        .collect();

    ranked.sort_by(|a, b| b.return_3y.total_cmp(&a.return_3y));
    ranked.truncate(top_n);

    debug!(
        candidates = catalog.len(),
        selected = ranked.len(),
        %ceiling,
        "Ranked recommendations"
    );
    Ok(ranked)
}
