use super::ui;
use crate::core::catalog::Catalog;
use crate::core::fund::FundRecord;
use crate::core::profile::UserProfile;
use crate::core::recommend::recommend;
use anyhow::{Context, Result};
use clap::ValueEnum;

/// How recommendations are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One line summary of the profile the recommendations were made for.
pub fn profile_summary(profile: &UserProfile) -> String {
    format!(
        "{} {} | {} {} | {} {} | {} {}y | {} ₹{}",
        ui::style_text("Goal:", ui::StyleType::Label),
        profile.investment_goal,
        ui::style_text("Risk:", ui::StyleType::Label),
        profile.risk_tolerance,
        ui::style_text("Age:", ui::StyleType::Label),
        profile.age,
        ui::style_text("Horizon:", ui::StyleType::Label),
        profile.investment_horizon_years,
        ui::style_text("Income:", ui::StyleType::Label),
        profile.income,
    )
}

/// Renders recommendations for display. An empty selection is reported as
/// such rather than as an empty table.
pub fn render(
    profile: &UserProfile,
    funds: &[&FundRecord],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(funds).context("Failed to serialize recommendations")
        }
        OutputFormat::Table => {
            let mut output = format!(
                "{}\n{}\n\n",
                ui::style_text("Recommended Mutual Funds", ui::StyleType::Title),
                profile_summary(profile)
            );
            if funds.is_empty() {
                output.push_str(&ui::style_text(
                    "No recommendations for this profile.",
                    ui::StyleType::Error,
                ));
            } else {
                output.push_str(&ui::fund_table(funds.iter().copied()).to_string());
            }
            Ok(output)
        }
    }
}

pub fn run(
    profile: &UserProfile,
    catalog: &Catalog,
    top_n: usize,
    format: OutputFormat,
) -> Result<()> {
    let funds = recommend(profile, catalog.funds(), top_n)?;
    println!("{}", render(profile, &funds, format)?);
    Ok(())
}
