use mfrec::cli::OutputFormat;
use mfrec::core::{RecommendError, UserProfile, load_catalog, recommend};
use mfrec::{AppCommand, run_command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::info;

mod test_utils {
    use super::*;

    pub const CATALOG_CSV: &str = "\
Fund,Category,Risk,Return_3Y,Volatility
Equity Low Fund,Equity, low ,12.0,11.0
Equity High Fund,Equity,HIGH,18.0,19.5
Hybrid Medium Fund,Hybrid,Medium,10.0,8.0
Gilt Fund,Debt,Low,7.0,2.0
Unrated Fund,Equity,Aggressive,40.0,30.0
";

    pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Writes a catalog and a config pointing at it by relative path.
    pub fn workspace() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write(dir.path(), "funds.csv", CATALOG_CSV);
        let config = write(dir.path(), "config.yaml", "catalog_path: funds.csv\ntop_n: 2\n");
        (dir, config)
    }

    pub fn recommend_command(risk: &str, goal: &str) -> AppCommand {
        AppCommand::Recommend {
            profile: UserProfile::new(risk, goal),
            top_n: None,
            catalog: None,
            format: OutputFormat::Table,
        }
    }
}

#[test_log::test]
fn test_growth_medium_scenario_from_loaded_catalog() {
    let (dir, _) = test_utils::workspace();
    let catalog = load_catalog(dir.path().join("funds.csv")).expect("catalog loads");
    assert_eq!(catalog.unrated_count(), 1);

    let profile = UserProfile::new("Medium", "Growth");
    let funds = recommend(&profile, catalog.funds(), 3).expect("valid profile");
    info!(?funds, "Recommended");

    let names: Vec<&str> = funds.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Equity Low Fund", "Hybrid Medium Fund"]);
    assert_eq!(funds[0].risk, "Low");
}

#[test_log::test]
fn test_high_tolerance_includes_normalized_high_risk() {
    let (dir, _) = test_utils::workspace();
    let catalog = load_catalog(dir.path().join("funds.csv")).expect("catalog loads");

    let profile = UserProfile::new("High", "Growth");
    let funds = recommend(&profile, catalog.funds(), 3).expect("valid profile");
    let names: Vec<&str> = funds.iter().map(|f| f.name.as_str()).collect();
    // The unrated fund has the best return but is never recommended
    assert_eq!(
        names,
        vec!["Equity High Fund", "Equity Low Fund", "Hybrid Medium Fund"]
    );
}

#[test_log::test]
fn test_invalid_risk_tolerance_has_no_partial_result() {
    let (dir, _) = test_utils::workspace();
    let catalog = load_catalog(dir.path().join("funds.csv")).expect("catalog loads");

    let profile = UserProfile::new("Medium-High", "Growth");
    let result = recommend(&profile, catalog.funds(), 3);
    assert_eq!(
        result,
        Err(RecommendError::InvalidRiskTolerance("Medium-High".to_string()))
    );
}

#[test_log::test]
fn test_run_recommend_with_config() {
    let (_dir, config) = test_utils::workspace();

    let result = run_command(
        test_utils::recommend_command("Low", "Retirement"),
        config.to_str(),
    );
    assert!(result.is_ok(), "Recommend failed with: {:?}", result.err());
}

#[test_log::test]
fn test_run_recommend_with_empty_result() {
    let (_dir, config) = test_utils::workspace();

    let result = run_command(
        test_utils::recommend_command("High", "Tax Saving"),
        config.to_str(),
    );
    assert!(result.is_ok(), "Empty result should not fail: {:?}", result.err());
}

#[test_log::test]
fn test_run_recommend_rejects_invalid_risk() {
    let (_dir, config) = test_utils::workspace();

    let err = run_command(
        test_utils::recommend_command("Medium-High", "Growth"),
        config.to_str(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid risk tolerance"));
    assert!(err.downcast_ref::<RecommendError>().is_some());
}

#[test_log::test]
fn test_run_recommend_json_with_catalog_override() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_utils::write(dir.path(), "config.yaml", "top_n: 1\n");
    let json_catalog = test_utils::write(
        dir.path(),
        "funds.json",
        r#"[{"Fund": "Tax Saver", "Category": "ELSS", "Risk": "medium", "Return_3Y": 15.5, "Volatility": 13.0}]"#,
    );

    let result = run_command(
        AppCommand::Recommend {
            profile: UserProfile::new("Medium", "Tax Saving"),
            top_n: Some(5),
            catalog: Some(json_catalog),
            format: OutputFormat::Json,
        },
        config.to_str(),
    );
    assert!(result.is_ok(), "Recommend failed with: {:?}", result.err());
}

#[test_log::test]
fn test_run_without_catalog_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_utils::write(dir.path(), "config.yaml", "top_n: 3\n");

    let err = run_command(AppCommand::Catalog { catalog: None }, config.to_str()).unwrap_err();
    assert!(err.to_string().contains("No fund catalog configured"));
}

#[test_log::test]
fn test_run_with_malformed_catalog_fails_fast() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    test_utils::write(
        dir.path(),
        "funds.csv",
        "Fund,Category,Return_3Y\nEquity Low Fund,Equity,12.0\n",
    );
    let config = test_utils::write(dir.path(), "config.yaml", "catalog_path: funds.csv\n");

    let err = run_command(
        test_utils::recommend_command("Low", "Growth"),
        config.to_str(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("Missing required columns: Risk, Volatility"));
}

#[test_log::test]
fn test_run_catalog_command() {
    let (_dir, config) = test_utils::workspace();

    let result = run_command(AppCommand::Catalog { catalog: None }, config.to_str());
    assert!(result.is_ok(), "Catalog failed with: {:?}", result.err());
}

#[test_log::test]
fn test_run_with_missing_config_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.yaml");

    let result = run_command(
        test_utils::recommend_command("Low", "Growth"),
        missing.to_str(),
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_setup_output_drives_recommendations() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = mfrec::cli::setup::setup_in_dir(dir.path()).expect("setup succeeds");

    for goal in ["Growth", "Tax Saving", "Retirement"] {
        let result = run_command(test_utils::recommend_command("Medium", goal), config.to_str());
        assert!(result.is_ok(), "{goal} failed with: {:?}", result.err());
    }
}
