//! Loads the fund catalog from a CSV or JSON file.
//!
//! The catalog is read once per process. Every record's risk label is
//! normalized here so that the recommender can compare labels exactly.
use crate::core::fund::{FundRecord, normalize_risk_label};
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const REQUIRED_COLUMNS: [&str; 5] = ["Fund", "Category", "Risk", "Return_3Y", "Volatility"];

/// Supported catalog encodings, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(CatalogFormat::Csv),
            Some("json") => Ok(CatalogFormat::Json),
            Some(other) => bail!(
                "Unsupported catalog format '.{other}' for {} (expected .csv or .json)",
                path.display()
            ),
            None => bail!(
                "Cannot determine catalog format for {} (expected .csv or .json)",
                path.display()
            ),
        }
    }
}

/// The loaded, read-only fund table.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: PathBuf,
    funds: Vec<FundRecord>,
    unrated: usize,
}

impl Catalog {
    /// Builds a catalog from raw records, normalizing their risk labels.
    pub fn from_records(source: impl Into<PathBuf>, mut funds: Vec<FundRecord>) -> Self {
        for fund in &mut funds {
            fund.risk = normalize_risk_label(&fund.risk);
        }
        let unrated = funds.iter().filter(|f| f.risk_level().is_none()).count();
        Self {
            source: source.into(),
            funds,
            unrated,
        }
    }

    pub fn funds(&self) -> &[FundRecord] {
        &self.funds
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    /// Number of records whose risk label is not one of Low, Medium, High.
    /// These are never recommended.
    pub fn unrated_count(&self) -> usize {
        self.unrated
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "Loading fund catalog");

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let records = match format {
        CatalogFormat::Csv => parse_csv(&content),
        CatalogFormat::Json => parse_json(&content),
    }
    .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

    for record in &records {
        if !record.return_3y.is_finite() || !record.volatility.is_finite() {
            bail!(
                "Fund '{}' in {} has a non-finite Return_3Y or Volatility",
                record.name,
                path.display()
            );
        }
    }

    let catalog = Catalog::from_records(path, records);
    if catalog.unrated_count() > 0 {
        warn!(
            count = catalog.unrated_count(),
            "Catalog has funds with an unrecognized risk label; they will not be recommended"
        );
    }
    debug!(funds = catalog.len(), "Loaded fund catalog");
    Ok(catalog)
}

fn parse_csv(content: &str) -> Result<Vec<FundRecord>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read CSV headers")?
        .clone();
    let present: Vec<&str> = headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}'))
        .collect();
    ensure_columns(&present)?;

    reader
        .records()
        .map(|row| {
            let record = row.context("Failed to read catalog row")?;
            // Start line of the record, counting the header and any skipped blank lines
            let line = record.position().map_or(0, |pos| pos.line());
            record
                .deserialize::<FundRecord>(Some(&headers))
                .with_context(|| format!("Malformed catalog row at line {line}"))
        })
        .collect()
}

fn parse_json(content: &str) -> Result<Vec<FundRecord>> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(content).context("Catalog JSON must be an array of objects")?;

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let present: Vec<&str> = row.keys().map(String::as_str).collect();
            ensure_columns(&present).with_context(|| format!("Catalog entry {idx} is incomplete"))?;
            serde_json::from_value(serde_json::Value::Object(row))
                .with_context(|| format!("Malformed catalog entry {idx}"))
        })
        .collect()
}

fn ensure_columns(present: &[&str]) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !present.contains(required))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Missing required columns: {}", missing.join(", ")))
    }
}
