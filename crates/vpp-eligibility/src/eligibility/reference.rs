use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::counties::CountyQualificationTable;
use super::utilities::{UtilityKey, UtilityTerritoryTable};
use crate::config::ReferenceDataConfig;

/// Provenance of a reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceMetadata {
    pub source: String,
    pub notice: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub next_update: Option<String>,
}

impl ReferenceMetadata {
    pub fn irs_notice_2025_31() -> Self {
        Self {
            source: "IRS Notice 2025-31, Appendix 3".to_string(),
            notice: Some("2025-31".to_string()),
            effective_date: NaiveDate::from_ymd_opt(2025, 6, 23),
            next_update: Some("2026-06".to_string()),
        }
    }

    pub fn from_file(path: &Path) -> Self {
        Self {
            source: path.display().to_string(),
            notice: None,
            effective_date: None,
            next_update: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid county CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid utility table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("county FIPS '{0}' must be 5 digits")]
    InvalidFips(String),
    #[error("county FIPS '{0}' listed more than once")]
    DuplicateFips(String),
    #[error("county name '{0}' listed more than once")]
    DuplicateCountyName(String),
    #[error("county {fips} has an empty name")]
    EmptyCountyName { fips: String },
    #[error("utility key {0} declared more than once")]
    DuplicateUtilityKey(UtilityKey),
    #[error("utility {utility} declares invalid zip prefix '{prefix}'")]
    InvalidZipPrefix { utility: UtilityKey, prefix: String },
    #[error("zip prefix {prefix} is claimed by both {first} and {second}")]
    OverlappingPrefix {
        prefix: String,
        first: UtilityKey,
        second: UtilityKey,
    },
    #[error("zip '{0}' must be 5 digits")]
    InvalidZip(String),
    #[error("zip {zip} references undeclared utility {utility}")]
    UnknownUtility { zip: String, utility: UtilityKey },
    #[error("zip {zip} assigned to both {first} and {second}")]
    ConflictingZip {
        zip: String,
        first: UtilityKey,
        second: UtilityKey,
    },
}

/// The two lookup tables the engine evaluates against. Loaded once, then shared read-only.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub counties: CountyQualificationTable,
    pub utilities: UtilityTerritoryTable,
}

impl ReferenceData {
    pub fn new(counties: CountyQualificationTable, utilities: UtilityTerritoryTable) -> Self {
        Self {
            counties,
            utilities,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            CountyQualificationTable::texas_irs_2025_31(),
            UtilityTerritoryTable::texas_default(),
        )
    }

    /// Load configured table files, falling back to the built-in tables for any unset path.
    pub fn load(config: &ReferenceDataConfig) -> Result<Self, ReferenceDataError> {
        let counties = match &config.county_table {
            Some(path) => {
                let table = CountyQualificationTable::from_csv_reader(
                    File::open(path)?,
                    ReferenceMetadata::from_file(path),
                )?;
                info!(path = %path.display(), counties = table.len(), "loaded county table");
                table
            }
            None => CountyQualificationTable::texas_irs_2025_31(),
        };

        let utilities = match &config.utility_table {
            Some(path) => {
                let table = UtilityTerritoryTable::from_json_reader(File::open(path)?)?;
                info!(
                    path = %path.display(),
                    territories = table.territories().len(),
                    zips = table.exact_zip_count(),
                    "loaded utility table"
                );
                table
            }
            None => UtilityTerritoryTable::texas_default(),
        };

        Ok(Self::new(counties, utilities))
    }

    pub fn summary(&self) -> ReferenceSummary {
        ReferenceSummary {
            county_count: self.counties.len(),
            qualifying_county_count: self
                .counties
                .records()
                .filter(|record| record.qualifies())
                .count(),
            county_source: self.counties.metadata().clone(),
            utility_territories: self
                .utilities
                .territories()
                .iter()
                .map(|territory| territory.key.clone())
                .collect(),
            exact_zip_count: self.utilities.exact_zip_count(),
        }
    }
}

/// Operator-facing description of the loaded tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSummary {
    pub county_count: usize,
    pub qualifying_county_count: usize,
    pub county_source: ReferenceMetadata,
    pub utility_territories: Vec<UtilityKey>,
    pub exact_zip_count: usize,
}
