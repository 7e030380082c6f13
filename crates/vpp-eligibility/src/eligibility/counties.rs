use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::data::TEXAS_ENERGY_COMMUNITY_COUNTIES;
use super::domain::ReasonCode;
use super::reference::{ReferenceDataError, ReferenceMetadata};

/// County-level energy community designation keyed by 5-digit state+county FIPS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub fips: String,
    /// Display name without the "County" suffix.
    pub name: String,
    /// Qualifies under the 2020 MSA/non-MSA delineation.
    pub vintage1: bool,
    /// Qualifies under the 2023 delineation (OMB Bulletin 23-01).
    pub vintage2: bool,
}

impl CountyRecord {
    pub fn qualifies(&self) -> bool {
        self.vintage1 || self.vintage2
    }
}

/// Outcome of a county name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountyStatus<'a> {
    Listed(&'a CountyRecord),
    NoCounty,
    NotListed,
}

impl<'a> CountyStatus<'a> {
    pub fn is_energy_community(&self) -> bool {
        matches!(self, CountyStatus::Listed(record) if record.qualifies())
    }

    pub fn record(&self) -> Option<&'a CountyRecord> {
        match self {
            CountyStatus::Listed(record) => Some(record),
            CountyStatus::NoCounty | CountyStatus::NotListed => None,
        }
    }

    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            CountyStatus::Listed(_) => None,
            CountyStatus::NoCounty => Some(ReasonCode::NoCounty),
            CountyStatus::NotListed => Some(ReasonCode::NotQualifyingCounty),
        }
    }

    pub fn view(&self) -> CountyStatusView {
        let record = self.record();
        CountyStatusView {
            is_energy_community: self.is_energy_community(),
            county_name: record.map(|record| record.name.clone()),
            vintage1: record.map(|record| record.vintage1),
            vintage2: record.map(|record| record.vintage2),
            fips: record.map(|record| record.fips.clone()),
            reason: self.reason(),
        }
    }
}

/// Wire shape of a county lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyStatusView {
    pub is_energy_community: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vintage1: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vintage2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonCode>,
}

/// Immutable table of energy community counties with a normalized name index.
#[derive(Debug, Clone)]
pub struct CountyQualificationTable {
    records: BTreeMap<String, CountyRecord>,
    name_index: HashMap<String, String>,
    metadata: ReferenceMetadata,
}

impl CountyQualificationTable {
    pub fn new(
        records: Vec<CountyRecord>,
        metadata: ReferenceMetadata,
    ) -> Result<Self, ReferenceDataError> {
        let mut by_fips = BTreeMap::new();
        let mut name_index = HashMap::new();

        for record in records {
            if record.fips.len() != 5 || !record.fips.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ReferenceDataError::InvalidFips(record.fips));
            }
            let normalized = normalize_county_name(&record.name);
            if normalized.is_empty() {
                return Err(ReferenceDataError::EmptyCountyName { fips: record.fips });
            }
            if by_fips.contains_key(&record.fips) {
                return Err(ReferenceDataError::DuplicateFips(record.fips));
            }
            if name_index.contains_key(&normalized) {
                return Err(ReferenceDataError::DuplicateCountyName(record.name));
            }

            name_index.insert(normalized, record.fips.clone());
            by_fips.insert(record.fips.clone(), record);
        }

        Ok(Self {
            records: by_fips,
            name_index,
            metadata,
        })
    }

    /// Load a table from CSV with the headers `fips,name,vintage1,vintage2`.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        metadata: ReferenceMetadata,
    ) -> Result<Self, ReferenceDataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<CountyRecord>() {
            records.push(row?);
        }

        Self::new(records, metadata)
    }

    /// Texas counties listed in IRS Notice 2025-31, Appendix 3.
    pub fn texas_irs_2025_31() -> Self {
        let records = TEXAS_ENERGY_COMMUNITY_COUNTIES
            .iter()
            .map(|(fips, name, vintage1, vintage2)| CountyRecord {
                fips: fips.to_string(),
                name: name.to_string(),
                vintage1: *vintage1,
                vintage2: *vintage2,
            })
            .collect::<Vec<_>>();

        // Rows are fixed literals covered by `builtin_county_table_is_consistent`.
        match Self::new(records, ReferenceMetadata::irs_notice_2025_31()) {
            Ok(table) => table,
            Err(err) => panic!("built-in county table is malformed: {err}"),
        }
    }

    pub fn is_qualifying_county(&self, county_name: Option<&str>) -> CountyStatus<'_> {
        let Some(name) = county_name else {
            return CountyStatus::NoCounty;
        };
        let normalized = normalize_county_name(name);
        if normalized.is_empty() {
            return CountyStatus::NoCounty;
        }

        match self
            .name_index
            .get(&normalized)
            .and_then(|fips| self.records.get(fips))
        {
            Some(record) => CountyStatus::Listed(record),
            None => CountyStatus::NotListed,
        }
    }

    pub fn by_fips(&self, fips: &str) -> Option<&CountyRecord> {
        self.records.get(fips.trim())
    }

    /// Records in FIPS order.
    pub fn records(&self) -> impl Iterator<Item = &CountyRecord> {
        self.records.values()
    }

    pub fn metadata(&self) -> &ReferenceMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lowercase, trim, and drop a trailing " county" so "Harris County" matches "harris".
pub(crate) fn normalize_county_name(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    match lowered.strip_suffix(" county") {
        Some(stripped) => stripped.trim_end().to_string(),
        None => lowered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_suffix_and_case() {
        assert_eq!(normalize_county_name("Harris County"), "harris");
        assert_eq!(normalize_county_name("  FORT BEND county "), "fort bend");
        assert_eq!(normalize_county_name("harris"), "harris");
        assert_eq!(normalize_county_name("County"), "county");
    }

    #[test]
    fn builtin_county_table_is_consistent() {
        let table = CountyQualificationTable::texas_irs_2025_31();
        assert_eq!(table.len(), 100);
        assert!(table.records().all(|record| record.fips.starts_with("48")));
        assert_eq!(
            table.metadata().notice.as_deref(),
            Some("2025-31"),
            "built-in table tracks its IRS notice"
        );
    }
}
