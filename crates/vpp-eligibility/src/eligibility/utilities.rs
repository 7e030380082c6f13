use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::data::{TEXAS_UTILITY_TERRITORIES, TEXAS_ZIP_ASSIGNMENTS};
use super::reference::ReferenceDataError;

/// Identifier of a transmission/distribution utility territory (e.g. `CENTERPOINT`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtilityKey(pub String);

impl fmt::Display for UtilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Utility territory metadata.
///
/// `energy_community` is an informational hint for marketing copy; the county
/// table remains the authority for energy community status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityTerritory {
    pub key: UtilityKey,
    pub name: String,
    pub region: String,
    pub deregulated: bool,
    pub energy_community: bool,
    #[serde(default)]
    pub zip_prefixes: Vec<String>,
    #[serde(default)]
    pub coverage_areas: Vec<String>,
}

/// Territory attached to an eligibility verdict, tagged with how it was matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityMatch {
    #[serde(flatten)]
    pub territory: UtilityTerritory,
    pub found: bool,
    #[serde(default)]
    pub matched_by_prefix: bool,
}

/// Result of resolving a zip code against the territory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityLookup<'a> {
    Exact(&'a UtilityTerritory),
    Prefix(&'a UtilityTerritory),
    NotFound,
}

impl<'a> UtilityLookup<'a> {
    pub fn found(&self) -> bool {
        !matches!(self, UtilityLookup::NotFound)
    }

    pub fn matched_by_prefix(&self) -> bool {
        matches!(self, UtilityLookup::Prefix(_))
    }

    pub fn territory(&self) -> Option<&'a UtilityTerritory> {
        match self {
            UtilityLookup::Exact(territory) | UtilityLookup::Prefix(territory) => Some(territory),
            UtilityLookup::NotFound => None,
        }
    }

    pub fn into_match(self) -> Option<UtilityMatch> {
        self.territory().map(|territory| UtilityMatch {
            territory: territory.clone(),
            found: true,
            matched_by_prefix: self.matched_by_prefix(),
        })
    }

    pub fn view(&self) -> UtilityLookupView {
        match self.territory() {
            Some(territory) => UtilityLookupView {
                found: true,
                key: Some(territory.key.clone()),
                name: territory.name.clone(),
                region: Some(territory.region.clone()),
                deregulated: territory.deregulated,
                energy_community: territory.energy_community,
                matched_by_prefix: self.matched_by_prefix().then_some(true),
            },
            None => UtilityLookupView {
                found: false,
                key: None,
                name: "Unknown".to_string(),
                region: None,
                deregulated: false,
                energy_community: false,
                matched_by_prefix: None,
            },
        }
    }
}

/// Wire shape of a zip lookup, including the "Unknown" placeholder for misses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityLookupView {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<UtilityKey>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub deregulated: bool,
    pub energy_community: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_by_prefix: Option<bool>,
}

/// Zip-to-territory table. Exact zip entries take precedence over prefix matches.
#[derive(Debug, Clone)]
pub struct UtilityTerritoryTable {
    territories: Vec<UtilityTerritory>,
    zip_index: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct UtilityTableDocument {
    territories: Vec<UtilityTerritory>,
    #[serde(default)]
    zips: HashMap<String, UtilityKey>,
}

impl UtilityTerritoryTable {
    /// Build a table, rejecting malformed zips, unknown keys, and prefixes claimed
    /// by more than one territory.
    pub fn new<I>(
        territories: Vec<UtilityTerritory>,
        zip_assignments: I,
    ) -> Result<Self, ReferenceDataError>
    where
        I: IntoIterator<Item = (String, UtilityKey)>,
    {
        let mut positions: HashMap<UtilityKey, usize> = HashMap::new();
        let mut prefix_owner: HashMap<&str, &UtilityKey> = HashMap::new();

        for (idx, territory) in territories.iter().enumerate() {
            if positions.insert(territory.key.clone(), idx).is_some() {
                return Err(ReferenceDataError::DuplicateUtilityKey(
                    territory.key.clone(),
                ));
            }

            let mut seen = HashSet::new();
            for prefix in &territory.zip_prefixes {
                if !is_digits(prefix, 3) {
                    return Err(ReferenceDataError::InvalidZipPrefix {
                        utility: territory.key.clone(),
                        prefix: prefix.clone(),
                    });
                }
                if !seen.insert(prefix.as_str()) {
                    continue;
                }
                if let Some(owner) = prefix_owner.insert(prefix.as_str(), &territory.key) {
                    return Err(ReferenceDataError::OverlappingPrefix {
                        prefix: prefix.clone(),
                        first: owner.clone(),
                        second: territory.key.clone(),
                    });
                }
            }
        }

        let mut zip_index = HashMap::new();
        for (zip, key) in zip_assignments {
            let zip = zip.trim().to_string();
            if !is_digits(&zip, 5) {
                return Err(ReferenceDataError::InvalidZip(zip));
            }
            let Some(&idx) = positions.get(&key) else {
                return Err(ReferenceDataError::UnknownUtility { zip, utility: key });
            };
            if let Some(previous) = zip_index.insert(zip.clone(), idx) {
                if previous != idx {
                    return Err(ReferenceDataError::ConflictingZip {
                        zip,
                        first: territories[previous].key.clone(),
                        second: key,
                    });
                }
            }
        }

        Ok(Self {
            territories,
            zip_index,
        })
    }

    /// Load from a JSON document of the form
    /// `{"territories": [...], "zips": {"77002": "CENTERPOINT"}}`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ReferenceDataError> {
        let document: UtilityTableDocument = serde_json::from_reader(reader)?;
        Self::new(document.territories, document.zips)
    }

    /// Deregulated Texas territories served by the program.
    pub fn texas_default() -> Self {
        let territories = TEXAS_UTILITY_TERRITORIES
            .iter()
            .map(|seed| UtilityTerritory {
                key: UtilityKey(seed.key.to_string()),
                name: seed.name.to_string(),
                region: seed.region.to_string(),
                deregulated: seed.deregulated,
                energy_community: seed.energy_community,
                zip_prefixes: seed.zip_prefixes.iter().map(|p| p.to_string()).collect(),
                coverage_areas: seed.coverage_areas.iter().map(|a| a.to_string()).collect(),
            })
            .collect();
        let assignments = TEXAS_ZIP_ASSIGNMENTS
            .iter()
            .map(|(zip, key)| (zip.to_string(), UtilityKey(key.to_string())));

        match Self::new(territories, assignments) {
            Ok(table) => table,
            Err(err) => panic!("built-in utility table is malformed: {err}"),
        }
    }

    pub fn utility_for_zip(&self, zip: &str) -> UtilityLookup<'_> {
        let zip = zip.trim();

        if let Some(&idx) = self.zip_index.get(zip) {
            return UtilityLookup::Exact(&self.territories[idx]);
        }

        let Some(prefix) = zip.get(..3) else {
            return UtilityLookup::NotFound;
        };

        self.territories
            .iter()
            .find(|territory| territory.zip_prefixes.iter().any(|p| p == prefix))
            .map(UtilityLookup::Prefix)
            .unwrap_or(UtilityLookup::NotFound)
    }

    pub fn territory(&self, key: &UtilityKey) -> Option<&UtilityTerritory> {
        self.territories
            .iter()
            .find(|territory| &territory.key == key)
    }

    /// Territories in declaration order.
    pub fn territories(&self) -> &[UtilityTerritory] {
        &self.territories
    }

    pub fn exact_zip_count(&self) -> usize {
        self.zip_index.len()
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
