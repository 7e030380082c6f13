//! Address eligibility for the Texas energy community program.
//!
//! Two immutable reference tables drive every decision: the IRS energy community
//! county list and the utility territory map. [`EligibilityEngine::check`] runs the
//! ordered rule chain against them and never fails; every input yields a verdict.

mod counties;
mod data;
mod domain;
mod policy;
mod reference;
pub mod router;
mod utilities;

#[cfg(test)]
mod tests;

pub use counties::{CountyQualificationTable, CountyRecord, CountyStatus, CountyStatusView};
pub use domain::{EligibilityResult, ReasonCode, STANDARD_BENEFITS};
pub use reference::{ReferenceData, ReferenceDataError, ReferenceMetadata, ReferenceSummary};
pub use router::eligibility_router;
pub use utilities::{
    UtilityKey, UtilityLookup, UtilityLookupView, UtilityMatch, UtilityTerritory,
    UtilityTerritoryTable,
};

use std::sync::Arc;

use tracing::debug;

use crate::resolver::{AddressData, CensusGeography};
use policy::{decide_outcome, location_gate, out_of_state, AddressSignals, LocationGate};

/// Stateless evaluator over shared reference data.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    reference: Arc<ReferenceData>,
}

impl EligibilityEngine {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Engine over the compiled-in Texas tables.
    pub fn builtin() -> Self {
        Self::new(Arc::new(ReferenceData::builtin()))
    }

    pub fn check(&self, address: &AddressData) -> EligibilityResult {
        let fips_record = address
            .county_fips
            .as_deref()
            .and_then(|fips| self.reference.counties.by_fips(fips));
        let county_input = fips_record
            .map(|record| record.name.as_str())
            .unwrap_or(address.county.as_str());

        let signals = AddressSignals {
            zip_code: &address.zip_code,
            county_input: Some(county_input),
            state: Some(address.state.as_str()),
        };

        let result = match location_gate(&signals) {
            LocationGate::OutOfState => out_of_state(),
            LocationGate::Texas => {
                let utility = self.reference.utilities.utility_for_zip(signals.zip_code);
                let county = self
                    .reference
                    .counties
                    .is_qualifying_county(signals.county_input);
                decide_outcome(&signals, utility, county)
            }
        };

        debug!(
            zip = %address.zip_code.trim(),
            county_fips = address.county_fips.as_deref().unwrap_or(""),
            reason = %result.reason,
            eligible = result.eligible,
            "eligibility checked"
        );
        result
    }

    /// Check a Census geography, preferring the county named by its FIPS code.
    pub fn check_census_geography(
        &self,
        geography: &CensusGeography,
        zip_code: &str,
    ) -> EligibilityResult {
        let mut address = geography.to_address();
        address.zip_code = zip_code.trim().to_string();
        self.check(&address)
    }

    pub fn utility_for_zip(&self, zip: &str) -> UtilityLookup<'_> {
        self.reference.utilities.utility_for_zip(zip)
    }

    pub fn county_status(&self, county_name: Option<&str>) -> CountyStatus<'_> {
        self.reference.counties.is_qualifying_county(county_name)
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }
}
