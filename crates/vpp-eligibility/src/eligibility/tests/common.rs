use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::eligibility::{
    CountyQualificationTable, EligibilityEngine, ReferenceData, ReferenceMetadata,
    UtilityTerritoryTable,
};
use crate::resolver::{AddressData, AddressQuery, AddressResolver, ResolutionError};

pub(super) fn address(zip: &str, county: &str, state: &str) -> AddressData {
    AddressData {
        zip_code: zip.to_string(),
        county: county.to_string(),
        state: state.to_string(),
        ..AddressData::default()
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::builtin()
}

pub(super) const REGULATED_TABLE: &str = r#"{
    "territories": [
        {
            "key": "ENTERGY_TEXAS",
            "name": "Entergy Texas",
            "region": "Southeast Texas",
            "deregulated": false,
            "energyCommunity": true,
            "zipPrefixes": ["776", "777"]
        },
        {
            "key": "CENTERPOINT",
            "name": "CenterPoint Energy",
            "region": "Houston Metro",
            "deregulated": true,
            "energyCommunity": true,
            "zipPrefixes": ["770"]
        }
    ],
    "zips": { "77701": "ENTERGY_TEXAS", "77002": "CENTERPOINT" }
}"#;

pub(super) const SMALL_COUNTY_CSV: &str = "\
fips,name,vintage1,vintage2
48245,Jefferson,true,true
48201,Harris,true,false
48113,Dallas,false,false
";

/// Engine with a regulated territory covering Beaumont and a three-county table.
pub(super) fn regulated_engine() -> EligibilityEngine {
    let utilities = UtilityTerritoryTable::from_json_reader(Cursor::new(REGULATED_TABLE))
        .expect("utility table parses");
    let counties = CountyQualificationTable::from_csv_reader(
        Cursor::new(SMALL_COUNTY_CSV),
        ReferenceMetadata::from_file(std::path::Path::new("fixtures/counties.csv")),
    )
    .expect("county table parses");
    EligibilityEngine::new(Arc::new(ReferenceData::new(counties, utilities)))
}

/// Resolver returning a fixed address, or a fixed error when `address` is `None`.
pub(super) struct FixedResolver {
    pub(super) address: Option<AddressData>,
    pub(super) error: fn() -> ResolutionError,
}

impl FixedResolver {
    pub(super) fn returning(address: AddressData) -> Self {
        Self {
            address: Some(address),
            error: || ResolutionError::NotFound,
        }
    }

    pub(super) fn failing(error: fn() -> ResolutionError) -> Self {
        Self {
            address: None,
            error,
        }
    }
}

#[async_trait]
impl AddressResolver for FixedResolver {
    async fn resolve(&self, _query: &AddressQuery) -> Result<AddressData, ResolutionError> {
        match &self.address {
            Some(address) => Ok(address.clone()),
            None => Err((self.error)()),
        }
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
