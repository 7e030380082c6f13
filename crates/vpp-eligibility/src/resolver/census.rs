use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::address::{
    extract_zip_from_free_text, parse_place, strip_county_suffix, AddressData, LatLng,
};
use super::{AddressQuery, AddressResolver, ResolutionError};

const BENCHMARK: &str = "Public_AR_Current";
const VINTAGE: &str = "Current_Current";

/// Census geography for a point or matched address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CensusGeography {
    pub state_fips: Option<String>,
    pub county_fips: Option<String>,
    pub tract_fips: Option<String>,
    /// 11-digit tract GEOID.
    pub full_tract_fips: Option<String>,
    /// 5-digit state+county FIPS.
    pub full_county_fips: Option<String>,
    pub block_fips: Option<String>,
    pub state_name: Option<String>,
    pub county_name: Option<String>,
    pub coordinates: Option<LatLng>,
    pub matched_address: Option<String>,
}

impl CensusGeography {
    pub fn has_valid_fips_codes(&self) -> bool {
        self.full_county_fips.is_some() && self.full_tract_fips.is_some()
    }

    /// Project the geography onto the address shape the engine evaluates.
    pub fn to_address(&self) -> AddressData {
        let matched = self.matched_address.clone().unwrap_or_default();
        AddressData {
            zip_code: extract_zip_from_free_text(&matched).unwrap_or_default(),
            formatted_address: matched,
            county: self
                .county_name
                .as_deref()
                .map(strip_county_suffix)
                .unwrap_or_default(),
            state: self.state_name.clone().unwrap_or_default(),
            country: "US".to_string(),
            county_fips: self.full_county_fips.clone(),
            lat: self.coordinates.map(|point| point.lat),
            lng: self.coordinates.map(|point| point.lng),
            ..AddressData::default()
        }
    }

    fn absorb(&mut self, geographies: &Geographies) {
        if let Some(tract) = first(geographies, "Census Tracts") {
            self.state_fips = tract.state.clone();
            self.county_fips = tract.county.clone();
            self.tract_fips = tract.tract.clone();
            self.full_tract_fips = tract.geoid.clone();
            self.full_county_fips = match (&tract.state, &tract.county) {
                (Some(state), Some(county)) => Some(format!("{state}{county}")),
                _ => None,
            };
        }
        if let Some(county) = first(geographies, "Counties") {
            self.county_name = county.name.clone();
        }
        if let Some(state) = first(geographies, "States") {
            self.state_name = state.name.clone();
        }
    }
}

type Geographies = HashMap<String, Vec<GeographyEntry>>;

fn first<'a>(geographies: &'a Geographies, layer: &str) -> Option<&'a GeographyEntry> {
    geographies.get(layer).and_then(|entries| entries.first())
}

#[derive(Debug, Deserialize)]
struct CensusResponse {
    result: Option<CensusResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CensusResult {
    #[serde(default)]
    geographies: Option<Geographies>,
    #[serde(default)]
    address_matches: Option<Vec<AddressMatch>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressMatch {
    matched_address: String,
    coordinates: CensusPoint,
    #[serde(default)]
    geographies: Option<Geographies>,
}

#[derive(Debug, Deserialize)]
struct CensusPoint {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct GeographyEntry {
    #[serde(rename = "STATE")]
    state: Option<String>,
    #[serde(rename = "COUNTY")]
    county: Option<String>,
    #[serde(rename = "TRACT")]
    tract: Option<String>,
    #[serde(rename = "GEOID")]
    geoid: Option<String>,
    #[serde(rename = "NAME")]
    name: Option<String>,
}

fn parse_census_result(result: CensusResult) -> CensusGeography {
    let mut geography = CensusGeography::default();

    if let Some(geographies) = &result.geographies {
        geography.absorb(geographies);
        if let Some(block) = first(geographies, "2020 Census Blocks") {
            geography.block_fips = block.geoid.clone();
        }
    }

    if let Some(matched) = result
        .address_matches
        .as_ref()
        .and_then(|matches| matches.first())
    {
        geography.matched_address = Some(matched.matched_address.clone());
        geography.coordinates = Some(LatLng {
            lat: matched.coordinates.y,
            lng: matched.coordinates.x,
        });
        if let Some(geographies) = &matched.geographies {
            geography.absorb(geographies);
        }
    }

    geography
}

/// Client for the Census Bureau geographies endpoints.
pub struct CensusGeocoder {
    client: Client,
    base_url: String,
}

impl CensusGeocoder {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ResolutionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn geography_for_address(
        &self,
        address: &str,
    ) -> Result<CensusGeography, ResolutionError> {
        let result = self
            .fetch("onelineaddress", &[("address", address.trim().to_string())])
            .await?;

        let has_match = result
            .address_matches
            .as_ref()
            .is_some_and(|matches| !matches.is_empty());
        if !has_match {
            return Err(ResolutionError::NotFound);
        }

        Ok(parse_census_result(result))
    }

    pub async fn geography_for_coordinates(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<CensusGeography, ResolutionError> {
        let result = self
            .fetch(
                "coordinates",
                &[("x", lng.to_string()), ("y", lat.to_string())],
            )
            .await?;
        Ok(parse_census_result(result))
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<CensusResult, ResolutionError> {
        let url = format!("{}/geographies/{endpoint}", self.base_url);
        debug!(%url, "requesting census geography");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[
                ("benchmark", BENCHMARK),
                ("vintage", VINTAGE),
                ("layers", "all"),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            error!(status = %response.status(), "census geocoder request failed");
            return Err(ResolutionError::Upstream(format!(
                "Census API error: {}",
                response.status()
            )));
        }

        let body: CensusResponse = response.json().await?;
        Ok(body.result.unwrap_or_default())
    }
}

#[async_trait]
impl AddressResolver for CensusGeocoder {
    async fn resolve(&self, query: &AddressQuery) -> Result<AddressData, ResolutionError> {
        match query {
            AddressQuery::Place { place } => Ok(parse_place(place)),
            AddressQuery::FreeText { text } => {
                let geography = self.geography_for_address(text).await?;
                Ok(geography.to_address())
            }
            AddressQuery::Coordinates { lat, lng } => {
                let geography = self.geography_for_coordinates(*lat, *lng).await?;
                if geography.full_county_fips.is_none() {
                    return Err(ResolutionError::NotFound);
                }
                let mut address = geography.to_address();
                address.lat = Some(*lat);
                address.lng = Some(*lng);
                Ok(address)
            }
        }
    }
}
