use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured address handed to the eligibility engine.
///
/// `county` never carries the "County" suffix; `state` may be a postal code or a full name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressData {
    pub formatted_address: String,
    pub street_number: String,
    pub street: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    /// 5-digit state+county FIPS when the geocoder reports one; preferred over `county`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_fips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl AddressData {
    pub fn street_address(&self) -> String {
        [self.street_number.as_str(), self.street.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn from_free_text(text: &str, zip_code: String) -> Self {
        Self {
            formatted_address: text.trim().to_string(),
            zip_code,
            ..Self::default()
        }
    }
}

/// Place payload as returned by the Google Places / Geocoding APIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PlaceGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

pub fn parse_place(place: &PlaceResult) -> AddressData {
    let mut address = AddressData {
        formatted_address: place.formatted_address.clone(),
        lat: place.geometry.map(|geometry| geometry.location.lat),
        lng: place.geometry.map(|geometry| geometry.location.lng),
        ..AddressData::default()
    };

    for component in &place.address_components {
        let has = |kind: &str| component.types.iter().any(|t| t == kind);

        if has("street_number") {
            address.street_number = component.long_name.clone();
        }
        if has("route") {
            address.street = component.long_name.clone();
        }
        if has("locality") {
            address.city = component.long_name.clone();
        }
        if has("administrative_area_level_2") {
            address.county = strip_county_suffix(&component.long_name);
        }
        if has("administrative_area_level_1") {
            address.state = component.short_name.clone();
        }
        if has("postal_code") {
            address.zip_code = component.long_name.clone();
        }
        if has("country") {
            address.country = component.short_name.clone();
        }
    }

    address
}

/// First standalone 5-digit run in free text, e.g. "123 Main St, Houston 77002".
pub fn extract_zip_from_free_text(text: &str) -> Option<String> {
    static ZIP_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = ZIP_PATTERN.get_or_init(|| Regex::new(r"\b\d{5}\b").unwrap());
    pattern.find(text).map(|found| found.as_str().to_string())
}

/// "Harris County" -> "Harris"; leaves other names untouched.
pub(crate) fn strip_county_suffix(value: &str) -> String {
    let trimmed = value.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.ends_with(" county") {
        trimmed[..trimmed.len() - " county".len()].trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(long_name: &str, short_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn parses_google_place_components() {
        let place = PlaceResult {
            formatted_address: "1001 Fannin St, Houston, TX 77002, USA".to_string(),
            address_components: vec![
                component("1001", "1001", &["street_number"]),
                component("Fannin Street", "Fannin St", &["route"]),
                component("Houston", "Houston", &["locality", "political"]),
                component(
                    "Harris County",
                    "Harris County",
                    &["administrative_area_level_2", "political"],
                ),
                component("Texas", "TX", &["administrative_area_level_1", "political"]),
                component("77002", "77002", &["postal_code"]),
                component("United States", "US", &["country", "political"]),
            ],
            geometry: Some(PlaceGeometry {
                location: LatLng {
                    lat: 29.7572,
                    lng: -95.3636,
                },
            }),
        };

        let address = parse_place(&place);

        assert_eq!(address.street_address(), "1001 Fannin Street");
        assert_eq!(address.city, "Houston");
        assert_eq!(address.county, "Harris");
        assert_eq!(address.state, "TX");
        assert_eq!(address.zip_code, "77002");
        assert_eq!(address.country, "US");
        assert_eq!(address.lat, Some(29.7572));
    }

    #[test]
    fn extracts_first_standalone_zip() {
        assert_eq!(
            extract_zip_from_free_text("1001 Fannin St, Houston, TX 77002").as_deref(),
            Some("77002")
        );
        assert_eq!(
            extract_zip_from_free_text("Suite 770021, Houston 75201-1234").as_deref(),
            Some("75201")
        );
        assert_eq!(extract_zip_from_free_text("Main St, Houston"), None);
    }

    #[test]
    fn strips_county_suffix_case_insensitively() {
        assert_eq!(strip_county_suffix("Fort Bend County"), "Fort Bend");
        assert_eq!(strip_county_suffix("harris county"), "harris");
        assert_eq!(strip_county_suffix("Orleans Parish"), "Orleans Parish");
    }
}
