use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use super::address::{parse_place, AddressData, PlaceResult};
use super::{AddressQuery, AddressResolver, ResolutionError};

/// Forward and reverse geocoding through the Google Geocoding API.
pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
    #[serde(default)]
    error_message: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ResolutionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/maps/api/geocode/json", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    async fn geocode(&self, params: &[(&str, String)]) -> Result<AddressData, ResolutionError> {
        debug!(endpoint = %self.endpoint, "requesting Google geocode");
        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResolutionError::Upstream(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GeocodeResponse = response.json().await?;
        if body.status != "OK" {
            error!(
                status = %body.status,
                detail = body.error_message.as_deref().unwrap_or_default(),
                "Google geocoding failed"
            );
            return Err(status_error(&body.status));
        }

        body.results
            .first()
            .map(parse_place)
            .ok_or(ResolutionError::NotFound)
    }
}

fn status_error(status: &str) -> ResolutionError {
    match status {
        "REQUEST_DENIED" => ResolutionError::Denied(
            "Geocoding API not enabled. Please enable it in Google Cloud Console.".to_string(),
        ),
        "OVER_QUERY_LIMIT" => ResolutionError::QuotaExceeded,
        "INVALID_REQUEST" => ResolutionError::InvalidRequest(
            "Invalid location coordinates or address.".to_string(),
        ),
        "ZERO_RESULTS" => ResolutionError::NotFound,
        other => ResolutionError::Upstream(format!("Geocoding failed: {other}")),
    }
}

#[async_trait]
impl AddressResolver for GoogleGeocoder {
    async fn resolve(&self, query: &AddressQuery) -> Result<AddressData, ResolutionError> {
        match query {
            AddressQuery::Place { place } => Ok(parse_place(place)),
            AddressQuery::FreeText { text } => {
                self.geocode(&[("address", text.trim().to_string())]).await
            }
            AddressQuery::Coordinates { lat, lng } => {
                self.geocode(&[("latlng", format!("{lat},{lng}"))]).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn geocoder(server: &MockServer) -> GoogleGeocoder {
        GoogleGeocoder::new(&server.base_url(), "test-key", Duration::from_secs(5))
            .expect("client builds")
    }

    #[tokio::test]
    async fn forward_geocode_parses_first_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/maps/api/geocode/json")
                    .query_param("address", "1001 Fannin St, Houston")
                    .query_param("key", "test-key");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "results": [{
                        "formatted_address": "1001 Fannin St, Houston, TX 77002, USA",
                        "address_components": [
                            {"long_name": "Harris County", "short_name": "Harris County", "types": ["administrative_area_level_2", "political"]},
                            {"long_name": "Texas", "short_name": "TX", "types": ["administrative_area_level_1", "political"]},
                            {"long_name": "77002", "short_name": "77002", "types": ["postal_code"]}
                        ],
                        "geometry": {"location": {"lat": 29.7572, "lng": -95.3636}}
                    }]
                }));
            })
            .await;

        let address = geocoder(&server)
            .resolve(&AddressQuery::FreeText {
                text: "1001 Fannin St, Houston".to_string(),
            })
            .await
            .expect("address resolves");

        mock.assert_async().await;
        assert_eq!(address.county, "Harris");
        assert_eq!(address.state, "TX");
        assert_eq!(address.zip_code, "77002");
        assert_eq!(address.lng, Some(-95.3636));
    }

    #[tokio::test]
    async fn maps_provider_statuses_to_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("latlng", "29.76,-95.36");
                then.status(200).json_body(json!({
                    "status": "REQUEST_DENIED",
                    "error_message": "API key invalid",
                    "results": []
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("address", "nowhere");
                then.status(200)
                    .json_body(json!({ "status": "ZERO_RESULTS", "results": [] }));
            })
            .await;

        let geocoder = geocoder(&server);
        let denied = geocoder
            .resolve(&AddressQuery::Coordinates {
                lat: 29.76,
                lng: -95.36,
            })
            .await
            .expect_err("denied");
        assert!(matches!(denied, ResolutionError::Denied(_)));

        let missing = geocoder
            .resolve(&AddressQuery::FreeText {
                text: "nowhere".to_string(),
            })
            .await
            .expect_err("no results");
        assert!(matches!(missing, ResolutionError::NotFound));
    }

    #[tokio::test]
    async fn server_errors_are_reported_as_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/maps/api/geocode/json");
                then.status(503);
            })
            .await;

        let err = geocoder(&server)
            .resolve(&AddressQuery::FreeText {
                text: "Houston 77002".to_string(),
            })
            .await
            .expect_err("upstream down");
        assert!(err.is_unavailable());
    }
}
