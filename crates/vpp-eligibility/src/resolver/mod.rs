//! Address normalization ahead of eligibility checks.
//!
//! Resolvers turn a structured place, free text, or coordinates into [`AddressData`].
//! Network-backed resolvers (Google, Census) are wrapped in [`WithZipFallback`] so an
//! outage degrades to zip extraction instead of blocking the visitor.

mod address;
mod census;
mod google;

pub use address::{
    extract_zip_from_free_text, parse_place, AddressComponent, AddressData, LatLng,
    PlaceGeometry, PlaceResult,
};
pub(crate) use address::strip_county_suffix;
pub use census::{CensusGeocoder, CensusGeography};
pub use google::GoogleGeocoder;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{GeocoderConfig, GeocoderProvider};

/// Input accepted by an [`AddressResolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AddressQuery {
    Place { place: PlaceResult },
    FreeText { text: String },
    Coordinates { lat: f64, lng: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("address not found")]
    NotFound,
    #[error("no 5-digit zip code present in the address")]
    NoZipCode,
    #[error("{0} lookups are not supported by this resolver")]
    Unsupported(&'static str),
    #[error("geocoding request denied: {0}")]
    Denied(String),
    #[error("geocoding quota exceeded, try again later")]
    QuotaExceeded,
    #[error("invalid geocoding request: {0}")]
    InvalidRequest(String),
    #[error("geocoding provider error: {0}")]
    Upstream(String),
    #[error("geocoding transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ResolutionError {
    /// Failures where retrying later or using a fallback makes sense.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            ResolutionError::Transport(_)
                | ResolutionError::Upstream(_)
                | ResolutionError::QuotaExceeded
        )
    }
}

#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, query: &AddressQuery) -> Result<AddressData, ResolutionError>;

    /// Resolve an address the engine can evaluate; a blank zip is [`ResolutionError::NoZipCode`].
    async fn resolve_with_zip(
        &self,
        query: &AddressQuery,
    ) -> Result<AddressData, ResolutionError> {
        let address = self.resolve(query).await?;
        if address.zip_code.trim().is_empty() {
            return Err(ResolutionError::NoZipCode);
        }
        Ok(address)
    }
}

/// Offline resolver: parses structured places and pulls a zip code out of free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractingResolver;

impl ZipExtractingResolver {
    fn resolve_sync(&self, query: &AddressQuery) -> Result<AddressData, ResolutionError> {
        match query {
            AddressQuery::Place { place } => Ok(parse_place(place)),
            AddressQuery::FreeText { text } => extract_zip_from_free_text(text)
                .map(|zip| AddressData::from_free_text(text, zip))
                .ok_or(ResolutionError::NoZipCode),
            AddressQuery::Coordinates { .. } => Err(ResolutionError::Unsupported("coordinate")),
        }
    }
}

#[async_trait]
impl AddressResolver for ZipExtractingResolver {
    async fn resolve(&self, query: &AddressQuery) -> Result<AddressData, ResolutionError> {
        self.resolve_sync(query)
    }
}

/// Falls back to zip extraction when the wrapped resolver is unavailable for free text.
pub struct WithZipFallback<R> {
    inner: R,
}

impl<R> WithZipFallback<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R> AddressResolver for WithZipFallback<R>
where
    R: AddressResolver,
{
    async fn resolve(&self, query: &AddressQuery) -> Result<AddressData, ResolutionError> {
        match self.inner.resolve(query).await {
            Ok(address) => Ok(address),
            Err(err) if err.is_unavailable() && matches!(query, AddressQuery::FreeText { .. }) => {
                warn!(error = %err, "geocoder unavailable, falling back to zip extraction");
                ZipExtractingResolver.resolve_sync(query)
            }
            Err(err) => Err(err),
        }
    }
}

/// Build the resolver selected by configuration.
pub fn resolver_from_config(
    config: &GeocoderConfig,
) -> Result<Arc<dyn AddressResolver>, ResolutionError> {
    let resolver: Arc<dyn AddressResolver> = match config.provider {
        GeocoderProvider::ZipExtraction => Arc::new(ZipExtractingResolver),
        GeocoderProvider::Google => {
            let api_key = config
                .google_api_key
                .clone()
                .ok_or_else(|| ResolutionError::Denied("missing Google Maps API key".into()))?;
            Arc::new(WithZipFallback::new(GoogleGeocoder::new(
                &config.google_base_url,
                api_key,
                config.timeout,
            )?))
        }
        GeocoderProvider::Census => Arc::new(WithZipFallback::new(CensusGeocoder::new(
            &config.census_base_url,
            config.timeout,
        )?)),
    };
    Ok(resolver)
}
