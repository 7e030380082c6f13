use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_GOOGLE_GEOCODER_URL: &str = "https://maps.googleapis.com";
const DEFAULT_CENSUS_GEOCODER_URL: &str = "https://geocoding.geo.census.gov/geocoder";
const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 10;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the eligibility service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub reference: ReferenceDataConfig,
    pub geocoder: GeocoderConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let reference = ReferenceDataConfig {
            county_table: non_empty_var("APP_COUNTY_TABLE").map(PathBuf::from),
            utility_table: non_empty_var("APP_UTILITY_TABLE").map(PathBuf::from),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            reference,
            geocoder: GeocoderConfig::from_env()?,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Optional overrides for the county and utility reference tables.
///
/// When a path is unset the tables compiled into the crate are used.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataConfig {
    pub county_table: Option<PathBuf>,
    pub utility_table: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocoderProvider {
    /// Offline: structured places are parsed, free text only yields a zip code.
    ZipExtraction,
    Google,
    Census,
}

impl GeocoderProvider {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "zip" | "offline" => Ok(Self::ZipExtraction),
            "google" => Ok(Self::Google),
            "census" => Ok(Self::Census),
            other => Err(ConfigError::UnknownGeocoder(other.to_string())),
        }
    }
}

/// Address resolver selection and upstream endpoints.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub provider: GeocoderProvider,
    pub google_api_key: Option<String>,
    pub google_base_url: String,
    pub census_base_url: String,
    pub timeout: Duration,
}

impl GeocoderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let provider =
            GeocoderProvider::parse(&env::var("APP_GEOCODER").unwrap_or_else(|_| "zip".into()))?;
        let google_api_key = non_empty_var("GOOGLE_MAPS_API_KEY");

        if provider == GeocoderProvider::Google && google_api_key.is_none() {
            return Err(ConfigError::MissingGoogleApiKey);
        }

        let timeout_secs = match non_empty_var("APP_GEOCODER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            None => DEFAULT_GEOCODER_TIMEOUT_SECS,
        };

        Ok(Self {
            provider,
            google_api_key,
            google_base_url: non_empty_var("APP_GOOGLE_GEOCODER_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_GEOCODER_URL.to_string()),
            census_base_url: non_empty_var("APP_CENSUS_GEOCODER_URL")
                .unwrap_or_else(|| DEFAULT_CENSUS_GEOCODER_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: GeocoderProvider::ZipExtraction,
            google_api_key: None,
            google_base_url: DEFAULT_GOOGLE_GEOCODER_URL.to_string(),
            census_base_url: DEFAULT_CENSUS_GEOCODER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_GEOCODER_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout,
    UnknownGeocoder(String),
    MissingGoogleApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "APP_GEOCODER_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::UnknownGeocoder(value) => write!(
                f,
                "APP_GEOCODER '{value}' is not one of: zip, google, census"
            ),
            ConfigError::MissingGoogleApiKey => write!(
                f,
                "GOOGLE_MAPS_API_KEY is required when APP_GEOCODER=google"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTimeout
            | ConfigError::UnknownGeocoder(_)
            | ConfigError::MissingGoogleApiKey => None,
        }
    }
}
