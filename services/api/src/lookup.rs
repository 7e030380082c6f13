use clap::{ArgGroup, Args};
use serde::Serialize;
use std::sync::Arc;
use vpp_eligibility::config::AppConfig;
use vpp_eligibility::eligibility::router::ResolvedEligibility;
use vpp_eligibility::eligibility::{EligibilityEngine, ReferenceData};
use vpp_eligibility::error::AppError;
use vpp_eligibility::resolver::{
    resolver_from_config, AddressData, AddressQuery, AddressResolver, ResolutionError,
};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Five-digit zip code
    #[arg(long)]
    pub(crate) zip: String,
    /// County name, with or without the "County" suffix
    #[arg(long)]
    pub(crate) county: Option<String>,
    /// State code or name (TX / Texas)
    #[arg(long)]
    pub(crate) state: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct UtilityArgs {
    pub(crate) zip: String,
}

#[derive(Args, Debug)]
pub(crate) struct CountyArgs {
    pub(crate) name: String,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("location").required(true).args(["text", "lat"])))]
pub(crate) struct ResolveArgs {
    /// Free-text address, e.g. "1001 Fannin St, Houston, TX 77002"
    pub(crate) text: Option<String>,
    /// Latitude for a reverse lookup
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub(crate) lat: Option<f64>,
    /// Longitude for a reverse lookup
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub(crate) lng: Option<f64>,
}

impl ResolveArgs {
    fn query(&self) -> Option<AddressQuery> {
        match (&self.text, self.lat, self.lng) {
            (Some(text), _, _) => Some(AddressQuery::FreeText { text: text.clone() }),
            (None, Some(lat), Some(lng)) => Some(AddressQuery::Coordinates { lat, lng }),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct CountyReport<'a, T> {
    county: &'a str,
    #[serde(flatten)]
    status: T,
}

#[derive(Debug, Serialize)]
struct UtilityReport<'a, T> {
    zip: &'a str,
    #[serde(flatten)]
    lookup: T,
}

fn load_engine(config: &AppConfig) -> Result<EligibilityEngine, AppError> {
    let reference = ReferenceData::load(&config.reference)?;
    Ok(EligibilityEngine::new(Arc::new(reference)))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;

    let address = AddressData {
        zip_code: args.zip,
        county: args.county.unwrap_or_default(),
        state: args.state.unwrap_or_default(),
        ..AddressData::default()
    };
    let result = engine.check(&address);

    println!("{}", result.summary());
    print_json(&result)
}

pub(crate) fn run_utility(args: UtilityArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;

    let lookup = engine.utility_for_zip(&args.zip).view();
    print_json(&UtilityReport {
        zip: args.zip.trim(),
        lookup,
    })
}

pub(crate) fn run_county(args: CountyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;

    let status = engine.county_status(Some(&args.name)).view();
    print_json(&CountyReport {
        county: args.name.trim(),
        status,
    })
}

pub(crate) async fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let query = args.query().ok_or_else(|| {
        ResolutionError::InvalidRequest("provide an address or both --lat and --lng".to_string())
    })?;

    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;
    let resolver = resolver_from_config(&config.geocoder)?;

    let address = resolver.resolve_with_zip(&query).await?;
    let result = engine.check(&address);

    println!("{}", result.summary());
    print_json(&ResolvedEligibility { address, result })
}

pub(crate) fn run_reference() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;

    let summary = engine.reference().summary();
    println!(
        "{} counties ({} qualifying) from {}",
        summary.county_count, summary.qualifying_county_count, summary.county_source.source
    );
    print_json(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_args_prefer_free_text() {
        let args = ResolveArgs {
            text: Some("Houston 77002".to_string()),
            lat: None,
            lng: None,
        };
        assert_eq!(
            args.query(),
            Some(AddressQuery::FreeText {
                text: "Houston 77002".to_string()
            })
        );

        let args = ResolveArgs {
            text: None,
            lat: Some(29.76),
            lng: Some(-95.36),
        };
        assert_eq!(
            args.query(),
            Some(AddressQuery::Coordinates {
                lat: 29.76,
                lng: -95.36
            })
        );
    }

    #[test]
    fn resolve_args_without_location_have_no_query() {
        let args = ResolveArgs {
            text: None,
            lat: Some(29.76),
            lng: None,
        };
        assert_eq!(args.query(), None);
    }

    #[tokio::test]
    async fn resolve_without_location_is_an_error() {
        let args = ResolveArgs {
            text: None,
            lat: None,
            lng: None,
        };
        let err = run_resolve(args).await.expect_err("missing location");
        assert!(matches!(
            err,
            AppError::Resolution(ResolutionError::InvalidRequest(_))
        ));
    }

    #[test]
    fn county_report_flattens_status() {
        let engine = EligibilityEngine::builtin();
        let report = CountyReport {
            county: "Harris County",
            status: engine.county_status(Some("Harris County")).view(),
        };

        let value = serde_json::to_value(&report).expect("serializes");
        assert_eq!(value["county"], "Harris County");
        assert_eq!(value["isEnergyCommunity"], true);
        assert_eq!(value["fips"], "48201");
    }
}
