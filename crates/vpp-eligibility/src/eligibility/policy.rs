use super::counties::CountyStatus;
use super::domain::{standard_benefits, EligibilityResult, ReasonCode};
use super::utilities::UtilityLookup;

const TEXAS_ZIP_PREFIXES: [&str; 5] = ["75", "76", "77", "78", "79"];

/// Facts gathered for one address before the rule chain runs.
pub(crate) struct AddressSignals<'a> {
    pub zip_code: &'a str,
    /// Raw county input, used verbatim in the "not an energy community" message.
    pub county_input: Option<&'a str>,
    pub state: Option<&'a str>,
}

/// Result of the location gate that runs before any table lookup.
pub(crate) enum LocationGate {
    OutOfState,
    Texas,
}

pub(crate) fn location_gate(signals: &AddressSignals<'_>) -> LocationGate {
    let state = signals
        .state
        .map(str::trim)
        .filter(|state| !state.is_empty());
    let state_is_texas = state.map(is_texas_state).unwrap_or(false);

    if state.is_some() && !state_is_texas {
        return LocationGate::OutOfState;
    }

    if !state_is_texas && !is_texas_zip(signals.zip_code) {
        return LocationGate::OutOfState;
    }

    LocationGate::Texas
}

/// Apply the ordered qualification rules. The first matching rule wins.
pub(crate) fn decide_outcome(
    signals: &AddressSignals<'_>,
    utility: UtilityLookup<'_>,
    county: CountyStatus<'_>,
) -> EligibilityResult {
    let county_record = county.record();
    let qualifying_name = county_record
        .filter(|_| county.is_energy_community())
        .map(|record| record.name.clone());

    let Some(territory) = utility.territory() else {
        if let Some(name) = qualifying_name {
            return EligibilityResult {
                eligible: true,
                reason: ReasonCode::EnergyCommunityEligible,
                message: format!(
                    "{name} County is a federal energy community! Contact us to verify your utility provider."
                ),
                utility: None,
                energy_community: true,
                county: Some(name),
                benefits: Some(standard_benefits()),
            };
        }

        return EligibilityResult {
            eligible: false,
            reason: ReasonCode::UnknownUtility,
            message: "We couldn't verify your address. Please check the zip code or contact us directly."
                .to_string(),
            utility: None,
            energy_community: false,
            county: None,
            benefits: None,
        };
    };

    let Some(county_name) = qualifying_name else {
        let display = signals
            .county_input
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Your");
        return EligibilityResult {
            eligible: false,
            reason: ReasonCode::NotEnergyCommunity,
            message: format!(
                "{display} County is not currently designated as a federal energy community."
            ),
            utility: utility.into_match(),
            energy_community: false,
            county: None,
            benefits: None,
        };
    };

    if !territory.deregulated {
        return EligibilityResult {
            eligible: false,
            reason: ReasonCode::RegulatedMarket,
            message: format!(
                "Your area is served by {}, which operates in a regulated market. Energy community status confirmed for {county_name} County.",
                territory.name
            ),
            utility: utility.into_match(),
            energy_community: true,
            county: Some(county_name),
            benefits: None,
        };
    }

    EligibilityResult {
        eligible: true,
        reason: ReasonCode::EnergyCommunityEligible,
        message: format!(
            "Great news! {county_name} County qualifies as a federal energy community."
        ),
        utility: utility.into_match(),
        energy_community: true,
        county: Some(county_name),
        benefits: Some(standard_benefits()),
    }
}

pub(crate) fn out_of_state() -> EligibilityResult {
    EligibilityResult {
        eligible: false,
        reason: ReasonCode::OutOfState,
        message: "The energy community rebate is currently only available for Texas residents."
            .to_string(),
        utility: None,
        energy_community: false,
        county: None,
        benefits: None,
    }
}

fn is_texas_state(state: &str) -> bool {
    state.eq_ignore_ascii_case("tx") || state.eq_ignore_ascii_case("texas")
}

/// Texas zip codes start with 75 through 79.
pub(crate) fn is_texas_zip(zip: &str) -> bool {
    let zip = zip.trim();
    if zip.chars().count() < 5 {
        return false;
    }
    zip.get(..2)
        .map(|prefix| TEXAS_ZIP_PREFIXES.contains(&prefix))
        .unwrap_or(false)
}
