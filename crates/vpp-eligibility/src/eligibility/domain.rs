use serde::{Deserialize, Serialize};

use super::utilities::UtilityMatch;

/// Benefits advertised to every eligible household, in display order.
pub const STANDARD_BENEFITS: [&str; 4] = [
    "Federal energy community rebate",
    "Free Sonnen battery installation",
    "Lower electricity rates",
    "Backup power protection",
];

/// Stable reason codes shared with the web client. Spelling must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    OutOfState,
    UnknownUtility,
    NotEnergyCommunity,
    RegulatedMarket,
    EnergyCommunityEligible,
    NoCounty,
    NotQualifyingCounty,
}

impl ReasonCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReasonCode::OutOfState => "out_of_state",
            ReasonCode::UnknownUtility => "unknown_utility",
            ReasonCode::NotEnergyCommunity => "not_energy_community",
            ReasonCode::RegulatedMarket => "regulated_market",
            ReasonCode::EnergyCommunityEligible => "energy_community_eligible",
            ReasonCode::NoCounty => "no_county",
            ReasonCode::NotQualifyingCounty => "not_qualifying_county",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict returned for a single address evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    pub reason: ReasonCode,
    pub message: String,
    pub utility: Option<UtilityMatch>,
    pub energy_community: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

impl EligibilityResult {
    pub fn summary(&self) -> String {
        let verdict = if self.eligible { "eligible" } else { "ineligible" };
        format!("{verdict} ({}): {}", self.reason, self.message)
    }
}

pub(crate) fn standard_benefits() -> Vec<String> {
    STANDARD_BENEFITS.iter().map(|benefit| benefit.to_string()).collect()
}
