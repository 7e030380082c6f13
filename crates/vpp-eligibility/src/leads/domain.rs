use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

/// How sure the household is that it clears the program's credit bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditComfort {
    Confident,
    Close,
    Unsure,
    Unlikely,
}

impl CreditComfort {
    pub fn label(&self) -> &'static str {
        match self {
            CreditComfort::Confident => "Yes",
            CreditComfort::Close => "Probably",
            CreditComfort::Unsure => "Unknown",
            CreditComfort::Unlikely => "Unlikely",
        }
    }
}

/// Answers collected by the qualification wizard. Unanswered questions stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualificationAnswers {
    pub is_homeowner: Option<bool>,
    pub has_solar: Option<bool>,
    pub credit_comfort: Option<CreditComfort>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisqualificationReason {
    NotHomeowner,
    CreditUnlikely,
}

impl DisqualificationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisqualificationReason::NotHomeowner => "not_homeowner",
            DisqualificationReason::CreditUnlikely => "credit_unlikely",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DisqualificationReason::NotHomeowner => {
                "This program is only available to homeowners."
            }
            DisqualificationReason::CreditUnlikely => "This program has credit requirements.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentWindow {
    Morning,
    Afternoon,
    Evening,
}

impl AppointmentWindow {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentWindow::Morning => "9:00 AM - 12:00 PM",
            AppointmentWindow::Afternoon => "12:00 PM - 5:00 PM",
            AppointmentWindow::Evening => "5:00 PM - 8:00 PM",
        }
    }
}

/// Consultation slot requested by the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub day: NaiveDate,
    pub window: AppointmentWindow,
}

impl Appointment {
    pub fn describe(&self) -> String {
        format!("{} {}", self.day.format("%A, %B %-d"), self.window.label())
    }
}

/// Landing-page journey the visitor picked before starting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPath {
    Savings,
    Protection,
    Freedom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    Hero,
    #[default]
    Contact,
    /// Email-only signup from an out-of-area check; the hero form posts it as "hero-waitlist".
    #[serde(alias = "hero-waitlist")]
    Waitlist,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Hero => "hero",
            FormType::Contact => "contact",
            FormType::Waitlist => "waitlist",
        }
    }
}

/// Marketing attribution captured with the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attribution {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

/// Raw lead as posted by the web forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub answers: QualificationAnswers,
    #[serde(default)]
    pub appointment: Option<Appointment>,
    #[serde(default)]
    pub journey_path: Option<JourneyPath>,
    #[serde(default)]
    pub form_type: FormType,
    #[serde(default)]
    pub attribution: Attribution,
}

/// Follow-up bucket assigned at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Qualified,
    NeedsReview,
    Waitlisted,
}

impl LeadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::Qualified => "qualified",
            LeadStatus::NeedsReview => "needs_review",
            LeadStatus::Waitlisted => "waitlisted",
        }
    }
}
