use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

/// Where on the site a lead was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    HomepageIntentBuy,
    HomepageIntentSell,
    HomepageIntentInvest,
    HomepageIntentRent,
    HomepageStickyCta,
    HomepageChatbot,
    PropertyInquiry,
    PropertyScheduleTour,
    GuideDownload,
    NewsletterSignup,
    BlogCta,
    CalculatorResults,
    AboutSchedule,
    ContactForm,
}

impl LeadSource {
    pub const ALL: [LeadSource; 14] = [
        LeadSource::HomepageIntentBuy,
        LeadSource::HomepageIntentSell,
        LeadSource::HomepageIntentInvest,
        LeadSource::HomepageIntentRent,
        LeadSource::HomepageStickyCta,
        LeadSource::HomepageChatbot,
        LeadSource::PropertyInquiry,
        LeadSource::PropertyScheduleTour,
        LeadSource::GuideDownload,
        LeadSource::NewsletterSignup,
        LeadSource::BlogCta,
        LeadSource::CalculatorResults,
        LeadSource::AboutSchedule,
        LeadSource::ContactForm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::HomepageIntentBuy => "homepage_intent_buy",
            LeadSource::HomepageIntentSell => "homepage_intent_sell",
            LeadSource::HomepageIntentInvest => "homepage_intent_invest",
            LeadSource::HomepageIntentRent => "homepage_intent_rent",
            LeadSource::HomepageStickyCta => "homepage_sticky_cta",
            LeadSource::HomepageChatbot => "homepage_chatbot",
            LeadSource::PropertyInquiry => "property_inquiry",
            LeadSource::PropertyScheduleTour => "property_schedule_tour",
            LeadSource::GuideDownload => "guide_download",
            LeadSource::NewsletterSignup => "newsletter_signup",
            LeadSource::BlogCta => "blog_cta",
            LeadSource::CalculatorResults => "calculator_results",
            LeadSource::AboutSchedule => "about_schedule",
            LeadSource::ContactForm => "contact_form",
        }
    }

    pub fn parse(raw: &str) -> Option<LeadSource> {
        Self::ALL.into_iter().find(|source| source.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadType {
    Contact,
    Valuation,
    GuideDownload,
    PropertyInquiry,
}

impl LeadType {
    pub const ALL: [LeadType; 4] = [
        LeadType::Contact,
        LeadType::Valuation,
        LeadType::GuideDownload,
        LeadType::PropertyInquiry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadType::Contact => "contact",
            LeadType::Valuation => "valuation",
            LeadType::GuideDownload => "guide_download",
            LeadType::PropertyInquiry => "property_inquiry",
        }
    }

    pub fn parse(raw: &str) -> Option<LeadType> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// What the visitor wants to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadIntent {
    Buy,
    Sell,
    Invest,
    Rent,
}

impl LeadIntent {
    pub const ALL: [LeadIntent; 4] = [
        LeadIntent::Buy,
        LeadIntent::Sell,
        LeadIntent::Invest,
        LeadIntent::Rent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadIntent::Buy => "buy",
            LeadIntent::Sell => "sell",
            LeadIntent::Invest => "invest",
            LeadIntent::Rent => "rent",
        }
    }

    pub fn parse(raw: &str) -> Option<LeadIntent> {
        Self::ALL.into_iter().find(|intent| intent.as_str() == raw)
    }
}

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_MESSAGE_LEN: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("Name is required")]
    MissingName,

    #[error("Name must be at most 100 characters")]
    NameTooLong,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Message must be at most 1000 characters")]
    MessageTooLong,

    #[error("Source URL must be an absolute http(s) URL")]
    InvalidSourceUrl,
}

/// Lead form payload as posted by the site
#[derive(Debug, Clone, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub language: Language,
    #[serde(default)]
    pub intent: Option<LeadIntent>,
    pub source: LeadSource,
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub source_url: String,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub guide_id: Option<String>,
}

/// A stored lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub source: LeadSource,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub language: Language,
    pub source_url: String,
    pub message: Option<String>,
    pub property_id: Option<String>,
    pub guide_id: Option<String>,
    pub intent: Option<LeadIntent>,
    pub synced_to_crm: bool,
    pub crm_sync_attempts: i32,
}

impl Lead {
    /// Check a submission and stamp the server-generated fields.
    pub fn from_submission(submission: LeadSubmission) -> Result<Lead, LeadError> {
        let name = submission.name.trim();
        if name.is_empty() {
            return Err(LeadError::MissingName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(LeadError::NameTooLong);
        }

        let email = submission.email.trim();
        if !is_plausible_email(email) {
            return Err(LeadError::InvalidEmail);
        }

        let phone = non_blank(submission.phone);
        if let Some(phone) = &phone {
            if phone.len() > MAX_PHONE_LEN || !is_phone_like(phone) {
                return Err(LeadError::InvalidPhone);
            }
        }

        let message = non_blank(submission.message);
        if message
            .as_ref()
            .is_some_and(|m| m.chars().count() > MAX_MESSAGE_LEN)
        {
            return Err(LeadError::MessageTooLong);
        }

        let source_url = submission.source_url.trim();
        if !is_page_url(source_url) {
            return Err(LeadError::InvalidSourceUrl);
        }

        Ok(Lead {
            id: Uuid::new_v4(),
            source: submission.source,
            timestamp: Utc::now(),
            lead_type: submission.lead_type,
            name: name.to_string(),
            email: email.to_string(),
            phone,
            language: submission.language,
            source_url: source_url.to_string(),
            message,
            property_id: non_blank(submission.property_id),
            guide_id: non_blank(submission.guide_id),
            intent: submission.intent,
            synced_to_crm: false,
            crm_sync_attempts: 0,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Absolute http(s) URL with a host, as sent by the site's forms.
fn is_page_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

fn is_phone_like(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}
