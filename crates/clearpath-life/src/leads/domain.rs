use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// The three form families the marketing site submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadKind {
    Quote,
    Contact,
    JobApplication,
}

impl LeadKind {
    pub const fn label(self) -> &'static str {
        match self {
            LeadKind::Quote => "quote",
            LeadKind::Contact => "contact",
            LeadKind::JobApplication => "job_application",
        }
    }

    pub const ALL: [LeadKind; 3] = [LeadKind::Quote, LeadKind::Contact, LeadKind::JobApplication];
}

/// Product lines offered on the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductLine {
    FinalExpense,
    Term,
    WholeLife,
}

impl ProductLine {
    pub const fn label(self) -> &'static str {
        match self {
            ProductLine::FinalExpense => "final expense",
            ProductLine::Term => "term",
            ProductLine::WholeLife => "whole life",
        }
    }
}

/// Quote request as posted by the "Get Quote" call-to-action. The coverage
/// amount arrives prefilled with the estimator's recommended coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub product: ProductLine,
    pub coverage_amount: i64,
    pub notes: Option<String>,
}

/// Message from the general contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Submission from the careers page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub years_experience: u8,
    pub licensed: bool,
    pub resume_key: Option<String>,
}

/// Tagged union accepted by the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeadSubmission {
    Quote(QuoteRequest),
    Contact(ContactMessage),
    JobApplication(JobApplication),
}

impl LeadSubmission {
    pub fn kind(&self) -> LeadKind {
        match self {
            LeadSubmission::Quote(_) => LeadKind::Quote,
            LeadSubmission::Contact(_) => LeadKind::Contact,
            LeadSubmission::JobApplication(_) => LeadKind::JobApplication,
        }
    }

    pub fn contact_name(&self) -> String {
        match self {
            LeadSubmission::Quote(quote) => {
                format!("{} {}", quote.first_name, quote.last_name)
            }
            LeadSubmission::Contact(message) => message.name.clone(),
            LeadSubmission::JobApplication(application) => application.name.clone(),
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            LeadSubmission::Quote(quote) => quote.email.as_deref(),
            LeadSubmission::Contact(message) => Some(message.email.as_str()),
            LeadSubmission::JobApplication(application) => Some(application.email.as_str()),
        }
    }

    /// Intake validation. Violations are wiring or user-input problems the
    /// site should have prevented; they are rejected, never defaulted.
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        match self {
            LeadSubmission::Quote(quote) => {
                let no_email = quote
                    .email
                    .as_deref()
                    .map_or(true, |value| value.trim().is_empty());
                let no_phone = quote
                    .phone
                    .as_deref()
                    .map_or(true, |value| value.trim().is_empty());
                if no_email && no_phone {
                    return Err(LeadValidationError::MissingContact);
                }
                if quote.coverage_amount <= 0 {
                    return Err(LeadValidationError::NonPositiveCoverage(
                        quote.coverage_amount,
                    ));
                }
            }
            LeadSubmission::Contact(message) => {
                if message.email.trim().is_empty() {
                    return Err(LeadValidationError::MissingEmail);
                }
                if message.body.trim().is_empty() {
                    return Err(LeadValidationError::EmptyMessage);
                }
            }
            LeadSubmission::JobApplication(application) => {
                if application.email.trim().is_empty() {
                    return Err(LeadValidationError::MissingEmail);
                }
                if application.position.trim().is_empty() {
                    return Err(LeadValidationError::MissingPosition);
                }
            }
        }

        Ok(())
    }
}

/// Rejection reasons surfaced to the submitting form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadValidationError {
    #[error("a quote request needs an email address or phone number")]
    MissingContact,
    #[error("requested coverage must be positive, got {0}")]
    NonPositiveCoverage(i64),
    #[error("an email address is required")]
    MissingEmail,
    #[error("message body must not be empty")]
    EmptyMessage,
    #[error("a position must be named")]
    MissingPosition,
}

/// Staff-facing lifecycle of a stored lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Received,
    Contacted,
    Converted,
    Closed,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::Received => "received",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Converted => "converted",
            LeadStatus::Closed => "closed",
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, LeadStatus::Received | LeadStatus::Contacted)
    }

    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::Received,
        LeadStatus::Contacted,
        LeadStatus::Converted,
        LeadStatus::Closed,
    ];
}
