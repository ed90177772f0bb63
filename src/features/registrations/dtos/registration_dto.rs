use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::registrations::models::SubmissionOutcome;

/// Raw form body. Missing fields arrive as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub firstname: String,

    #[serde(default)]
    pub email: String,
}

/// Trimmed candidate checked before anything touches the database
#[derive(Debug, Clone, Validate)]
pub struct RegistrationInput {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

impl From<RegistrationForm> for RegistrationInput {
    fn from(form: RegistrationForm) -> Self {
        Self {
            full_name: form.firstname.trim().to_string(),
            email: form.email.trim().to_string(),
        }
    }
}

/// Alert block rendered above the diagnostics panels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum AlertDto {
    Success { full_name: String, email: String },
    Warning,
    Danger,
}

impl From<SubmissionOutcome> for AlertDto {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Saved(registration) => AlertDto::Success {
                full_name: registration.full_name,
                email: registration.email,
            },
            SubmissionOutcome::Unavailable => AlertDto::Warning,
            SubmissionOutcome::InvalidInput => AlertDto::Danger,
        }
    }
}
