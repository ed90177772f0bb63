use validator::Validate;

use crate::core::error::SubmissionError;
use crate::features::registrations::dtos::{RegistrationForm, RegistrationInput};

/// A validated name/email pair, persisted as one row of `data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
}

impl Registration {
    /// Trim both fields and reject the pair if either ends up empty.
    pub fn parse(form: RegistrationForm) -> Result<Self, SubmissionError> {
        let input = RegistrationInput::from(form);
        input
            .validate()
            .map_err(|e| SubmissionError::Validation(e.to_string()))?;

        Ok(Self {
            full_name: input.full_name,
            email: input.email,
        })
    }
}

/// How a single POST ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Saved(Registration),
    InvalidInput,
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(firstname: &str, email: &str) -> RegistrationForm {
        RegistrationForm {
            firstname: firstname.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_parse_valid() {
        let registration = Registration::parse(form(" Grace Hopper ", "grace@example.com")).unwrap();
        assert_eq!(registration.full_name, "Grace Hopper");
        assert_eq!(registration.email, "grace@example.com");
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        assert!(matches!(
            Registration::parse(form("", "grace@example.com")),
            Err(SubmissionError::Validation(_))
        ));
        assert!(matches!(
            Registration::parse(form("Grace", "  ")),
            Err(SubmissionError::Validation(_))
        ));
        assert!(matches!(
            Registration::parse(RegistrationForm::default()),
            Err(SubmissionError::Validation(_))
        ));
    }

    #[test]
    fn test_email_shape_not_enforced() {
        // Only emptiness is checked on the server
        assert!(Registration::parse(form("Grace", "not-an-email")).is_ok());
    }
}
