use std::sync::Arc;

use crate::core::config::SiteConfig;
use crate::core::error::SubmissionError;
use crate::features::registrations::dtos::RegistrationForm;
use crate::features::registrations::models::{Registration, SubmissionOutcome};
use crate::features::registrations::services::RegistrationStore;
use crate::shared::server_info::ServerInfo;

/// Service handling form submissions
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
    site: SiteConfig,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn RegistrationStore>, site: SiteConfig) -> Self {
        Self { store, site }
    }

    /// Diagnostics for the page, read at call time
    pub fn server_info(&self) -> ServerInfo {
        ServerInfo::collect(&self.site)
    }

    /// Run one submission to completion. Never fails: backend faults are
    /// logged and reported as [`SubmissionOutcome::Unavailable`].
    pub async fn submit(&self, form: RegistrationForm) -> SubmissionOutcome {
        match self.register(form).await {
            Ok(registration) => SubmissionOutcome::Saved(registration),
            Err(SubmissionError::Validation(_)) => SubmissionOutcome::InvalidInput,
            Err(e) => {
                tracing::error!("Failed to save registration: {:?}", e);
                SubmissionOutcome::Unavailable
            }
        }
    }

    /// Validate the form and persist it.
    pub async fn register(
        &self,
        form: RegistrationForm,
    ) -> Result<Registration, SubmissionError> {
        let registration = Registration::parse(form)?;

        self.store.insert(&registration).await?;

        tracing::info!("Registration saved");

        Ok(registration)
    }
}
