//! Registration page handlers

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::features::registrations::dtos::{AlertDto, RegistrationForm};
use crate::features::registrations::services::RegistrationService;
use crate::shared::templates::render_registration_page;

/// Render the empty registration form
pub async fn show_registration_page(
    State(service): State<Arc<RegistrationService>>,
) -> Result<Html<String>> {
    let page = render_registration_page::<AlertDto>(&service.server_info(), None)?;
    Ok(Html(page))
}

/// Handle a form submission
///
/// Always answers 200 with the page; the alert block carries the outcome.
pub async fn submit_registration(
    State(service): State<Arc<RegistrationService>>,
    AppForm(form): AppForm<RegistrationForm>,
) -> Result<Html<String>> {
    let outcome = service.submit(form).await;
    let alert = AlertDto::from(outcome);

    let page = render_registration_page(&service.server_info(), Some(&alert))?;
    Ok(Html(page))
}
