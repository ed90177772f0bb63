use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::registrations::handlers;
use crate::features::registrations::services::RegistrationService;

/// Create routes for the registration page
///
/// The page answers on every path, like a single front controller script.
pub fn routes(service: Arc<RegistrationService>) -> Router {
    let page = get(handlers::show_registration_page).post(handlers::submit_registration);

    Router::new()
        .route("/", page.clone())
        .route("/{*path}", page)
        .with_state(service)
}
