mod registration_service;
mod registration_store;

pub use registration_service::RegistrationService;
pub use registration_store::{PgRegistrationStore, RegistrationStore};
