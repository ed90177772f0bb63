//! Registration form feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/`, `/{*path}` | Render the registration form |
//! | POST | `/`, `/{*path}` | Validate and store a registration, render the result |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PgRegistrationStore, RegistrationService};
