//! HTML page rendering.
//!
//! Pages live in `templates/pages/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::context;
use serde::Serialize;

use crate::shared::server_info::ServerInfo;

/// Render the registration page.
///
/// # Arguments
/// * `server` - Diagnostics shown in the info strip and panels
/// * `alert` - Result of a submission, rendered above the panels when present
pub fn render_registration_page<A: Serialize>(
    server: &ServerInfo,
    alert: Option<&A>,
) -> Result<String, TemplateError> {
    render_template("index.html", context! { server => server, alert => alert })
}
