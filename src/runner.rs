// Smoke run: login, create the configured category, list all categories.
// Progress goes to `out` so the binary can hand in stdout and tests a
// buffer. A spinner runs on stderr while each request is in flight.

use std::io::Write;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::api::{ApiClient, ResponseBody};
use crate::config::SmokeConfig;
use crate::error::SmokeError;
use crate::output::{lists_category, write_body};

/// Outcome of a run that got past login.
#[derive(Debug)]
pub struct RunReport {
    pub create_status: u16,
    pub created: ResponseBody,
    pub categories: ResponseBody,
    /// `Some(found)` when the list was a JSON array, `None` otherwise.
    pub category_listed: Option<bool>,
}

/// Run the three calls in order against `config.base_url`.
///
/// Only login problems (and transport errors) end the run early; the
/// create and list answers are printed whatever their status.
pub fn run<W: Write>(config: &SmokeConfig, out: &mut W) -> Result<RunReport, SmokeError> {
    let mut api = ApiClient::new(config)?;

    writeln!(out, "🔐 Login...")?;
    let login = with_spinner("Logging in...", || api.login());
    let token = match login {
        Ok(token) => token,
        Err(SmokeError::LoginRejected { status, body }) => {
            writeln!(out, "❌ Login failed: {}", status)?;
            writeln!(out, "{}", body)?;
            return Err(SmokeError::LoginRejected { status, body });
        }
        Err(e) => return Err(e),
    };
    api.set_token(&token);
    writeln!(out, "✅ Login successful")?;

    writeln!(out, "\n📝 Creating test category...")?;
    let created = with_spinner("Creating category...", || api.create_category())?;
    info!(status = created.status.as_u16(), "category create answered");
    writeln!(out, "Response status: {}", created.status.as_u16())?;
    write_body(out, &created.body)?;

    writeln!(out, "\n📋 Listing all categories...")?;
    let listed = with_spinner("Listing categories...", || api.list_categories())?;
    info!(status = listed.status.as_u16(), "category list answered");
    write_body(out, &listed.body)?;

    let id = &config.category.id;
    let category_listed = listed
        .body
        .as_json()
        .and_then(|list| lists_category(list, id));
    match category_listed {
        Some(true) => writeln!(out, "✅ Category '{}' found in list", id)?,
        Some(false) => writeln!(out, "⚠️ Category '{}' not found in list", id)?,
        None => {}
    }

    Ok(RunReport {
        create_status: created.status.as_u16(),
        created: created.body,
        categories: listed.body,
        category_listed,
    })
}

/// Show a spinner on stderr while `f` runs.
fn with_spinner<T>(msg: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}
