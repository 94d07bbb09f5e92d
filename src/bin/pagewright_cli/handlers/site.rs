#![deny(clippy::all, clippy::pedantic)]

use pagewright::config::ThemeSettings;
use pagewright::infra::theme::ThemeClient;

use crate::client::{CliError, Ctx};
use crate::print::print_json;

/// Public settings and the header/footer menus, as a theme renders them.
pub async fn chrome(settings: &ThemeSettings) -> Result<(), CliError> {
    let theme = ThemeClient::from_settings(settings)?;
    print_json(&theme.chrome().await)
}

pub async fn dashboard(ctx: &Ctx) -> Result<(), CliError> {
    print_json(&ctx.api.dashboard_stats().await?)
}
