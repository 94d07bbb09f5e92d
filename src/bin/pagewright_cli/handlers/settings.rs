#![deny(clippy::all, clippy::pedantic)]

use pagewright::application::forms::{SettingsField, SettingsForm};

use crate::args::SettingsCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: SettingsCmd) -> Result<(), CliError> {
    match cmd {
        SettingsCmd::Get => print_json(&ctx.api.get_settings().await?),
        SettingsCmd::Set { field, value } => {
            let field = SettingsField::parse(&field, value)?;
            let mut form = SettingsForm::new(ctx.api.get_settings().await?);
            form.set(field);
            let saved = ctx.api.update_settings(&form.to_payload()?).await?;
            print_json(&saved)
        }
    }
}
