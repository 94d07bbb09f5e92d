#![deny(clippy::all, clippy::pedantic)]

use pagewright::application::forms::ProfileForm;

use crate::args::ProfileCmd;
use crate::client::{CliError, Ctx};
use crate::io::read_password;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: ProfileCmd) -> Result<(), CliError> {
    match cmd {
        ProfileCmd::Show => print_json(&ctx.user),
        ProfileCmd::Update {
            name,
            new_password_file,
        } => {
            let mut form = ProfileForm::new(&ctx.user);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(path) = new_password_file {
                form.password = read_password(&path)?;
                form.confirm_password = form.password.clone();
            }
            ctx.api.update_profile(&form.to_update()?).await?;
            println!("profile updated");
            Ok(())
        }
    }
}
