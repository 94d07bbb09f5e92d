#![deny(clippy::all, clippy::pedantic)]

use pagewright::application::forms::UserForm;

use crate::args::UsersCmd;
use crate::client::{CliError, Ctx};
use crate::io::read_password;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: UsersCmd) -> Result<(), CliError> {
    match cmd {
        UsersCmd::List => print_json(&ctx.api.list_users().await?),
        UsersCmd::Get { id } => print_json(&ctx.api.get_user(id).await?),
        UsersCmd::Create {
            name,
            email,
            role,
            new_password_file,
        } => {
            let mut form = UserForm::new();
            form.name = name;
            form.email = email;
            form.password = read_password(&new_password_file)?;
            form.role = role.into();
            print_json(&ctx.api.create_user(&form.to_payload()?).await?)
        }
        UsersCmd::Update {
            id,
            name,
            email,
            role,
            new_password_file,
        } => {
            let current = ctx.api.get_user(id).await?;
            let mut form = UserForm::from_user(&current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(role) = role {
                form.role = role.into();
            }
            if let Some(path) = new_password_file {
                form.password = read_password(&path)?;
            }
            print_json(&ctx.api.update_user(id, &form.to_payload()?).await?)
        }
        UsersCmd::Delete { id } => {
            ctx.api.delete_user(id).await?;
            println!("deleted user {id}");
            Ok(())
        }
    }
}
