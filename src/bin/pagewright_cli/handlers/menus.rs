#![deny(clippy::all, clippy::pedantic)]

use pagewright::application::forms::MenuForm;
use pagewright::domain::menu::MenuItemField;
use uuid::Uuid;

use crate::args::MenusCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: MenusCmd) -> Result<(), CliError> {
    match cmd {
        MenusCmd::List => print_json(&ctx.api.list_menus().await?),
        MenusCmd::Get { id } => print_json(&ctx.api.get_menu(id).await?),
        MenusCmd::Public { id } => print_json(&ctx.api.get_public_menu(&id).await?),
        MenusCmd::Create { name, description } => {
            let form = MenuForm {
                name,
                description,
                ..MenuForm::new()
            };
            print_json(&ctx.api.create_menu(&form.to_payload()?).await?)
        }
        MenusCmd::Update {
            id,
            name,
            description,
        } => {
            edit(ctx, id, |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(description) = description {
                    form.description = description;
                }
                Ok(())
            })
            .await
        }
        MenusCmd::AddItem {
            id,
            label,
            url,
            target,
        } => {
            edit(ctx, id, |form| {
                form.items.add();
                let index = form.items.len() - 1;
                form.items.update(index, MenuItemField::Label(label));
                form.items.update(index, MenuItemField::Url(url));
                form.items.update(index, MenuItemField::Target(target));
                Ok(())
            })
            .await
        }
        MenusCmd::RemoveItem { id, index } => {
            edit(ctx, id, |form| {
                if form.items.remove(index) {
                    Ok(())
                } else {
                    Err(no_such_item(index))
                }
            })
            .await
        }
        MenusCmd::MoveItem {
            id,
            index,
            direction,
        } => {
            edit(ctx, id, |form| {
                if index >= form.items.len() {
                    return Err(no_such_item(index));
                }
                // A move past either end leaves the menu as it was.
                form.items.move_item(index, direction);
                Ok(())
            })
            .await
        }
        MenusCmd::Delete { id } => {
            ctx.api.delete_menu(id).await?;
            println!("deleted menu {id}");
            Ok(())
        }
    }
}

/// Load the menu, apply `change` to its form and save it.
async fn edit<F>(ctx: &Ctx, id: Uuid, change: F) -> Result<(), CliError>
where
    F: FnOnce(&mut MenuForm) -> Result<(), CliError>,
{
    let current = ctx.api.get_menu(id).await?;
    let mut form = MenuForm::from_menu(&current);
    change(&mut form)?;
    let saved = ctx.api.update_menu(id, &form.to_payload()?).await?;
    print_json(&saved)
}

fn no_such_item(index: usize) -> CliError {
    CliError::InvalidInput(format!("menu has no item at index {index}"))
}
