#![deny(clippy::all, clippy::pedantic)]

use pagewright::application::forms::CategoryForm;
use uuid::Uuid;

use crate::args::CategoriesCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: CategoriesCmd) -> Result<(), CliError> {
    match cmd {
        CategoriesCmd::List => print_json(&ctx.api.list_categories().await?),
        CategoriesCmd::Get { id } => print_json(&ctx.api.get_category(id).await?),
        CategoriesCmd::Create {
            name,
            slug,
            description,
        } => {
            let mut form = CategoryForm::new();
            if let Some(slug) = slug {
                form.slug = slug;
            }
            form.set_name(name);
            form.description = description;
            print_json(&ctx.api.create_category(&form.to_payload()?).await?)
        }
        CategoriesCmd::Update {
            id,
            name,
            slug,
            description,
        } => {
            let current = ctx.api.get_category(id).await?;
            let mut form = CategoryForm::from_category(&current);
            if let Some(name) = name {
                form.set_name(name);
            }
            if let Some(slug) = slug {
                form.slug = slug;
            }
            if let Some(description) = description {
                form.description = description;
            }
            print_json(&ctx.api.update_category(id, &form.to_payload()?).await?)
        }
        CategoriesCmd::Delete { id } => delete(ctx, id).await,
    }
}

async fn delete(ctx: &Ctx, id: Uuid) -> Result<(), CliError> {
    ctx.api.delete_category(id).await?;
    println!("deleted category {id}");
    Ok(())
}
