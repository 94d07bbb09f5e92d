#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use pagewright::application::forms::{FormError, PageForm};
use pagewright::domain::blocks::decode_blocks;
use pagewright::infra::http::ListQuery;
use uuid::Uuid;

use crate::args::{PageStatusArg, PagesCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::slug_or_derived;
use crate::io::read_text;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: PagesCmd) -> Result<(), CliError> {
    match cmd {
        PagesCmd::List {
            status,
            search,
            limit,
            offset,
        } => list(ctx, status, search, limit, offset).await,
        PagesCmd::Get { id } => get(ctx, id).await,
        PagesCmd::Create {
            title,
            slug,
            status,
            blocks_file,
        } => create(ctx, title, slug, status, blocks_file).await,
        PagesCmd::Update {
            id,
            title,
            slug,
            status,
        } => update(ctx, id, title, slug, status).await,
        PagesCmd::Delete { id } => delete(ctx, id).await,
    }
}

async fn list(
    ctx: &Ctx,
    status: Option<PageStatusArg>,
    search: Option<String>,
    limit: u32,
    offset: u32,
) -> Result<(), CliError> {
    let query = ListQuery {
        limit: Some(limit),
        offset: Some(offset),
        status: status.map(|s| s.as_str().to_string()),
        search,
    };
    let res = ctx.api.list_pages(&query).await?;
    print_json(&res)
}

async fn get(ctx: &Ctx, id: Uuid) -> Result<(), CliError> {
    let page = ctx.api.get_page(id).await?;
    print_json(&page)
}

async fn create(
    ctx: &Ctx,
    title: String,
    slug: Option<String>,
    status: PageStatusArg,
    blocks_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut form = PageForm::new();
    form.slug = slug_or_derived(slug, &title)?;
    form.title = title;
    form.status = status.into();
    if let Some(path) = blocks_file {
        let blocks = decode_blocks(&read_text(&path)?).map_err(FormError::from)?;
        form.blocks.reset(blocks);
    }

    let page = ctx.api.create_page(&form.to_payload()?).await?;
    print_json(&page)
}

async fn update(
    ctx: &Ctx,
    id: Uuid,
    title: Option<String>,
    slug: Option<String>,
    status: Option<PageStatusArg>,
) -> Result<(), CliError> {
    let current = ctx.api.get_page(id).await?;
    let mut form = PageForm::from_page(&current)?;
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(slug) = slug {
        form.slug = slug;
    }
    if let Some(status) = status {
        form.status = status.into();
    }

    let page = ctx.api.update_page(id, &form.to_payload()?).await?;
    print_json(&page)
}

async fn delete(ctx: &Ctx, id: Uuid) -> Result<(), CliError> {
    ctx.api.delete_page(id).await?;
    println!("deleted page {id}");
    Ok(())
}
