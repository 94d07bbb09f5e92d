#![deny(clippy::all, clippy::pedantic)]

use pagewright::application::forms::PostForm;
use uuid::Uuid;

use crate::args::{PostStatusArg, PostsCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::slug_or_derived;
use crate::print::print_json;

struct PostCreateInput {
    title: String,
    slug: Option<String>,
    excerpt: String,
    featured_image: String,
    status: PostStatusArg,
    categories: Vec<Uuid>,
}

struct PostUpdateInput {
    id: Uuid,
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    featured_image: Option<String>,
    status: Option<PostStatusArg>,
    toggle_categories: Vec<Uuid>,
}

pub async fn handle(ctx: &Ctx, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::List { status } => list(ctx, status).await,
        PostsCmd::Get { id } => get(ctx, id).await,
        PostsCmd::Create {
            title,
            slug,
            excerpt,
            featured_image,
            status,
            categories,
        } => {
            let input = PostCreateInput {
                title,
                slug,
                excerpt,
                featured_image,
                status,
                categories,
            };
            create(ctx, input).await
        }
        PostsCmd::Update {
            id,
            title,
            slug,
            excerpt,
            featured_image,
            status,
            toggle_categories,
        } => {
            let input = PostUpdateInput {
                id,
                title,
                slug,
                excerpt,
                featured_image,
                status,
                toggle_categories,
            };
            update(ctx, input).await
        }
        PostsCmd::Delete { id } => delete(ctx, id).await,
    }
}

async fn list(ctx: &Ctx, status: Option<PostStatusArg>) -> Result<(), CliError> {
    let res = ctx.api.list_posts(status.map(Into::into)).await?;
    print_json(&res)
}

async fn get(ctx: &Ctx, id: Uuid) -> Result<(), CliError> {
    let post = ctx.api.get_post(id).await?;
    print_json(&post)
}

async fn create(ctx: &Ctx, input: PostCreateInput) -> Result<(), CliError> {
    let mut form = PostForm::new();
    form.slug = slug_or_derived(input.slug, &input.title)?;
    form.title = input.title;
    form.excerpt = input.excerpt;
    form.featured_image = input.featured_image;
    form.status = input.status.into();
    for id in input.categories {
        if !form.categories.contains(&id) {
            form.toggle_category(id);
        }
    }

    let post = ctx.api.create_post(&form.to_payload()?).await?;
    print_json(&post)
}

async fn update(ctx: &Ctx, input: PostUpdateInput) -> Result<(), CliError> {
    let current = ctx.api.get_post(input.id).await?;
    let mut form = PostForm::from_post(&current)?;
    if let Some(title) = input.title {
        form.title = title;
    }
    if let Some(slug) = input.slug {
        form.slug = slug;
    }
    if let Some(excerpt) = input.excerpt {
        form.excerpt = excerpt;
    }
    if let Some(image) = input.featured_image {
        form.featured_image = image;
    }
    if let Some(status) = input.status {
        form.status = status.into();
    }
    for id in input.toggle_categories {
        form.toggle_category(id);
    }

    let post = ctx.api.update_post(input.id, &form.to_payload()?).await?;
    print_json(&post)
}

async fn delete(ctx: &Ctx, id: Uuid) -> Result<(), CliError> {
    ctx.api.delete_post(id).await?;
    println!("deleted post {id}");
    Ok(())
}
