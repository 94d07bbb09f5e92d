#![deny(clippy::all, clippy::pedantic)]

use pagewright::application::listing::ResourceList;
use serde::Serialize;

use crate::args::{MediaCmd, UploadCmd};
use crate::client::{CliError, Ctx};
use crate::io::{file_name, read_bytes};
use crate::print::print_json;

#[derive(Serialize)]
struct UploadOutput<'a> {
    url: &'a str,
}

pub async fn handle(ctx: &Ctx, cmd: MediaCmd) -> Result<(), CliError> {
    match cmd {
        MediaCmd::List { images } => {
            let list = ResourceList::from_response(ctx.api.list_media().await?);
            let items: Vec<_> = list
                .items()
                .iter()
                .filter(|item| !images || item.is_image())
                .collect();
            print_json(&items)
        }
        MediaCmd::Get { name } => print_json(&ctx.api.get_media(&name).await?),
    }
}

pub async fn upload(ctx: &Ctx, cmd: UploadCmd) -> Result<(), CliError> {
    let url = match cmd {
        UploadCmd::File { path } => {
            let name = file_name(&path)?;
            ctx.api.upload(&name, read_bytes(&path)?).await?
        }
        UploadCmd::Url { url } => ctx.api.upload_from_url(&url).await?,
    };
    print_json(&UploadOutput { url: &url })
}
