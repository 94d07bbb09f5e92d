//! pagewright-cli: content administration over the Pagewright HTTP API.
//! Edits go through the same forms and block editor the library exposes.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;

use std::process::ExitCode;

use clap::Parser;
use pagewright::application::error::ErrorReport;
use pagewright::config;
use pagewright::infra::telemetry;
use tracing::warn;

use args::{Cli, Commands};
use client::{CliError, Ctx, credentials_from_cli};
use handlers::{
    blocks, categories, media, menus, pages, posts, profile, settings, site, users,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", ErrorReport::from_error("pagewright-cli", &err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::load(&cli.config)?;
    telemetry::init(&settings.logging)?;

    if !cli.command.requires_login() {
        return site::chrome(&settings.theme).await;
    }

    let credentials = credentials_from_cli(&cli)?;
    let ctx = Ctx::sign_in(&settings.api, &credentials).await?;

    let result = match cli.command {
        Commands::Pages(cmd) => pages::handle(&ctx, cmd.action).await,
        Commands::Posts(cmd) => posts::handle(&ctx, cmd.action).await,
        Commands::Categories(cmd) => categories::handle(&ctx, cmd.action).await,
        Commands::Menus(cmd) => menus::handle(&ctx, cmd.action).await,
        Commands::Users(cmd) => users::handle(&ctx, cmd.action).await,
        Commands::Media(cmd) => media::handle(&ctx, cmd.action).await,
        Commands::Settings(cmd) => settings::handle(&ctx, cmd.action).await,
        Commands::Upload(cmd) => media::upload(&ctx, cmd.action).await,
        Commands::Dashboard => site::dashboard(&ctx).await,
        Commands::Profile(cmd) => profile::handle(&ctx, cmd.action).await,
        Commands::Blocks(cmd) => blocks::handle(&ctx, cmd.target, cmd.action).await,
        Commands::Site => site::chrome(&settings.theme).await,
    };

    if ctx.session_expired() {
        warn!(user = %ctx.user.email, "session expired; sign in again");
    }
    result
}

#[cfg(test)]
mod tests;
