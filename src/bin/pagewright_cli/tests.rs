#![deny(clippy::all, clippy::pedantic)]

use clap::Parser;
use httpmock::MockServer;
use pagewright::application::editor::Direction;
use pagewright::application::forms::FormError;
use pagewright::domain::blocks::BlockType;
use pagewright::infra::http::ApiClient;
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::args::{BlockTarget, BlocksCmd, Cli, MenusCmd, PagesCmd, SettingsCmd};
use crate::client::{CliError, Credentials, Ctx, credentials_from_cli};
use crate::handlers::{blocks, menus, pages, settings};

const PAGE_ID: &str = "9b2d8c4e-0f6a-4d8e-b1a3-5c7e9f0a2b4d";
const MENU_ID: &str = "5e0f7f5e-3c1a-4c55-9c0e-2b1d4f6a8c90";
const POST_ID: &str = "5f0c6c52-3c3c-4d43-9a8e-1b1a7b8f0d11";

fn tmp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write tmp");
    file
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pagewright-cli").chain(args.iter().copied()))
        .expect("valid arguments")
}

fn page_id() -> Uuid {
    PAGE_ID.parse().expect("uuid")
}

fn page_body(blocks: &str) -> String {
    format!(
        r#"{{"id":"{PAGE_ID}","slug":"home","title":"Home","blocks":{blocks},"status":"draft","created_at":"2026-01-05T10:00:00Z","updated_at":"2026-01-05T10:00:00Z"}}"#
    )
}

fn mock_sign_in(server: &MockServer) {
    server.mock(|when, then| {
        when.method("POST")
            .path("/api/auth/login")
            .json_body_includes(r#"{"email":"ada@example.com"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .header("set-cookie", "session=abc; Path=/; HttpOnly")
            .body(r#"{"success":true,"message":"Login successful"}"#);
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/auth/me");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"user":{"id":"0b7f2a52-9d2e-4bb5-8d63-0f7d3ad0c001","name":"Ada","email":"ada@example.com","role":"admin"}}"#);
    });
}

async fn ctx(server: &MockServer) -> Ctx {
    mock_sign_in(server);
    let api = ApiClient::new(&server.base_url()).expect("client");
    let credentials = Credentials {
        email: "ada@example.com".into(),
        password: "secret1".into(),
    };
    Ctx::sign_in_with(api, &credentials).await.expect("signed in")
}

fn page_target() -> BlockTarget {
    BlockTarget {
        page: Some(page_id()),
        post: None,
    }
}

#[test]
fn password_file_wins_over_env() -> Result<(), CliError> {
    let file = tmp_file("from-file\n");
    let path = file.path().display().to_string();
    let mut cli = parse(&["--email", "ada@example.com", "--password-file", &path, "dashboard"]);
    cli.password_env = Some("from-env".into());

    let credentials = credentials_from_cli(&cli)?;
    assert_eq!(credentials.password, "from-file");
    assert!(!format!("{credentials:?}").contains("from-file"));
    Ok(())
}

#[test]
fn missing_email_or_password_is_reported() {
    let mut cli = parse(&["dashboard"]);
    cli.email = None;
    cli.password_file = None;
    cli.password_env = Some("secret1".into());
    assert!(matches!(credentials_from_cli(&cli), Err(CliError::MissingEmail)));

    cli.email = Some("ada@example.com".into());
    cli.password_env = None;
    assert!(matches!(credentials_from_cli(&cli), Err(CliError::MissingPassword)));
}

#[test]
fn blocks_need_exactly_one_target() {
    let both = Cli::try_parse_from([
        "pagewright-cli",
        "blocks",
        "--page",
        PAGE_ID,
        "--post",
        PAGE_ID,
        "list",
    ]);
    assert!(both.is_err());

    let neither = Cli::try_parse_from(["pagewright-cli", "blocks", "list"]);
    assert!(neither.is_err());

    let cli = parse(&["blocks", "--page", PAGE_ID, "move", "2", "up"]);
    assert!(cli.command.requires_login());
}

#[test]
fn site_command_skips_sign_in() {
    let cli = parse(&["site"]);
    assert!(!cli.command.requires_login());
}

#[tokio::test]
async fn rejected_credentials_surface_the_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/auth/login");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"error":"Invalid credentials"}"#);
    });

    let api = ApiClient::new(&server.base_url()).expect("client");
    let credentials = Credentials {
        email: "ada@example.com".into(),
        password: "wrong".into(),
    };
    let err = Ctx::sign_in_with(api, &credentials)
        .await
        .expect_err("rejected");
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn pages_create_derives_the_slug() -> Result<(), CliError> {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/v1/pages")
            .json_body_includes(r#"{"title":"About Us","slug":"about-us","status":"published"}"#);
        then.status(201)
            .header("content-type", "application/json")
            .body(page_body("[]"));
    });

    pages::handle(
        &ctx,
        PagesCmd::Create {
            title: "About Us".into(),
            slug: None,
            status: crate::args::PageStatusArg::Published,
            blocks_file: None,
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn blocks_add_saves_the_whole_sequence() -> Result<(), CliError> {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    server.mock(|when, then| {
        when.method("GET").path(format!("/api/v1/pages/{PAGE_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body(
                r#"[{"id":"keep","type":"carousel","data":{"slides":[1]}}]"#,
            ));
    });
    let put = server.mock(|when, then| {
        when.method("PUT")
            .path(format!("/api/v1/pages/{PAGE_ID}"))
            .body_includes(r#"{"id":"keep","type":"carousel","data":{"slides":[1]}}"#)
            .body_includes(r#""type":"hero""#);
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body("[]"));
    });

    blocks::handle(
        &ctx,
        page_target(),
        BlocksCmd::Add {
            block_type: BlockType::Hero,
        },
    )
    .await?;
    put.assert();
    Ok(())
}

#[tokio::test]
async fn blocks_set_edits_one_field() -> Result<(), CliError> {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    server.mock(|when, then| {
        when.method("GET").path(format!("/api/v1/pages/{PAGE_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body(
                r#"[{"id":"h1","type":"hero","data":{"title":"Old","cta_label":"Go"}}]"#,
            ));
    });
    let put = server.mock(|when, then| {
        when.method("PUT")
            .path(format!("/api/v1/pages/{PAGE_ID}"))
            .body_includes(r#""title":"Welcome""#)
            .body_includes(r#""cta_label":"Go""#);
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body("[]"));
    });

    blocks::handle(
        &ctx,
        page_target(),
        BlocksCmd::Set {
            index: 0,
            field: "title".into(),
            value: "Welcome".into(),
        },
    )
    .await?;
    put.assert();
    Ok(())
}

#[tokio::test]
async fn blocks_add_keeps_a_stored_slug_as_is() -> Result<(), CliError> {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    let body = page_body(r#"[{"id":"h1","type":"hero","data":{"title":"Hi"}}]"#)
        .replace(r#""slug":"home""#, r#""slug":"About_Us""#);
    server.mock(move |when, then| {
        when.method("GET").path(format!("/api/v1/pages/{PAGE_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });
    let put = server.mock(|when, then| {
        when.method("PUT")
            .path(format!("/api/v1/pages/{PAGE_ID}"))
            .body_includes(r#""slug":"About_Us""#)
            .body_includes(r#""type":"text""#);
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body("[]"));
    });

    blocks::handle(
        &ctx,
        page_target(),
        BlocksCmd::Add {
            block_type: BlockType::Text,
        },
    )
    .await?;
    put.assert();
    Ok(())
}

#[tokio::test]
async fn blocks_refuse_to_edit_unreadable_post_content() {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    server.mock(|when, then| {
        when.method("GET").path(format!("/api/v1/posts/{POST_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(
                r#"{{"id":"{POST_ID}","slug":"launch","title":"Launch","content":"<p>legacy html</p>","status":"draft","created_at":"2026-01-05T10:00:00Z","updated_at":"2026-01-05T10:00:00Z"}}"#
            ));
    });

    // No PUT mock: the stored content must not be replaced.
    let target = BlockTarget {
        page: None,
        post: Some(POST_ID.parse().expect("uuid")),
    };
    let err = blocks::handle(
        &ctx,
        target,
        BlocksCmd::Add {
            block_type: BlockType::Hero,
        },
    )
    .await
    .expect_err("unreadable content");
    assert!(matches!(err, CliError::Form(FormError::Codec(_))));
}

#[tokio::test]
async fn blocks_move_past_the_edge_does_not_save() -> Result<(), CliError> {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    server.mock(|when, then| {
        when.method("GET").path(format!("/api/v1/pages/{PAGE_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body(r#"[{"id":"a","type":"text","data":{"content":"x"}}]"#));
    });

    // No PUT mock: a save attempt would fail with 404.
    blocks::handle(
        &ctx,
        page_target(),
        BlocksCmd::Move {
            index: 0,
            direction: Direction::Up,
        },
    )
    .await?;
    Ok(())
}

#[tokio::test]
async fn blocks_out_of_range_index_is_an_error() {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    server.mock(|when, then| {
        when.method("GET").path(format!("/api/v1/pages/{PAGE_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body("[]"));
    });

    let err = blocks::handle(&ctx, page_target(), BlocksCmd::Remove { index: 3 })
        .await
        .expect_err("no block 3");
    assert!(matches!(err, CliError::Edit(_)));
}

#[tokio::test]
async fn blocks_preview_writes_html() -> Result<(), CliError> {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    server.mock(|when, then| {
        when.method("GET").path(format!("/api/v1/pages/{PAGE_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(page_body(r#"[{"id":"h1","type":"hero","data":{"title":"Hi"}}]"#));
    });

    let out = NamedTempFile::new().expect("tmp file");
    blocks::handle(
        &ctx,
        page_target(),
        BlocksCmd::Preview {
            out: Some(out.path().to_path_buf()),
        },
    )
    .await?;
    let html = std::fs::read_to_string(out.path()).expect("read preview");
    assert!(html.contains("<h3>Hero</h3>"));
    assert!(html.contains(r#"value="Hi""#));
    Ok(())
}

#[tokio::test]
async fn menus_add_item_appends_and_saves() -> Result<(), CliError> {
    let server = MockServer::start();
    let ctx = ctx(&server).await;
    let menu = format!(
        r#"{{"id":"{MENU_ID}","name":"Header","items":[{{"label":"Home","url":"/"}}],"created_at":"2026-01-05T10:00:00Z","updated_at":"2026-01-05T10:00:00Z"}}"#
    );
    let menu_for_get = menu.clone();
    server.mock(move |when, then| {
        when.method("GET").path(format!("/api/v1/menus/{MENU_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(menu_for_get);
    });
    let put = server.mock(move |when, then| {
        when.method("PUT")
            .path(format!("/api/v1/menus/{MENU_ID}"))
            .json_body_includes(
                r#"{"name":"Header","items":[{"label":"Home","url":"/"},{"label":"Blog","url":"/blog","target":"_blank"}]}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(menu);
    });

    menus::handle(
        &ctx,
        MenusCmd::AddItem {
            id: MENU_ID.parse().expect("uuid"),
            label: "Blog".into(),
            url: "/blog".into(),
            target: "_blank".into(),
        },
    )
    .await?;
    put.assert();
    Ok(())
}

#[tokio::test]
async fn settings_set_rejects_unknown_fields_before_any_request() {
    let server = MockServer::start();
    let ctx = ctx(&server).await;

    let err = settings::handle(
        &ctx,
        SettingsCmd::Set {
            field: "theme_color".into(),
            value: "red".into(),
        },
    )
    .await
    .expect_err("unknown field");
    assert!(matches!(
        err,
        CliError::Form(FormError::UnknownSetting { .. })
    ));
}
