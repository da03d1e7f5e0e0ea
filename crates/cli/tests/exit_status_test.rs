//! Exit statuses of the `lunch-menu` binary itself.

use lunch_menu::error::{EXIT_FETCH, EXIT_FORMAT, EXIT_INVALID_INPUT};
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MENU_JSON: &str = r#"{"FamilyMenuSessions": [{
  "ServingSession": "Lunch",
  "MenuPlans": [{ "MenuPlanName": "HS Lunch", "Days": [{
    "Date": "3/4/2024",
    "MenuMeals": [{ "RecipeCategories": [{ "Recipes": [{ "RecipeName": "Pizza" }] }] }]
  }]}]
}]}"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/FamilyMenu"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

async fn lunch_menu(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lunch-menu"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MENU_BASE_URL")
        .env_remove("MENU_BUILDING_ID")
        .env_remove("MENU_DISTRICT_ID")
        .output()
        .await
        .unwrap()
}

async fn run_against(server: &MockServer, out_dir: &Path) -> Output {
    let base_url = format!("{}/api/FamilyMenu", server.uri());
    let out_dir = out_dir.to_string_lossy().into_owned();
    lunch_menu(&[
        "--start",
        "2024-03-04",
        "--days",
        "3",
        "--no-color",
        "--base-url",
        base_url.as_str(),
        "--out-dir",
        out_dir.as_str(),
    ])
    .await
}

fn code(output: &Output) -> i32 {
    output.status.code().unwrap()
}

#[tokio::test]
async fn test_success_exits_zero() {
    let server = serve(200, MENU_JSON).await;
    let dir = TempDir::new().unwrap();

    let output = run_against(&server, dir.path()).await;

    assert_eq!(code(&output), 0);
    assert!(String::from_utf8_lossy(&output.stdout).contains("  - Pizza"));
    assert!(dir.path().join("menu.csv").exists());
}

#[tokio::test]
async fn test_server_error_exits_with_fetch_status() {
    let server = serve(500, "boom").await;
    let dir = TempDir::new().unwrap();

    let output = run_against(&server, dir.path()).await;

    assert_eq!(code(&output), i32::from(EXIT_FETCH));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Fetch error"));
}

#[tokio::test]
async fn test_unparseable_body_exits_with_format_status() {
    let server = serve(200, "not a menu <<<").await;
    let dir = TempDir::new().unwrap();

    let output = run_against(&server, dir.path()).await;

    assert_eq!(code(&output), i32::from(EXIT_FORMAT));
    assert!(dir.path().join("familymenu_raw.txt").exists());
}

#[tokio::test]
async fn test_rejected_arguments_exit_with_invalid_input_status() {
    for args in [
        &["--days", "0"][..],
        &["--days", "4000000000"][..],
        &["--start", "March 4"][..],
        &["--no-such-flag"][..],
    ] {
        let output = lunch_menu(args).await;
        assert_eq!(code(&output), i32::from(EXIT_INVALID_INPUT), "args {args:?}");
    }
}

#[tokio::test]
async fn test_help_exits_zero() {
    let output = lunch_menu(&["--help"]).await;

    assert_eq!(code(&output), 0);
    assert!(String::from_utf8_lossy(&output.stdout).contains("--days"));
}
