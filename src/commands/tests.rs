use super::*;
use crate::fakes;

#[tokio::test]
async fn test_launches_prints_visible_cards() {
    let site = fakes::site(Ok(fakes::launches(5)), Ok(fakes::apod("image")));
    let out = launches(&site, Language::English, 1440, false).await;
    let title = tayf_core::i18n::t(TextKey::LaunchesListTitle, Language::English);
    assert!(out.starts_with(&format!("{title}\n")));
    assert_eq!(out.matches("Falcon 9 Block 5").count(), 3);
    assert!(out.contains("  Operator: SpaceX"));
    assert!(out.contains("  [Go — Go for Launch]"));
    assert!(out.contains("3/5"));
}

#[tokio::test]
async fn test_launches_all_expands() {
    let site = fakes::site(Ok(fakes::launches(12)), Ok(fakes::apod("image")));
    let out = launches(&site, Language::English, 1440, true).await;
    assert_eq!(out.matches("Falcon 9 Block 5").count(), 9);
    assert!(!out.contains("--all"));
}

#[tokio::test]
async fn test_launches_error_prints_message() {
    let site = fakes::site(Err("connection refused".into()), Ok(fakes::apod("image")));
    let out = launches(&site, Language::Turkish, 1440, false).await;
    assert!(out.contains("Fırlatma verileri alınamadı."));
    assert!(!out.contains("connection refused"));
}

#[tokio::test]
async fn test_apod_prints_image_or_message() {
    let site = fakes::site(Ok(vec![]), Ok(fakes::apod("image")));
    let out = apod(&site, Language::English).await;
    assert!(out.contains("Orion Nebula"));
    assert!(out.contains("Date: October 16, 2026"));
    assert!(out.contains("https://example.invalid/orion.jpg"));

    let site = fakes::site(Ok(vec![]), Ok(fakes::apod("video")));
    let out = apod(&site, Language::English).await;
    assert!(!out.contains("orion.jpg"));
    assert!(out.contains("Today's entry is not a picture."));
}

#[test]
fn test_keys_lists_fallbacks() {
    let out = keys(&TextTable::builtin(), Language::English);
    assert!(out.contains("2 fall back to Türkçe"));
    assert!(out.contains("  pageTitle\n"));
    assert!(out.contains("  apodSource\n"));
}

#[test]
fn test_keys_primary_is_complete() {
    let out = keys(&TextTable::builtin(), Language::Turkish);
    assert!(out.contains("primary language"));
}

#[test]
fn test_keys_counts_empty_override() {
    let table = TextTable::from_toml("[en]\nnavTeam = \"\"\n").unwrap();
    let out = keys(&table, Language::English);
    assert!(out.contains("3 fall back"));
    assert!(out.contains("  navTeam\n"));
}

#[tokio::test]
async fn test_status_reports_both_feeds() {
    let config = Config::default();
    let site = fakes::site(Ok(fakes::launches(2)), Err("503".into()));
    let out = status("tayf.toml", &config, &site).await;
    assert!(out.contains("Config: tayf.toml"));
    assert!(out.contains("Listen: http://127.0.0.1:8080"));
    assert!(out.contains("Display offset: +03:00"));
    assert!(out.contains("fake-launches: ok (2 upcoming)"));
    assert!(out.contains("fake-apod: unavailable"));
}
