use super::*;
use crate::fakes::{self, launch};
use tayf_core::i18n::{t, ISTANBUL_OFFSET_MINUTES};
use tayf_core::record::{ApodRecord, Launch, Named, Pad};
use widgets::LaunchCard;

fn istanbul() -> FixedOffset {
    FixedOffset::east_opt(ISTANBUL_OFFSET_MINUTES * 60).unwrap()
}

fn card(launch: &Launch, lang: Language) -> LaunchCard {
    let table = TextTable::builtin();
    LaunchCard::resolve(launch, table.localizer(lang), istanbul())
}

fn params(site: &Site, query: &str) -> PageParams {
    let get = |name: &str| {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    };
    site.params(get("lang"), get("width"), get("more"))
}

async fn render(site: &Site, query: &str) -> String {
    site.render(params(site, query)).await
}

// --- Cards ---

#[test]
fn test_card_full_record() {
    let c = card(&launch(1), Language::English);
    assert_eq!(c.name, "Falcon 9 Block 5 | Starlink Group 1");
    assert_eq!(c.provider, "SpaceX");
    assert_eq!(c.location, "Space Launch Complex 40");
    assert_eq!(c.time, "20 Oct 2026, 14:00");
    assert_eq!(c.mission.as_deref(), Some("Starlink Group 1"));
    assert_eq!(c.status.as_deref(), Some("Go — Go for Launch"));
    assert_eq!(c.image_url.as_deref(), Some("https://example.invalid/f9-1.jpg"));
}

#[test]
fn test_card_placeholders() {
    let bare = Launch {
        id: "x".into(),
        ..Default::default()
    };
    let c = card(&bare, Language::Turkish);
    assert_eq!(c.name, t(TextKey::LaunchesUnknownName, Language::Turkish));
    assert_eq!(c.provider, t(TextKey::LaunchesUnknownOperator, Language::Turkish));
    assert_eq!(c.location, t(TextKey::LaunchesUnknownLocation, Language::Turkish));
    assert_eq!(c.time, t(TextKey::LaunchesNoDate, Language::Turkish));
    assert_eq!(c.mission, None);
    assert_eq!(c.status, None);
    assert_eq!(c.image_url, None);
}

#[test]
fn test_card_uses_last_updated_when_others_empty() {
    let record = Launch {
        window_start: Some(String::new()),
        net: Some(String::new()),
        last_updated: Some("2026-10-15T08:12:00Z".into()),
        ..Default::default()
    };
    assert_eq!(card(&record, Language::Turkish).time, "15 Eki 2026 11:12");
}

#[test]
fn test_card_malformed_timestamp_passes_through() {
    let record = Launch {
        net: Some("sometime in Q4".into()),
        ..Default::default()
    };
    assert_eq!(card(&record, Language::English).time, "sometime in Q4");
}

#[test]
fn test_card_location_and_status_fallbacks() {
    let record = Launch {
        pad: Some(Pad {
            name: None,
            location: Some(Named {
                name: Some("Kourou, French Guiana".into()),
            }),
        }),
        status: Some(tayf_core::record::LaunchStatus {
            name: Some("To Be Confirmed".into()),
            abbrev: None,
        }),
        ..Default::default()
    };
    let c = card(&record, Language::English);
    assert_eq!(c.location, "Kourou, French Guiana");
    assert_eq!(c.status.as_deref(), Some("To Be Confirmed"));
}

// --- Page ---

#[tokio::test]
async fn test_page_defaults_to_turkish() {
    let site = fakes::site(Ok(fakes::launches(2)), Ok(fakes::apod("image")));
    let html = render(&site, "").await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="tr">"#));
    assert!(html.contains(t(TextKey::HeroTitle, Language::Turkish)));
    assert!(html.contains(r#"href="?lang=en&amp;width=1280""#));
}

#[tokio::test]
async fn test_page_renders_every_section() {
    let site = fakes::site(Ok(fakes::launches(2)), Ok(fakes::apod("image")));
    let html = render(&site, "lang=en").await;
    for id in ["hero", "metrics", "project", "team", "sponsor", "launches", "join", "contact"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
    }
    assert!(html.contains("<footer"));
    assert!(html.contains("1.8M+"));
    assert!(html.contains("600+"));
    assert!(html.contains(content::BROCHURE_PATH));
    assert!(html.contains(&escape(content::MODEL_EMBED_URL)));
    assert!(html.contains("tier--platinum tier--featured"));
    assert_eq!(html.matches(r#"class="team-card""#).count(), 5);
    assert_eq!(html.matches(r#"class="timeline__item""#).count(), 4);
    for dept in content::DEPARTMENTS {
        assert!(html.contains(dept.form_url));
    }
}

#[tokio::test]
async fn test_unknown_language_falls_back_to_default() {
    let site = fakes::site(Ok(vec![]), Ok(fakes::apod("image")));
    let html = render(&site, "lang=de").await;
    assert!(html.contains(r#"<html lang="tr">"#));
}

#[tokio::test]
async fn test_english_page_falls_back_for_missing_entries() {
    let site = fakes::site(Ok(vec![]), Ok(fakes::apod("image")));
    let html = render(&site, "lang=en").await;
    // No English page title; the Turkish one is used.
    let title = t(TextKey::PageTitle, Language::Turkish);
    assert!(html.contains(&format!("<title>{}</title>", escape(title))));
    assert!(html.contains(t(TextKey::NavTeam, Language::English)));
}

#[tokio::test]
async fn test_wide_viewport_shows_three_cards_and_show_more() {
    let site = fakes::site(Ok(fakes::launches(10)), Ok(fakes::apod("image")));
    let html = render(&site, "lang=en&width=1440").await;
    assert_eq!(html.matches(r#"<article class="launch-card""#).count(), 3);
    assert!(html.contains("Show more"));
    assert!(html.contains(r#"href="?lang=en&amp;width=1440&amp;more=true#launches""#));

    let html = render(&site, "lang=en&width=1440&more=true").await;
    assert_eq!(html.matches(r#"<article class="launch-card""#).count(), 9);
    assert!(html.contains("Show less"));
    assert!(html.contains(r#"href="?lang=en&amp;width=1440#launches""#));
}

#[tokio::test]
async fn test_narrow_viewport_shows_one_card() {
    let site = fakes::site(Ok(fakes::launches(4)), Ok(fakes::apod("image")));
    let html = render(&site, "width=375").await;
    assert_eq!(html.matches(r#"<article class="launch-card""#).count(), 1);
}

#[tokio::test]
async fn test_no_show_more_when_all_cards_fit() {
    let site = fakes::site(Ok(fakes::launches(3)), Ok(fakes::apod("image")));
    let html = render(&site, "lang=en&width=1440&more=true").await;
    assert_eq!(html.matches(r#"<article class="launch-card""#).count(), 3);
    assert!(!html.contains("launches-more"));
}

#[tokio::test]
async fn test_mission_line_omitted_when_absent() {
    let mut record = launch(0);
    record.mission = None;
    let site = fakes::site(Ok(vec![record]), Ok(fakes::apod("image")));
    let html = render(&site, "lang=en").await;
    assert!(html.contains(r#"<span class="label">Operator:</span>"#));
    assert!(!html.contains(r#"<span class="label">Mission:</span>"#));
}

#[tokio::test]
async fn test_empty_and_error_messages_differ() {
    let empty = fakes::site(Ok(vec![]), Ok(fakes::apod("image")));
    let html = render(&empty, "lang=en").await;
    assert!(html.contains(r#"data-state="empty""#));
    assert!(html.contains(t(TextKey::LaunchesEmpty, Language::English)));

    let failed = fakes::site(Err("launches returned 500".into()), Ok(fakes::apod("image")));
    let html = render(&failed, "lang=en").await;
    assert!(html.contains(r#"<div class="launches-list" data-state="error""#));
    assert!(html.contains(t(TextKey::LaunchesError, Language::English)));
    // The picture still renders.
    assert!(html.contains(r#"<div class="apod-card" data-state="success""#));
    assert!(html.contains(r#"<img src="https://example.invalid/orion.jpg""#));
}

#[tokio::test]
async fn test_apod_success_shows_image_and_long_date() {
    let site = fakes::site(Ok(vec![]), Ok(fakes::apod("image")));
    let html = render(&site, "lang=en").await;
    assert!(html.contains(r#"alt="Orion Nebula""#));
    assert!(html.contains("Date: October 16, 2026"));
    assert!(html.contains("The Orion Nebula in visible light."));

    let html = render(&site, "lang=tr").await;
    assert!(html.contains("Tarih: 16 Ekim 2026"));
}

#[tokio::test]
async fn test_apod_video_renders_no_image() {
    let site = fakes::site(Ok(vec![]), Ok(fakes::apod("video")));
    let html = render(&site, "lang=en").await;
    assert!(html.contains(r#"data-state="no_image""#));
    assert!(!html.contains("orion.jpg"));
    assert!(html.contains(t(TextKey::ApodNoImage, Language::English)));
    // Date and explanation are still shown.
    assert!(html.contains("October 16, 2026"));
}

#[tokio::test]
async fn test_apod_error_message_differs_from_no_image() {
    let site = fakes::site(Ok(vec![]), Err("apod returned 403".into()));
    let html = render(&site, "lang=en").await;
    assert!(html.contains(r#"<div class="apod-card" data-state="error""#));
    assert!(html.contains(t(TextKey::ApodError, Language::English)));
    assert!(!html.contains(t(TextKey::ApodNoImage, Language::English)));
}

#[test]
fn test_loading_state_renders_skeletons() {
    let site = fakes::site(Ok(fakes::launches(5)), Ok(fakes::apod("image")));
    let params = site.params(Some("en"), Some("800"), None);
    let text = site.localizer(params.lang);
    let page = PageContext {
        text,
        params,
        site_name: &site.name,
    };
    let launches = site.launches_widget(params.width);
    let apod = site.apod_widget();
    let html = render_page(
        &page,
        &LaunchesView::resolve(&launches, text, site.offset),
        &ApodView::resolve(apod.state(), text),
    );
    assert_eq!(html.matches("launch-card--skeleton").count(), 2);
    assert!(html.contains(r#"data-state="loading""#));
    assert!(!html.contains("<article"));
}

#[test]
fn test_record_text_is_escaped() {
    let record = Launch {
        name: Some("<script>alert(1)</script>".into()),
        ..Default::default()
    };
    let site = fakes::site(Ok(vec![]), Ok(ApodRecord::default()));
    let params = site.params(None, None, None);
    let text = site.localizer(params.lang);
    let page = PageContext {
        text,
        params,
        site_name: &site.name,
    };
    let mut view = LaunchesView::resolve(&site.launches_widget(1280), text, site.offset);
    view.state = "success";
    view.cards = vec![LaunchCard::resolve(&record, text, site.offset)];
    let html = render_page(&page, &view, &ApodView::resolve(&tayf_feeds::widget::ApodState::Error, text));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert"));
}

#[test]
fn test_params_parsing() {
    let site = fakes::site(Ok(vec![]), Ok(ApodRecord::default()));
    let p = site.params(Some("EN"), Some("abc"), Some("true"));
    assert_eq!(p.lang, Language::English);
    assert_eq!(p.width, 1280);
    assert!(p.expanded);
    let p = site.params(None, Some("375"), Some("no"));
    assert_eq!(p.lang, Language::Turkish);
    assert_eq!(p.width, 375);
    assert!(!p.expanded);
}
