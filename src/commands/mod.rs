//! Terminal subcommands: one-shot widget fetches, text audit, status.
//!
//! Each handler renders to a `String` so the output can be tested without
//! a terminal.

#[cfg(test)]
mod tests;

use std::fmt::Write;
use tayf_core::{
    config::Config,
    i18n::{Language, TextKey, TextTable},
};
use tayf_feeds::widget::{ApodState, LaunchesState};

use crate::site::{
    widgets::{ApodView, LaunchesView},
    Site,
};

/// `tayf launches`: fetch once and print the visible cards.
pub async fn launches(site: &Site, lang: Language, width: u32, all: bool) -> String {
    let text = site.localizer(lang);
    let mut widget = site.launches_widget(width);
    widget.load().await;
    widget.set_expanded(all);
    let view = LaunchesView::resolve(&widget, text, site.offset);

    let mut out = format!("{}\n", text.text(TextKey::LaunchesListTitle));
    if let Some(message) = &view.message {
        let _ = writeln!(out, "{message}");
        return out;
    }

    let label = |key| text.text(key);
    for card in &view.cards {
        let _ = writeln!(out, "\n{}", card.name);
        let _ = writeln!(out, "  {}: {}", label(TextKey::LaunchesOperatorLabel), card.provider);
        let _ = writeln!(out, "  {}: {}", label(TextKey::LaunchesLocationLabel), card.location);
        let _ = writeln!(out, "  {}: {}", label(TextKey::LaunchesTimeLabel), card.time);
        if let Some(mission) = &card.mission {
            let _ = writeln!(out, "  {}: {mission}", label(TextKey::LaunchesMissionLabel));
        }
        if let Some(status) = &card.status {
            let _ = writeln!(out, "  [{status}]");
        }
    }
    if view.can_show_more && !view.expanded {
        let _ = writeln!(
            out,
            "\n{}/{} (--all: {})",
            view.cards.len(),
            view.total,
            label(TextKey::LaunchesShowMore)
        );
    }
    out
}

/// `tayf apod`: fetch once and print today's picture.
pub async fn apod(site: &Site, lang: Language) -> String {
    let text = site.localizer(lang);
    let mut widget = site.apod_widget();
    widget.load().await;
    let view = ApodView::resolve(widget.state(), text);

    let mut out = format!(
        "{} ({})\n",
        text.text(TextKey::ApodTitle),
        text.text(TextKey::ApodSource)
    );
    if let Some(title) = &view.title {
        let _ = writeln!(out, "{title}");
    }
    if let Some(date) = &view.date {
        let _ = writeln!(out, "{}: {date}", text.text(TextKey::ApodDateLabel));
    }
    match (&view.image_url, &view.message) {
        (Some(url), _) => {
            let _ = writeln!(out, "{url}");
        }
        (None, Some(message)) => {
            let _ = writeln!(out, "{message}");
        }
        (None, None) => {}
    }
    if let Some(explanation) = &view.explanation {
        let _ = writeln!(out, "\n{explanation}");
    }
    out
}

/// `tayf keys`: list keys that fall back to the primary language.
pub fn keys(table: &TextTable, lang: Language) -> String {
    if lang.is_primary() {
        return format!(
            "{} is the primary language; all {} keys are defined.\n",
            lang.native_name(),
            TextKey::ALL.len()
        );
    }

    let missing = table.missing_entries(lang);
    let mut out = format!(
        "{}: {}/{} keys defined, {} fall back to {}\n",
        lang.native_name(),
        TextKey::ALL.len() - missing.len(),
        TextKey::ALL.len(),
        missing.len(),
        Language::PRIMARY.native_name()
    );
    for key in missing {
        let _ = writeln!(out, "  {key}");
    }
    out
}

/// `tayf status`: effective configuration and one probe per feed.
pub async fn status(config_path: &str, config: &Config, site: &Site) -> String {
    let mut out = String::from("TAYF site status\n\n");
    let _ = writeln!(out, "Config: {config_path}");
    let _ = writeln!(out, "Site: {}", config.site.name);
    let _ = writeln!(out, "Default language: {}", config.site.default_language);
    let _ = writeln!(out, "Default viewport width: {}", config.site.default_viewport_width);
    let _ = writeln!(out, "Listen: http://{}", config.server.addr());
    let _ = writeln!(out, "Display offset: {}", site.offset);
    if !config.site.text_overrides.is_empty() {
        let _ = writeln!(out, "Text overrides: {}", config.site.text_overrides);
    }
    out.push('\n');

    let mut launches = site.launches_widget(site.default_width);
    let mut apod = site.apod_widget();
    tayf_feeds::widget::load_both(&mut launches, &mut apod).await;

    let launches_status = match launches.state() {
        LaunchesState::Success(list) => format!("ok ({} upcoming)", list.len()),
        LaunchesState::Empty => "ok (none scheduled)".to_string(),
        LaunchesState::Error => "unavailable".to_string(),
        LaunchesState::Loading => "pending".to_string(),
    };
    let apod_status = match apod.state() {
        ApodState::Success(_) => "ok (image)",
        ApodState::NoImage(_) => "ok (not an image today)",
        ApodState::Error => "unavailable",
        ApodState::Loading => "pending",
    };
    let _ = writeln!(out, "  {}: {launches_status}", site.launches.name());
    let _ = writeln!(out, "  {}: {apod_status}", site.apod.name());
    out
}
