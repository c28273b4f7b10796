//! Live-data widgets: resolved view models and their HTML.
//!
//! The view models are shared by the page, the JSON API and the CLI, so
//! every placeholder and date format is decided in one place.

use chrono::FixedOffset;
use serde::Serialize;
use std::fmt::Write;
use tayf_core::{
    fallback::first_present,
    i18n::{format_apod_date, format_launch_time, Localizer, TextKey},
    record::Launch,
};
use tayf_feeds::widget::{ApodState, LaunchesState, LaunchesWidget};

use super::html::{escape, PageParams};

/// One launch with every placeholder resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchCard {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub location: String,
    pub time: String,
    /// `None` omits the mission line.
    pub mission: Option<String>,
    /// Status badge text, `None` omits the badge.
    pub status: Option<String>,
    pub image_url: Option<String>,
}

impl LaunchCard {
    pub fn resolve(launch: &Launch, text: Localizer<'_>, offset: FixedOffset) -> Self {
        let or_text = |value: Option<&str>, key| {
            first_present([value, Some(text.text(key))])
                .unwrap_or_default()
                .to_string()
        };
        let time = match launch.timestamp() {
            Some(raw) => format_launch_time(raw, text.lang(), offset),
            None => text.text(TextKey::LaunchesNoDate).to_string(),
        };
        let status = launch.status_name().map(|name| match launch.status_abbrev() {
            Some(abbrev) => format!("{abbrev} — {name}"),
            None => name.to_string(),
        });

        Self {
            id: launch.id.clone(),
            name: or_text(launch.display_name(), TextKey::LaunchesUnknownName),
            provider: or_text(launch.provider_name(), TextKey::LaunchesUnknownOperator),
            location: or_text(launch.location_name(), TextKey::LaunchesUnknownLocation),
            time,
            mission: launch.mission_name().map(str::to_string),
            status,
            image_url: launch.image_url().map(str::to_string),
        }
    }
}

/// Launches widget as seen by a reader.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchesView {
    pub state: &'static str,
    /// Status line next to the list title; absent while loading and on success.
    pub message: Option<String>,
    pub cards: Vec<LaunchCard>,
    /// Cards before "show more"; skeleton count while loading.
    pub initial: usize,
    pub total: usize,
    pub can_show_more: bool,
    pub expanded: bool,
}

impl LaunchesView {
    pub fn resolve(widget: &LaunchesWidget, text: Localizer<'_>, offset: FixedOffset) -> Self {
        let message = match widget.state() {
            LaunchesState::Empty => Some(TextKey::LaunchesEmpty),
            LaunchesState::Error => Some(TextKey::LaunchesError),
            LaunchesState::Loading | LaunchesState::Success(_) => None,
        };
        Self {
            state: widget.state().tag(),
            message: message.map(|key| text.text(key).to_string()),
            cards: widget
                .visible()
                .iter()
                .map(|launch| LaunchCard::resolve(launch, text, offset))
                .collect(),
            initial: widget.initial_count(),
            total: widget.launches().len(),
            can_show_more: widget.can_show_more(),
            expanded: widget.is_expanded(),
        }
    }
}

/// Astronomy-picture widget as seen by a reader.
#[derive(Debug, Clone, Serialize)]
pub struct ApodView {
    pub state: &'static str,
    pub title: Option<String>,
    /// Long localized date.
    pub date: Option<String>,
    pub explanation: Option<String>,
    /// Only set when there is an image to show.
    pub image_url: Option<String>,
    /// Shown in place of the image.
    pub message: Option<String>,
}

impl ApodView {
    pub fn resolve(state: &ApodState, text: Localizer<'_>) -> Self {
        let record = state.record();
        let message = match state {
            ApodState::Loading => Some(TextKey::ApodLoading),
            ApodState::NoImage(_) => Some(TextKey::ApodNoImage),
            ApodState::Error => Some(TextKey::ApodError),
            ApodState::Success(_) => None,
        };
        let image_url = match state {
            ApodState::Success(record) => record.image_url().map(str::to_string),
            _ => None,
        };

        Self {
            state: state.tag(),
            title: record
                .and_then(|r| first_present([r.title.as_deref()]))
                .map(str::to_string),
            date: record
                .and_then(|r| first_present([Some(r.date.as_str())]))
                .map(|raw| format_apod_date(raw, text.lang())),
            explanation: record
                .and_then(|r| first_present([Some(r.explanation.as_str())]))
                .map(str::to_string),
            image_url,
            message: message.map(|key| text.text(key).to_string()),
        }
    }
}

fn launch_card_html(out: &mut String, card: &LaunchCard, text: Localizer<'_>) {
    let _ = write!(out, r#"<article class="launch-card" data-id="{}">"#, escape(&card.id));
    if let Some(url) = &card.image_url {
        let _ = write!(
            out,
            r#"<div class="launch-card__media"><img src="{}" loading="lazy" alt="{}"></div>"#,
            escape(url),
            escape(text.text(TextKey::RocketAlt))
        );
    }
    let _ = write!(out, "<h3>{}</h3>", escape(&card.name));

    let mut line = |label: TextKey, value: &str| {
        let _ = write!(
            out,
            r#"<p><span class="label">{}:</span> {}</p>"#,
            escape(text.text(label)),
            escape(value)
        );
    };
    line(TextKey::LaunchesOperatorLabel, &card.provider);
    line(TextKey::LaunchesLocationLabel, &card.location);
    line(TextKey::LaunchesTimeLabel, &card.time);
    if let Some(mission) = &card.mission {
        line(TextKey::LaunchesMissionLabel, mission);
    }

    if let Some(status) = &card.status {
        let _ = write!(out, r#"<span class="launch-status">{}</span>"#, escape(status));
    }
    out.push_str("</article>");
}

const SKELETON_CARD: &str = concat!(
    r#"<div class="launch-card launch-card--skeleton" aria-hidden="true">"#,
    r#"<div class="skeleton skeleton--media"></div>"#,
    r#"<div class="skeleton skeleton--title"></div>"#,
    r#"<div class="skeleton skeleton--line"></div>"#,
    r#"<div class="skeleton skeleton--line"></div>"#,
    r#"<div class="skeleton skeleton--line"></div>"#,
    "</div>"
);

/// Card list, status line and show-more link.
pub fn launches_list_html(
    out: &mut String,
    view: &LaunchesView,
    text: Localizer<'_>,
    params: PageParams,
) {
    let _ = write!(
        out,
        r#"<div class="launches-list" data-state="{}"><div class="launches-list__head"><h3>{}</h3><p class="launches-status">{}</p></div><div class="launch-grid">"#,
        view.state,
        escape(text.text(TextKey::LaunchesListTitle)),
        escape(view.message.as_deref().unwrap_or_default())
    );

    if view.state == "loading" {
        for _ in 0..view.initial {
            out.push_str(SKELETON_CARD);
        }
    } else {
        for card in &view.cards {
            launch_card_html(out, card, text);
        }
    }
    out.push_str("</div>");

    if view.can_show_more {
        let (label, target) = if view.expanded {
            (TextKey::LaunchesShowLess, params.with_expanded(false))
        } else {
            (TextKey::LaunchesShowMore, params.with_expanded(true))
        };
        let _ = write!(
            out,
            r#"<div class="launches-more"><a class="button" href="{}">{}</a></div>"#,
            target.href("launches"),
            escape(text.text(label))
        );
    }
    out.push_str("</div>");
}

/// Astronomy-picture card.
pub fn apod_card_html(out: &mut String, view: &ApodView, text: Localizer<'_>) {
    let _ = write!(
        out,
        r#"<div class="apod-card" data-state="{}"><div class="apod-card__head"><span class="tag">{}</span><span class="source">{}</span></div><div class="apod-card__media">"#,
        view.state,
        escape(text.text(TextKey::ApodTitle)),
        escape(text.text(TextKey::ApodSource))
    );

    if view.state == "loading" {
        out.push_str(r#"<div class="skeleton skeleton--media"></div>"#);
    } else if let Some(url) = &view.image_url {
        let _ = write!(
            out,
            r#"<img src="{}" alt="{}">"#,
            escape(url),
            escape(view.title.as_deref().unwrap_or_default())
        );
    } else if let Some(message) = &view.message {
        let _ = write!(out, r#"<p class="apod-message">{}</p>"#, escape(message));
    }
    out.push_str("</div>");

    if let Some(date) = &view.date {
        let _ = write!(
            out,
            r#"<p class="apod-date">{}: {}</p>"#,
            escape(text.text(TextKey::ApodDateLabel)),
            escape(date)
        );
    }
    let _ = write!(
        out,
        r#"<div class="apod-card__body"><p>{}</p></div></div>"#,
        escape(view.explanation.as_deref().unwrap_or_default())
    );
}
