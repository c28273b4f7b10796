//! Live-data widgets and their fetch state machines.
//!
//! Each widget owns exactly one outbound request and its state. A widget
//! starts in `Loading` and moves once to a terminal state; there is no
//! retry. A fresh widget (the next page load) starts over at `Loading`.

use serde::Serialize;
use std::sync::Arc;
use tayf_core::{
    record::{ApodRecord, Launch},
    traits::{ApodFeed, LaunchFeed, Viewport},
};
use tracing::{debug, warn};

use crate::layout::CardLayout;


/// Fetch state of the launches widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "launches", rename_all = "snake_case")]
pub enum LaunchesState {
    Loading,
    Success(Vec<Launch>),
    /// The request succeeded with no results.
    Empty,
    /// Transport, status, or decoding failure.
    Error,
}

impl LaunchesState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }
}

/// Fetch state of the astronomy-picture widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "record", rename_all = "snake_case")]
pub enum ApodState {
    Loading,
    Success(ApodRecord),
    /// The request succeeded but today's entry is not a still image.
    NoImage(ApodRecord),
    Error,
}

impl ApodState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::NoImage(_) => "no_image",
            Self::Error => "error",
        }
    }

    /// The fetched record, for any state that has one.
    pub fn record(&self) -> Option<&ApodRecord> {
        match self {
            Self::Success(record) | Self::NoImage(record) => Some(record),
            Self::Loading | Self::Error => None,
        }
    }
}

/// Upcoming-launches widget: one fetch plus the visible-card policy.
pub struct LaunchesWidget {
    feed: Arc<dyn LaunchFeed>,
    viewport: Box<dyn Viewport>,
    state: LaunchesState,
    layout: CardLayout,
}

impl LaunchesWidget {
    pub fn new(feed: Arc<dyn LaunchFeed>, viewport: Box<dyn Viewport>) -> Self {
        let layout = CardLayout::for_width(viewport.width());
        Self {
            feed,
            viewport,
            state: LaunchesState::Loading,
            layout,
        }
    }

    pub fn state(&self) -> &LaunchesState {
        &self.state
    }

    /// Run the single fetch. A no-op once the widget left `Loading`.
    pub async fn load(&mut self) -> &LaunchesState {
        if !self.state.is_loading() {
            return &self.state;
        }

        self.state = match self.feed.upcoming().await {
            Ok(page) if page.results.is_empty() => {
                debug!("{}: no upcoming launches", self.feed.name());
                LaunchesState::Empty
            }
            Ok(page) => {
                debug!("{}: {} upcoming launches", self.feed.name(), page.results.len());
                LaunchesState::Success(page.results)
            }
            Err(e) => {
                warn!("{}: fetch failed: {e}", self.feed.name());
                LaunchesState::Error
            }
        };
        &self.state
    }

    /// Every fetched record; empty unless the fetch succeeded.
    pub fn launches(&self) -> &[Launch] {
        match &self.state {
            LaunchesState::Success(launches) => launches,
            _ => &[],
        }
    }

    /// Records currently shown as cards.
    pub fn visible(&self) -> &[Launch] {
        let all = self.launches();
        &all[..self.layout.visible_len(all.len())]
    }

    /// Cards shown before expansion; also the skeleton count while loading.
    pub fn initial_count(&self) -> usize {
        self.layout.initial()
    }

    pub fn can_show_more(&self) -> bool {
        self.layout.can_show_more(self.launches().len())
    }

    pub fn is_expanded(&self) -> bool {
        self.layout.is_expanded()
    }

    /// Flip between the initial count and the expanded maximum. Ignored
    /// when the show-more control is not present.
    pub fn toggle_show_more(&mut self) {
        if self.can_show_more() {
            self.layout.toggle();
        }
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        if self.is_expanded() != expanded {
            self.toggle_show_more();
        }
    }

    /// Handle a resize notification. Returns whether the initial count changed.
    pub fn sync_viewport(&mut self) -> bool {
        if !self.viewport.resized() {
            return false;
        }
        self.layout.resize(self.viewport.width())
    }
}

/// Astronomy-picture widget.
pub struct ApodWidget {
    feed: Arc<dyn ApodFeed>,
    state: ApodState,
}

impl ApodWidget {
    pub fn new(feed: Arc<dyn ApodFeed>) -> Self {
        Self {
            feed,
            state: ApodState::Loading,
        }
    }

    pub fn state(&self) -> &ApodState {
        &self.state
    }

    /// Run the single fetch. A no-op once the widget left `Loading`.
    pub async fn load(&mut self) -> &ApodState {
        if !self.state.is_loading() {
            return &self.state;
        }

        self.state = match self.feed.today().await {
            Ok(record) if record.is_image() && record.image_url().is_some() => {
                ApodState::Success(record)
            }
            Ok(record) => {
                debug!(
                    "{}: media type {:?} has no still image",
                    self.feed.name(),
                    record.media_type
                );
                ApodState::NoImage(record)
            }
            Err(e) => {
                warn!("{}: fetch failed: {e}", self.feed.name());
                ApodState::Error
            }
        };
        &self.state
    }
}

/// Load both widgets of a page concurrently. Neither outcome affects the other.
pub async fn load_both(launches: &mut LaunchesWidget, apod: &mut ApodWidget) {
    tokio::join!(launches.load(), apod.load());
}
