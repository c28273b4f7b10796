//! Canned feed sources for router and rendering tests.

use async_trait::async_trait;
use std::sync::Arc;
use tayf_core::{
    config::Config,
    error::TayfError,
    record::{ApodRecord, Launch, LaunchPage, LaunchStatus, Named, Pad},
    traits::{ApodFeed, LaunchFeed},
};

use crate::site::Site;

pub struct FakeLaunches(pub Result<Vec<Launch>, String>);

#[async_trait]
impl LaunchFeed for FakeLaunches {
    fn name(&self) -> &str {
        "fake-launches"
    }

    async fn upcoming(&self) -> Result<LaunchPage, TayfError> {
        match &self.0 {
            Ok(results) => Ok(LaunchPage {
                results: results.clone(),
            }),
            Err(msg) => Err(TayfError::Feed(msg.clone())),
        }
    }
}

pub struct FakeApod(pub Result<ApodRecord, String>);

#[async_trait]
impl ApodFeed for FakeApod {
    fn name(&self) -> &str {
        "fake-apod"
    }

    async fn today(&self) -> Result<ApodRecord, TayfError> {
        self.0.clone().map_err(TayfError::Feed)
    }
}

/// A fully populated launch.
pub fn launch(i: usize) -> Launch {
    Launch {
        id: format!("launch-{i}"),
        name: Some(format!("Falcon 9 Block 5 | Starlink Group {i}")),
        window_start: Some("2026-10-20T11:00:00Z".to_string()),
        launch_service_provider: Some(Named {
            name: Some("SpaceX".to_string()),
        }),
        pad: Some(Pad {
            name: Some("Space Launch Complex 40".to_string()),
            location: None,
        }),
        mission: Some(Named {
            name: Some(format!("Starlink Group {i}")),
        }),
        status: Some(LaunchStatus {
            name: Some("Go for Launch".to_string()),
            abbrev: Some("Go".to_string()),
        }),
        image: Some(format!("https://example.invalid/f9-{i}.jpg")),
        ..Default::default()
    }
}

pub fn launches(n: usize) -> Vec<Launch> {
    (0..n).map(launch).collect()
}

pub fn apod(media_type: &str) -> ApodRecord {
    ApodRecord {
        date: "2026-10-16".to_string(),
        explanation: "The Orion Nebula in visible light.".to_string(),
        media_type: media_type.to_string(),
        url: Some("https://example.invalid/orion.jpg".to_string()),
        title: Some("Orion Nebula".to_string()),
        ..Default::default()
    }
}

/// Site with default config over the given canned results.
pub fn site(
    launches: Result<Vec<Launch>, String>,
    apod: Result<ApodRecord, String>,
) -> Site {
    Site::new(
        &Config::default(),
        Arc::new(FakeLaunches(launches)),
        Arc::new(FakeApod(apod)),
    )
    .unwrap()
}
