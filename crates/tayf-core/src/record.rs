//! Externally sourced, read-only records shown by the live widgets.
//!
//! Field names follow the upstream JSON so the types deserialize directly;
//! unknown fields are ignored and `null` is accepted wherever a field is
//! optional.

use serde::{Deserialize, Serialize};

use crate::fallback::first_present;

/// Media type the astronomy-picture service uses for still images.
pub const APOD_IMAGE_MEDIA_TYPE: &str = "image";

/// Envelope of the upcoming-launches endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchPage {
    /// Missing `results` decodes as an empty list.
    #[serde(default)]
    pub results: Vec<Launch>,
}

/// One upcoming launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub window_start: Option<String>,
    #[serde(default)]
    pub net: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub launch_service_provider: Option<Named>,
    #[serde(default)]
    pub pad: Option<Pad>,
    #[serde(default)]
    pub mission: Option<Named>,
    #[serde(default)]
    pub status: Option<LaunchStatus>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rocket: Option<Rocket>,
}

/// Any upstream object that only matters for its `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<Named>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchStatus {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    #[serde(default)]
    pub configuration: Option<RocketConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RocketConfiguration {
    #[serde(default)]
    pub image_url: Option<String>,
}

fn named(value: &Option<Named>) -> Option<&str> {
    value.as_ref().and_then(|n| n.name.as_deref())
}

impl Launch {
    pub fn display_name(&self) -> Option<&str> {
        first_present([self.name.as_deref()])
    }

    pub fn provider_name(&self) -> Option<&str> {
        first_present([named(&self.launch_service_provider)])
    }

    /// Pad name, then the pad's location name.
    pub fn location_name(&self) -> Option<&str> {
        let pad = self.pad.as_ref();
        first_present([
            pad.and_then(|p| p.name.as_deref()),
            pad.and_then(|p| named(&p.location)),
        ])
    }

    /// Raw timestamp to display: window start, then NET, then last update.
    pub fn timestamp(&self) -> Option<&str> {
        first_present([
            self.window_start.as_deref(),
            self.net.as_deref(),
            self.last_updated.as_deref(),
        ])
    }

    pub fn mission_name(&self) -> Option<&str> {
        first_present([named(&self.mission)])
    }

    pub fn status_name(&self) -> Option<&str> {
        first_present([self.status.as_ref().and_then(|s| s.name.as_deref())])
    }

    pub fn status_abbrev(&self) -> Option<&str> {
        first_present([self.status.as_ref().and_then(|s| s.abbrev.as_deref())])
    }

    /// Launch image, then the rocket configuration image.
    pub fn image_url(&self) -> Option<&str> {
        let configured = self
            .rocket
            .as_ref()
            .and_then(|r| r.configuration.as_ref())
            .and_then(|c| c.image_url.as_deref());
        first_present([self.image.as_deref(), configured])
    }
}

/// Astronomy picture of the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApodRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl ApodRecord {
    pub fn is_image(&self) -> bool {
        self.media_type == APOD_IMAGE_MEDIA_TYPE
    }

    pub fn image_url(&self) -> Option<&str> {
        first_present([self.url.as_deref()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_page_ignores_extra_fields() {
        let json = r#"{
            "count": 312,
            "next": "https://example.invalid/?offset=10",
            "results": [{
                "id": "f059",
                "name": "Falcon 9 Block 5 | Starlink",
                "window_start": "2026-10-20T11:00:00Z",
                "net": "2026-10-20T11:00:00Z",
                "last_updated": "2026-10-15T08:12:00Z",
                "launch_service_provider": {"id": 121, "name": "SpaceX", "type": "Commercial"},
                "pad": {"name": "Space Launch Complex 40", "location": {"name": "Cape Canaveral, FL, USA"}},
                "mission": {"name": "Starlink Group 10-4", "orbit": {"abbrev": "LEO"}},
                "status": {"id": 1, "name": "Go for Launch", "abbrev": "Go"},
                "image": "https://example.invalid/f9.jpg"
            }]
        }"#;
        let page: LaunchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        let launch = &page.results[0];
        assert_eq!(launch.provider_name(), Some("SpaceX"));
        assert_eq!(launch.location_name(), Some("Space Launch Complex 40"));
        assert_eq!(launch.mission_name(), Some("Starlink Group 10-4"));
        assert_eq!(launch.status_abbrev(), Some("Go"));
    }

    #[test]
    fn test_launch_page_missing_results_is_empty() {
        let page: LaunchPage = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_launch_accepts_nulls() {
        let json = r#"{"id":"x","name":null,"pad":null,"mission":null,"status":null,"image":null}"#;
        let launch: Launch = serde_json::from_str(json).unwrap();
        assert_eq!(launch.display_name(), None);
        assert_eq!(launch.location_name(), None);
        assert_eq!(launch.mission_name(), None);
        assert_eq!(launch.image_url(), None);
    }

    #[test]
    fn test_timestamp_priority() {
        let launch = Launch {
            window_start: Some(String::new()),
            net: None,
            last_updated: Some("2026-10-15T08:12:00Z".into()),
            ..Default::default()
        };
        assert_eq!(launch.timestamp(), Some("2026-10-15T08:12:00Z"));

        let launch = Launch {
            window_start: Some("2026-10-20T11:00:00Z".into()),
            net: Some("2026-10-21T11:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(launch.timestamp(), Some("2026-10-20T11:00:00Z"));
    }

    #[test]
    fn test_location_falls_back_to_pad_location() {
        let launch = Launch {
            pad: Some(Pad {
                name: Some(String::new()),
                location: Some(Named {
                    name: Some("Baikonur Cosmodrome".into()),
                }),
            }),
            ..Default::default()
        };
        assert_eq!(launch.location_name(), Some("Baikonur Cosmodrome"));
    }

    #[test]
    fn test_image_falls_back_to_rocket_configuration() {
        let launch = Launch {
            rocket: Some(Rocket {
                configuration: Some(RocketConfiguration {
                    image_url: Some("https://example.invalid/rocket.png".into()),
                }),
            }),
            ..Default::default()
        };
        assert_eq!(launch.image_url(), Some("https://example.invalid/rocket.png"));
    }

    #[test]
    fn test_apod_media_type() {
        let json = r#"{"date":"2026-10-16","explanation":"A comet.","media_type":"video","url":"https://example.invalid/v","title":"Comet"}"#;
        let apod: ApodRecord = serde_json::from_str(json).unwrap();
        assert!(!apod.is_image());
        assert_eq!(apod.title.as_deref(), Some("Comet"));
    }
}
