//! Default value functions used by serde for config deserialization.

use crate::i18n::{Language, ISTANBUL_OFFSET_MINUTES};

pub fn default_name() -> String {
    "İTÜ TAYF".to_string()
}

pub fn default_language() -> Language {
    Language::PRIMARY
}

pub fn default_viewport_width() -> u32 {
    1280
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_launches_url() -> String {
    "https://ll.thespacedevs.com/2.2.0/launch/upcoming/?limit=10&related=false".to_string()
}

pub fn default_apod_url() -> String {
    "https://api.nasa.gov/planetary/apod?api_key=DEMO_KEY&thumbs=true".to_string()
}

pub fn default_offset_minutes() -> i32 {
    ISTANBUL_OFFSET_MINUTES
}

pub fn default_log_level() -> String {
    "info".to_string()
}
