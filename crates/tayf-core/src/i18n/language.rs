use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::TayfError;

/// Display language of a page session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Primary language; its table is complete and backs every fallback.
    #[default]
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// The language every missing entry falls back to.
    pub const PRIMARY: Language = Language::Turkish;

    pub fn all() -> &'static [Language] {
        &[Language::Turkish, Language::English]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::English => "en",
        }
    }

    /// Name in the language itself, for the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Turkish => "Türkçe",
            Language::English => "English",
        }
    }

    pub fn is_primary(&self) -> bool {
        *self == Self::PRIMARY
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TayfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tr" | "tr-tr" | "turkish" | "türkçe" => Ok(Language::Turkish),
            "en" | "en-gb" | "en-us" | "english" => Ok(Language::English),
            _ => Err(TayfError::Config(format!("unsupported language: {s}"))),
        }
    }
}
