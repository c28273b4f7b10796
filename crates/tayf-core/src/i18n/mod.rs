//! Internationalization: localized strings for every page section.
//!
//! `t(key, lang)` resolves against the builtin tables; `TextTable` layers an
//! optional TOML override file on top. Supported languages: Turkish
//! (primary, complete) and English (may lack entries, falls back to Turkish).

mod english;
mod format;
mod keys;
mod language;
mod turkish;


pub use format::*;
pub use keys::TextKey;
pub use language::Language;

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::TayfError;
use crate::fallback::first_present;

/// Builtin entry for `key` in `lang`, if the table has one.
fn builtin(key: TextKey, lang: Language) -> Option<&'static str> {
    match lang {
        Language::Turkish => Some(turkish::lookup(key)),
        Language::English => english::lookup(key),
    }
}

/// Return the builtin localized string for `key` in `lang`.
/// Falls back to Turkish for missing or empty entries.
pub fn t(key: TextKey, lang: Language) -> &'static str {
    first_present([builtin(key, lang), builtin(key, Language::PRIMARY)]).unwrap_or("")
}

/// Localized text table: builtin strings plus per-language overrides.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    overrides: HashMap<Language, HashMap<TextKey, String>>,
}

/// On-disk override layout: `[tr]` and `[en]` tables keyed by wire name.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct OverrideFile(HashMap<String, HashMap<String, String>>);

impl TextTable {
    /// Table with the builtin strings only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse an override document. Unknown languages or keys are rejected.
    pub fn from_toml(content: &str) -> Result<Self, TayfError> {
        let file: OverrideFile = toml::from_str(content)
            .map_err(|e| TayfError::Config(format!("failed to parse text overrides: {e}")))?;

        let mut overrides: HashMap<Language, HashMap<TextKey, String>> = HashMap::new();
        for (code, entries) in file.0 {
            let lang: Language = code.parse()?;
            let table = overrides.entry(lang).or_default();
            for (wire, text) in entries {
                table.insert(wire.parse()?, text);
            }
        }
        Ok(Self { overrides })
    }

    /// Load overrides from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TayfError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml(&content)?;
        info!(
            "loaded {} text overrides from {}",
            table.overrides.values().map(HashMap::len).sum::<usize>(),
            path.display()
        );
        Ok(table)
    }

    /// Entry for `key` in `lang` without any fallback. An override wins over
    /// the builtin string, even when the override is empty.
    pub fn entry(&self, lang: Language, key: TextKey) -> Option<&str> {
        self.overrides
            .get(&lang)
            .and_then(|table| table.get(&key))
            .map(String::as_str)
            .or_else(|| builtin(key, lang))
    }

    /// Resolve `key` for `lang`.
    ///
    /// A missing or empty entry falls back to the primary language, whose
    /// entry is returned as-is even if it is empty. Never fails.
    pub fn resolve(&self, lang: Language, key: TextKey) -> &str {
        first_present([self.entry(lang, key)])
            .or_else(|| self.entry(Language::PRIMARY, key))
            .unwrap_or("")
    }

    /// Keys whose text for `lang` comes from the primary language.
    pub fn missing_entries(&self, lang: Language) -> Vec<TextKey> {
        if lang.is_primary() {
            return Vec::new();
        }
        TextKey::ALL
            .iter()
            .copied()
            .filter(|key| first_present([self.entry(lang, *key)]).is_none())
            .collect()
    }

    /// Borrow a resolver bound to one language.
    pub fn localizer(&self, lang: Language) -> Localizer<'_> {
        Localizer { table: self, lang }
    }
}

/// A text table bound to the current page language.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    table: &'a TextTable,
    lang: Language,
}

impl<'a> Localizer<'a> {
    pub fn lang(&self) -> Language {
        self.lang
    }

    /// Resolve `key` in the bound language.
    pub fn text(&self, key: TextKey) -> &'a str {
        self.table.resolve(self.lang, key)
    }
}
