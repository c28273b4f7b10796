//! Small HTML helpers shared by the section renderers.

use tayf_core::i18n::Language;

/// Escape text for element content and double-quoted attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Page-load parameters carried in the query string.
///
/// Links that change one parameter (language switch, show more/less) keep
/// the others so the reader stays on the same view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub lang: Language,
    pub width: u32,
    pub expanded: bool,
}

impl PageParams {
    /// Relative link to the same page with `self`'s parameters.
    pub fn href(&self, anchor: &str) -> String {
        let mut query = format!("?lang={}&width={}", self.lang.code(), self.width);
        if self.expanded {
            query.push_str("&more=true");
        }
        if !anchor.is_empty() {
            query.push('#');
            query.push_str(anchor);
        }
        escape(&query)
    }

    pub fn with_lang(self, lang: Language) -> Self {
        Self { lang, ..self }
    }

    pub fn with_expanded(self, expanded: bool) -> Self {
        Self { expanded, ..self }
    }
}
