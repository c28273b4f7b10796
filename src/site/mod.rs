//! Server-rendered single page.
//!
//! Every request is a page load: the live widgets are created fresh, both
//! fetches run concurrently, and the whole page is rendered once they have
//! reached a terminal state.

pub mod content;
mod html;
mod sections;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use html::{escape, PageParams};

use chrono::FixedOffset;
use std::fmt::Write;
use std::sync::Arc;
use tayf_core::{
    config::Config,
    error::TayfError,
    i18n::{Language, Localizer, TextKey, TextTable},
    traits::{ApodFeed, FixedViewport, LaunchFeed},
};
use tayf_feeds::widget::{load_both, ApodWidget, LaunchesWidget};

use widgets::{apod_card_html, launches_list_html, ApodView, LaunchesView};

/// Everything a page load needs besides the request parameters.
pub struct Site {
    pub name: String,
    pub text: TextTable,
    pub default_language: Language,
    pub default_width: u32,
    pub offset: FixedOffset,
    pub launches: Arc<dyn LaunchFeed>,
    pub apod: Arc<dyn ApodFeed>,
}

impl Site {
    /// Build from config and the two feed sources.
    pub fn new(
        config: &Config,
        launches: Arc<dyn LaunchFeed>,
        apod: Arc<dyn ApodFeed>,
    ) -> Result<Self, TayfError> {
        Ok(Self {
            name: config.site.name.clone(),
            text: config.site.text_table()?,
            default_language: config.site.default_language,
            default_width: config.site.default_viewport_width,
            offset: config.feeds.display_offset(),
            launches,
            apod,
        })
    }

    /// Turn raw query values into page parameters. Unknown languages and
    /// unparseable widths fall back to the configured defaults.
    pub fn params(&self, lang: Option<&str>, width: Option<&str>, more: Option<&str>) -> PageParams {
        PageParams {
            lang: lang
                .and_then(|code| code.parse().ok())
                .unwrap_or(self.default_language),
            width: width
                .and_then(|w| w.trim().parse().ok())
                .unwrap_or(self.default_width),
            expanded: matches!(more, Some("1" | "true" | "yes")),
        }
    }

    pub fn localizer(&self, lang: Language) -> Localizer<'_> {
        self.text.localizer(lang)
    }

    /// Fresh, not yet loaded launches widget for a viewport of `width`.
    pub fn launches_widget(&self, width: u32) -> LaunchesWidget {
        LaunchesWidget::new(self.launches.clone(), Box::new(FixedViewport(width)))
    }

    pub fn apod_widget(&self) -> ApodWidget {
        ApodWidget::new(self.apod.clone())
    }

    /// Run one page load: create both widgets, fetch concurrently, apply the
    /// requested expansion.
    pub async fn load(&self, params: PageParams) -> (LaunchesWidget, ApodWidget) {
        let mut launches = self.launches_widget(params.width);
        let mut apod = self.apod_widget();
        load_both(&mut launches, &mut apod).await;
        launches.set_expanded(params.expanded);
        (launches, apod)
    }

    /// Load and render the full page.
    pub async fn render(&self, params: PageParams) -> String {
        let (launches, apod) = self.load(params).await;
        let text = self.localizer(params.lang);
        let page = PageContext {
            text,
            params,
            site_name: &self.name,
        };
        render_page(
            &page,
            &LaunchesView::resolve(&launches, text, self.offset),
            &ApodView::resolve(apod.state(), text),
        )
    }
}

/// Per-request rendering context.
pub struct PageContext<'a> {
    pub text: Localizer<'a>,
    pub params: PageParams,
    pub site_name: &'a str,
}

fn launches_section(out: &mut String, page: &PageContext<'_>, launches: &LaunchesView, apod: &ApodView) {
    let text = page.text;
    let _ = write!(
        out,
        r#"<section id="launches" class="launches"><div class="launches__head"><div><p class="kicker">{}</p><h2>{}</h2><p class="lead">{}</p></div><span class="live-tag">{}</span></div><div class="launches__body"><div class="launches__apod">"#,
        escape(text.text(TextKey::LaunchesKicker)),
        escape(text.text(TextKey::LaunchesTitle)),
        escape(text.text(TextKey::LaunchesLead)),
        escape(text.text(TextKey::LaunchesLiveTag)),
    );
    apod_card_html(out, apod, text);
    out.push_str(r#"</div><div class="launches__list">"#);
    launches_list_html(out, launches, text, page.params);
    out.push_str("</div></div></section>");
}

/// Render the whole document for already-resolved widget views.
pub fn render_page(page: &PageContext<'_>, launches: &LaunchesView, apod: &ApodView) -> String {
    let text = page.text;
    let mut out = String::with_capacity(32 * 1024);
    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="{}"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><meta name="description" content="{}"></head><body>"#,
        page.params.lang.code(),
        escape(text.text(TextKey::PageTitle)),
        escape(text.text(TextKey::PageDescription)),
    );

    sections::header(&mut out, page);
    out.push_str("<main>");
    sections::hero(&mut out, page);
    sections::metrics(&mut out, page);
    sections::project(&mut out, page);
    sections::team(&mut out, page);
    sections::sponsor(&mut out, page);
    launches_section(&mut out, page, launches, apod);
    sections::join(&mut out, page);
    sections::contact(&mut out, page);
    out.push_str("</main>");
    sections::footer(&mut out, page);

    out.push_str("</body></html>");
    out
}
