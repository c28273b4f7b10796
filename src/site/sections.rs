//! Static page sections, in page order.

use std::fmt::Write;
use tayf_core::i18n::{format_compact, Language, TextKey};

use super::content::{
    Metric, ACHIEVEMENTS, BROCHURE_PATH, CONTACT_EMAIL, CONTACT_LINKS, DEPARTMENTS, DR_SCORE,
    GALLERY, GALLERY_WIDE, GOALS, HERO_IMAGE_PATH, JOIN_ITEMS, LOGO_PATH, METRICS,
    MODEL_EMBED_URL, MODEL_TITLE, NAV_LINKS, SPONSOR_TIERS, TIMELINE,
};
use super::html::escape;
use super::PageContext;

pub(super) fn header(out: &mut String, page: &PageContext<'_>) {
    let text = page.text;
    let _ = write!(
        out,
        r##"<header class="site-header"><nav class="site-nav"><a class="brand" href="#hero">{}</a><ul class="nav-links">"##,
        escape(page.site_name)
    );
    for link in NAV_LINKS {
        let _ = write!(
            out,
            r##"<li><a href="#{}">{}</a></li>"##,
            link.anchor,
            escape(text.text(link.label))
        );
    }
    let _ = write!(
        out,
        r#"</ul><div class="lang-switch" role="group" aria-label="{}">"#,
        escape(text.text(TextKey::LanguageSwitchLabel))
    );
    for (i, lang) in Language::all().iter().enumerate() {
        if i > 0 {
            out.push_str(r#"<span class="sep">|</span>"#);
        }
        let current = *lang == page.params.lang;
        let _ = write!(
            out,
            r#"<a href="{}" hreflang="{}" lang="{}" title="{}"{}>{}</a>"#,
            page.params.with_lang(*lang).href(""),
            lang.code(),
            lang.code(),
            lang.native_name(),
            if current { r#" aria-current="true""# } else { "" },
            lang.code().to_uppercase()
        );
    }
    let _ = write!(
        out,
        r#"</div><button class="menu-toggle" type="button" aria-label="{}" aria-expanded="false"></button></nav></header>"#,
        escape(text.text(TextKey::MenuAriaLabel))
    );
}

pub(super) fn hero(out: &mut String, page: &PageContext<'_>) {
    let text = page.text;
    let _ = write!(
        out,
        r##"<section id="hero" class="hero" style="background-image: url('{}')"><img class="hero-logo" src="{}" alt="{}" width="256" height="256"><h1>{}</h1><p class="hero-subtitle">{}</p><div class="hero-actions"><a class="button button--primary" href="#project">{}</a><a class="button button--outline" href="#sponsor">{}</a></div></section>"##,
        HERO_IMAGE_PATH,
        LOGO_PATH,
        escape(text.text(TextKey::LogoAlt)),
        escape(text.text(TextKey::HeroTitle)),
        escape(text.text(TextKey::HeroSubtitle)),
        escape(text.text(TextKey::HeroBtnProject)),
        escape(text.text(TextKey::HeroBtnSponsor)),
    );
}

/// Displayed counter value, e.g. `12+` or `1,8 Mn+`.
pub(super) fn metric_value(metric: &Metric, lang: Language) -> String {
    let number = if metric.compact {
        format_compact(metric.value, lang)
    } else {
        metric.value.to_string()
    };
    format!("{number}{}", metric.suffix)
}

pub(super) fn metrics(out: &mut String, page: &PageContext<'_>) {
    out.push_str(r#"<section id="metrics" class="metrics">"#);
    for metric in METRICS {
        let _ = write!(
            out,
            r#"<div class="metric"><div class="metric__value" data-target="{}">{}</div><p>{}</p></div>"#,
            metric.value,
            escape(&metric_value(metric, page.params.lang)),
            escape(page.text.text(metric.label))
        );
    }
    out.push_str("</section>");
}

fn list(out: &mut String, page: &PageContext<'_>, keys: &[TextKey]) {
    out.push_str("<ul>");
    for key in keys {
        let _ = write!(out, "<li>{}</li>", escape(page.text.text(*key)));
    }
    out.push_str("</ul>");
}

pub(super) fn project(out: &mut String, page: &PageContext<'_>) {
    let text = page.text;
    let _ = write!(
        out,
        r#"<section id="project" class="project"><div class="project__about"><h2>{}</h2><p>{}</p><section aria-labelledby="achievements-title"><h3 id="achievements-title">{}</h3>"#,
        escape(text.text(TextKey::ProjectTitle)),
        escape(text.text(TextKey::ProjectText)),
        escape(text.text(TextKey::ProjectAchievementsTitle)),
    );
    list(out, page, ACHIEVEMENTS);
    let _ = write!(
        out,
        r#"</section><section aria-labelledby="goals-title"><h3 id="goals-title">{}</h3>"#,
        escape(text.text(TextKey::ProjectGoalsTitle))
    );
    list(out, page, GOALS);
    let _ = write!(
        out,
        r#"</section><div class="badges"><span class="badge">{}</span><span class="badge">{}<span class="dr-score">{DR_SCORE}</span>/100</span></div></div>"#,
        escape(text.text(TextKey::BadgeFounded)),
        escape(text.text(TextKey::BadgeDrScorePrefix)),
    );

    // Media: gallery and 3D model tabs.
    let _ = write!(
        out,
        r#"<div class="project__media"><h3>{}</h3><div class="tabs" role="tablist"><button id="tab-gallery" role="tab" aria-selected="true" aria-controls="panel-gallery">{}</button><button id="tab-3d" role="tab" aria-selected="false" aria-controls="panel-3d">{}</button></div><div id="panel-gallery" role="tabpanel" aria-labelledby="tab-gallery"><div class="gallery">"#,
        escape(text.text(TextKey::GalleryTitle)),
        escape(text.text(TextKey::TabGallery)),
        escape(text.text(TextKey::Tab3d)),
    );
    for (src, alt) in GALLERY {
        let _ = write!(out, r#"<img src="{src}" alt="{}">"#, escape(text.text(*alt)));
    }
    let (wide_src, wide_alt) = GALLERY_WIDE;
    let _ = write!(
        out,
        r#"</div><img class="gallery__wide" src="{wide_src}" alt="{}"></div><div id="panel-3d" role="tabpanel" aria-labelledby="tab-3d" hidden><div class="model-frame"><iframe title="{MODEL_TITLE}" src="{}" loading="lazy" allow="autoplay; fullscreen; xr-spatial-tracking" allowfullscreen></iframe></div><p class="hint">{}</p></div></div>"#,
        escape(text.text(wide_alt)),
        escape(MODEL_EMBED_URL),
        escape(text.text(TextKey::HintPan)),
    );

    let _ = write!(
        out,
        r#"<div class="timeline"><h3>{}</h3><ol>"#,
        escape(text.text(TextKey::ProjectTimelineTitle))
    );
    for (date, desc) in TIMELINE {
        let _ = write!(
            out,
            r#"<li class="timeline__item"><p class="timeline__date">{}</p><p>{}</p></li>"#,
            escape(text.text(*date)),
            escape(text.text(*desc))
        );
    }
    out.push_str("</ol></div></section>");
}

fn icon(out: &mut String, id: &str) {
    let _ = write!(out, r##"<svg class="icon" aria-hidden="true"><use href="#{id}"></use></svg>"##);
}

pub(super) fn team(out: &mut String, page: &PageContext<'_>) {
    let _ = write!(
        out,
        r#"<section id="team" class="team"><h2>{}</h2><div class="team-grid">"#,
        escape(page.text.text(TextKey::TeamTitle))
    );
    for dept in DEPARTMENTS {
        out.push_str(r#"<div class="team-card">"#);
        icon(out, dept.icon);
        let _ = write!(
            out,
            "<h3>{}</h3><p>{}</p></div>",
            escape(page.text.text(dept.title)),
            escape(page.text.text(dept.text))
        );
    }
    out.push_str("</div></section>");
}

fn contact_links(out: &mut String, page: &PageContext<'_>) {
    out.push_str(r#"<div class="contact-links">"#);
    for (href, label, class, external) in CONTACT_LINKS {
        let _ = write!(
            out,
            r#"<a class="contact-link contact-link--{class}" href="{}" aria-label="{}"{}></a>"#,
            escape(href),
            escape(page.text.text(*label)),
            if *external {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            }
        );
    }
    out.push_str("</div>");
}

pub(super) fn sponsor(out: &mut String, page: &PageContext<'_>) {
    let text = page.text;
    let _ = write!(
        out,
        r#"<section id="sponsor" class="sponsor"><div class="sponsor__intro"><h2>{}</h2><p>{}</p><a class="button button--primary" href="{BROCHURE_PATH}" download>{}</a></div><div class="sponsor__tiers"><h2>{}</h2><div class="tier-grid">"#,
        escape(text.text(TextKey::SponsorIntroTitle)),
        escape(text.text(TextKey::SponsorIntroSubtitle)),
        escape(text.text(TextKey::SponsorIntroBtn)),
        escape(text.text(TextKey::SponsorTiersTitle)),
    );
    for tier in SPONSOR_TIERS {
        let featured = if tier.is_featured() { " tier--featured" } else { "" };
        let _ = write!(out, r#"<div class="tier tier--{}{featured}">"#, tier.key);
        if let Some(badge) = tier.badge {
            let _ = write!(out, r#"<span class="tier__badge">{}</span>"#, escape(text.text(badge)));
        }
        let _ = write!(out, "<h3>{}</h3>", escape(text.text(tier.title)));
        list(out, page, tier.benefits);
        let _ = write!(
            out,
            r##"<a class="button" href="#contact">{}</a></div>"##,
            escape(text.text(TextKey::ContactTitle))
        );
    }
    let _ = write!(
        out,
        r#"</div></div><div class="sponsor__cta"><div><h3>{}</h3><p>{}</p></div>"#,
        escape(text.text(TextKey::SponsorFinalCtaTitle)),
        escape(text.text(TextKey::SponsorFinalCtaText)),
    );
    contact_links(out, page);
    out.push_str("</div></section>");
}

pub(super) fn join(out: &mut String, page: &PageContext<'_>) {
    let text = page.text;
    let _ = write!(
        out,
        r#"<section id="join" class="join"><h2>{}</h2><p class="lead">{}</p><div class="join-departments">"#,
        escape(text.text(TextKey::JoinTitle)),
        escape(text.text(TextKey::JoinLead)),
    );
    for dept in DEPARTMENTS {
        let _ = write!(
            out,
            r#"<a class="join-card join-card--{}" style="--accent: {}" href="{}" target="_blank" rel="noopener noreferrer">"#,
            dept.key,
            dept.color,
            escape(dept.form_url)
        );
        icon(out, dept.icon);
        let _ = write!(out, "<span>{}</span></a>", escape(text.text(dept.title)));
    }
    out.push_str(r#"</div><div class="join-items">"#);
    for (emoji, key) in JOIN_ITEMS {
        let _ = write!(out, r#"<div class="join-item">{emoji} {}</div>"#, escape(text.text(*key)));
    }
    out.push_str("</div></section>");
}

pub(super) fn contact(out: &mut String, page: &PageContext<'_>) {
    let _ = write!(
        out,
        r#"<section id="contact" class="contact"><h2>{}</h2><p>{}</p><p><a href="mailto:{CONTACT_EMAIL}">{CONTACT_EMAIL}</a></p>"#,
        escape(page.text.text(TextKey::ContactTitle)),
        escape(page.text.text(TextKey::ContactText)),
    );
    contact_links(out, page);
    out.push_str("</section>");
}

pub(super) fn footer(out: &mut String, page: &PageContext<'_>) {
    let _ = write!(
        out,
        r#"<footer class="site-footer"><p>{}</p></footer>"#,
        escape(page.text.text(TextKey::FooterCopyright))
    );
}
