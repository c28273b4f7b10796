//! Static page content: everything that is not a translatable string.

use tayf_core::i18n::TextKey;

pub const CONTACT_EMAIL: &str = "tayf.takimi@itu.edu.tr";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/i%CC%87t%C3%BC-tayf/";
pub const INSTAGRAM_URL: &str = "https://instagram.com/itu.tayf";
pub const BROCHURE_PATH: &str = "./ITU_Tayf_Tanitim_Dosyasi.pdf";
pub const LOGO_PATH: &str = "/images/LogoWhite.png";
pub const HERO_IMAGE_PATH: &str = "/images/iss033e009282~orig-min.jpg";
pub const MODEL_EMBED_URL: &str =
    "https://sketchfab.com/models/9a7ad3344edb4e598de848a5badb7416/embed?ui_theme=dark";
pub const MODEL_TITLE: &str = "Communication Satellite (Sketchfab)";

/// Design review score shown on the project badge, out of 100.
pub const DR_SCORE: f32 = 96.5;

pub struct NavLink {
    pub anchor: &'static str,
    pub label: TextKey,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: "project", label: TextKey::NavProject },
    NavLink { anchor: "team", label: TextKey::NavTeam },
    NavLink { anchor: "sponsor", label: TextKey::NavSponsor },
    NavLink { anchor: "join", label: TextKey::NavJoin },
    NavLink { anchor: "contact", label: TextKey::NavContact },
];

/// One counter of the metrics band.
pub struct Metric {
    pub value: u64,
    pub label: TextKey,
    pub suffix: &'static str,
    /// Render with compact notation (`1,8 Mn`).
    pub compact: bool,
}

pub const METRICS: &[Metric] = &[
    Metric { value: 12, label: TextKey::MetricsTest, suffix: "+", compact: false },
    Metric { value: 1_800_000, label: TextKey::MetricsAccess, suffix: "+", compact: true },
    Metric { value: 25, label: TextKey::MetricsMembers, suffix: "", compact: false },
    Metric { value: 9, label: TextKey::MetricsPartners, suffix: "", compact: false },
    Metric { value: 600, label: TextKey::MetricsHours, suffix: "+", compact: false },
];

pub const ACHIEVEMENTS: &[TextKey] = &[TextKey::Ach1, TextKey::Ach2, TextKey::Ach3];
pub const GOALS: &[TextKey] = &[TextKey::Goal1, TextKey::Goal2, TextKey::Goal3];

/// Gallery grid images, then the wide image under the grid.
pub const GALLERY: &[(&str, TextKey)] = &[
    ("/images/1.jpg", TextKey::ProjectImageAlt1),
    ("/images/5.jpeg", TextKey::ProjectImageAlt2),
    ("/images/7.jpg", TextKey::ProjectImageAlt3),
    ("/images/8.jpeg", TextKey::ProjectImageAlt4),
];
pub const GALLERY_WIDE: (&str, TextKey) = ("/images/6.png", TextKey::ProjectImageAlt5);

pub const TIMELINE: &[(TextKey, TextKey)] = &[
    (TextKey::TimelineItem1Date, TextKey::TimelineItem1Desc),
    (TextKey::TimelineItem2Date, TextKey::TimelineItem2Desc),
    (TextKey::TimelineItem3Date, TextKey::TimelineItem3Desc),
    (TextKey::TimelineItem4Date, TextKey::TimelineItem4Desc),
];

/// A team department: team card, join planet and application form.
pub struct Department {
    pub key: &'static str,
    pub icon: &'static str,
    pub title: TextKey,
    pub text: TextKey,
    pub form_url: &'static str,
    /// Accent color of the join card.
    pub color: &'static str,
}

pub const DEPARTMENTS: &[Department] = &[
    Department {
        key: "mekanik",
        icon: "icon-mekanik",
        title: TextKey::TeamCard1Title,
        text: TextKey::TeamCard1Text,
        form_url: "https://docs.google.com/forms/d/e/1FAIpQLSclVLDlyJaNslauTaTi_y40Z-7teateLN4u0U7B6tnM5Z-ZeQ/viewform",
        color: "#60a5fa",
    },
    Department {
        key: "elektronik",
        icon: "icon-elektronik",
        title: TextKey::TeamCard2Title,
        text: TextKey::TeamCard2Text,
        form_url: "https://docs.google.com/forms/d/e/1FAIpQLSfn6BmYY-4C9Fh-5Ne3KXG68L45tbCRPZ7dcArHtspgVf_20g/viewform",
        color: "#34d399",
    },
    Department {
        key: "ucus",
        icon: "icon-ucus",
        title: TextKey::TeamCard3Title,
        text: TextKey::TeamCard3Text,
        form_url: "https://docs.google.com/forms/d/e/1FAIpQLSfBIlWWReLruuUEczAag_HHtsQ4x4pb6e0trzZZC6DJ6KgH2w/viewform",
        color: "#a855f7",
    },
    Department {
        key: "yer",
        icon: "icon-yer",
        title: TextKey::TeamCard4Title,
        text: TextKey::TeamCard4Text,
        form_url: "https://docs.google.com/forms/d/e/1FAIpQLSfQ8ETfVpVIzsVVHnglyiGMkC17nQqG-azaMKnf3Shv3RRRRQ/viewform",
        color: "#fbbf24",
    },
    Department {
        key: "org",
        icon: "icon-org",
        title: TextKey::TeamCard5Title,
        text: TextKey::TeamCard5Text,
        form_url: "https://docs.google.com/forms/d/e/1FAIpQLScmo-XJhrZkSSB6i9hvrA-KNzYjsvkd6rnHUMzDbaIeUGScYg/viewform",
        color: "#f472b6",
    },
];

pub struct SponsorTier {
    pub key: &'static str,
    pub title: TextKey,
    pub benefits: &'static [TextKey],
    /// Shown on featured tiers only.
    pub badge: Option<TextKey>,
}

impl SponsorTier {
    pub fn is_featured(&self) -> bool {
        self.badge.is_some()
    }
}

pub const SPONSOR_TIERS: &[SponsorTier] = &[
    SponsorTier {
        key: "silver",
        title: TextKey::SponsorTierSilverTitle,
        benefits: &[
            TextKey::SponsorTierSilverBenefit1,
            TextKey::SponsorTierSilverBenefit2,
        ],
        badge: None,
    },
    SponsorTier {
        key: "platinum",
        title: TextKey::SponsorTierPlatinumTitle,
        benefits: &[
            TextKey::SponsorTierPlatinumBenefit1,
            TextKey::SponsorTierPlatinumBenefit2,
            TextKey::SponsorTierPlatinumBenefit3,
            TextKey::SponsorTierPlatinumBenefit4,
        ],
        badge: Some(TextKey::SponsorTierPlatinumBadge),
    },
    SponsorTier {
        key: "gold",
        title: TextKey::SponsorTierGoldTitle,
        benefits: &[
            TextKey::SponsorTierGoldBenefit1,
            TextKey::SponsorTierGoldBenefit2,
            TextKey::SponsorTierGoldBenefit3,
        ],
        badge: None,
    },
];

pub const JOIN_ITEMS: &[(&str, TextKey)] = &[
    ("🚀", TextKey::JoinItem1),
    ("🧪", TextKey::JoinItem2),
    ("📚", TextKey::JoinItem3),
    ("🤝", TextKey::JoinItem4),
];

/// Contact links: (href, aria label, class suffix, external).
pub const CONTACT_LINKS: &[(&str, TextKey, &str, bool)] = &[
    ("mailto:tayf.takimi@itu.edu.tr", TextKey::ContactEmailAriaLabel, "email", false),
    (LINKEDIN_URL, TextKey::ContactLinkedInAriaLabel, "linkedin", true),
    (INSTAGRAM_URL, TextKey::ContactInstagramAriaLabel, "instagram", true),
];
