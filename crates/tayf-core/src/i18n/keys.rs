//! The closed set of content keys shared by every language.

use std::fmt;
use std::str::FromStr;

use crate::error::TayfError;

macro_rules! text_keys {
    ($($variant:ident => $wire:literal,)+) => {
        /// Identifier of one piece of displayable text.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TextKey {
            $($variant,)+
        }

        impl TextKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)+];

            /// Stable wire name used in override files and JSON.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $wire,)+
                }
            }
        }

        impl FromStr for TextKey {
            type Err = TayfError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(TextKey::$variant),)+
                    _ => Err(TayfError::Config(format!("unknown text key: {s}"))),
                }
            }
        }
    };
}

text_keys! {
    // --- Page chrome ---
    PageTitle => "pageTitle",
    PageDescription => "pageDescription",
    NavProject => "navProject",
    NavTeam => "navTeam",
    NavSponsor => "navSponsor",
    NavJoin => "navJoin",
    NavContact => "navContact",
    MenuAriaLabel => "menuAriaLabel",
    LanguageSwitchLabel => "languageSwitchLabel",
    LogoAlt => "logoAlt",

    // --- Hero ---
    HeroTitle => "heroTitle",
    HeroSubtitle => "heroSubtitle",
    HeroBtnProject => "heroBtnProject",
    HeroBtnSponsor => "heroBtnSponsor",

    // --- Metrics ---
    MetricsTest => "metricsTest",
    MetricsAccess => "metricsAccess",
    MetricsMembers => "metricsMembers",
    MetricsPartners => "metricsPartners",
    MetricsHours => "metricsHours",

    // --- Project ---
    ProjectTitle => "projectTitle",
    ProjectText => "projectText",
    ProjectAchievementsTitle => "projectAchievementsTitle",
    Ach1 => "ach1",
    Ach2 => "ach2",
    Ach3 => "ach3",
    ProjectGoalsTitle => "projectGoalsTitle",
    Goal1 => "goal1",
    Goal2 => "goal2",
    Goal3 => "goal3",
    BadgeFounded => "badgeFounded",
    BadgeDrScorePrefix => "badgeDRScorePrefix",
    GalleryTitle => "galleryTitle",
    TabGallery => "tabGallery",
    Tab3d => "tab3D",
    HintPan => "hintPan",
    ProjectImageAlt1 => "projectImageAlt1",
    ProjectImageAlt2 => "projectImageAlt2",
    ProjectImageAlt3 => "projectImageAlt3",
    ProjectImageAlt4 => "projectImageAlt4",
    ProjectImageAlt5 => "projectImageAlt5",
    ProjectTimelineTitle => "projectTimelineTitle",
    TimelineItem1Date => "timelineItem1Date",
    TimelineItem1Desc => "timelineItem1Desc",
    TimelineItem2Date => "timelineItem2Date",
    TimelineItem2Desc => "timelineItem2Desc",
    TimelineItem3Date => "timelineItem3Date",
    TimelineItem3Desc => "timelineItem3Desc",
    TimelineItem4Date => "timelineItem4Date",
    TimelineItem4Desc => "timelineItem4Desc",

    // --- Team ---
    TeamTitle => "teamTitle",
    TeamCard1Title => "teamCard1Title",
    TeamCard1Text => "teamCard1Text",
    TeamCard2Title => "teamCard2Title",
    TeamCard2Text => "teamCard2Text",
    TeamCard3Title => "teamCard3Title",
    TeamCard3Text => "teamCard3Text",
    TeamCard4Title => "teamCard4Title",
    TeamCard4Text => "teamCard4Text",
    TeamCard5Title => "teamCard5Title",
    TeamCard5Text => "teamCard5Text",

    // --- Sponsor ---
    SponsorIntroTitle => "sponsorIntroTitle",
    SponsorIntroSubtitle => "sponsorIntroSubtitle",
    SponsorIntroBtn => "sponsorIntroBtn",
    SponsorTiersTitle => "sponsorTiersTitle",
    SponsorTierSilverTitle => "sponsorTierSilverTitle",
    SponsorTierSilverBenefit1 => "sponsorTierSilverBenefit1",
    SponsorTierSilverBenefit2 => "sponsorTierSilverBenefit2",
    SponsorTierPlatinumTitle => "sponsorTierPlatinumTitle",
    SponsorTierPlatinumBadge => "sponsorTierPlatinumBadge",
    SponsorTierPlatinumBenefit1 => "sponsorTierPlatinumBenefit1",
    SponsorTierPlatinumBenefit2 => "sponsorTierPlatinumBenefit2",
    SponsorTierPlatinumBenefit3 => "sponsorTierPlatinumBenefit3",
    SponsorTierPlatinumBenefit4 => "sponsorTierPlatinumBenefit4",
    SponsorTierGoldTitle => "sponsorTierGoldTitle",
    SponsorTierGoldBenefit1 => "sponsorTierGoldBenefit1",
    SponsorTierGoldBenefit2 => "sponsorTierGoldBenefit2",
    SponsorTierGoldBenefit3 => "sponsorTierGoldBenefit3",
    SponsorFinalCtaTitle => "sponsorFinalCtaTitle",
    SponsorFinalCtaText => "sponsorFinalCtaText",

    // --- Launches ---
    LaunchesKicker => "launchesKicker",
    LaunchesTitle => "launchesTitle",
    LaunchesLead => "launchesLead",
    LaunchesLiveTag => "launchesLiveTag",
    LaunchesListTitle => "launchesListTitle",
    LaunchesLoading => "launchesLoading",
    LaunchesEmpty => "launchesEmpty",
    LaunchesError => "launchesError",
    LaunchesShowMore => "launchesShowMore",
    LaunchesShowLess => "launchesShowLess",
    LaunchesUnknownName => "launchesUnknownName",
    LaunchesUnknownOperator => "launchesUnknownOperator",
    LaunchesUnknownLocation => "launchesUnknownLocation",
    LaunchesNoDate => "launchesNoDate",
    LaunchesOperatorLabel => "launchesOperatorLabel",
    LaunchesLocationLabel => "launchesLocationLabel",
    LaunchesTimeLabel => "launchesTimeLabel",
    LaunchesMissionLabel => "launchesMissionLabel",
    RocketAlt => "rocketAlt",

    // --- Astronomy picture ---
    ApodTitle => "apodTitle",
    ApodSource => "apodSource",
    ApodLoading => "apodLoading",
    ApodNoImage => "apodNoImage",
    ApodError => "apodError",
    ApodDateLabel => "apodDateLabel",

    // --- Join ---
    JoinTitle => "joinTitle",
    JoinLead => "joinLead",
    JoinItem1 => "joinItem1",
    JoinItem2 => "joinItem2",
    JoinItem3 => "joinItem3",
    JoinItem4 => "joinItem4",

    // --- Contact & footer ---
    ContactTitle => "contactTitle",
    ContactText => "contactText",
    ContactEmailAriaLabel => "contactEmailAriaLabel",
    ContactLinkedInAriaLabel => "contactLinkedInAriaLabel",
    ContactInstagramAriaLabel => "contactInstagramAriaLabel",
    FooterCopyright => "footerCopyright",
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
