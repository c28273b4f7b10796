//! English table. Keys without an entry fall back to Turkish.

use super::TextKey;

pub(super) fn lookup(key: TextKey) -> Option<&'static str> {
    use TextKey::*;

    let text = match key {
        // --- Page chrome ---
        PageDescription => "ITU TAYF is a student space team building rocket and satellite systems.",
        NavProject => "Project",
        NavTeam => "Team",
        NavSponsor => "Sponsorship",
        NavJoin => "Join",
        NavContact => "Contact",
        MenuAriaLabel => "Open menu",
        LanguageSwitchLabel => "Language",
        LogoAlt => "ITU TAYF logo",

        // --- Hero ---
        HeroTitle => "The Road to the Stars Runs Through ITU",
        HeroSubtitle => "Rocket and satellite systems designed, tested and launched by students.",
        HeroBtnProject => "Explore Our Project",
        HeroBtnSponsor => "Become a Sponsor",

        // --- Metrics ---
        MetricsTest => "Successful Tests",
        MetricsAccess => "Reach",
        MetricsMembers => "Active Members",
        MetricsPartners => "Partners",
        MetricsHours => "Engineering Hours",

        // --- Project ---
        ProjectTitle => "Our Project",
        ProjectText => "Our communication satellite mission brings structural design, avionics, flight software and the ground station together in a single integrated system. Every subsystem is built and tested from scratch by our members.",
        ProjectAchievementsTitle => "Achievements",
        Ach1 => "Finalist in the national model satellite competition",
        Ach2 => "High score on the Critical Design Review",
        Ach3 => "Successful altitude and separation tests",
        ProjectGoalsTitle => "Goals",
        Goal1 => "Represent our country in international competitions",
        Goal2 => "Develop a subsystem capable of reaching orbit",
        Goal3 => "Spread space engineering knowledge across campus",
        BadgeFounded => "Founded: 2021",
        BadgeDrScorePrefix => "CDR Score: ",
        GalleryTitle => "Gallery",
        TabGallery => "Photos",
        Tab3d => "3D Model",
        HintPan => "Drag to rotate the model, scroll to zoom.",
        ProjectImageAlt1 => "Satellite body during integration",
        ProjectImageAlt2 => "Close-up of the avionics board",
        ProjectImageAlt3 => "Team members at the test site",
        ProjectImageAlt4 => "Ground station antenna",
        ProjectImageAlt5 => "System architecture diagram",
        ProjectTimelineTitle => "Roadmap",
        TimelineItem1Date => "October 2021",
        TimelineItem1Desc => "Team founded and first concept design",
        TimelineItem2Date => "March 2022",
        TimelineItem2Desc => "Preliminary Design Review submitted",
        TimelineItem3Date => "June 2023",
        TimelineItem3Desc => "First flight model integrated and tested",
        TimelineItem4Date => "2025 and beyond",
        TimelineItem4Desc => "International competitions and orbital goals",

        // --- Team ---
        TeamTitle => "Our Teams",
        TeamCard1Title => "Mechanical",
        TeamCard1Text => "Structural design, material selection and manufacturing.",
        TeamCard2Title => "Electronics",
        TeamCard2Text => "Avionics, power systems and sensor integration.",
        TeamCard3Title => "Flight Software",
        TeamCard3Text => "Embedded software, telemetry and control algorithms.",
        TeamCard4Title => "Ground Station",
        TeamCard4Text => "Communications, antenna systems and data visualization.",
        TeamCard5Title => "Organization",
        TeamCard5Text => "Sponsorship, events, design and social media.",

        // --- Sponsor ---
        SponsorIntroTitle => "Let's Build the Future Together",
        SponsorIntroSubtitle => "Your support powers young engineers reaching for space.",
        SponsorIntroBtn => "Download the Brochure",
        SponsorTiersTitle => "Sponsorship Tiers",
        SponsorTierSilverTitle => "Silver",
        SponsorTierSilverBenefit1 => "Logo on the website",
        SponsorTierSilverBenefit2 => "Thank-you post on social media",
        SponsorTierPlatinumTitle => "Platinum",
        SponsorTierPlatinumBadge => "Recommended",
        SponsorTierPlatinumBenefit1 => "Large logo on the satellite body",
        SponsorTierPlatinumBenefit2 => "Logo on team apparel",
        SponsorTierPlatinumBenefit3 => "Special mention in competition presentations",
        SponsorTierPlatinumBenefit4 => "Technical seminar for your company",
        SponsorTierGoldTitle => "Gold",
        SponsorTierGoldBenefit1 => "Logo on the satellite body",
        SponsorTierGoldBenefit2 => "Featured logo on the website",
        SponsorTierGoldBenefit3 => "Booth at our events",
        SponsorFinalCtaTitle => "Have questions?",
        SponsorFinalCtaText => "Let's find the partnership model that suits you best.",

        // --- Launches ---
        LaunchesKicker => "Live Data",
        LaunchesTitle => "This Week in Space",
        LaunchesLead => "Upcoming rocket launches and NASA's astronomy picture of the day.",
        LaunchesLiveTag => "Live",
        LaunchesListTitle => "Upcoming Launches",
        LaunchesLoading => "Loading launches…",
        LaunchesEmpty => "No launches are scheduled right now.",
        LaunchesError => "Could not load launch data.",
        LaunchesShowMore => "Show more",
        LaunchesShowLess => "Show less",
        LaunchesUnknownName => "Unnamed mission",
        LaunchesUnknownOperator => "Unknown operator",
        LaunchesUnknownLocation => "Unknown location",
        LaunchesNoDate => "Date to be determined",
        LaunchesOperatorLabel => "Operator",
        LaunchesLocationLabel => "Location",
        LaunchesTimeLabel => "Time",
        LaunchesMissionLabel => "Mission",
        RocketAlt => "Rocket image",

        // --- Astronomy picture ---
        ApodTitle => "Astronomy Picture of the Day",
        ApodLoading => "Loading picture…",
        ApodNoImage => "Today's entry is not a picture.",
        ApodError => "Could not load today's picture.",
        ApodDateLabel => "Date",

        // --- Join ---
        JoinTitle => "Join Us",
        JoinLead => "Whatever your field, there is an orbit for you at TAYF. Pick a department and apply.",
        JoinItem1 => "Experience on real space projects",
        JoinItem2 => "Hands-on testing and manufacturing",
        JoinItem3 => "Trainings and technical workshops",
        JoinItem4 => "Strong ties with the industry",

        // --- Contact & footer ---
        ContactTitle => "Contact",
        ContactText => "Reach out with questions and partnership offers.",
        ContactEmailAriaLabel => "Send an email",
        ContactLinkedInAriaLabel => "Our LinkedIn page",
        ContactInstagramAriaLabel => "Our Instagram account",
        FooterCopyright => "© 2025 ITU TAYF. All rights reserved.",

        // Brand title and source credit read the same in both languages.
        PageTitle | ApodSource => return None,
    };
    Some(text)
}
