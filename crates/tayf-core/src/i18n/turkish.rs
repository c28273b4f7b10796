//! Turkish table. Exhaustive: every key has an entry.

use super::TextKey;

pub(super) fn lookup(key: TextKey) -> &'static str {
    use TextKey::*;

    match key {
        // --- Page chrome ---
        PageTitle => "İTÜ TAYF",
        PageDescription => "İTÜ TAYF, roket ve uydu sistemleri geliştiren öğrenci uzay takımıdır.",
        NavProject => "Proje",
        NavTeam => "Ekip",
        NavSponsor => "Sponsorluk",
        NavJoin => "Katıl",
        NavContact => "İletişim",
        MenuAriaLabel => "Menüyü aç",
        LanguageSwitchLabel => "Dil seçimi",
        LogoAlt => "İTÜ TAYF logosu",

        // --- Hero ---
        HeroTitle => "Yıldızlara Giden Yol İTÜ'den Geçer",
        HeroSubtitle => "Öğrenciler tarafından tasarlanan, test edilen ve fırlatılan roket ve uydu sistemleri.",
        HeroBtnProject => "Projemizi Keşfet",
        HeroBtnSponsor => "Sponsor Ol",

        // --- Metrics ---
        MetricsTest => "Başarılı Test",
        MetricsAccess => "Erişim",
        MetricsMembers => "Aktif Üye",
        MetricsPartners => "Paydaş",
        MetricsHours => "Saat Mühendislik",

        // --- Project ---
        ProjectTitle => "Projemiz",
        ProjectText => "Haberleşme uydusu görevimiz; yapısal tasarım, aviyonik, uçuş yazılımı ve yer istasyonunu tek bir entegre sistemde buluşturuyor. Her alt sistem takım üyelerimiz tarafından sıfırdan geliştiriliyor ve test ediliyor.",
        ProjectAchievementsTitle => "Başarılarımız",
        Ach1 => "Ulusal model uydu yarışmasında finalist",
        Ach2 => "Kritik Tasarım Raporu'nda yüksek puan",
        Ach3 => "Başarılı yükseklik ve ayrılma testleri",
        ProjectGoalsTitle => "Hedeflerimiz",
        Goal1 => "Uluslararası yarışmalarda ülkemizi temsil etmek",
        Goal2 => "Yörüngeye ulaşabilecek bir alt sistem geliştirmek",
        Goal3 => "Uzay mühendisliği bilgisini kampüste yaygınlaştırmak",
        BadgeFounded => "Kuruluş: 2021",
        BadgeDrScorePrefix => "KTR Puanı: ",
        GalleryTitle => "Galeri",
        TabGallery => "Fotoğraflar",
        Tab3d => "3B Model",
        HintPan => "Modeli döndürmek için sürükleyin, yakınlaştırmak için kaydırın.",
        ProjectImageAlt1 => "Entegrasyon sırasında uydu gövdesi",
        ProjectImageAlt2 => "Aviyonik kartın yakından görünümü",
        ProjectImageAlt3 => "Test alanında takım üyeleri",
        ProjectImageAlt4 => "Yer istasyonu anteni",
        ProjectImageAlt5 => "Sistem mimarisi şeması",
        ProjectTimelineTitle => "Yol Haritası",
        TimelineItem1Date => "Ekim 2021",
        TimelineItem1Desc => "Takımın kuruluşu ve ilk kavramsal tasarım",
        TimelineItem2Date => "Mart 2022",
        TimelineItem2Desc => "Ön Tasarım Raporu teslimi",
        TimelineItem3Date => "Haziran 2023",
        TimelineItem3Desc => "İlk uçuş modelinin entegrasyonu ve testleri",
        TimelineItem4Date => "2025 ve sonrası",
        TimelineItem4Desc => "Uluslararası yarışmalar ve yörünge hedefleri",

        // --- Team ---
        TeamTitle => "Ekiplerimiz",
        TeamCard1Title => "Mekanik",
        TeamCard1Text => "Yapısal tasarım, malzeme seçimi ve üretim süreçleri.",
        TeamCard2Title => "Elektronik",
        TeamCard2Text => "Aviyonik, güç sistemleri ve sensör entegrasyonu.",
        TeamCard3Title => "Uçuş Yazılımı",
        TeamCard3Text => "Gömülü yazılım, telemetri ve kontrol algoritmaları.",
        TeamCard4Title => "Yer İstasyonu",
        TeamCard4Text => "Haberleşme, anten sistemleri ve veri görselleştirme.",
        TeamCard5Title => "Organizasyon",
        TeamCard5Text => "Sponsorluk, etkinlikler, tasarım ve sosyal medya.",

        // --- Sponsor ---
        SponsorIntroTitle => "Geleceği Birlikte İnşa Edelim",
        SponsorIntroSubtitle => "Desteğiniz genç mühendislerin uzaya uzanan projelerine güç veriyor.",
        SponsorIntroBtn => "Tanıtım Dosyasını İndir",
        SponsorTiersTitle => "Sponsorluk Paketleri",
        SponsorTierSilverTitle => "Gümüş",
        SponsorTierSilverBenefit1 => "Web sitesinde logo",
        SponsorTierSilverBenefit2 => "Sosyal medyada teşekkür paylaşımı",
        SponsorTierPlatinumTitle => "Platin",
        SponsorTierPlatinumBadge => "Önerilen",
        SponsorTierPlatinumBenefit1 => "Uydu gövdesinde büyük logo",
        SponsorTierPlatinumBenefit2 => "Takım kıyafetlerinde logo",
        SponsorTierPlatinumBenefit3 => "Yarışma sunumlarında özel anma",
        SponsorTierPlatinumBenefit4 => "Şirketinize özel teknik seminer",
        SponsorTierGoldTitle => "Altın",
        SponsorTierGoldBenefit1 => "Uydu gövdesinde logo",
        SponsorTierGoldBenefit2 => "Web sitesinde öne çıkan logo",
        SponsorTierGoldBenefit3 => "Etkinliklerde stant imkânı",
        SponsorFinalCtaTitle => "Sorularınız mı var?",
        SponsorFinalCtaText => "Size en uygun iş birliği modelini birlikte belirleyelim.",

        // --- Launches ---
        LaunchesKicker => "Canlı Veri",
        LaunchesTitle => "Uzayda Bu Hafta",
        LaunchesLead => "Yaklaşan roket fırlatmaları ve NASA'nın günün astronomi fotoğrafı.",
        LaunchesLiveTag => "Canlı",
        LaunchesListTitle => "Yaklaşan Fırlatmalar",
        LaunchesLoading => "Fırlatmalar yükleniyor…",
        LaunchesEmpty => "Şu anda planlanmış fırlatma bulunmuyor.",
        LaunchesError => "Fırlatma verileri alınamadı.",
        LaunchesShowMore => "Daha fazla göster",
        LaunchesShowLess => "Daha az göster",
        LaunchesUnknownName => "İsimsiz görev",
        LaunchesUnknownOperator => "Bilinmeyen operatör",
        LaunchesUnknownLocation => "Bilinmeyen konum",
        LaunchesNoDate => "Tarih belirlenmedi",
        LaunchesOperatorLabel => "Operatör",
        LaunchesLocationLabel => "Konum",
        LaunchesTimeLabel => "Zaman",
        LaunchesMissionLabel => "Görev",
        RocketAlt => "Roket görseli",

        // --- Astronomy picture ---
        ApodTitle => "Günün Astronomi Fotoğrafı",
        ApodSource => "NASA APOD",
        ApodLoading => "Fotoğraf yükleniyor…",
        ApodNoImage => "Bugünün içeriği bir fotoğraf değil.",
        ApodError => "Günün fotoğrafı alınamadı.",
        ApodDateLabel => "Tarih",

        // --- Join ---
        JoinTitle => "Aramıza Katıl",
        JoinLead => "Hangi alanda olursan ol, TAYF'ta sana uygun bir yörünge var. Bir departman seç ve başvurunu yap.",
        JoinItem1 => "Gerçek uzay projelerinde deneyim",
        JoinItem2 => "Test ve üretim süreçlerinde uygulamalı çalışma",
        JoinItem3 => "Eğitimler ve teknik atölyeler",
        JoinItem4 => "Sektörle güçlü bağlantılar",

        // --- Contact & footer ---
        ContactTitle => "İletişim",
        ContactText => "Sorularınız ve iş birliği teklifleriniz için bize ulaşın.",
        ContactEmailAriaLabel => "E-posta gönder",
        ContactLinkedInAriaLabel => "LinkedIn sayfamız",
        ContactInstagramAriaLabel => "Instagram hesabımız",
        FooterCopyright => "© 2025 İTÜ TAYF. Tüm hakları saklıdır.",
    }
}
