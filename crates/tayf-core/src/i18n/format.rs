//! Locale-aware formatting for dates and numbers shown on the page.
//!
//! Only the two site languages are supported, so month names and separators
//! live here as tables instead of pulling in a full locale database.
//! Unparseable input is passed through unchanged.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};

use super::Language;

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const TR_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const TR_MONTHS_SHORT: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

/// Month name for `month` in 1..=12.
pub fn month_name(lang: Language, month: u32, short: bool) -> &'static str {
    let idx = (month.clamp(1, 12) - 1) as usize;
    match (lang, short) {
        (Language::English, false) => EN_MONTHS[idx],
        (Language::English, true) => EN_MONTHS_SHORT[idx],
        (Language::Turkish, false) => TR_MONTHS[idx],
        (Language::Turkish, true) => TR_MONTHS_SHORT[idx],
    }
}

/// Format an RFC 3339 launch timestamp in the fixed display offset.
///
/// Medium date with short time: `20 Oct 2026, 14:00` / `20 Eki 2026 14:00`.
pub fn format_launch_time(raw: &str, lang: Language, offset: FixedOffset) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) else {
        return raw.to_string();
    };
    let local = parsed.with_timezone(&offset);
    let month = month_name(lang, local.month(), true);
    match lang {
        Language::English => format!(
            "{} {month} {}, {:02}:{:02}",
            local.day(),
            local.year(),
            local.hour(),
            local.minute()
        ),
        Language::Turkish => format!(
            "{} {month} {} {:02}:{:02}",
            local.day(),
            local.year(),
            local.hour(),
            local.minute()
        ),
    }
}

/// Format a `YYYY-MM-DD` picture date as a long date.
///
/// `October 16, 2026` / `16 Ekim 2026`.
pub fn format_apod_date(raw: &str, lang: Language) -> String {
    let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
        return raw.to_string();
    };
    let month = month_name(lang, date.month(), false);
    match lang {
        Language::English => format!("{month} {}, {}", date.day(), date.year()),
        Language::Turkish => format!("{} {month} {}", date.day(), date.year()),
    }
}

/// Compact number for the metrics band: `1.8M` / `1,8 Mn`.
pub fn format_compact(n: u64, lang: Language) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    // Pick the unit after rounding so 999_950 reads 1M, not 1000K.
    let mut magnitude = 0;
    let mut divisor = 1_000.0;
    let mut rounded = (n as f64 / divisor * 10.0).round() / 10.0;
    while rounded >= 1_000.0 && magnitude < 2 {
        magnitude += 1;
        divisor *= 1_000.0;
        rounded = (n as f64 / divisor * 10.0).round() / 10.0;
    }
    let suffix = compact_suffix(lang, magnitude);
    let mut digits = if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    };
    match lang {
        Language::English => format!("{digits}{suffix}"),
        Language::Turkish => {
            digits = digits.replace('.', ",");
            format!("{digits} {suffix}")
        }
    }
}

fn compact_suffix(lang: Language, magnitude: usize) -> &'static str {
    match lang {
        Language::English => ["K", "M", "B"][magnitude],
        Language::Turkish => ["B", "Mn", "Mr"][magnitude],
    }
}

/// Istanbul display offset in minutes east of UTC (no daylight saving).
pub const ISTANBUL_OFFSET_MINUTES: i32 = 180;

/// Offset for `minutes` east of UTC; `None` outside +/-24h.
pub fn display_offset(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}
