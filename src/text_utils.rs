use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};

/// Accepted date formats, tried in order. `%y` only matches two digits, so
/// `01.01.2023` falls through to the four-digit pattern.
const DATE_FORMATS: [&str; 2] = ["%d.%m.%y", "%d.%m.%Y"];

const LONG_DATE_FORMAT: &str = "%A, %-d %B %Y";

pub fn parse_date(buf: &str) -> Result<NaiveDate, String> {
    let buf = buf.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(buf, fmt).ok())
        .ok_or_else(|| format!("Unable to parse date {}", buf))
}

/// Resolves a language tag to a chrono locale. `de_DE`, `de-DE` and `de`
/// (expanded to `de_DE`) all resolve to the same locale.
pub fn resolve_locale(lang: &str) -> Option<Locale> {
    let tag = lang.trim().replace('-', "_");
    if let Ok(locale) = Locale::try_from(tag.as_str()) {
        return Some(locale);
    }

    if !tag.is_empty() && !tag.contains('_') {
        let expanded = format!("{}_{}", tag.to_lowercase(), tag.to_uppercase());
        return Locale::try_from(expanded.as_str()).ok();
    }

    None
}

/// Weekday, day, month name and year in the language of `lang`, e.g.
/// `Sonntag, 24 Dezember 2023` for `de_DE`. Unknown languages get the
/// locale-neutral (English) rendering of the same fields.
pub fn format_long_date(date: &NaiveDate, lang: &str) -> String {
    let date_time = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    match resolve_locale(lang) {
        Some(locale) => date_time.format_localized(LONG_DATE_FORMAT, locale).to_string(),
        None => date_time.format(LONG_DATE_FORMAT).to_string(),
    }
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
