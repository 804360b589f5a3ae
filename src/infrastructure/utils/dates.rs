use chrono::{DateTime, Datelike, NaiveDate};

/// Parses the date forms found in skill documents: `YYYY-MM-DD`, `YYYY-MM`,
/// `YYYY` and RFC 3339 timestamps. Anything else is `None`.
pub fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

/// Whole years elapsed from `since` to `today`. An anniversary not yet
/// reached this year does not count. Never negative.
pub fn full_years_between(since: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - since.year();
    if (today.month(), today.day()) < (since.month(), since.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
