use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// e.g. `Wed Jan 01 2020`
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn display_date(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn parse_query_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), QUERY_DATE_FORMAT).ok()
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parses a submitted exercise date. Plain dates are taken as UTC midnight,
/// full timestamps keep their time.
pub fn parse_exercise_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Some(date) = parse_query_date(value) {
        return Some(start_of_day(date));
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(date.and_utc());
    }
    NaiveDate::parse_from_str(value, DISPLAY_DATE_FORMAT)
        .ok()
        .map(start_of_day)
}
