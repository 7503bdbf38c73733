use chrono::{DateTime, Utc};

use crate::{
    api::payloads::LogQuery,
    utils::date::{parse_query_date, start_of_day},
};

/// Bounds applied to a log query. `None` means unbounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    /// Inclusive lower bound
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound, the start of the day after `to`
    pub until: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
}

impl LogFilter {
    pub fn from_query(query: &LogQuery) -> Self {
        let from = query
            .from
            .as_deref()
            .and_then(parse_query_date)
            .map(start_of_day);
        let until = query
            .to
            .as_deref()
            .and_then(parse_query_date)
            .and_then(|to| to.succ_opt())
            .map(start_of_day);

        Self {
            from,
            until,
            limit: query.limit.as_deref().and_then(parse_limit),
        }
    }
}

/// Zero, negative and non-numeric limits mean no limit. SQLite limits are
/// signed so anything larger is capped at `i64::MAX`.
fn parse_limit(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|l| *l > 0)
        .map(|l| l.min(i64::MAX as u64))
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    fn query(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> LogQuery {
        LogQuery {
            user_id: Some("u".to_owned()),
            from: from.map(str::to_owned),
            to: to.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    #[test]
    fn test_to_includes_whole_day() {
        let filter = LogFilter::from_query(&query(Some("2020-01-01"), Some("2020-01-31"), None));
        assert_eq!(filter.from, Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(filter.until, Some(Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap()));
        assert_eq!(filter.limit, None);
    }

    #[test]
    fn test_unparseable_bounds_are_ignored() {
        let filter = LogFilter::from_query(&query(Some("last week"), Some(""), Some("abc")));
        assert_eq!(filter, LogFilter::default());
    }

    #[test]
    fn test_limit() {
        assert_eq!(parse_limit("3"), Some(3));
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("-2"), None);
    }

    #[test]
    fn test_huge_limit_is_capped() {
        assert_eq!(parse_limit("9223372036854775807"), Some(i64::MAX as u64));
        assert_eq!(parse_limit("18446744073709551615"), Some(i64::MAX as u64));
    }
}
