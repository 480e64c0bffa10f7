use chrono::{DateTime, NaiveDateTime, Utc};

/// Storage-side timestamp format; what SQLite's `datetime('now')` emits.
pub const SQLITE_TIMEFMT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable rendition of the storage format for error messages.
pub const SQLITE_TIMEFMT_HINT: &str = "YYYY-MM-DD HH:MM:SS";

type ParseStrategy = fn(&str) -> Option<DateTime<Utc>>;

/// Accepted `since` forms, tried in order; the first successful parse wins.
const SINCE_STRATEGIES: &[ParseStrategy] =
    &[parse_unix_seconds, parse_rfc3339, parse_sqlite_datetime];

fn parse_unix_seconds(input: &str) -> Option<DateTime<Utc>> {
    let seconds = input.parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0)
}

fn parse_rfc3339(input: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input).ok().map(|datetime| datetime.with_timezone(&Utc))
}

fn parse_sqlite_datetime(input: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, SQLITE_TIMEFMT).ok().map(|naive| naive.and_utc())
}

/// Normalize a `since` query parameter to a UTC instant.
pub fn parse_since(input: &str) -> Option<DateTime<Utc>> {
    SINCE_STRATEGIES.iter().find_map(|parse| parse(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_since_forms() {
        let unix = parse_since("1700000000").expect("unix seconds");
        let rfc3339 = parse_since("2023-11-14T22:13:20Z").expect("rfc 3339");
        let fixed = parse_since("2023-11-14 22:13:20").expect("fixed format");

        assert_eq!(unix, rfc3339);
        assert_eq!(unix, fixed);
        assert_eq!(unix.timestamp(), 1_700_000_000);
    }

    #[test]
    fn honors_rfc3339_offsets() {
        assert_eq!(parse_since("2023-11-14T23:13:20+01:00"), parse_since("1700000000"));
    }

    #[test]
    fn rejects_unparseable_input() {
        assert!(parse_since("not-a-date").is_none());
        assert!(parse_since("").is_none());
        assert!(parse_since("14/11/2023").is_none());
    }

    #[test]
    fn zero_is_the_epoch() {
        assert_eq!(parse_since("0").unwrap().timestamp(), 0);
    }
}
