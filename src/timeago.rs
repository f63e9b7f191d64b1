//! Relative time phrases such as "3 hours ago".
//!
//! Buckets are fixed durations with no calendar awareness: a month is 30
//! days and a year is 365.

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Units in ascending order: (name, size in seconds, upper bound exclusive).
const UNITS: [(&str, i64, i64); 5] = [
    ("minute", MINUTE, HOUR),
    ("hour", HOUR, DAY),
    ("day", DAY, WEEK),
    ("week", WEEK, MONTH),
    ("month", MONTH, YEAR),
];

/// Describe `epoch` relative to `now`, both in Unix seconds.
///
/// ```
/// use richprint::timeago::time_ago;
///
/// let now = 1_700_000_000;
/// assert_eq!(time_ago(now, now), "just now");
/// assert_eq!(time_ago(now - 7200, now), "2 hours ago");
/// assert_eq!(time_ago(now - 86400 * 365, now), "1 year ago");
/// ```
pub fn time_ago(epoch: i64, now: i64) -> String {
    let delta = now.saturating_sub(epoch);

    if delta < MINUTE {
        return "just now".to_string();
    }

    let (unit, size) = UNITS
        .iter()
        .find(|(_, _, bound)| delta < *bound)
        .map(|(unit, size, _)| (*unit, *size))
        .unwrap_or(("year", YEAR));

    phrase(delta / size, unit)
}

/// [`time_ago`] against the current wall clock.
pub fn time_ago_from_now(epoch: i64) -> String {
    time_ago(epoch, chrono::Utc::now().timestamp())
}

fn phrase(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn ago(delta: i64) -> String {
        time_ago(NOW - delta, NOW)
    }

    #[test]
    fn buckets() {
        let cases = [
            (0, "just now"),
            (60, "1 minute ago"),
            (120, "2 minutes ago"),
            (3600, "1 hour ago"),
            (7200, "2 hours ago"),
            (86400, "1 day ago"),
            (86400 * 2, "2 days ago"),
            (86400 * 7, "1 week ago"),
            (86400 * 14, "2 weeks ago"),
            (86400 * 30, "1 month ago"),
            (86400 * 60, "2 months ago"),
            (86400 * 365, "1 year ago"),
            (86400 * 365 * 2, "2 years ago"),
        ];

        for (delta, expected) in cases {
            assert_eq!(ago(delta), expected, "delta={}", delta);
        }
    }

    #[test]
    fn bucket_edges_floor() {
        assert_eq!(ago(59), "just now");
        assert_eq!(ago(3599), "59 minutes ago");
        assert_eq!(ago(86399), "23 hours ago");
        assert_eq!(ago(WEEK - 1), "6 days ago");
        assert_eq!(ago(MONTH - 1), "4 weeks ago");
        assert_eq!(ago(YEAR - 1), "12 months ago");
        assert_eq!(ago(YEAR * 10 + DAY), "10 years ago");
    }

    #[test]
    fn future_times_are_just_now() {
        assert_eq!(ago(-3600), "just now");
    }

    #[test]
    fn extreme_epochs_do_not_overflow() {
        assert_eq!(time_ago(i64::MIN, i64::MAX), format!("{} years ago", i64::MAX / YEAR));
        assert_eq!(time_ago(i64::MAX, i64::MIN), "just now");
    }

    #[test]
    fn from_now_uses_wall_clock() {
        let now = chrono::Utc::now().timestamp();
        assert_eq!(time_ago_from_now(now - 3 * HOUR - 5), "3 hours ago");
    }
}
