// Relative time formatting for lead activity

use chrono::{DateTime, Utc};

/// Format the age of a timestamp relative to `now` (e.g., "45m", "3h", "2d").
/// Future timestamps render as "now".
pub fn format_age(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - ts).num_seconds();

    if diff < 60 {
        "now".to_string()
    } else if diff < 3600 {
        format!("{}m", diff / 60)
    } else if diff < 86400 {
        format!("{}h", diff / 3600)
    } else if diff < 86400 * 30 {
        format!("{}d", diff / 86400)
    } else {
        format!("{}mo", diff / (86400 * 30))
    }
}

/// Format a timestamp as a calendar date (UTC)
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_age() {
        let now = Utc::now();
        assert_eq!(format_age(now, now), "now");
        assert_eq!(format_age(now + Duration::minutes(5), now), "now");
        assert_eq!(format_age(now - Duration::minutes(45), now), "45m");
        assert_eq!(format_age(now - Duration::hours(3), now), "3h");
        assert_eq!(format_age(now - Duration::days(2), now), "2d");
        assert_eq!(format_age(now - Duration::days(65), now), "2mo");
    }
}
