use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Human-relative label for a notification's creation time, evaluated at the
/// current instant. Not cached anywhere; recompute per render.
pub fn relative_time(created_at: &str) -> String {
    relative_time_at(created_at, OffsetDateTime::now_utc())
}

/// Deterministic form of [`relative_time`] given an explicit evaluation
/// instant. Input that does not parse as RFC 3339 is echoed back unchanged.
pub fn relative_time_at(created_at: &str, now: OffsetDateTime) -> String {
    let created = match OffsetDateTime::parse(created_at, &Rfc3339) {
        Ok(created) => created,
        Err(_) => return created_at.to_string(),
    };

    let elapsed = now - created;
    let minutes = elapsed.whole_minutes();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} minute{} ago", minutes, plural(minutes));
    }

    let hours = elapsed.whole_hours();
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }

    let days = elapsed.whole_days();
    if days < 7 {
        return format!("{} day{} ago", days, plural(days));
    }

    // Calendar date only, no time-of-day.
    let date_format = format_description!("[month repr:short] [day padding:none], [year]");
    created
        .format(&date_format)
        .unwrap_or_else(|_| created_at.to_string())
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn stamp(now: OffsetDateTime, ago: Duration) -> String {
        (now - ago).format(&Rfc3339).unwrap()
    }

    #[test]
    fn test_under_a_minute_is_just_now() {
        let now = OffsetDateTime::now_utc();
        assert_eq!(
            relative_time_at(&stamp(now, Duration::seconds(30)), now),
            "Just now"
        );
        assert_eq!(relative_time_at(&stamp(now, Duration::ZERO), now), "Just now");
    }

    #[test]
    fn test_minutes_with_pluralization() {
        let now = OffsetDateTime::now_utc();
        assert_eq!(
            relative_time_at(&stamp(now, Duration::minutes(1)), now),
            "1 minute ago"
        );
        assert_eq!(
            relative_time_at(&stamp(now, Duration::minutes(5)), now),
            "5 minutes ago"
        );
        assert_eq!(
            relative_time_at(&stamp(now, Duration::minutes(59)), now),
            "59 minutes ago"
        );
    }

    #[test]
    fn test_hours() {
        let now = OffsetDateTime::now_utc();
        assert_eq!(
            relative_time_at(&stamp(now, Duration::hours(1)), now),
            "1 hour ago"
        );
        assert_eq!(
            relative_time_at(&stamp(now, Duration::hours(2)), now),
            "2 hours ago"
        );
        assert_eq!(
            relative_time_at(&stamp(now, Duration::hours(23)), now),
            "23 hours ago"
        );
    }

    #[test]
    fn test_days() {
        let now = OffsetDateTime::now_utc();
        assert_eq!(
            relative_time_at(&stamp(now, Duration::days(1)), now),
            "1 day ago"
        );
        assert_eq!(
            relative_time_at(&stamp(now, Duration::days(3)), now),
            "3 days ago"
        );
    }

    #[test]
    fn test_week_or_older_is_calendar_date() {
        let now = time::macros::datetime!(2026-03-15 12:00:00 UTC);
        let label = relative_time_at(&stamp(now, Duration::days(10)), now);
        assert_eq!(label, "Mar 5, 2026");
    }

    #[test]
    fn test_unparseable_input_echoed_back() {
        let now = OffsetDateTime::now_utc();
        assert_eq!(relative_time_at("not a timestamp", now), "not a timestamp");
    }
}
