use chrono::{DateTime, Utc};

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Human readable age of `datetime` relative to `now`, e.g. "3 years ago"
pub fn format_relative_time(datetime: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 30 {
        format!("{} day{} ago", days, plural(days))
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{} ago", months, plural(months))
    } else {
        let years = days / 365;
        format!("{} year{} ago", years, plural(years))
    }
}

/// Calendar date of a record's creation, e.g. "November 4, 2017"
pub fn format_created_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%B %-d, %Y").to_string()
}
