use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// `Nov 14, 2023 at 10:13 PM` in the given zone.
#[must_use]
pub fn format_submitted_at<Tz>(value: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value
        .with_timezone(zone)
        .format("%b %d, %Y at %I:%M %p")
        .to_string()
}
