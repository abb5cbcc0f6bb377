//! Timestamp helpers. The API reports instants as Unix seconds.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Unix seconds to a UTC instant. `None` if out of chrono's range.
pub fn ts_to_datetime(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

/// Unix seconds to the UTC calendar date.
pub fn ts_to_date(ts: i64) -> Option<NaiveDate> {
    ts_to_datetime(ts).map(|dt| dt.date_naive())
}

/// Parses an IANA zone name such as `America/New_York`.
pub fn parse_tz(name: Option<&str>) -> Option<Tz> {
    name.and_then(|s| s.parse::<Tz>().ok())
}
