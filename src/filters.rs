use askama::Result;
use chrono::{DateTime, NaiveDate, Utc};

// Custom template filters, used as `{{ value|date }}` etc.

/// Short human date, e.g. `Apr 10, 2023`.
pub fn date(d: &NaiveDate) -> Result<String> {
    Ok(d.format("%b %-d, %Y").to_string())
}

pub fn timestamp(t: &DateTime<Utc>) -> Result<String> {
    Ok(t.format("%b %-d, %Y %H:%M UTC").to_string())
}

/// `part` as a whole percentage of `whole`; 0 when `whole` is 0.
pub fn percent_of(part: &u32, whole: &u32) -> Result<u32> {
    Ok(if *whole == 0 { 0 } else { part * 100 / whole })
}
