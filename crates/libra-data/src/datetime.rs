use chrono::{Duration, NaiveDate};

/// Today in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The `days` consecutive days ending at `until`, oldest first.
pub fn trailing_days(until: NaiveDate, days: i64) -> Vec<NaiveDate> {
    (0..days)
        .rev()
        .map(|offset| until - Duration::days(offset))
        .collect()
}
