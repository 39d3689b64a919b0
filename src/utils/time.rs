//! Timestamp parsing for temporal columns.
//!
//! Accepts `YYYY-MM-DD`, optionally followed by `THH:MM:SS` or ` HH:MM:SS`,
//! with an optional trailing `Z`. Returns epoch seconds. Dates before 1970
//! are not supported.

/// Parse a timestamp string into epoch seconds.
pub fn parse_timestamp(s: &str) -> Option<f64> {
    let s = s.trim().trim_end_matches('Z');

    let (date_part, time_part) = match s.split_once(['T', ' ']) {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };

    let mut date_fields = date_part.split('-');
    let year: i64 = date_fields.next()?.parse().ok()?;
    let month: u32 = date_fields.next()?.parse().ok()?;
    let day: u32 = date_fields.next()?.parse().ok()?;
    if date_fields.next().is_some() {
        return None;
    }

    let days = ymd_to_days(year, month, day)?;
    let mut secs = days as f64 * 86400.0;

    if let Some(t) = time_part {
        let mut time_fields = t.split(':');
        let hours: u64 = time_fields.next()?.parse().ok()?;
        let minutes: u64 = time_fields.next()?.parse().ok()?;
        let seconds: f64 = match time_fields.next() {
            Some(f) => f.parse().ok()?,
            None => 0.0,
        };
        if time_fields.next().is_some() || hours > 23 || minutes > 59 || seconds >= 61.0 {
            return None;
        }
        secs += (hours * 3600 + minutes * 60) as f64 + seconds;
    }

    Some(secs)
}

fn ymd_to_days(year: i64, month: u32, day: u32) -> Option<i64> {
    if year < 1970 || !(1..=12).contains(&month) {
        return None;
    }

    let mut days: i64 = 0;
    for y in 1970..year {
        days += if is_leap_year(y) { 366 } else { 365 };
    }

    let leap = is_leap_year(year);
    let days_in_month: [u32; 12] = if leap {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    if day < 1 || day > days_in_month[(month - 1) as usize] {
        return None;
    }

    for dim in &days_in_month[..(month - 1) as usize] {
        days += *dim as i64;
    }

    Some(days + day as i64 - 1)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
