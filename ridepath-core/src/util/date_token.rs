use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// the literal standing in for "no date" inside a fixed-arity URL path.
pub const ABSENT_TOKEN: &str = "0";

/// width of an encoded date token: YYMMDD.
const TOKEN_LEN: usize = 6;

/// encodes a calendar date as a 6-character YYMMDD token. the year is taken
/// mod 100, so the token windowing only covers years 2000-2099; dates outside
/// that window still encode but will not survive a decode round trip.
pub fn encode(date: &NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// encodes an optional date, substituting the absent sentinel for `None`.
pub fn encode_opt(date: Option<&NaiveDate>) -> String {
    match date {
        Some(d) => encode(d),
        None => ABSENT_TOKEN.to_string(),
    }
}

/// decodes a YYMMDD token back into a calendar date in the 2000-2099 window.
///
/// returns `None` for the empty string, the `"0"` sentinel, any token that is
/// not exactly 6 ASCII digits, and any token whose fields do not name a real
/// calendar date (month 13 or day 32 are rejected, never rolled forward).
/// decoding never fails loudly: garbled URL input degrades to "no date".
pub fn decode(token: &str) -> Option<NaiveDate> {
    if token.is_empty() || token == ABSENT_TOKEN {
        return None;
    }
    if token.len() != TOKEN_LEN || !token.bytes().all(|b| b.is_ascii_digit()) {
        log::warn!("rejecting malformed date token '{token}'");
        return None;
    }
    let yy: i32 = token[0..2].parse().ok()?;
    let mm: u32 = token[2..4].parse().ok()?;
    let dd: u32 = token[4..6].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(2000 + yy, mm, dd);
    if date.is_none() {
        log::warn!("date token '{token}' does not name a real calendar date");
    }
    date
}

/// anchors a date at local noon. used when a timestamp is required
/// downstream, so that timezone-aware formatting cannot shift the day.
pub fn at_local_noon(date: &NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(12, 0, 0)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::default()))
}
