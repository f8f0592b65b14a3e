//! Timestamp parsing for label metadata (`createdAt`, `lastEditedAt`).
//!
//! Label JSON carries timestamps in several textual forms, and the same
//! handful of strings repeat across every object of a label row. Parsing goes
//! through a bounded LRU so repeated values are parsed once.

use std::num::NonZeroUsize;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use log::trace;
use lru::LruCache;

use crate::config::WireConfig;
use crate::error::WireError;

/// "Thu, 17 Nov 2022 14:10:55" followed by " GMT" or " UTC".
const LONG_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";
/// "Thu Jan 11 2024 12:09:51" as printed by a browser `Date`.
const BROWSER_FORMAT: &str = "%a %b %d %Y %H:%M:%S";
const NAIVE_ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub struct TimestampCache {
    cache: LruCache<String, DateTime<FixedOffset>>,
}

impl TimestampCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    pub fn from_config(config: &WireConfig) -> Self {
        Self::new(config.timestamp_cache_capacity)
    }

    pub fn parse(&mut self, raw: &str) -> Result<DateTime<FixedOffset>, WireError> {
        if let Some(hit) = self.cache.get(raw) {
            return Ok(*hit);
        }
        let parsed = parse_timestamp(raw)?;
        trace!("timestamp cache: parsed {raw:?} as {parsed}");
        self.cache.put(raw.to_owned(), parsed);
        Ok(parsed)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for TimestampCache {
    fn default() -> Self {
        Self::from_config(&WireConfig::default())
    }
}

/// Parse one timestamp without caching.
///
/// Values without an explicit zone are read as UTC. In the browser form the
/// offset sign is POSIX style: `GMT+0600` means six hours west of UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, WireError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    for format in NAIVE_ISO_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return in_offset(naive, Utc.fix(), raw);
        }
    }

    if let Some(rest) = raw
        .strip_suffix(" GMT")
        .or_else(|| raw.strip_suffix(" UTC"))
    {
        if let Ok(naive) = NaiveDateTime::parse_from_str(rest, LONG_FORMAT) {
            return in_offset(naive, Utc.fix(), raw);
        }
    }

    if let Some((local, zone)) = raw.split_once(" GMT") {
        // Drop the "(Bangladesh Standard Time)" style suffix.
        let zone = zone.split_whitespace().next().unwrap_or_default();
        let naive = NaiveDateTime::parse_from_str(local, BROWSER_FORMAT)
            .map_err(|_| WireError::Timestamp(raw.to_owned()))?;
        let offset = posix_offset(zone).ok_or_else(|| WireError::Timestamp(raw.to_owned()))?;
        return in_offset(naive, offset, raw);
    }

    Err(WireError::Timestamp(raw.to_owned()))
}

fn in_offset(
    naive: NaiveDateTime,
    offset: FixedOffset,
    raw: &str,
) -> Result<DateTime<FixedOffset>, WireError> {
    naive
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| WireError::Timestamp(raw.to_owned()))
}

/// "+0600" -> UTC-06:00. An empty zone is UTC.
fn posix_offset(zone: &str) -> Option<FixedOffset> {
    if zone.is_empty() {
        return Some(Utc.fix());
    }
    let (sign, digits) = match zone.as_bytes().first()? {
        b'+' => (1, &zone[1..]),
        b'-' => (-1, &zone[1..]),
        _ => return None,
    };
    let digits = digits.replace(':', "");
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::west_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(offset_hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
    }

    #[test]
    fn rfc3339_keeps_its_offset() {
        assert_eq!(
            parse_timestamp("2024-01-11T12:09:51+02:00").unwrap(),
            at(2, 2024, 1, 11, 12, 9, 51)
        );
    }

    #[test]
    fn naive_iso_is_utc() {
        let parsed = parse_timestamp("2023-05-02T08:30:00.250").unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 5, 2)
            .unwrap()
            .and_hms_milli_opt(8, 30, 0, 250)
            .unwrap();
        assert_eq!(parsed.naive_utc(), expected);
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn long_format_with_gmt_or_utc() {
        let expected = at(0, 2022, 11, 17, 14, 10, 55);
        assert_eq!(parse_timestamp("Thu, 17 Nov 2022 14:10:55 GMT").unwrap(), expected);
        assert_eq!(parse_timestamp("Thu, 17 Nov 2022 14:10:55 UTC").unwrap(), expected);
    }

    #[test]
    fn browser_offset_sign_is_inverted() {
        let parsed =
            parse_timestamp("Thu Jan 11 2024 12:09:51 GMT+0600 (Bangladesh Standard Time)").unwrap();
        assert_eq!(parsed, at(-6, 2024, 1, 11, 12, 9, 51));
        assert_eq!(parsed.offset().local_minus_utc(), -6 * 3600);
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["", "yesterday", "Thu Jan 11 2024 GMT+0600", "Thu Jan 11 2024 12:09:51 GMT+6"] {
            assert!(
                matches!(parse_timestamp(raw), Err(WireError::Timestamp(_))),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn cache_is_bounded() {
        let mut cache = TimestampCache::new(2);
        cache.parse("2024-01-01T00:00:00Z").unwrap();
        cache.parse("2024-01-02T00:00:00Z").unwrap();
        cache.parse("2024-01-01T00:00:00Z").unwrap();
        cache.parse("2024-01-03T00:00:00Z").unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.cache.contains("2024-01-01T00:00:00Z"));
        assert!(!cache.cache.contains("2024-01-02T00:00:00Z"));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_holds_one_entry() {
        let mut cache = TimestampCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.parse("2024-01-01T00:00:00Z").unwrap();
        cache.parse("2024-01-02T00:00:00Z").unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let mut cache = TimestampCache::default();
        assert!(cache.parse("not a time").is_err());
        assert!(cache.is_empty());
    }
}
