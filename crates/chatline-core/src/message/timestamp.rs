//! Structured message timestamps.
//!
//! Parsing and formatting only happen here; everything else works with the
//! date and time components directly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Formats accepted for server supplied `created_time` values.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date and minute-precision clock of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageTimestamp {
    date: NaiveDate,
    time: NaiveTime,
}

impl MessageTimestamp {
    /// Builds a timestamp, dropping seconds and sub-second precision.
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let time = datetime.time();
        Self {
            date: datetime.date(),
            time: NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time),
        }
    }

    /// The current UTC time.
    pub fn now() -> Self {
        Self::from_naive(Utc::now().naive_utc())
    }

    /// Parses a server timestamp such as `2024-05-01 13:45:09`.
    ///
    /// RFC 3339 values are converted to UTC first.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::from_naive(datetime.naive_utc()));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(Self::from_naive)
    }

    /// Parses `raw` when present, otherwise (or when unparseable) uses now.
    pub fn parse_or_now(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => Self::parse(value).unwrap_or_else(|| {
                tracing::warn!("[MessageTimestamp] Unparseable timestamp '{}', using now", value);
                Self::now()
            }),
            None => Self::now(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM`
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_format_drops_seconds() {
        let ts = MessageTimestamp::parse("2024-05-01 13:45:09").unwrap();
        assert_eq!(ts.date_label(), "2024-05-01");
        assert_eq!(ts.time_label(), "13:45");
        assert_eq!(ts.time().second(), 0);
    }

    #[test]
    fn test_parse_fractional_and_iso_variants() {
        let ts = MessageTimestamp::parse("2024-05-01T08:03:59.123").unwrap();
        assert_eq!(ts.time_label(), "08:03");

        let ts = MessageTimestamp::parse("2024-05-01T23:30:00+02:00").unwrap();
        assert_eq!(ts.date_label(), "2024-05-01");
        assert_eq!(ts.time_label(), "21:30");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(MessageTimestamp::parse("yesterday").is_none());
        assert!(MessageTimestamp::parse("").is_none());
    }

    #[test]
    fn test_parse_or_now_falls_back() {
        let before = MessageTimestamp::now();
        let ts = MessageTimestamp::parse_or_now(Some("not a time"));
        assert!(ts >= before);
        assert_eq!(MessageTimestamp::parse_or_now(None).time().second(), 0);
    }
}
