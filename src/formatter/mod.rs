pub mod discussion;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

pub use discussion::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownContent(pub String);

impl std::fmt::Display for MarkdownContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed UTC offset used when printing timestamps.
///
/// Accepts a few common abbreviations and `+HH:MM` / `-HH:MM` strings. Daylight
/// saving time is not tracked; pick the abbreviation that matches the season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneOffset {
    /// Seconds east of UTC
    pub offset_seconds: i32,
    pub name: String,
}

impl TimezoneOffset {
    /// `None` when the offset does not fit a valid UTC offset
    pub fn new(hours: i32, minutes: i32, name: String) -> Option<Self> {
        let offset_seconds = hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?;
        FixedOffset::east_opt(offset_seconds)?;
        Some(Self {
            offset_seconds,
            name,
        })
    }

    pub fn from_local() -> Self {
        let offset_seconds = Local::now().offset().local_minus_utc();
        let sign = if offset_seconds < 0 { '-' } else { '+' };
        let abs = offset_seconds.abs();
        Self {
            offset_seconds,
            name: format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60),
        }
    }

    pub fn parse(tz_str: &str) -> Option<Self> {
        let (hours, minutes) = match tz_str {
            "UTC" | "GMT" => (0, 0),
            "JST" => (9, 0),
            "EST" => (-5, 0),
            "PST" => (-8, 0),
            "PDT" => (-7, 0),
            "BST" => (1, 0),
            s => {
                let sign = match s.chars().next()? {
                    '+' => 1,
                    '-' => -1,
                    _ => return None,
                };
                let (h, m) = s[1..].split_once(':')?;
                (
                    h.parse::<i32>().ok()?.checked_mul(sign)?,
                    m.parse::<i32>().ok()?.checked_mul(sign)?,
                )
            }
        };
        let name = if tz_str == "GMT" { "UTC" } else { tz_str };
        Self::new(hours, minutes, name.to_string())
    }

    pub fn to_fixed_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.offset_seconds).unwrap_or_else(|| Utc.fix())
    }
}

impl std::fmt::Display for TimezoneOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Format a UTC datetime in the given offset, or in UTC when none is given
pub fn format_datetime_with_timezone_offset(
    dt: DateTime<Utc>,
    timezone: Option<&TimezoneOffset>,
) -> String {
    match timezone {
        Some(tz) => dt
            .with_timezone(&tz.to_fixed_offset())
            .format(&format!("%Y-%m-%d %H:%M:%S {}", tz.name))
            .to_string(),
        None => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(TimezoneOffset::parse("JST").unwrap().offset_seconds, 9 * 3600);
        assert_eq!(TimezoneOffset::parse("GMT").unwrap().name, "UTC");
        assert_eq!(
            TimezoneOffset::parse("-05:30").unwrap().offset_seconds,
            -(5 * 3600 + 30 * 60)
        );
        assert!(TimezoneOffset::parse("Mars/Olympus").is_none());
        assert!(TimezoneOffset::parse("+0900").is_none());
    }

    #[test]
    fn test_parse_rejects_out_of_range_offsets() {
        assert!(TimezoneOffset::parse("+999999:00").is_none());
        assert!(TimezoneOffset::parse("--2147483648:00").is_none());
        assert!(TimezoneOffset::parse("+24:00").is_none());
        assert!(TimezoneOffset::parse("+14:00").is_some());
        assert!(TimezoneOffset::new(i32::MAX, 0, "overflow".to_string()).is_none());
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(
            format_datetime_with_timezone_offset(dt, None),
            "2024-03-01 10:00:00 UTC"
        );

        let jst = TimezoneOffset::parse("JST").unwrap();
        assert_eq!(
            format_datetime_with_timezone_offset(dt, Some(&jst)),
            "2024-03-01 19:00:00 JST"
        );
    }
}
