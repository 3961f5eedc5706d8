use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Timelike, Weekday};
use regex::Regex;

/// The "now" threaded through every clock-dependent classifier: age and
/// tenure math, the rush window, and light conditions all read from here
/// rather than the global clock, so runs are reproducible under `--at`.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    pub today: NaiveDate,
    pub hour: u32,
    pub weekday: Weekday,
}

impl Clock {
    /// Snapshot the local wall clock.
    pub fn now() -> Self {
        let now = Local::now();
        Clock {
            today: now.date_naive(),
            hour: now.hour(),
            weekday: now.weekday(),
        }
    }

    /// Parse a `--at` override: RFC 3339 ("2024-06-01T08:30:00+05:30") or a
    /// bare "HH:MM" applied to today's date.
    pub fn parse_override(s: &str) -> Result<Self, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            let today = dt.date_naive();
            return Ok(Clock {
                today,
                hour: dt.hour(),
                weekday: today.weekday(),
            });
        }
        if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
            let today = Local::now().date_naive();
            return Ok(Clock {
                today,
                hour: t.hour(),
                weekday: today.weekday(),
            });
        }
        Err(format!("expected RFC 3339 or HH:MM, got `{}`", s))
    }
}

/// Parse a loosely-formatted day-month-year date: `-` or `/` separators,
/// 2- or 4-digit years. 2-digit years below 51 land in the 2000s, 51 and
/// above in the 1900s. Returns `None` on no match or an impossible calendar
/// date.
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    // 4-digit years first so `15-08-1995` is not read as `15-08-19`.
    let patterns = [
        r"(\d{1,2})[-/](\d{1,2})[-/](\d{4})",
        r"(\d{1,2})[-/](\d{1,2})[-/](\d{2})",
    ];

    for pattern in patterns {
        let Ok(re) = Regex::new(pattern) else { continue };
        let Some(caps) = re.captures(s) else { continue };

        let (Ok(day), Ok(month), Ok(mut year)) = (
            caps[1].parse::<u32>(),
            caps[2].parse::<u32>(),
            caps[3].parse::<i32>(),
        ) else {
            continue;
        };

        if year < 100 {
            year += if year > 50 { 1900 } else { 2000 };
        }

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    None
}

/// Whole elapsed years from `start` to `end`: calendar-year difference,
/// minus one if `end`'s month/day falls before `start`'s within the year.
/// Clamped to zero, never negative.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_four_digit_year() {
        assert_eq!(parse_flexible_date("15-08-1995"), Some(date(1995, 8, 15)));
        assert_eq!(parse_flexible_date("5/1/2021"), Some(date(2021, 1, 5)));
    }

    #[test]
    fn test_parse_two_digit_year_century_split() {
        // <51 → 2000s, ≥51 → 1900s
        assert_eq!(parse_flexible_date("01-01-50"), Some(date(2050, 1, 1)));
        assert_eq!(parse_flexible_date("01-01-51"), Some(date(1951, 1, 1)));
        assert_eq!(parse_flexible_date("20/06/99"), Some(date(1999, 6, 20)));
        assert_eq!(parse_flexible_date("20/06/05"), Some(date(2005, 6, 20)));
    }

    #[test]
    fn test_parse_embedded_in_text() {
        assert_eq!(
            parse_flexible_date("VALID TILL: 19-01-2041 XYZ"),
            Some(date(2041, 1, 19))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("no date here"), None);
        assert_eq!(parse_flexible_date("13-2021"), None); // one separator only
        assert_eq!(parse_flexible_date("31-02-2020"), None); // impossible day
    }

    #[test]
    fn test_years_between_exact_semantics() {
        let dob = date(1995, 8, 15);
        // Birthday not yet reached in the year.
        assert_eq!(years_between(dob, date(2024, 1, 1)), 28);
        // On the birthday itself.
        assert_eq!(years_between(dob, date(2024, 8, 15)), 29);
        assert_eq!(years_between(dob, date(2024, 8, 14)), 28);
    }

    #[test]
    fn test_years_between_never_negative() {
        let d = date(2030, 5, 1);
        assert_eq!(years_between(d, d), 0);
        assert_eq!(years_between(d, date(2020, 1, 1)), 0);
    }

    #[test]
    fn test_clock_override_parsing() {
        let clock = Clock::parse_override("2024-06-01T08:30:00+05:30").unwrap();
        assert_eq!(clock.today, date(2024, 6, 1));
        assert_eq!(clock.hour, 8);
        assert_eq!(clock.weekday, Weekday::Sat);

        let clock = Clock::parse_override("17:45").unwrap();
        assert_eq!(clock.hour, 17);

        assert!(Clock::parse_override("yesterday").is_err());
    }
}
