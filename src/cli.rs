use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use std::ffi::OsString;

use crate::domain::RunMode;

// `%.f` also matches a missing fraction
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Single-dash spelling of the long flag accepted by older scripts
const LEGACY_DATETIME_FLAG: &str = "-dt";

#[derive(Parser, Debug)]
#[command(author, version, about = "Dota 2 league matches extractor (STRATZ GraphQL to CSV)")]
pub struct Cli {
    /// Only extract matches starting at or after this ISO-8601 date-time.
    /// Without a value: one week before today's midnight. Omit for full history.
    #[arg(short = 'd', long, alias = "dt", value_name = "DATETIME", num_args = 0..=1, value_parser = parse_datetime)]
    pub datetime: Option<Option<NaiveDateTime>>,
}

impl Cli {
    /// Resolve the run mode, using `now` for the bare `--datetime` default
    pub fn run_mode(&self, now: NaiveDateTime) -> RunMode {
        match self.datetime {
            None => RunMode::FullHistory,
            Some(Some(start)) => RunMode::Since(start),
            Some(None) => RunMode::Since(default_start(now)),
        }
    }
}

/// Rewrite the legacy `-dt` flag to `--dt` so clap does not read it as `-d t`
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == LEGACY_DATETIME_FLAG {
                OsString::from("--dt")
            } else {
                arg
            }
        })
        .collect()
}

/// Midnight of `now`'s day, one week back
pub fn default_start(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN) - Duration::weeks(1)
}

/// Parse an ISO-8601 date-time; offsets are converted to local time
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .map_err(|_| format!("'{}' is not an ISO-8601 date-time (YYYY-MM-DDTHH:MM:SS)", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = at(2024, 3, 9, 14, 30, 0);
        assert_eq!(parse_datetime("2024-03-09T14:30:00"), Ok(expected));
        assert_eq!(parse_datetime("2024-03-09 14:30:00"), Ok(expected));
        assert_eq!(parse_datetime("2024-03-09T14:30"), Ok(expected));
        assert_eq!(parse_datetime("2024-03-09 14:30"), Ok(expected));
        assert_eq!(parse_datetime("2024-03-09"), Ok(at(2024, 3, 9, 0, 0, 0)));
    }

    #[test]
    fn test_parse_datetime_fractional_seconds() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(14, 30, 0, 500)
            .unwrap();
        assert_eq!(parse_datetime("2024-03-09T14:30:00.500"), Ok(expected));
        assert_eq!(parse_datetime("2024-03-09 14:30:00.500"), Ok(expected));

        let micros = parse_datetime("2024-03-09T14:30:00.000123").unwrap();
        assert_eq!(micros.and_utc().timestamp_subsec_micros(), 123);
    }

    #[test]
    fn test_parse_datetime_with_offset() {
        let parsed = parse_datetime("2024-03-09T14:30:00+00:00").unwrap();
        let expected = DateTime::parse_from_rfc3339("2024-03-09T14:30:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("yesterday").is_err());
        assert!(parse_datetime("2024-13-01").is_err());
    }

    #[test]
    fn test_without_argument_is_full_history() {
        let cli = Cli::try_parse_from(["dota2_extractor"]).unwrap();
        assert_eq!(cli.run_mode(at(2024, 3, 9, 10, 0, 0)), RunMode::FullHistory);
    }

    #[test]
    fn test_with_value_is_incremental() {
        let cli = Cli::try_parse_from(["dota2_extractor", "--datetime", "2024-01-02T03:04:05"]).unwrap();
        assert_eq!(
            cli.run_mode(at(2024, 3, 9, 10, 0, 0)),
            RunMode::Since(at(2024, 1, 2, 3, 4, 5))
        );

        let cli = Cli::try_parse_from(["dota2_extractor", "-d", "2024-01-02"]).unwrap();
        assert_eq!(
            cli.run_mode(at(2024, 3, 9, 10, 0, 0)),
            RunMode::Since(at(2024, 1, 2, 0, 0, 0))
        );
    }

    #[test]
    fn test_bare_flag_defaults_to_last_week() {
        let cli = Cli::try_parse_from(["dota2_extractor", "--datetime"]).unwrap();
        assert_eq!(
            cli.run_mode(at(2024, 3, 9, 17, 45, 12)),
            RunMode::Since(at(2024, 3, 2, 0, 0, 0))
        );
    }

    #[test]
    fn test_legacy_dt_flag() {
        let cli = Cli::try_parse_from(normalize_args(["dota2_extractor", "-dt", "2024-01-02"])).unwrap();
        assert_eq!(
            cli.run_mode(at(2024, 3, 9, 10, 0, 0)),
            RunMode::Since(at(2024, 1, 2, 0, 0, 0))
        );

        let cli = Cli::try_parse_from(normalize_args(["dota2_extractor", "--dt"])).unwrap();
        assert_eq!(
            cli.run_mode(at(2024, 3, 9, 17, 45, 12)),
            RunMode::Since(at(2024, 3, 2, 0, 0, 0))
        );

        let cli = Cli::try_parse_from(normalize_args(["dota2_extractor", "-d", "2024-01-02"])).unwrap();
        assert_eq!(cli.datetime, Some(Some(at(2024, 1, 2, 0, 0, 0))));
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        assert!(Cli::try_parse_from(["dota2_extractor", "--datetime", "soon"]).is_err());
    }
}
