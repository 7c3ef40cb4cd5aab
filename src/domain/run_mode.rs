use anyhow::{Result, anyhow};
use chrono::{Duration, Local, NaiveDateTime, TimeZone};

/// Which extraction pipeline a run executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Every match of every league
    FullHistory,
    /// Matches starting at or after the given local date-time
    Since(NaiveDateTime),
}

impl RunMode {
    /// Token that names the run's output destination
    pub fn run_identifier(&self) -> String {
        match self {
            RunMode::FullHistory => "init".to_string(),
            RunMode::Since(start) => start.format("%Y-%m-%d_%H-%M-%S").to_string(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RunMode::FullHistory => "full history".to_string(),
            RunMode::Since(start) => format!("matches since {}", start.format("%Y-%m-%d, %H:%M:%S")),
        }
    }
}

/// Interpret a naive date-time in the local timezone and return epoch seconds
pub fn local_epoch_seconds(start: &NaiveDateTime) -> Result<i64> {
    epoch_seconds_in(&Local, start)
}

/// Ambiguous times take the earlier instant. Times skipped by a forward
/// clock change are shifted forward by one hour, past the gap.
pub fn epoch_seconds_in<Tz: TimeZone>(tz: &Tz, start: &NaiveDateTime) -> Result<i64> {
    tz.from_local_datetime(start)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(*start + Duration::hours(1))).earliest())
        .map(|dt| dt.timestamp())
        .ok_or_else(|| anyhow!("{} does not exist in the local timezone", start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, NaiveDate};

    /// UTC+1 switching to UTC+2 at 2024-03-31 02:00 local, then back at
    /// 2024-10-27 03:00 local
    #[derive(Debug, Clone, Copy)]
    struct CentralEurope;

    impl CentralEurope {
        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(7200).unwrap()
        }
    }

    impl TimeZone for CentralEurope {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            CentralEurope
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            if *local < at(2024, 3, 31, 2, 0, 0) {
                LocalResult::Single(Self::winter())
            } else if *local < at(2024, 3, 31, 3, 0, 0) {
                LocalResult::None
            } else if *local < at(2024, 10, 27, 2, 0, 0) {
                LocalResult::Single(Self::summer())
            } else if *local < at(2024, 10, 27, 3, 0, 0) {
                LocalResult::Ambiguous(Self::summer(), Self::winter())
            } else {
                LocalResult::Single(Self::winter())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc >= at(2024, 3, 31, 1, 0, 0) && *utc < at(2024, 10, 27, 1, 0, 0) {
                Self::summer()
            } else {
                Self::winter()
            }
        }
    }

    fn utc_epoch(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        at(y, m, d, h, min, 0).and_utc().timestamp()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_run_identifier() {
        assert_eq!(RunMode::FullHistory.run_identifier(), "init");
        assert_eq!(
            RunMode::Since(at(2023, 10, 5, 7, 8, 9)).run_identifier(),
            "2023-10-05_07-08-09"
        );
    }

    #[test]
    fn test_local_epoch_seconds_round_trips_through_local_time() {
        let start = at(2023, 6, 15, 12, 0, 0);
        let epoch = local_epoch_seconds(&start).unwrap();
        let back = Local.timestamp_opt(epoch, 0).unwrap().naive_local();
        assert_eq!(back, start);
    }

    #[test]
    fn test_regular_local_time() {
        let epoch = epoch_seconds_in(&CentralEurope, &at(2024, 1, 10, 12, 0, 0)).unwrap();
        assert_eq!(epoch, utc_epoch(2024, 1, 10, 11, 0));
    }

    #[test]
    fn test_time_in_spring_gap_moves_past_it() {
        let epoch = epoch_seconds_in(&CentralEurope, &at(2024, 3, 31, 2, 30, 0)).unwrap();
        // 03:30 summer time
        assert_eq!(epoch, utc_epoch(2024, 3, 31, 1, 30));

        let gap_start = epoch_seconds_in(&CentralEurope, &at(2024, 3, 31, 2, 0, 0)).unwrap();
        assert_eq!(gap_start, utc_epoch(2024, 3, 31, 1, 0));
    }

    #[test]
    fn test_repeated_autumn_time_takes_earlier_instant() {
        let epoch = epoch_seconds_in(&CentralEurope, &at(2024, 10, 27, 2, 30, 0)).unwrap();
        assert_eq!(epoch, utc_epoch(2024, 10, 27, 0, 30));
    }
}
