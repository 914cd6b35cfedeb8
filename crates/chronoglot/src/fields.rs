//! Field accumulation and calendar normalization.
//!
//! [`FieldSet`] is the mutable tuple the extractor cascade writes into.
//! Every member starts from the caller-supplied "now" anchor, so a rule
//! that never fires simply leaves the anchor's value in place. Fields may
//! hold out-of-calendar values while rules run; [`FieldSet::into_datetime`]
//! normalizes and validates once, at the very end.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};

use crate::error::{ParseError, Result};

/// Accumulator for the seven timestamp fields.
///
/// `day` is signed: relative weekday arithmetic ("last friday" early in a
/// month) can push it to zero or below before normalization runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldSet {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: i32,
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    pub(crate) offset_hours: i32,
}

impl FieldSet {
    /// Seed every field from the anchor instant.
    pub(crate) fn from_instant(now: &DateTime<FixedOffset>) -> Self {
        FieldSet {
            year: now.year(),
            month: now.month(),
            day: now.day() as i32,
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            offset_hours: now.offset().local_minus_utc() / 3600,
        }
    }

    /// Roll an out-of-range day onto the calendar.
    ///
    /// Overflow rolls forward: while `day` exceeds the month length,
    /// subtract that length and advance the month (and year past
    /// December). Underflow rolls backward symmetrically, so "yesterday"
    /// on the 1st lands on the last day of the previous month. Both loops
    /// terminate because `day` moves strictly toward range each pass.
    ///
    /// # Errors
    ///
    /// `month` outside `[1, 12]` on entry (a structured literal like
    /// "05-13-2025") is an [`ParseError::InvalidDate`]; the normalizer
    /// owns day overflow only.
    pub(crate) fn normalize(&mut self) -> Result<()> {
        let mut length = self.month_length()?;
        while self.day < 1 {
            if self.month == 1 {
                self.month = 12;
                self.year -= 1;
            } else {
                self.month -= 1;
            }
            length = self.month_length()?;
            self.day += length as i32;
        }
        while self.day > length as i32 {
            self.day -= length as i32;
            if self.month == 12 {
                self.month = 1;
                self.year += 1;
            } else {
                self.month += 1;
            }
            length = self.month_length()?;
        }
        Ok(())
    }

    /// Normalize, then assemble the final timestamp.
    pub(crate) fn into_datetime(mut self) -> Result<DateTime<FixedOffset>> {
        self.normalize()?;

        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day as u32)
            .ok_or(ParseError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })?;
        let naive = date
            .and_hms_opt(self.hour, self.minute, self.second)
            .ok_or(ParseError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            })?;
        let offset = FixedOffset::east_opt(self.offset_hours * 3600)
            .ok_or(ParseError::InvalidOffset(self.offset_hours))?;

        naive
            .and_local_timezone(offset)
            .single()
            .ok_or(ParseError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
    }

    /// Number of days in the current (year, month): the day before the
    /// first of the following month.
    fn month_length(&self) -> Result<u32> {
        let invalid = ParseError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        };
        if !(1..=12).contains(&self.month) {
            return Err(invalid);
        }
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(invalid.clone())?;
        Ok(first_next.pred_opt().ok_or(invalid)?.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn fields(year: i32, month: u32, day: i32) -> FieldSet {
        FieldSet {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            offset_hours: 0,
        }
    }

    #[test]
    fn test_from_instant_copies_every_field() {
        let now = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 2, 18, 9, 15, 42)
            .unwrap();
        let f = FieldSet::from_instant(&now);
        assert_eq!(
            f,
            FieldSet {
                year: 2026,
                month: 2,
                day: 18,
                hour: 9,
                minute: 15,
                second: 42,
                offset_hours: 2,
            }
        );
    }

    #[test]
    fn test_day_45_of_31_day_month_rolls_to_day_14() {
        let mut f = fields(2026, 1, 45);
        f.normalize().unwrap();
        assert_eq!((f.year, f.month, f.day), (2026, 2, 14));
    }

    #[test]
    fn test_day_overflow_rolls_across_multiple_months() {
        let mut f = fields(2026, 1, 100);
        f.normalize().unwrap();
        // 100 - 31 (Jan) - 28 (Feb) - 31 (Mar) = 10
        assert_eq!((f.year, f.month, f.day), (2026, 4, 10));
    }

    #[test]
    fn test_day_overflow_rolls_past_december() {
        let mut f = fields(2026, 12, 40);
        f.normalize().unwrap();
        assert_eq!((f.year, f.month, f.day), (2027, 1, 9));
    }

    #[test]
    fn test_leap_year_february_length() {
        let mut f = fields(2024, 2, 30);
        f.normalize().unwrap();
        assert_eq!((f.year, f.month, f.day), (2024, 3, 1));
    }

    #[test]
    fn test_day_zero_rolls_into_previous_month() {
        let mut f = fields(2026, 3, 0);
        f.normalize().unwrap();
        assert_eq!((f.year, f.month, f.day), (2026, 2, 28));
    }

    #[test]
    fn test_day_underflow_rolls_past_january() {
        let mut f = fields(2026, 1, -5);
        f.normalize().unwrap();
        assert_eq!((f.year, f.month, f.day), (2025, 12, 26));
    }

    #[test]
    fn test_month_out_of_range_is_an_error() {
        let mut f = fields(2026, 13, 5);
        assert!(matches!(
            f.normalize(),
            Err(ParseError::InvalidDate { month: 13, .. })
        ));
    }

    #[test]
    fn test_into_datetime_rejects_bad_time() {
        let mut f = fields(2026, 2, 18);
        f.hour = 99;
        let err = f.into_datetime().unwrap_err();
        assert!(matches!(err, ParseError::InvalidTime { hour: 99, .. }));
    }

    #[test]
    fn test_into_datetime_rejects_bad_offset() {
        let mut f = fields(2026, 2, 18);
        f.offset_hours = 30;
        let err = f.into_datetime().unwrap_err();
        assert_eq!(err, ParseError::InvalidOffset(30));
    }

    proptest! {
        #[test]
        fn normalize_always_lands_on_a_real_date(
            year in 1990i32..=2100,
            month in 1u32..=12,
            day in -400i32..=800,
        ) {
            let mut f = fields(year, month, day);
            f.normalize().unwrap();
            prop_assert!(NaiveDate::from_ymd_opt(f.year, f.month, f.day as u32).is_some());
        }
    }
}
