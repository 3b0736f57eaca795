//! Month grid arithmetic for the symptom calendar.
//!
//! Pure functions of (year, month) on the proleptic Gregorian calendar.
//! Weekdays are indexed from Sunday = 0 regardless of locale.

use chrono::{Datelike, Months, NaiveDate};

/// A displayed calendar month. Always normalised to `month` in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    /// Returns `None` for a month outside 1..=12 or a year chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Constructed through `new`/`containing`, so day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Weekday of the 1st, Sunday = 0 .. Saturday = 6.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Empty cells before the 1st in a Sunday-first grid.
    pub fn leading_blanks(&self) -> usize {
        self.first_weekday() as usize
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Every date of the month, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.first_day()
            .iter_days()
            .take(self.days_in_month() as usize)
            .collect()
    }

    /// Move by `delta` months (negative goes back), crossing year boundaries.
    pub fn shift(&self, delta: i32) -> Self {
        let first = self.first_day();
        let moved = if delta >= 0 {
            first.checked_add_months(Months::new(delta.unsigned_abs()))
        } else {
            first.checked_sub_months(Months::new(delta.unsigned_abs()))
        };
        moved.map(Self::containing).unwrap_or(*self)
    }

    /// Header label, e.g. "October 2026".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Distance from the 1st to the 1st of the next month. Zero for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // December of the last representable year
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(year: i32, month: u32) -> MonthView {
        MonthView::new(year, month).unwrap()
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(MonthView::new(2025, 0).is_none());
        assert!(MonthView::new(2025, 13).is_none());
    }

    #[test]
    fn first_weekday_known_months() {
        // 1 June 2025 was a Sunday, 1 October 2026 is a Thursday.
        assert_eq!(view(2025, 6).first_weekday(), 0);
        assert_eq!(view(2026, 10).first_weekday(), 4);
        // 1 January 2000 was a Saturday.
        assert_eq!(view(2000, 1).first_weekday(), 6);
    }

    #[test]
    fn days_in_month_handles_leap_rules() {
        assert_eq!(view(2024, 2).days_in_month(), 29);
        assert_eq!(view(2025, 2).days_in_month(), 28);
        assert_eq!(view(1900, 2).days_in_month(), 28);
        assert_eq!(view(2000, 2).days_in_month(), 29);
        assert_eq!(view(2025, 4).days_in_month(), 30);
        assert_eq!(view(2025, 12).days_in_month(), 31);
    }

    #[test]
    fn free_days_in_month_rejects_invalid_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 9), 30);
        assert_eq!(days_in_month(2025, 0), 0);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn days_lists_whole_month() {
        let days = view(2025, 2).days();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(days[27], NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn shift_crosses_year_boundaries() {
        assert_eq!(view(2025, 12).shift(1), view(2026, 1));
        assert_eq!(view(2025, 1).shift(-1), view(2024, 12));
        assert_eq!(view(2025, 3).shift(-14), view(2024, 1));
        assert_eq!(view(2025, 3).shift(0), view(2025, 3));
    }

    #[test]
    fn containing_uses_date_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let month = MonthView::containing(date);
        assert_eq!((month.year(), month.month()), (2026, 10));
        assert_eq!(month.leading_blanks(), 4);
    }

    #[test]
    fn label_is_month_and_year() {
        assert_eq!(view(2026, 10).label(), "October 2026");
    }
}
