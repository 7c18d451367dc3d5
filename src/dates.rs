//! Date column sequence for the timeline.
//!
//! The timeline shows a fixed number of contiguous calendar days starting at
//! an anchor date. Because the sequence has no gaps, the column of any date is
//! plain day arithmetic against the anchor.

use chrono::{Local, NaiveDate};

/// Produces `count` consecutive calendar dates starting at `anchor`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rsched::dates::generate_date_range;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap();
/// let dates = generate_date_range(anchor, 3);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// ```
pub fn generate_date_range(anchor: NaiveDate, count: usize) -> Vec<NaiveDate> {
    anchor.iter_days().take(count).collect()
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The ordered date columns of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateColumns {
    anchor: NaiveDate,
    days_to_show: usize,
    dates: Vec<NaiveDate>,
}

impl DateColumns {
    /// Creates `days_to_show` columns starting at `anchor`.
    pub fn new(anchor: NaiveDate, days_to_show: usize) -> Self {
        Self {
            anchor,
            days_to_show,
            dates: generate_date_range(anchor, days_to_show),
        }
    }

    /// Creates columns anchored at today's date.
    pub fn starting_today(days_to_show: usize) -> Self {
        Self::new(today(), days_to_show)
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn days_to_show(&self) -> usize {
        self.days_to_show
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Signed column offset of `date` relative to the anchor.
    ///
    /// Negative for dates before the window, `>= len()` for dates after it.
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        (date - self.anchor).num_days()
    }

    /// Column index of `date`, if it is inside the window.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = self.offset_of(date);
        if offset >= 0 && (offset as usize) < self.dates.len() {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// Changes the number of columns. Returns `true` if the sequence was regenerated.
    pub fn set_days_to_show(&mut self, days_to_show: usize) -> bool {
        if days_to_show == self.days_to_show {
            return false;
        }
        self.days_to_show = days_to_show;
        self.dates = generate_date_range(self.anchor, days_to_show);
        true
    }

    /// Moves the window. Returns `true` if the sequence was regenerated.
    pub fn set_anchor(&mut self, anchor: NaiveDate) -> bool {
        if anchor == self.anchor {
            return false;
        }
        self.anchor = anchor;
        self.dates = generate_date_range(anchor, self.days_to_show);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_range_is_consecutive_for_many_lengths() {
        let anchor = date("2024-02-26");
        for n in 1..=120 {
            let dates = generate_date_range(anchor, n);
            assert_eq!(dates.len(), n);
            assert_eq!(dates[0], anchor);
            for pair in dates.windows(2) {
                assert_eq!((pair[1] - pair[0]).num_days(), 1);
            }
        }
    }

    #[test]
    fn test_range_crosses_leap_day() {
        let dates = generate_date_range(date("2024-02-28"), 3);
        assert_eq!(dates, vec![date("2024-02-28"), date("2024-02-29"), date("2024-03-01")]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate_date_range(date("2026-01-01"), 0).is_empty());
    }

    #[test]
    fn test_index_of_inside_and_outside() {
        let columns = DateColumns::new(date("2026-01-21"), 8);
        assert_eq!(columns.index_of(date("2026-01-21")), Some(0));
        assert_eq!(columns.index_of(date("2026-01-28")), Some(7));
        assert_eq!(columns.index_of(date("2026-01-29")), None);
        assert_eq!(columns.index_of(date("2026-01-20")), None);
        assert_eq!(columns.offset_of(date("2026-01-19")), -2);
    }

    #[test]
    fn test_set_days_regenerates_only_on_change() {
        let mut columns = DateColumns::new(date("2026-01-21"), 8);
        assert!(!columns.set_days_to_show(8));
        assert!(columns.set_days_to_show(30));
        assert_eq!(columns.len(), 30);
        assert_eq!(columns.last(), Some(date("2026-02-19")));
    }

    #[test]
    fn test_set_anchor_shifts_window() {
        let mut columns = DateColumns::new(date("2026-01-21"), 3);
        assert!(columns.set_anchor(date("2026-03-01")));
        assert_eq!(columns.dates(), &[date("2026-03-01"), date("2026-03-02"), date("2026-03-03")]);
    }
}
