//! Month grid generation for the date-time picker.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Weekday};
use thiserror::Error;

/// Cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors raised for out-of-range grid requests.
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    /// Year outside the supported calendar range.
    #[error("year {0} is outside the supported range")]
    InvalidYear(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Selectable date range plus weekday exclusions.
pub struct DateBounds {
    /// Earliest selectable date.
    pub min: Option<NaiveDate>,
    /// Latest selectable date.
    pub max: Option<NaiveDate>,
    /// Weekdays that can never be selected (e.g. clinic closed on Sundays).
    pub disabled_weekdays: Vec<Weekday>,
}

impl DateBounds {
    /// Returns `true` when `date` may be selected.
    pub fn allows(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min)
            && self.max.map_or(true, |max| date <= max)
            && !self.disabled_weekdays.contains(&date.weekday())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One day in a month grid. Rendered lists key on the whole cell, so a date shared by two
/// adjacent grids is re-rendered with the new month's state.
pub struct CalendarCell {
    /// Calendar date.
    pub date: NaiveDate,
    /// The date belongs to the displayed month.
    pub in_month: bool,
    /// The date is today.
    pub is_today: bool,
    /// The date falls outside the bounds.
    pub disabled: bool,
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))
}

/// Builds the 42-cell grid for `month` of `year`, starting at the Sunday on or before the 1st.
pub fn month_grid(
    year: i32,
    month: u32,
    bounds: &DateBounds,
    today: NaiveDate,
) -> Result<Vec<CalendarCell>, CalendarError> {
    let first = first_of_month(year, month)?;
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first
        .checked_sub_days(Days::new(lead))
        .ok_or(CalendarError::InvalidYear(year))?;

    let cells: Vec<CalendarCell> = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            in_month: date.month() == month && date.year() == year,
            is_today: date == today,
            disabled: !bounds.allows(date),
        })
        .collect();

    // Only short near the end of chrono's representable range.
    if cells.len() < GRID_CELLS {
        return Err(CalendarError::InvalidYear(year));
    }
    Ok(cells)
}

/// Moves `(year, month)` by `delta` months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Result<(i32, u32), CalendarError> {
    let first = first_of_month(year, month)?;
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    }
    .ok_or(CalendarError::InvalidYear(year))?;
    Ok((shifted.year(), shifted.month()))
}

/// Month title such as `March 2024`.
pub fn month_title(year: i32, month: u32) -> Result<String, CalendarError> {
    Ok(first_of_month(year, month)?.format("%B %Y").to_string())
}

/// Times of day every `step_minutes`, starting at midnight. A zero step yields no options.
pub fn time_options(step_minutes: u32) -> Vec<NaiveTime> {
    if step_minutes == 0 {
        return Vec::new();
    }
    (0..24 * 60)
        .step_by(step_minutes as usize)
        .filter_map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn every_month_has_42_cells_with_the_first_at_its_weekday() {
        let today = date(2024, 3, 14);
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let grid = month_grid(year, month, &DateBounds::default(), today).expect("grid");
                assert_eq!(grid.len(), GRID_CELLS);

                let first = date(year, month, 1);
                let index = first.weekday().num_days_from_sunday() as usize;
                assert_eq!(grid[index].date, first);
                assert!(grid[index].in_month);
                assert_eq!(grid[0].date.weekday(), Weekday::Sun);
            }
        }
    }

    #[test]
    fn dates_shared_by_adjacent_grids_carry_distinct_cells() {
        let today = date(2024, 3, 14);
        let march = month_grid(2024, 3, &DateBounds::default(), today).expect("march");
        let april = month_grid(2024, 4, &DateBounds::default(), today).expect("april");

        let in_march = |day: NaiveDate| march.iter().copied().find(|cell| cell.date == day);
        let in_april = |day: NaiveDate| april.iter().copied().find(|cell| cell.date == day);

        for day in [date(2024, 3, 31), date(2024, 4, 1), date(2024, 4, 6)] {
            let before = in_march(day).expect("shown in march");
            let after = in_april(day).expect("shown in april");
            assert_ne!(before, after);
            assert_eq!(before.in_month, day.month() == 3);
            assert_eq!(after.in_month, day.month() == 4);
        }
    }

    #[test]
    fn sunday_first_month_starts_at_index_zero() {
        let grid =
            month_grid(2024, 9, &DateBounds::default(), date(2024, 9, 1)).expect("grid");
        assert_eq!(grid[0].date, date(2024, 9, 1));
        assert!(grid[0].is_today);
        assert_eq!(grid.iter().filter(|cell| cell.in_month).count(), 30);
        assert_eq!(grid.iter().filter(|cell| cell.is_today).count(), 1);
    }

    #[test]
    fn bounds_disable_out_of_range_and_weekday_cells() {
        let bounds = DateBounds {
            min: Some(date(2024, 3, 5)),
            max: Some(date(2024, 3, 25)),
            disabled_weekdays: vec![Weekday::Sun],
        };
        let grid = month_grid(2024, 3, &bounds, date(2024, 3, 14)).expect("grid");
        let cell = |d: NaiveDate| {
            grid.iter()
                .find(|cell| cell.date == d)
                .copied()
                .expect("cell")
        };
        assert!(cell(date(2024, 3, 4)).disabled);
        assert!(!cell(date(2024, 3, 5)).disabled);
        assert!(cell(date(2024, 3, 10)).disabled);
        assert!(!cell(date(2024, 3, 25)).disabled);
        assert!(cell(date(2024, 3, 26)).disabled);
    }

    #[test]
    fn invalid_months_are_rejected() {
        let today = date(2024, 1, 1);
        assert_eq!(
            month_grid(2024, 13, &DateBounds::default(), today),
            Err(CalendarError::InvalidMonth(13))
        );
        assert_eq!(shift_month(2024, 0, 1), Err(CalendarError::InvalidMonth(0)));
    }

    #[test]
    fn shift_month_crosses_year_boundaries() {
        assert_eq!(shift_month(2024, 12, 1), Ok((2025, 1)));
        assert_eq!(shift_month(2024, 1, -1), Ok((2023, 12)));
        assert_eq!(shift_month(2024, 5, -17), Ok((2022, 12)));
        assert_eq!(month_title(2024, 3).as_deref(), Ok("March 2024"));
    }

    #[test]
    fn time_options_step_through_the_day() {
        let options = time_options(30);
        assert_eq!(options.len(), 48);
        assert_eq!(options[1], NaiveTime::from_hms_opt(0, 30, 0).expect("time"));
        assert!(time_options(0).is_empty());
        assert_eq!(time_options(90).len(), 16);
    }
}
