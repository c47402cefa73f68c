use crate::error::ScheduleError;
use crate::venue_api::*;
use chrono::Weekday;

pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// Length of an Opening published without an end time.
const DEFAULT_OPENING_HOURS: u16 = 2;

/// Fraction of every clock hour of the week during which a venue is open.
#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyGrid {
    cells: [[f32; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl Default for WeeklyGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklyGrid {
    pub fn new() -> Self {
        WeeklyGrid {
            cells: [[0.0; HOURS_PER_DAY]; DAYS_PER_WEEK],
        }
    }

    pub fn get(&self, day: Weekday, hour: usize) -> f32 {
        self.cells[day.num_days_from_monday() as usize][hour]
    }

    /// Cells in day-major, hour-minor order (Monday 00:00 first).
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.cells.iter().flat_map(|hours| hours.iter().copied())
    }

    fn set(&mut self, day: Weekday, hour: u16, value: f32) -> Result<(), ScheduleError> {
        let day_index = day.num_days_from_monday() as usize;

        if hour as usize >= HOURS_PER_DAY {
            return Err(ScheduleError::HourOverflow {
                day: day_index as u8,
                hour,
            });
        }

        self.cells[day_index][hour as usize] = value;

        Ok(())
    }
}

pub fn weekday_from_index(day: u8) -> Result<Weekday, ScheduleError> {
    WEEKDAYS
        .get(day as usize)
        .copied()
        .ok_or(ScheduleError::DayOutOfRange(day))
}

fn validate_time(time: &Time) -> Result<(), ScheduleError> {
    if time.hour as usize >= HOURS_PER_DAY {
        return Err(ScheduleError::HourOutOfRange(time.hour));
    }
    if time.minute >= 60 {
        return Err(ScheduleError::MinuteOutOfRange(time.minute));
    }

    Ok(())
}

/// The day the start hour is painted into.
pub fn effective_day(opening: &Opening) -> Result<Weekday, ScheduleError> {
    let day = weekday_from_index(opening.day)?;

    if opening.start.next_day {
        Ok(day.succ())
    } else {
        Ok(day)
    }
}

/// The published end, or `start` plus the default opening length.
pub fn effective_end(opening: &Opening) -> Time {
    match &opening.end {
        Some(end) => end.clone(),
        None => {
            let start = &opening.start;
            let end_hour = start.hour.saturating_add(DEFAULT_OPENING_HOURS);

            Time {
                hour: end_hour % HOURS_PER_DAY as u16,
                minute: start.minute,
                next_day: start.next_day || end_hour as usize >= HOURS_PER_DAY,
                time_zone: start.time_zone.clone(),
            }
        }
    }
}

/// Paint one Opening over `grid`. Cells already set by earlier Openings are
/// overwritten, never summed.
pub fn paint_opening(grid: &mut WeeklyGrid, opening: &Opening) -> Result<(), ScheduleError> {
    let start = &opening.start;
    validate_time(start)?;

    let end = effective_end(opening);
    validate_time(&end)?;

    let mut day = effective_day(opening)?;
    let mut hour = start.hour;

    // minute / 60 truncates, so the start hour always reads as fully open.
    grid.set(day, hour, 1.0 - f32::from(start.minute / 60))?;
    hour += 1;

    if !start.next_day && end.next_day {
        while (hour as usize) < HOURS_PER_DAY {
            grid.set(day, hour, 1.0)?;
            hour += 1;
        }
        hour = 0;
        day = day.succ();
    }

    while hour < end.hour {
        grid.set(day, hour, 1.0)?;
        hour += 1;
    }

    // The cursor only passes end.hour when the end precedes the start on the
    // same day; the fraction then lands on the hour after the start.
    grid.set(day, hour, f32::from(end.minute) / 60.0)?;

    Ok(())
}

/// Build a fresh grid from a venue's Openings, in the order given.
pub fn build_grid(openings: &[Opening]) -> Result<WeeklyGrid, ScheduleError> {
    let mut grid = WeeklyGrid::new();

    for opening in openings {
        paint_opening(&mut grid, opening)?;
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening(day: u8, start: Time, end: Option<Time>) -> Opening {
        Opening { day, start, end }
    }

    fn assert_only_cells(grid: &WeeklyGrid, expected: &[(Weekday, usize, f32)]) {
        for day in WEEKDAYS.iter() {
            for hour in 0..HOURS_PER_DAY {
                let want = expected
                    .iter()
                    .find(|(d, h, _)| d == day && *h == hour)
                    .map(|(_, _, v)| *v)
                    .unwrap_or(0.0);
                assert_eq!(grid.get(*day, hour), want, "{:?} {:02}:00", day, hour);
            }
        }
    }

    #[test]
    fn default_end_is_two_hours_later() {
        let op = opening(0, Time::new(10, 0, false), None);
        assert_eq!(effective_end(&op), Time::new(12, 0, false));
    }

    #[test]
    fn default_end_rolls_past_midnight() {
        let op = opening(0, Time::new(23, 0, false), None);
        assert_eq!(effective_end(&op), Time::new(1, 0, true));

        let op = opening(0, Time::new(22, 15, false), None);
        assert_eq!(effective_end(&op), Time::new(0, 15, true));
    }

    #[test]
    fn default_end_keeps_start_next_day_and_zone() {
        let mut start = Time::new(3, 45, true);
        start.time_zone = "Pacific Standard Time".to_string();

        let end = effective_end(&opening(2, start, None));

        assert_eq!(end.hour, 5);
        assert_eq!(end.minute, 45);
        assert!(end.next_day);
        assert_eq!(end.time_zone, "Pacific Standard Time");
    }

    #[test]
    fn explicit_end_is_used_verbatim() {
        let end = Time::new(4, 30, true);
        let op = opening(1, Time::new(20, 0, false), Some(end.clone()));
        assert_eq!(effective_end(&op), end);
    }

    #[test]
    fn start_next_day_shifts_day_and_wraps_sunday() {
        let op = opening(2, Time::new(1, 0, true), None);
        assert_eq!(effective_day(&op), Ok(Weekday::Thu));

        let op = opening(6, Time::new(1, 0, true), None);
        assert_eq!(effective_day(&op), Ok(Weekday::Mon));
    }

    #[test]
    fn paints_same_day_opening() {
        let grid = build_grid(&[opening(
            0,
            Time::new(9, 0, false),
            Some(Time::new(17, 0, false)),
        )])
        .unwrap();

        let expected: Vec<_> = (9..17).map(|h| (Weekday::Mon, h, 1.0)).collect();
        assert_only_cells(&grid, &expected);
    }

    #[test]
    fn paints_across_midnight() {
        let grid = build_grid(&[opening(
            5,
            Time::new(22, 0, false),
            Some(Time::new(2, 0, true)),
        )])
        .unwrap();

        assert_only_cells(
            &grid,
            &[
                (Weekday::Sat, 22, 1.0),
                (Weekday::Sat, 23, 1.0),
                (Weekday::Sun, 0, 1.0),
                (Weekday::Sun, 1, 1.0),
            ],
        );
    }

    #[test]
    fn sunday_night_rolls_into_monday() {
        let grid = build_grid(&[opening(
            6,
            Time::new(23, 0, false),
            Some(Time::new(1, 30, true)),
        )])
        .unwrap();

        assert_only_cells(
            &grid,
            &[
                (Weekday::Sun, 23, 1.0),
                (Weekday::Mon, 0, 1.0),
                (Weekday::Mon, 1, 0.5),
            ],
        );
    }

    #[test]
    fn start_minutes_do_not_reduce_start_hour() {
        let grid = build_grid(&[opening(
            3,
            Time::new(20, 45, false),
            Some(Time::new(22, 15, false)),
        )])
        .unwrap();

        assert_only_cells(
            &grid,
            &[
                (Weekday::Thu, 20, 1.0),
                (Weekday::Thu, 21, 1.0),
                (Weekday::Thu, 22, 0.25),
            ],
        );
    }

    #[test]
    fn opening_entirely_on_next_day() {
        let grid = build_grid(&[opening(
            0,
            Time::new(1, 0, true),
            Some(Time::new(3, 0, true)),
        )])
        .unwrap();

        assert_only_cells(&grid, &[(Weekday::Tue, 1, 1.0), (Weekday::Tue, 2, 1.0)]);
    }

    #[test]
    fn end_before_cursor_lands_after_start_hour() {
        let grid = build_grid(&[opening(
            4,
            Time::new(10, 0, false),
            Some(Time::new(10, 30, false)),
        )])
        .unwrap();

        assert_only_cells(&grid, &[(Weekday::Fri, 10, 1.0), (Weekday::Fri, 11, 0.5)]);
    }

    #[test]
    fn later_openings_overwrite_earlier_ones() {
        let long = opening(0, Time::new(9, 0, false), Some(Time::new(17, 30, false)));
        let evening = opening(0, Time::new(17, 0, false), Some(Time::new(19, 0, false)));

        let grid = build_grid(&[long.clone(), evening.clone()]).unwrap();
        assert_eq!(grid.get(Weekday::Mon, 17), 1.0);

        let grid = build_grid(&[evening, long]).unwrap();
        assert_eq!(grid.get(Weekday::Mon, 17), 0.5);
        assert_eq!(grid.get(Weekday::Mon, 18), 1.0);
    }

    #[test]
    fn overlapping_openings_never_exceed_one() {
        let op = opening(2, Time::new(12, 0, false), Some(Time::new(14, 0, false)));
        let grid = build_grid(&[op.clone(), op.clone(), op]).unwrap();

        assert_eq!(grid.get(Weekday::Wed, 12), 1.0);
        assert_eq!(grid.get(Weekday::Wed, 13), 1.0);
    }

    #[test]
    fn cells_stay_within_unit_interval() {
        let mut painted = 0;

        for day in 0..7u8 {
            for hour in 0..24u16 {
                for &minute in &[0u16, 1, 15, 30, 59] {
                    for &next_day in &[false, true] {
                        let start = Time::new(hour, minute, next_day);
                        let ends = vec![
                            None,
                            Some(Time::new((hour + 3) % 24, minute, hour + 3 > 23 || next_day)),
                            Some(Time::new(hour, 59, true)),
                        ];

                        for end in ends {
                            if let Ok(grid) = build_grid(&[opening(day, start.clone(), end)]) {
                                assert!(grid.iter().all(|v| (0.0..=1.0).contains(&v)));
                                painted += 1;
                            }
                        }
                    }
                }
            }
        }

        // Only 23:00 starts flagged next_day run off the day.
        assert!(painted > 7 * 24 * 5 * 2 * 3 / 2);
    }

    #[test]
    fn valid_openings_without_end_always_paint() {
        for day in 0..7u8 {
            for hour in 0..24u16 {
                let start = Time::new(hour, 30, false);
                assert!(build_grid(&[opening(day, start, None)]).is_ok());
            }
        }
    }

    #[test]
    fn empty_openings_give_closed_week() {
        let grid = build_grid(&[]).unwrap();
        assert_eq!(grid.iter().count(), DAYS_PER_WEEK * HOURS_PER_DAY);
        assert!(grid.iter().all(|v| v == 0.0));
    }

    #[test]
    fn rejects_out_of_range_input() {
        let bad_day = opening(7, Time::new(9, 0, false), None);
        assert_eq!(build_grid(&[bad_day]), Err(ScheduleError::DayOutOfRange(7)));

        let bad_hour = opening(0, Time::new(24, 0, false), None);
        assert_eq!(build_grid(&[bad_hour]), Err(ScheduleError::HourOutOfRange(24)));

        let bad_minute = opening(0, Time::new(9, 60, false), None);
        assert_eq!(build_grid(&[bad_minute]), Err(ScheduleError::MinuteOutOfRange(60)));

        let bad_end = opening(0, Time::new(9, 0, false), Some(Time::new(25, 0, false)));
        assert_eq!(build_grid(&[bad_end]), Err(ScheduleError::HourOutOfRange(25)));

        let huge_hour = opening(0, Time::new(u16::MAX, 0, false), None);
        assert_eq!(
            build_grid(&[huge_hour]),
            Err(ScheduleError::HourOutOfRange(u16::MAX))
        );
    }

    #[test]
    fn default_end_saturates_on_huge_hour() {
        let end = effective_end(&opening(0, Time::new(u16::MAX - 1, 0, false), None));
        assert!(end.next_day);
        assert!((end.hour as usize) < HOURS_PER_DAY);
    }

    #[test]
    fn rejects_cursor_running_off_the_day() {
        // Starting after midnight at 23:00 with a same-day-flagged end never rolls over.
        let op = opening(1, Time::new(23, 0, true), None);
        assert_eq!(
            build_grid(&[op]),
            Err(ScheduleError::HourOverflow { day: 2, hour: 24 })
        );
    }
}
