//! Projection of a combination onto the weekly half-hour grid.
//!
//! The grid is fixed: Monday..Friday columns and twenty half-hour rows from
//! 08:00 to 18:00. A class occupies one start cell carrying its section and
//! period plus `span - 1` continuation cells below it.

use log::warn;
use serde::Serialize;

use crate::algorithms::Combination;
use crate::models::{Period, Section, TimeOfDay, Weekday, WEEKDAY_COUNT};

/// First displayed minute (08:00).
pub const GRID_START_MINUTES: u16 = 8 * 60;
/// End of the last displayed slot (18:00).
pub const GRID_END_MINUTES: u16 = 18 * 60;
pub const SLOT_MINUTES: u16 = 30;
pub const GRID_ROWS: usize = ((GRID_END_MINUTES - GRID_START_MINUTES) / SLOT_MINUTES) as usize;
pub const GRID_COLUMNS: usize = WEEKDAY_COUNT;

pub type GridResult<T> = Result<T, GridError>;

/// A period that cannot be drawn on the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Out of range: {day} {start}-{end} is outside the 8:00-18:00 display window")]
    OutOfRange {
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("Misaligned: {day} {start}-{end} does not fall on half-hour boundaries")]
    Misaligned {
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
    },
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell<'a> {
    Empty,
    /// Covered by a class that started in an earlier row.
    Continuation,
    ClassStart {
        section: &'a Section,
        period: &'a Period,
        /// Rows covered, including this one.
        span: usize,
    },
}

/// Where a period lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    pub row: usize,
    pub column: usize,
    pub span: usize,
}

/// Compute the grid slot for a period.
///
/// The period must lie within 08:00-18:00 and start and end on a half-hour
/// boundary.
pub fn slot_for(period: &Period) -> GridResult<GridSlot> {
    let range = period.minutes();
    if range.start < GRID_START_MINUTES || range.end > GRID_END_MINUTES {
        return Err(GridError::OutOfRange {
            day: period.day(),
            start: period.start(),
            end: period.end(),
        });
    }
    if (range.start - GRID_START_MINUTES) % SLOT_MINUTES != 0
        || (range.end - GRID_START_MINUTES) % SLOT_MINUTES != 0
    {
        return Err(GridError::Misaligned {
            day: period.day(),
            start: period.start(),
            end: period.end(),
        });
    }

    Ok(GridSlot {
        row: usize::from((range.start - GRID_START_MINUTES) / SLOT_MINUTES),
        column: period.day().index(),
        span: usize::from(period.duration_minutes() / SLOT_MINUTES),
    })
}

/// Occupancy table for one combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridTable<'a> {
    rows: [[GridCell<'a>; GRID_COLUMNS]; GRID_ROWS],
}

impl<'a> GridTable<'a> {
    pub fn empty() -> Self {
        Self {
            rows: [[GridCell::Empty; GRID_COLUMNS]; GRID_ROWS],
        }
    }

    pub fn rows(&self) -> &[[GridCell<'a>; GRID_COLUMNS]; GRID_ROWS] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell<'a>> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Start and end time of a row, or `None` past the last row.
    pub fn row_times(row: usize) -> Option<(TimeOfDay, TimeOfDay)> {
        if row >= GRID_ROWS {
            return None;
        }
        let start = GRID_START_MINUTES + row as u16 * SLOT_MINUTES;
        let start = TimeOfDay::from_minutes(start).ok()?;
        let end = TimeOfDay::from_minutes(start.minutes() + SLOT_MINUTES).ok()?;
        Some((start, end))
    }

    /// Start cells as `(row, column, section, period, span)`, row-major.
    pub fn class_starts(&self) -> impl Iterator<Item = (usize, usize, &'a Section, &'a Period, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(column, cell)| match *cell {
                GridCell::ClassStart {
                    section,
                    period,
                    span,
                } => Some((row, column, section, period, span)),
                _ => None,
            })
        })
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !matches!(cell, GridCell::Empty))
            .count()
    }

    fn place(&mut self, section: &'a Section, period: &'a Period, slot: GridSlot) {
        for offset in 0..slot.span {
            let row = slot.row + offset;
            let cell = &mut self.rows[row][slot.column];
            let occupied = !matches!(cell, GridCell::Empty);
            if occupied {
                // Conflict-free combinations never collide; later class wins.
                warn!(
                    "Grid cell ({}, {}) already occupied when placing section {}",
                    row, slot.column, section.number
                );
            }
            debug_assert!(
                !occupied,
                "grid cell ({}, {}) written twice; combination was not conflict-checked",
                row, slot.column
            );
            *cell = if offset == 0 {
                GridCell::ClassStart {
                    section,
                    period,
                    span: slot.span,
                }
            } else {
                GridCell::Continuation
            };
        }
    }
}

impl Default for GridTable<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Render a combination onto the grid.
///
/// The combination must already be conflict-free; overlapping classes are an
/// invariant breach (debug assertion, later class wins in release builds).
pub fn render<'a>(combination: &Combination<'a>) -> GridResult<GridTable<'a>> {
    let mut table = GridTable::empty();
    for (section, period) in combination.periods() {
        let slot = slot_for(period)?;
        table.place(section, period, slot);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionNumber;

    fn period(day: Weekday, start: (u8, u8), end: (u8, u8)) -> Period {
        Period::new(
            day,
            "N-301",
            TimeOfDay::new(start.0, start.1).unwrap(),
            TimeOfDay::new(end.0, end.1).unwrap(),
        )
        .unwrap()
    }

    fn section(number: u32, periods: Vec<Period>) -> Section {
        Section {
            title: "Biology".to_string(),
            number: SectionNumber::new(number),
            teacher: "Darwin".to_string(),
            periods,
        }
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(GRID_ROWS, 20);
        assert_eq!(GRID_COLUMNS, 5);
    }

    #[test]
    fn test_monday_nine_to_ten_thirty() {
        let s = section(1, vec![period(Weekday::Monday, (9, 0), (10, 30))]);
        let combination = Combination::new(vec![&s]);
        let table = render(&combination).unwrap();

        match table.cell(2, 0) {
            Some(GridCell::ClassStart { section, period, span }) => {
                assert_eq!(section.number, SectionNumber::new(1));
                assert_eq!(period.day(), Weekday::Monday);
                assert_eq!(*span, 3);
            }
            other => panic!("expected class start, got {:?}", other),
        }
        assert_eq!(table.cell(3, 0), Some(&GridCell::Continuation));
        assert_eq!(table.cell(4, 0), Some(&GridCell::Continuation));

        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                if column == 0 && (2..=4).contains(&row) {
                    continue;
                }
                assert_eq!(table.cell(row, column), Some(&GridCell::Empty), "({}, {})", row, column);
            }
        }
        assert_eq!(table.occupied(), 3);
    }

    #[test]
    fn test_window_edges_are_drawable() {
        let s = section(
            1,
            vec![
                period(Weekday::Tuesday, (8, 0), (8, 30)),
                period(Weekday::Tuesday, (17, 30), (18, 0)),
            ],
        );
        let table = render(&Combination::new(vec![&s])).unwrap();
        let starts: Vec<(usize, usize, usize)> =
            table.class_starts().map(|(r, c, _, _, span)| (r, c, span)).collect();
        assert_eq!(starts, vec![(0, 1, 1), (19, 1, 1)]);
    }

    #[test]
    fn test_before_window_is_out_of_range() {
        let p = period(Weekday::Wednesday, (7, 30), (9, 0));
        assert_eq!(
            slot_for(&p),
            Err(GridError::OutOfRange {
                day: Weekday::Wednesday,
                start: TimeOfDay::new(7, 30).unwrap(),
                end: TimeOfDay::new(9, 0).unwrap(),
            })
        );
    }

    #[test]
    fn test_past_window_is_out_of_range() {
        let s = section(1, vec![period(Weekday::Friday, (17, 0), (18, 30))]);
        let err = render(&Combination::new(vec![&s])).unwrap_err();
        assert!(matches!(err, GridError::OutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "Out of range: Friday 17:00-18:30 is outside the 8:00-18:00 display window"
        );
    }

    #[test]
    fn test_misaligned_period_is_rejected() {
        let p = period(Weekday::Thursday, (10, 15), (11, 30));
        assert!(matches!(slot_for(&p), Err(GridError::Misaligned { .. })));
        let q = period(Weekday::Thursday, (10, 0), (11, 15));
        assert!(matches!(slot_for(&q), Err(GridError::Misaligned { .. })));
    }

    #[test]
    fn test_multiple_sections_across_days() {
        let a = section(1, vec![period(Weekday::Monday, (8, 0), (9, 0)), period(Weekday::Wednesday, (8, 0), (9, 0))]);
        let b = section(2, vec![period(Weekday::Monday, (9, 0), (11, 0))]);
        let table = render(&Combination::new(vec![&a, &b])).unwrap();

        assert!(matches!(table.cell(0, 0), Some(GridCell::ClassStart { span: 2, .. })));
        assert_eq!(table.cell(1, 0), Some(&GridCell::Continuation));
        assert!(matches!(table.cell(2, 0), Some(GridCell::ClassStart { span: 4, .. })));
        assert!(matches!(table.cell(0, 2), Some(GridCell::ClassStart { span: 2, .. })));
        assert_eq!(table.occupied(), 2 + 2 + 4);
    }

    #[test]
    fn test_empty_combination_renders_empty_grid() {
        let table = render(&Combination::new(vec![])).unwrap();
        assert_eq!(table, GridTable::empty());
        assert_eq!(table.occupied(), 0);
    }

    #[test]
    fn test_row_times() {
        let (start, end) = GridTable::row_times(0).unwrap();
        assert_eq!((start.to_string(), end.to_string()), ("8:00".to_string(), "8:30".to_string()));
        let (start, end) = GridTable::row_times(19).unwrap();
        assert_eq!((start.to_string(), end.to_string()), ("17:30".to_string(), "18:00".to_string()));
        assert!(GridTable::row_times(20).is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "written twice")]
    fn test_overlapping_classes_trip_debug_assertion() {
        let a = section(1, vec![period(Weekday::Monday, (9, 0), (10, 0))]);
        let b = section(2, vec![period(Weekday::Monday, (9, 30), (10, 30))]);
        let _ = render(&Combination::new(vec![&a, &b]));
    }

    #[test]
    fn test_cell_serializes_with_kind_tag() {
        let json = serde_json::to_value(GridCell::Continuation).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "continuation" }));
    }
}
