//! "Combination N of M" navigation over a selection.

use std::fmt;

use log::info;
use serde::Serialize;

use super::grid::{render, GridResult, GridTable};
use crate::algorithms::{combinations, enumerate, Combination};
use crate::models::{Course, Section, SectionFilter, Selection, SelectionResult};

/// 1-based position within the current combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "combination {} of {}", self.current, self.total)
    }
}

/// Owns the selection and the index of the combination on display.
///
/// Combinations are recomputed from the selection on every read. Edits reset
/// the index to the first combination, and reads clamp it, so the index can
/// never address a combination that no longer exists.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBrowser {
    selection: Selection,
    index: usize,
}

impl ScheduleBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_selection(selection: Selection) -> Self {
        Self {
            selection,
            index: 0,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn add_course(&mut self, code: &str, sections: Vec<Section>) -> SelectionResult<&Course> {
        self.index = 0;
        self.selection.add_course(code, sections)
    }

    pub fn remove_course(&mut self, index: usize) -> SelectionResult<Course> {
        self.index = 0;
        self.selection.remove_course(index)
    }

    pub fn set_filter(&mut self, index: usize, filter: SectionFilter) -> SelectionResult<()> {
        self.index = 0;
        self.selection.set_filter(index, filter)
    }

    pub fn combinations(&self) -> Vec<Combination<'_>> {
        enumerate(&self.selection)
    }

    pub fn count(&self) -> usize {
        combinations(&self.selection).count()
    }

    /// Current position, or `None` when there are no combinations.
    pub fn position(&self) -> Option<Position> {
        let total = self.count();
        (total > 0).then(|| Position {
            current: self.index.min(total - 1) + 1,
            total,
        })
    }

    pub fn current(&self) -> Option<Combination<'_>> {
        let total = self.count();
        if total == 0 {
            return None;
        }
        combinations(&self.selection).nth(self.index.min(total - 1))
    }

    /// Grid for the current combination, or `None` when there is none.
    pub fn current_grid(&self) -> GridResult<Option<GridTable<'_>>> {
        self.current().as_ref().map(render).transpose()
    }

    /// Move to the next combination. Returns `false` at the last one.
    pub fn next_combination(&mut self) -> bool {
        let total = self.count();
        if self.index + 1 >= total {
            self.index = total.saturating_sub(1);
            return false;
        }
        self.index += 1;
        true
    }

    /// Move to the previous combination. Returns `false` at the first one.
    pub fn previous_combination(&mut self) -> bool {
        let total = self.count();
        let clamped = self.index.min(total.saturating_sub(1));
        if clamped == 0 {
            self.index = 0;
            return false;
        }
        self.index = clamped - 1;
        true
    }

    /// Jump to a 1-based position, clamped into range.
    pub fn go_to(&mut self, position: usize) -> Option<Position> {
        let total = self.count();
        self.index = position.saturating_sub(1).min(total.saturating_sub(1));
        info!("Showing combination {} of {}", self.index + 1, total);
        self.position()
    }
}
