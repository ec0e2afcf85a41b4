//! Enumeration of conflict-free section combinations.
//!
//! Combinations are produced in Cartesian-product order: the first course
//! varies slowest, and within a course candidates follow catalog order. The
//! output is a pure function of the selection, so nothing here is cached.

use log::debug;
use serde::Serialize;

use super::conflicts::ConflictChecker;
use crate::models::{Course, Period, Section, SectionFilter, SectionNumber, Selection};

/// One section per selected course, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination<'a> {
    sections: Vec<&'a Section>,
}

impl<'a> Combination<'a> {
    pub fn new(sections: Vec<&'a Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[&'a Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every `(section, period)` pair, in section order then period order.
    pub fn periods(&self) -> impl Iterator<Item = (&'a Section, &'a Period)> + '_ {
        self.sections
            .iter()
            .flat_map(|&section| section.periods.iter().map(move |period| (section, period)))
    }

    pub fn section_numbers(&self) -> Vec<SectionNumber> {
        self.sections.iter().map(|s| s.number).collect()
    }

    /// Whether no two periods of the combination overlap.
    pub fn is_conflict_free(&self) -> bool {
        is_conflict_free(&self.sections)
    }
}

/// Sections of `course` that enumeration should try.
///
/// An explicit filter naming a section that is not in the catalog degrades
/// to the wildcard: every section becomes a candidate.
pub fn resolve_candidates(course: &Course) -> Vec<&Section> {
    match course.filter {
        SectionFilter::Section(number) => match course.find_section(number) {
            Some(section) => vec![section],
            None => {
                debug!(
                    "Section {} not found for {}, trying all {} sections",
                    number,
                    course.code(),
                    course.sections().len()
                );
                course.sections().iter().collect()
            }
        },
        SectionFilter::TryAll => course.sections().iter().collect(),
    }
}

/// Size of the unfiltered Cartesian product, saturating on overflow.
pub fn candidate_count(selection: &Selection) -> usize {
    if selection.is_empty() {
        return 0;
    }
    selection
        .courses()
        .iter()
        .map(|course| resolve_candidates(course).len())
        .fold(1usize, |acc, n| acc.saturating_mul(n))
}

fn is_conflict_free(sections: &[&Section]) -> bool {
    let mut checker = ConflictChecker::new();
    sections
        .iter()
        .flat_map(|section| section.periods.iter())
        .all(|period| checker.try_insert(period))
}

/// Lazy iterator over the conflict-free combinations of a selection.
///
/// Walks the Cartesian product with an odometer over per-course candidate
/// indices, checking each tuple as it is produced.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    candidates: Vec<Vec<&'a Section>>,
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(selection: &'a Selection) -> Self {
        let candidates: Vec<Vec<&'a Section>> =
            selection.courses().iter().map(resolve_candidates).collect();
        let exhausted = candidates.is_empty() || candidates.iter().any(Vec::is_empty);

        Self {
            odometer: vec![0; candidates.len()],
            candidates,
            exhausted,
        }
    }

    fn next_tuple(&mut self) -> Option<Vec<&'a Section>> {
        if self.exhausted {
            return None;
        }

        let tuple = self
            .odometer
            .iter()
            .zip(&self.candidates)
            .map(|(&idx, candidates)| candidates[idx])
            .collect();

        // Advance, last course fastest.
        self.exhausted = true;
        for pos in (0..self.odometer.len()).rev() {
            self.odometer[pos] += 1;
            if self.odometer[pos] < self.candidates[pos].len() {
                self.exhausted = false;
                break;
            }
            self.odometer[pos] = 0;
        }

        Some(tuple)
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tuple) = self.next_tuple() {
            if is_conflict_free(&tuple) {
                return Some(Combination::new(tuple));
            }
        }
        None
    }
}

/// Lazily enumerate the conflict-free combinations of `selection`.
pub fn combinations(selection: &Selection) -> Combinations<'_> {
    Combinations::new(selection)
}

/// Every conflict-free combination of `selection`, in generation order.
///
/// An empty selection, or any course without candidates, yields no
/// combinations.
pub fn enumerate(selection: &Selection) -> Vec<Combination<'_>> {
    let result: Vec<Combination<'_>> = combinations(selection).collect();
    debug!(
        "Enumerated {} of {} candidate combinations for {} courses",
        result.len(),
        candidate_count(selection),
        selection.len()
    );
    result
}
