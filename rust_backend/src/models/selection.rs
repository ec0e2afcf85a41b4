//! The ordered list of courses a student is planning around.

use log::{info, warn};
use serde::Serialize;

use super::course::{normalize_code, Course, SectionFilter};
use super::error::{SelectionError, SelectionResult};
use super::section::Section;

/// Courses under consideration, in the order they were added.
///
/// Course order determines the order of sections inside every combination and
/// the order combinations are generated in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    courses: Vec<Course>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub fn contains(&self, code: &str) -> bool {
        let code = normalize_code(code);
        self.courses.iter().any(|c| c.code() == code)
    }

    /// Append a course with its catalog.
    ///
    /// The initial filter is the first catalog section. A code already in the
    /// selection, or a code whose catalog is empty, is refused.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::models::{Section, SectionNumber, Selection};
    ///
    /// let section = Section {
    ///     title: "Calculus I".to_string(),
    ///     number: SectionNumber::new(1),
    ///     teacher: "Smith".to_string(),
    ///     periods: vec![],
    /// };
    /// let mut selection = Selection::new();
    /// selection.add_course("201-nya-05", vec![section]).unwrap();
    /// assert!(selection.contains("201-NYA-05"));
    /// ```
    pub fn add_course(&mut self, code: &str, sections: Vec<Section>) -> SelectionResult<&Course> {
        let code = normalize_code(code);

        if self.contains(&code) {
            warn!("Course {} already selected", code);
            return Err(SelectionError::DuplicateCourse { code });
        }

        let Some(first) = sections.first() else {
            warn!("Course {} has an empty catalog", code);
            return Err(SelectionError::EmptyCatalog { code });
        };

        let filter = SectionFilter::Section(first.number);
        info!(
            "Adding course {} ({} sections, filter {})",
            code,
            sections.len(),
            filter
        );
        self.courses.push(Course::new(&code, sections, filter));
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Append an already-built course, keeping its filter.
    ///
    /// Only duplicate codes are refused. A course without sections is kept
    /// and makes every enumeration empty.
    pub fn push_course(&mut self, course: Course) -> SelectionResult<&Course> {
        if self.contains(course.code()) {
            warn!("Course {} already selected", course.code());
            return Err(SelectionError::DuplicateCourse {
                code: course.code().to_string(),
            });
        }
        if course.sections().is_empty() {
            warn!("Course {} has no sections; no schedule can include it", course.code());
        }
        info!(
            "Adding course {} ({} sections, filter {})",
            course.code(),
            course.sections().len(),
            course.filter
        );
        self.courses.push(course);
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Remove the course at `index`, returning it.
    pub fn remove_course(&mut self, index: usize) -> SelectionResult<Course> {
        self.check_index(index)?;
        let course = self.courses.remove(index);
        info!("Removed course {}", course.code());
        Ok(course)
    }

    /// Change which sections of the course at `index` are candidates.
    pub fn set_filter(&mut self, index: usize, filter: SectionFilter) -> SelectionResult<()> {
        self.check_index(index)?;
        let course = &mut self.courses[index];
        info!("Course {} filter {} -> {}", course.code(), course.filter, filter);
        course.filter = filter;
        Ok(())
    }

    /// Index of a course by code.
    pub fn position(&self, code: &str) -> Option<usize> {
        let code = normalize_code(code);
        self.courses.iter().position(|c| c.code() == code)
    }

    fn check_index(&self, index: usize) -> SelectionResult<()> {
        if index >= self.courses.len() {
            return Err(SelectionError::IndexOutOfBounds {
                index,
                len: self.courses.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionNumber;

    fn sections(numbers: &[u32]) -> Vec<Section> {
        numbers
            .iter()
            .map(|&n| Section {
                title: "Physics".to_string(),
                number: SectionNumber::new(n),
                teacher: format!("Teacher {}", n),
                periods: vec![],
            })
            .collect()
    }

    #[test]
    fn test_add_course_defaults_to_first_section() {
        let mut selection = Selection::new();
        let course = selection.add_course("203-nya-05", sections(&[4, 5])).unwrap();
        assert_eq!(course.code(), "203-NYA-05");
        assert_eq!(course.filter, SectionFilter::Section(SectionNumber::new(4)));
    }

    #[test]
    fn test_add_course_rejects_duplicate_code_case_insensitively() {
        let mut selection = Selection::new();
        selection.add_course("203-NYA-05", sections(&[1])).unwrap();
        let err = selection.add_course("203-nya-05", sections(&[2])).unwrap_err();
        assert_eq!(
            err,
            SelectionError::DuplicateCourse {
                code: "203-NYA-05".to_string()
            }
        );
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_add_course_rejects_empty_catalog() {
        let mut selection = Selection::new();
        let err = selection.add_course("XYZ", vec![]).unwrap_err();
        assert_eq!(err, SelectionError::EmptyCatalog { code: "XYZ".to_string() });
        assert!(selection.is_empty());
    }

    #[test]
    fn test_push_course_keeps_empty_catalog_and_filter() {
        let mut selection = Selection::new();
        selection
            .push_course(Course::new("a", sections(&[1, 2]), SectionFilter::TryAll))
            .unwrap();
        let empty = selection
            .push_course(Course::new("empty", vec![], SectionFilter::TryAll))
            .unwrap();
        assert_eq!(empty.code(), "EMPTY");
        assert!(empty.sections().is_empty());
        assert_eq!(selection.courses()[0].filter, SectionFilter::TryAll);

        let err = selection
            .push_course(Course::new("A", sections(&[3]), SectionFilter::TryAll))
            .unwrap_err();
        assert_eq!(err, SelectionError::DuplicateCourse { code: "A".to_string() });
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_remove_course_preserves_order() {
        let mut selection = Selection::new();
        selection.add_course("A", sections(&[1])).unwrap();
        selection.add_course("B", sections(&[1])).unwrap();
        selection.add_course("C", sections(&[1])).unwrap();

        let removed = selection.remove_course(1).unwrap();
        assert_eq!(removed.code(), "B");
        let codes: Vec<&str> = selection.courses().iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["A", "C"]);
    }

    #[test]
    fn test_index_out_of_bounds() {
        let mut selection = Selection::new();
        assert_eq!(
            selection.remove_course(0).unwrap_err(),
            SelectionError::IndexOutOfBounds { index: 0, len: 0 }
        );
        assert!(selection.set_filter(3, SectionFilter::TryAll).is_err());
    }

    #[test]
    fn test_set_filter_and_position() {
        let mut selection = Selection::new();
        selection.add_course("A", sections(&[1, 2])).unwrap();
        selection.add_course("B", sections(&[3])).unwrap();

        let idx = selection.position("b").unwrap();
        selection.set_filter(idx, SectionFilter::TryAll).unwrap();
        assert_eq!(selection.get(1).unwrap().filter, SectionFilter::TryAll);
        assert_eq!(selection.position("missing"), None);
    }
}
