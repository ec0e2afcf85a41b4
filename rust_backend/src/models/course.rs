//! Courses and their section filters.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::section::{Section, SectionNumber};

/// Label shown for the wildcard option in section pickers.
pub const TRY_ALL_LABEL: &str = "Try All";

/// Which sections of a course are candidates for enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionFilter {
    /// Only the named section.
    Section(SectionNumber),
    /// Every section in the catalog.
    TryAll,
}

impl fmt::Display for SectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionFilter::Section(number) => write!(f, "{}", number),
            SectionFilter::TryAll => f.write_str(TRY_ALL_LABEL),
        }
    }
}

/// An entry of a section picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOption {
    pub label: String,
    pub filter: SectionFilter,
}

/// A course code together with its catalog and the current filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    code: String,
    sections: Vec<Section>,
    pub filter: SectionFilter,
}

impl Course {
    /// Create a course. The code is normalized to upper case.
    pub fn new(code: &str, sections: Vec<Section>, filter: SectionFilter) -> Self {
        Self {
            code: normalize_code(code),
            sections,
            filter,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Catalog sections in the order they were loaded.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn find_section(&self, number: SectionNumber) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == number)
    }

    /// Title of the section named by an explicit filter.
    ///
    /// Returns `None` for the wildcard filter or when the named section is
    /// not in the catalog.
    pub fn title(&self) -> Option<&str> {
        match self.filter {
            SectionFilter::Section(number) => self.find_section(number).map(|s| s.title.as_str()),
            SectionFilter::TryAll => None,
        }
    }

    /// Picker options: one per section in catalog order, then "Try All".
    pub fn section_options(&self) -> Vec<SectionOption> {
        self.sections
            .iter()
            .map(|section| SectionOption {
                label: section.label(),
                filter: SectionFilter::Section(section.number),
            })
            .chain(std::iter::once(SectionOption {
                label: TRY_ALL_LABEL.to_string(),
                filter: SectionFilter::TryAll,
            }))
            .collect()
    }
}

/// Course codes compare case-insensitively; the canonical form is upper case.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
