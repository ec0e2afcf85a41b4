//! Loaded section data keyed by course code.

use std::collections::BTreeMap;

use super::course::normalize_code;
use super::section::Section;

/// Every section known for each course code.
///
/// Codes are stored in their normalized (upper case) form; sections keep the
/// order they were loaded in, which is the catalog order used by enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: BTreeMap<String, Vec<Section>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the sections for a course code.
    pub fn insert(&mut self, code: &str, sections: Vec<Section>) -> Option<Vec<Section>> {
        self.courses.insert(normalize_code(code), sections)
    }

    pub fn get(&self, code: &str) -> Option<&[Section]> {
        self.courses.get(&normalize_code(code)).map(Vec::as_slice)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total number of sections across all courses.
    pub fn section_count(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<Section>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Section>)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (code, sections) in iter {
            catalog.insert(&code, sections);
        }
        catalog
    }
}
