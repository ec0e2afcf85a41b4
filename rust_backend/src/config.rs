//! Planner configuration file support.
//!
//! This module reads the catalog location, the courses to plan around, and
//! display options from a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::TextOptions;
use crate::models::{Catalog, Course, SectionFilter, SectionNumber, Selection, SelectionError};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No planner.toml found in standard locations")]
    NotFound,

    #[error("Course {code} is not in the catalog")]
    UnknownCourse { code: String },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Planner configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub courses: Vec<CourseSettings>,
    #[serde(default)]
    pub display: DisplaySettings,
    /// Directory of the file this was loaded from; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

/// One course to plan around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSettings {
    pub code: String,
    /// Section number to pin; omitted means "Try All".
    #[serde(default)]
    pub section: Option<u32>,
}

/// Text output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_title_width")]
    pub title_width: usize,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_title_width() -> usize {
    20
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title_width: default_title_width(),
        }
    }
}

impl CourseSettings {
    pub fn filter(&self) -> SectionFilter {
        match self.section {
            Some(number) => SectionFilter::Section(SectionNumber::new(number)),
            None => SectionFilter::TryAll,
        }
    }
}

impl PlannerConfig {
    /// Load planner configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(PlannerConfig)` if successful
    /// * `Err(ConfigError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        log::info!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load planner configuration from the default location.
    ///
    /// Searches for `planner.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> ConfigResult<Self> {
        let search_paths = [
            PathBuf::from("planner.toml"),
            PathBuf::from("rust_backend/planner.toml"),
            PathBuf::from("../planner.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Catalog path, resolved against the config file's directory when relative.
    pub fn catalog_path(&self) -> PathBuf {
        match &self.base_dir {
            Some(base) if self.catalog.path.is_relative() => base.join(&self.catalog.path),
            _ => self.catalog.path.clone(),
        }
    }

    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            title_width: self.display.title_width,
        }
    }

    /// Build the selection described by `courses` from a loaded catalog.
    pub fn build_selection(&self, catalog: &Catalog) -> ConfigResult<Selection> {
        build_selection(&self.courses, catalog)
    }
}

/// Build a selection from course settings, in the order given.
///
/// A code present in the catalog with no sections is kept; the selection
/// then has no combinations.
pub fn build_selection(courses: &[CourseSettings], catalog: &Catalog) -> ConfigResult<Selection> {
    let mut selection = Selection::new();
    for course in courses {
        let sections = catalog
            .get(&course.code)
            .ok_or_else(|| ConfigError::UnknownCourse {
                code: course.code.clone(),
            })?;
        selection.push_course(Course::new(&course.code, sections.to_vec(), course.filter()))?;
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use std::io::Write;
    use tempfile::Builder;

    fn catalog() -> Catalog {
        let section = |n: u32| Section {
            title: "Art History".to_string(),
            number: SectionNumber::new(n),
            teacher: "Vasari".to_string(),
            periods: vec![],
        };
        let mut catalog = Catalog::new();
        catalog.insert("520-100-VA", vec![section(1), section(2)]);
        catalog.insert("340-101-MQ", vec![section(5)]);
        catalog
    }

    #[test]
    fn test_parse_full_config() {
        let config = PlannerConfig::from_toml_str(
            r#"
            [catalog]
            path = "data/catalog.json"

            [[courses]]
            code = "520-100-va"
            section = 2

            [[courses]]
            code = "340-101-MQ"

            [display]
            title_width = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.courses.len(), 2);
        assert_eq!(config.courses[0].filter(), SectionFilter::Section(SectionNumber::new(2)));
        assert_eq!(config.courses[1].filter(), SectionFilter::TryAll);
        assert_eq!(config.text_options().title_width, 12);
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("catalog.json"));
        assert!(config.courses.is_empty());
        assert_eq!(config.display.title_width, 20);
    }

    #[test]
    fn test_invalid_toml() {
        let err = PlannerConfig::from_toml_str("[[courses]]\nsection = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_resolves_catalog_relative_to_config() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[catalog]\npath = \"catalog.json\"").unwrap();

        let config = PlannerConfig::from_file(file.path()).unwrap();
        let expected = file.path().parent().unwrap().join("catalog.json");
        assert_eq!(config.catalog_path(), expected);
    }

    #[test]
    fn test_from_file_missing() {
        let err = PlannerConfig::from_file("/nonexistent/planner.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_build_selection_applies_filters_in_order() {
        let courses = vec![
            CourseSettings {
                code: "340-101-mq".to_string(),
                section: None,
            },
            CourseSettings {
                code: "520-100-VA".to_string(),
                section: Some(2),
            },
        ];
        let selection = build_selection(&courses, &catalog()).unwrap();

        assert_eq!(selection.courses()[0].code(), "340-101-MQ");
        assert_eq!(selection.courses()[0].filter, SectionFilter::TryAll);
        assert_eq!(
            selection.courses()[1].filter,
            SectionFilter::Section(SectionNumber::new(2))
        );
    }

    #[test]
    fn test_build_selection_keeps_course_without_sections() {
        let mut catalog = catalog();
        catalog.insert("999-000-EM", vec![]);
        let courses = vec![
            CourseSettings {
                code: "520-100-VA".to_string(),
                section: None,
            },
            CourseSettings {
                code: "999-000-em".to_string(),
                section: None,
            },
        ];

        let selection = build_selection(&courses, &catalog).unwrap();
        assert_eq!(selection.len(), 2);
        assert!(selection.courses()[1].sections().is_empty());
        assert!(crate::algorithms::enumerate(&selection).is_empty());
    }

    #[test]
    fn test_build_selection_unknown_course() {
        let courses = vec![CourseSettings {
            code: "999-999-ZZ".to_string(),
            section: None,
        }];
        let err = build_selection(&courses, &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCourse { ref code } if code == "999-999-ZZ"));
    }

    #[test]
    fn test_build_selection_duplicate_course() {
        let courses = vec![
            CourseSettings {
                code: "520-100-VA".to_string(),
                section: None,
            },
            CourseSettings {
                code: "520-100-va".to_string(),
                section: None,
            },
        ];
        let err = build_selection(&courses, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Selection(SelectionError::DuplicateCourse { .. })
        ));
    }
}
