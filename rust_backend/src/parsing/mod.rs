//! Parsers for course catalog data.
//!
//! The course API serves each section as `{ title, section, teacher, periods }`
//! with periods carrying a day name and separate hour/minute fields. This
//! module validates those records into [`crate::models::Section`] values.
//!
//! # Example
//!
//! ```no_run
//! use course_planner::parsing::catalog_parser::parse_catalog_json;
//! use std::path::Path;
//!
//! let catalog = parse_catalog_json(Path::new("catalog.json"))
//!     .expect("Failed to parse catalog");
//! println!("{} courses", catalog.len());
//! ```

pub mod catalog_parser;


pub use catalog_parser::{
    parse_catalog_json, parse_catalog_json_str, parse_course_response_str, RawPeriod, RawSection,
};
