//! Catalog loading and text output.
//!
//! Loaders combine parsing with format detection and error context; the text
//! module turns a rendered grid into a fixed-width table.
//!
//! # Example
//!
//! ```no_run
//! use course_planner::io::loaders::CatalogLoader;
//! use std::path::Path;
//!
//! let result = CatalogLoader::load(Path::new("catalog.json"))
//!     .expect("Failed to load");
//! println!("Loaded {} sections", result.num_sections);
//! ```

pub mod loaders;
pub mod text;


pub use loaders::{CatalogLoadResult, CatalogLoader, CatalogSourceType};
pub use text::{render_text, TextOptions};
