//! Course schedule planner core.
//!
//! Given the courses a student is considering and the sections offered for
//! each, enumerate every conflict-free choice of one section per course and
//! lay a chosen combination out on a Monday..Friday, 08:00-18:00 grid.
//!
//! - [`models`]: weekdays, times, periods, sections, courses, and the selection
//! - [`algorithms`]: conflict detection and combination enumeration
//! - [`services`]: grid mapping and combination navigation
//! - [`parsing`] / [`io`]: catalog JSON parsing, loading, and text output
//! - [`config`]: TOML planner configuration

pub mod algorithms;
pub mod config;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;

pub use algorithms::{enumerate, Combination};
pub use models::{Course, Section, SectionFilter, SectionNumber, Selection};
pub use services::{render, GridCell, GridTable, ScheduleBrowser};
