//! Schedule search algorithms.
//!
//! # Components
//!
//! - [`conflicts`]: Half-open interval overlap and the incremental per-day conflict checker
//! - [`combinations`]: Cartesian enumeration of candidate sections, filtered to conflict-free combinations
//!
//! # Example
//!
//! ```
//! use course_planner::algorithms::enumerate;
//! use course_planner::models::Selection;
//!
//! let selection = Selection::new();
//! assert!(enumerate(&selection).is_empty());
//! ```

pub mod combinations;
pub mod conflicts;

pub use combinations::{
    candidate_count, combinations, enumerate, resolve_candidates, Combination, Combinations,
};
pub use conflicts::{
    find_conflicts, has_conflict, intervals_overlap, periods_conflict, ConflictChecker,
    SectionConflict,
};
