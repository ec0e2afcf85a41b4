pub mod catalog;
pub mod course;
pub mod error;
pub mod section;
pub mod selection;
pub mod time;

pub use catalog::*;
pub use course::*;
pub use error::*;
pub use section::*;
pub use selection::*;
pub use time::*;
