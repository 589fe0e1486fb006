//! Market data: daily bars, rate tables and the repository seams that fetch them.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
