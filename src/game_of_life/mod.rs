//! Game of Life core functionality

pub mod field;
pub mod io;
pub mod pattern;
pub mod rules;
pub mod update;

pub use field::Field;
pub use io::{field_to_string, load_field_from_file, load_pattern_from_file, parse_field_from_string};
pub use pattern::Pattern;
pub use rules::GameOfLifeRules;
pub use update::CellUpdate;
