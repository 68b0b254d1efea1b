//! Cell state deltas reported by mutating field operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// The state of one cell after a mutation.
///
/// Batches of updates are always ordered row-major, in the order the cells
/// were visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellUpdate {
    pub row: usize,
    pub column: usize,
    pub alive: bool,
}

impl CellUpdate {
    pub fn new(row: usize, column: usize, alive: bool) -> Self {
        Self { row, column, alive }
    }
}

impl fmt::Display for CellUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.alive { "alive" } else { "dead" };
        write!(f, "({}, {}) -> {}", self.row, self.column, state)
    }
}
