//! Patterns as relative live-cell offsets

use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A set of live cells given as `(row_offset, column_offset)` pairs around
/// an implied center. The field treats it as opaque offset data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pattern {
    pub name: Option<String>,
    offsets: Vec<(isize, isize)>,
}

impl Pattern {
    pub fn from_offsets(offsets: Vec<(isize, isize)>) -> Self {
        Self { name: None, offsets }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    /// Parse a plaintext block of cells.
    ///
    /// `1` or `O` marks a live cell, `0` or `.` a dead one. Lines starting
    /// with `!` are comments; a `!Name: ...` comment names the pattern. Rows
    /// may have different lengths. Offsets are taken relative to
    /// `(height / 2, width / 2)` of the block.
    pub fn parse(content: &str) -> Result<Self> {
        let mut name = None;
        let mut living = Vec::new();
        let mut height = 0;
        let mut width = 0;

        for (line_idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if let Some(comment) = line.strip_prefix('!') {
                if let Some(value) = comment.trim().strip_prefix("Name:") {
                    name = Some(value.trim().to_string());
                }
                continue;
            }
            if line.is_empty() {
                continue;
            }

            for (col_idx, ch) in line.chars().enumerate() {
                match ch {
                    '1' | 'O' => living.push((height as isize, col_idx as isize)),
                    '0' | '.' => {}
                    _ => {
                        return Err(FieldError::Parse {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            found: ch,
                        })
                    }
                }
            }
            width = width.max(line.chars().count());
            height += 1;
        }

        let (center_row, center_column) = ((height / 2) as isize, (width / 2) as isize);
        let offsets = living
            .into_iter()
            .map(|(row, column)| (row - center_row, column - center_column))
            .collect();

        Ok(Self { name, offsets })
    }
}

impl Deref for Pattern {
    type Target = [(isize, isize)];

    fn deref(&self) -> &Self::Target {
        &self.offsets
    }
}

impl From<Vec<(isize, isize)>> for Pattern {
    fn from(offsets: Vec<(isize, isize)>) -> Self {
        Self::from_offsets(offsets)
    }
}
