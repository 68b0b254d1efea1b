//! The resizable Game of Life field and its generation-advance logic

use super::rules::GameOfLifeRules;
use super::update::CellUpdate;
use crate::error::{FieldError, Result};
use itertools::iproduct;
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, trace};

/// A rectangular grid of live and dead cells, stored row-major.
///
/// The field carries no configuration of its own: edge wrapping, the step
/// evaluation mode and the random density are passed with each call.
/// It provides no internal locking, so a concurrent host must serialize
/// access to one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Field {
    /// Create a field with every cell dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    /// Create a field from signed dimensions, rejecting negative or oversized ones
    pub fn try_new(rows: i64, columns: i64) -> Result<Self> {
        let (rows, columns) = checked_dimensions(rows, columns)?;
        Ok(Self::new(rows, columns))
    }

    /// Create a field from a 2D boolean array whose rows all have the same length
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(FieldError::Ragged {
                    row,
                    length: cells.len(),
                    expected: columns,
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Get cell value at coordinates. Out of bounds cells are dead.
    pub fn get(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns && self.cells[self.index(row, column)]
    }

    /// Iterate over all cells row-major as `(row, column, alive)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        iproduct!(0..self.rows, 0..self.columns)
            .map(move |(row, column)| (row, column, self.cells[self.index(row, column)]))
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(row, column, _)| (row, column))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the field has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    pub fn is_in_bounds(&self, row: isize, column: isize) -> bool {
        0 <= row && (row as usize) < self.rows && 0 <= column && (column as usize) < self.columns
    }

    /// Reshape the field in place.
    ///
    /// Trailing rows and columns are cropped when shrinking and new cells are
    /// dead when growing. Cells inside both the old and new bounds keep their
    /// state. Cropped cells are lost.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        if rows == self.rows && columns == self.columns {
            return;
        }

        let mut cells = vec![false; rows * columns];
        let kept_columns = columns.min(self.columns);
        for row in 0..rows.min(self.rows) {
            let old_start = self.index(row, 0);
            let new_start = row * columns;
            cells[new_start..new_start + kept_columns]
                .copy_from_slice(&self.cells[old_start..old_start + kept_columns]);
        }

        debug!(
            "Resized field from {}x{} to {}x{}",
            self.rows, self.columns, rows, columns
        );
        self.rows = rows;
        self.columns = columns;
        self.cells = cells;
    }

    /// Resize from signed dimensions, rejecting negative or oversized ones
    pub fn try_resize(&mut self, rows: i64, columns: i64) -> Result<()> {
        let (rows, columns) = checked_dimensions(rows, columns)?;
        self.resize(rows, columns);
        Ok(())
    }

    /// Reinitialize every cell independently: alive iff a uniform draw from
    /// `[0, 1)` is at most `density`.
    ///
    /// No update batch is produced; the caller should redraw the whole field.
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(density, &mut rand::thread_rng());
    }

    /// Same as [`Field::randomize`] with a caller-supplied random source
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen::<f64>() <= density;
        }
        debug!(
            "Randomized {}x{} field with density {}: {} living cells",
            self.rows,
            self.columns,
            density,
            self.living_count()
        );
    }

    /// Advance one generation and return the cells whose state changed.
    ///
    /// With `incremental == false` every cell is evaluated against a frozen
    /// copy of the current generation (standard Life). With
    /// `incremental == true` cells are evaluated row-major and each new state
    /// is written back immediately, so later cells see earlier results from
    /// the same pass. The incremental mode is a deliberate variant, not
    /// standard Life.
    pub fn step(&mut self, wrap_edges: bool, incremental: bool) -> Vec<CellUpdate> {
        let updates = if incremental {
            self.step_incremental(wrap_edges)
        } else {
            self.step_snapshot(wrap_edges)
        };

        debug!(
            "Stepped {}x{} field (wrap_edges: {}, incremental: {}): {} updates",
            self.rows,
            self.columns,
            wrap_edges,
            incremental,
            updates.len()
        );
        updates
    }

    fn step_snapshot(&mut self, wrap_edges: bool) -> Vec<CellUpdate> {
        let current = &*self;
        let next: Vec<bool> = (0..current.rows)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..current.columns).map(move |column| current.next_state(row, column, wrap_edges))
            })
            .collect();

        let updates: Vec<CellUpdate> = self
            .cells()
            .zip(next.iter())
            .filter(|&((_, _, alive), &will_be_alive)| alive != will_be_alive)
            .map(|((row, column, _), &will_be_alive)| CellUpdate::new(row, column, will_be_alive))
            .collect();

        self.cells = next;
        updates
    }

    fn step_incremental(&mut self, wrap_edges: bool) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for (row, column) in iproduct!(0..self.rows, 0..self.columns) {
            let will_be_alive = self.next_state(row, column, wrap_edges);
            let idx = self.index(row, column);
            if self.cells[idx] != will_be_alive {
                self.cells[idx] = will_be_alive;
                updates.push(CellUpdate::new(row, column, will_be_alive));
            }
        }
        updates
    }

    fn next_state(&self, row: usize, column: usize, wrap_edges: bool) -> bool {
        let neighbors = self.neighbor_count(row, column, wrap_edges);
        GameOfLifeRules::should_be_alive(self.cells[self.index(row, column)], neighbors)
    }

    /// Count living cells in the Moore neighborhood of an in-bounds cell.
    ///
    /// Counting stops at [`GameOfLifeRules::SATURATION`], so any result of 4
    /// means "more than 3". With `wrap_edges` the indices wrap around the
    /// opposite edges; a wrapped position that lands on the cell itself is
    /// never counted. Without it, positions outside the field are skipped.
    pub fn neighbor_count(&self, row: usize, column: usize, wrap_edges: bool) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1] {
            let Some(r) = neighbor_index(row, dr, self.rows, wrap_edges) else {
                continue;
            };
            for dc in [-1, 0, 1] {
                let Some(c) = neighbor_index(column, dc, self.columns, wrap_edges) else {
                    continue;
                };
                if (r, c) == (row, column) || !self.cells[self.index(r, c)] {
                    continue;
                }

                count += 1;
                if count >= GameOfLifeRules::SATURATION {
                    return count;
                }
            }
        }

        count
    }

    /// Set every in-bounds cell of `pattern`, given as `(row, column)` offsets
    /// around the center, alive.
    ///
    /// Each in-bounds offset yields an update, including cells that were
    /// already alive. Out-of-bounds offsets are skipped and no other cell is
    /// touched.
    pub fn set_pattern(
        &mut self,
        pattern: &[(isize, isize)],
        center_row: isize,
        center_column: isize,
    ) -> Vec<CellUpdate> {
        let mut updates = Vec::with_capacity(pattern.len());

        for &(row_offset, column_offset) in pattern {
            let (Some(row), Some(column)) = (
                center_row.checked_add(row_offset),
                center_column.checked_add(column_offset),
            ) else {
                continue;
            };
            if !self.is_in_bounds(row, column) {
                continue;
            }

            let (row, column) = (row as usize, column as usize);
            let idx = self.index(row, column);
            self.cells[idx] = true;
            updates.push(CellUpdate::new(row, column, true));
        }

        trace!(
            "Inserted pattern at ({}, {}): {} of {} cells in bounds",
            center_row,
            center_column,
            updates.len(),
            pattern.len()
        );
        updates
    }

    /// Toggle one cell. Returns `None` if the position is out of bounds.
    pub fn flip_cell(&mut self, row: isize, column: isize) -> Option<CellUpdate> {
        if !self.is_in_bounds(row, column) {
            return None;
        }

        let (row, column) = (row as usize, column as usize);
        let idx = self.index(row, column);
        self.cells[idx] = !self.cells[idx];
        Some(CellUpdate::new(row, column, self.cells[idx]))
    }
}

/// Resolve the neighbor of `position` at `delta` along an axis of length `len`
fn neighbor_index(position: usize, delta: isize, len: usize, wrap_edges: bool) -> Option<usize> {
    let target = position as isize + delta;
    if wrap_edges {
        Some(target.rem_euclid(len as isize) as usize)
    } else if (0..len as isize).contains(&target) {
        Some(target as usize)
    } else {
        None
    }
}

fn checked_dimensions(rows: i64, columns: i64) -> Result<(usize, usize)> {
    if rows < 0 || columns < 0 {
        return Err(FieldError::NegativeDimension { rows, columns });
    }

    let too_large = FieldError::TooLarge { rows, columns };
    let r = usize::try_from(rows).map_err(|_| too_large.clone())?;
    let c = usize::try_from(columns).map_err(|_| too_large.clone())?;
    r.checked_mul(c).ok_or(too_large)?;
    Ok((r, c))
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let symbol = if self.get(row, column) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
