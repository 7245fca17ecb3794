//! Resource matrices.
//!
//! A `Matrix` is a row-major `processes × resources` grid of unit counts. It is
//! validated once at construction so the engines can index it freely afterwards.

use super::error::{EngineError, Result};
use super::{ProcessId, Units};

/// Row-major matrix of resource units, one row per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<Units>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Builds a matrix from nested rows, checking every row has `cols` entries.
    ///
    /// # Arguments
    ///
    /// * `name` - Label used in the error if the shape is wrong.
    /// * `rows` - One vector per process.
    /// * `expected_rows` - Required number of rows.
    /// * `cols` - Required width of every row.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidMatrixShape` on a wrong row count or a ragged row.
    pub fn from_rows(
        name: &'static str,
        rows: &[Vec<Units>],
        expected_rows: usize,
        cols: usize,
    ) -> Result<Self> {
        let shape_error = |found_cols| EngineError::InvalidMatrixShape {
            matrix: name,
            expected_rows,
            expected_cols: cols,
            rows: rows.len(),
            cols: found_cols,
        };

        if rows.len() != expected_rows {
            return Err(shape_error(rows.first().map_or(0, Vec::len)));
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(shape_error(bad.len()));
        }

        Ok(Self {
            data: rows.iter().flatten().copied().collect(),
            rows: expected_rows,
            cols,
        })
    }

    /// Number of rows (processes).
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (resource types).
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row for process `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p >= self.rows()`.
    #[inline]
    pub fn row(&self, p: ProcessId) -> &[Units] {
        &self.data[p * self.cols..(p + 1) * self.cols]
    }

    /// Copies the matrix back into nested rows for display.
    pub fn to_rows(&self) -> Vec<Vec<Units>> {
        (0..self.rows).map(|p| self.row(p).to_vec()).collect()
    }

    /// Element-wise `self - other`, failing on the first cell that would go negative.
    ///
    /// Used to derive Need from Max and Allocation.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AllocationExceedsMax` naming the first offending cell.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let mut data = Vec::with_capacity(self.data.len());
        for p in 0..self.rows {
            for (r, (&max, &alloc)) in self.row(p).iter().zip(other.row(p)).enumerate() {
                let need = max
                    .checked_sub(alloc)
                    .ok_or(EngineError::AllocationExceedsMax {
                        process: p,
                        resource: r,
                        allocation: alloc,
                        max,
                    })?;
                data.push(need);
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Returns true when every component of `need` fits inside `available`.
#[inline]
pub fn fits(need: &[Units], available: &[Units]) -> bool {
    need.iter().zip(available).all(|(n, a)| n <= a)
}

/// Adds process `p`'s `row` into `acc` component-wise.
///
/// # Errors
///
/// Returns `EngineError::ResourceOverflow` on the first component that would exceed
/// `Units::MAX`. `acc` is left untouched in that case.
pub fn checked_add_into(acc: &mut [Units], row: &[Units], p: ProcessId) -> Result<()> {
    let mut sum = acc.to_vec();
    for (resource, (a, &r)) in sum.iter_mut().zip(row).enumerate() {
        *a = a
            .checked_add(r)
            .ok_or(EngineError::ResourceOverflow { process: p, resource })?;
    }
    acc.copy_from_slice(&sum);
    Ok(())
}

/// Adds `row` into `acc` component-wise, saturating at `Units::MAX`.
///
/// Checkers only replay prefixes of a sequence whose full replay was summed with
/// `checked_add_into` at construction, so saturation never happens there.
#[inline]
pub fn add_into(acc: &mut [Units], row: &[Units]) {
    for (a, r) in acc.iter_mut().zip(row) {
        *a = a.saturating_add(*r);
    }
}
