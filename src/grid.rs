//! The square grid of cell values.

use std::fmt;
use std::ops;

use crate::{Error, MsResult, Val, EMPTY};

/// An owned N×N grid of cell values, addressed by `(row, column)`.
///
/// The cell value [`EMPTY`] marks a cell awaiting assignment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    side: usize,
    cells: Vec<Val>,
}

impl Grid {
    /// Allocate a grid with every cell awaiting assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// let grid = magic_square::Grid::empty(3);
    /// assert_eq!(grid.side(), 3);
    /// ```
    pub fn empty(side: usize) -> Self {
        Grid {
            side,
            cells: vec![EMPTY; side * side],
        }
    }

    /// Build a grid from its rows.
    ///
    /// Fails with [`Error::NotSquare`] if any row's length differs
    /// from the number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use magic_square::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![2, 7], vec![9, 5]]).unwrap();
    /// assert_eq!(grid[(1, 0)], 9);
    ///
    /// assert!(Grid::from_rows(vec![vec![2, 7, 6], vec![9, 5]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Val>>) -> MsResult<Self> {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);

        for (row, vals) in rows.iter().enumerate() {
            if vals.len() != side {
                return Err(Error::NotSquare {
                    side,
                    row,
                    len: vals.len(),
                });
            }
            cells.extend_from_slice(vals);
        }

        Ok(Grid { side, cells })
    }

    /// The number of rows (= number of columns).
    pub fn side(&self) -> usize {
        self.side
    }

    /// The cells of row `i`, left to right.
    pub fn row(&self, i: usize) -> &[Val] {
        &self.cells[i * self.side..(i + 1) * self.side]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Val]> + '_ {
        (0..self.side).map(move |i| self.row(i))
    }

    /// Iterate over the cells of column `j`, top to bottom.
    pub fn col(&self, j: usize) -> impl Iterator<Item = Val> + '_ {
        (0..self.side).map(move |i| self[(i, j)])
    }
}

impl<const N: usize> From<[[Val; N]; N]> for Grid {
    fn from(rows: [[Val; N]; N]) -> Self {
        Grid {
            side: N,
            cells: rows.iter().flatten().copied().collect(),
        }
    }
}

impl ops::Index<(usize, usize)> for Grid {
    type Output = Val;

    fn index(&self, (row, col): (usize, usize)) -> &Val {
        debug_assert!(row < self.side && col < self.side);
        &self.cells[row * self.side + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Val {
        debug_assert!(row < self.side && col < self.side);
        &mut self.cells[row * self.side + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for &val in row {
                write!(f, " {:2}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Grid, EMPTY};

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]);
        assert_eq!(
            err,
            Err(Error::NotSquare {
                side: 3,
                row: 1,
                len: 2
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_count() {
        let err = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(
            err,
            Err(Error::NotSquare {
                side: 2,
                row: 0,
                len: 3
            })
        );
    }

    #[test]
    fn test_empty_grid_cells() {
        let grid = Grid::empty(2);
        assert!((0..2).all(|i| (0..2).all(|j| grid[(i, j)] == EMPTY)));
    }

    #[test]
    fn test_index_round_trip() {
        let mut grid = Grid::from([[1, 2], [3, 4]]);
        grid[(0, 1)] = 9;
        assert_eq!(grid.row(0), &[1, 9]);
        assert_eq!(grid.col(1).collect::<Vec<_>>(), vec![9, 4]);
    }

    #[test]
    fn test_display_lays_out_rows() {
        let grid = Grid::from([[1, 2], [30, 4]]);
        assert_eq!(grid.to_string(), "  1  2\n 30  4\n");
    }
}
