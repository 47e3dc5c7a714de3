//! Target-sum checks over the lines of a grid.
//!
//! A grid is accepted when every row, every column and both main
//! diagonals add up to the same target. Three strategies decide this
//! with different evaluation orders; all agree on every input and any
//! one of them can back [`fill_matrix`](crate::fill_matrix).

mod clean;
mod compact;
mod iterative;

pub use clean::Clean;
pub use compact::Compact;
pub use iterative::Iterative;

use crate::{Grid, Sum};

/// A strategy deciding whether every line of a grid meets a target sum.
pub trait Check {
    /// True iff every row sum, every column sum, and both diagonal
    /// sums of `grid` equal `target`.
    ///
    /// A zero-sized grid has no lines to fail and is accepted for any
    /// target.
    fn is_target_sum(&self, grid: &Grid, target: Sum) -> bool;
}

/// Check a grid with the default strategy.
///
/// # Examples
///
/// ```
/// use magic_square::{is_target_sum, Grid};
///
/// let square = Grid::from([[2, 7, 6], [9, 5, 1], [4, 3, 8]]);
/// assert!(is_target_sum(&square, 15));
/// assert!(!is_target_sum(&square, 16));
/// ```
pub fn is_target_sum(grid: &Grid, target: Sum) -> bool {
    Compact.is_target_sum(grid, target)
}
