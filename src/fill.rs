//! Deterministic population of a grid's empty cells.

use crate::check::Check;
use crate::{Grid, Pool, Sum, EMPTY};

/// Fill the empty cells of `grid` from `pool`, then check the result.
///
/// Works on copies; the caller's grid and pool are never touched.
/// Cells are visited in row-major order and every [`EMPTY`] cell takes
/// the last value remaining in the pool. If the pool runs out, the
/// traversal stops where it stands and the partially-filled grid is
/// checked as-is, so a grid can be accepted while cells are still
/// unassigned.
///
/// Returns the populated grid if `check` accepts it against `target`.
///
/// # Examples
///
/// ```
/// use magic_square::check::Compact;
/// use magic_square::{fill_matrix, Grid, Pool};
///
/// // The pool drains from the end: 2, 7, 6, 9, 5, 1, 4, 3, 8.
/// let pool = Pool::from(vec![8, 3, 4, 1, 5, 9, 6, 7, 2]);
/// let filled = fill_matrix(&Grid::empty(3), &pool, 15, &Compact);
/// assert_eq!(filled, Some(Grid::from([[2, 7, 6], [9, 5, 1], [4, 3, 8]])));
/// ```
pub fn fill_matrix<C>(grid: &Grid, pool: &Pool, target: Sum, check: &C) -> Option<Grid>
where
    C: Check + ?Sized,
{
    debug_assert!(!pool.contains(EMPTY), "pool holds the empty-cell marker");

    let mut grid = grid.clone();
    let mut pool = pool.clone();
    let n = grid.side();

    'traverse: for i in 0..n {
        for j in 0..n {
            if grid[(i, j)] == EMPTY {
                match pool.pop() {
                    Some(val) => grid[(i, j)] = val,
                    // Out of numbers: leave the remaining cells as
                    // they are and judge the grid as it stands.
                    None => break 'traverse,
                }
            }
        }
    }

    check.is_target_sum(&grid, target).then_some(grid)
}
