use num_traits::Zero;

use super::Check;
use crate::{Grid, Sum};

/// Checks every row, then every column, then both diagonals.
///
/// Stops at the first mismatched row before doing any column work, and
/// at the first mismatched column before touching the diagonals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Iterative;

impl Check for Iterative {
    fn is_target_sum(&self, grid: &Grid, target: Sum) -> bool {
        let n = grid.side();
        if n == 0 {
            return true;
        }

        for row in grid.rows() {
            let sum = row.iter().fold(Sum::zero(), |acc, &v| acc + Sum::from(v));
            if sum != target {
                return false;
            }
        }

        for j in 0..n {
            let mut sum = Sum::zero();
            for i in 0..n {
                sum += Sum::from(grid[(i, j)]);
            }
            if sum != target {
                return false;
            }
        }

        let mut diag = Sum::zero();
        let mut anti = Sum::zero();
        for i in 0..n {
            diag += Sum::from(grid[(i, i)]);
            anti += Sum::from(grid[(i, n - 1 - i)]);
        }

        diag == target && anti == target
    }
}
