use num_traits::Zero;

use super::Check;
use crate::{Grid, Sum};

/// Checks both diagonals first (two O(n) passes, cheapest rejection),
/// then every row and column in one universal quantification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clean;

impl Check for Clean {
    fn is_target_sum(&self, grid: &Grid, target: Sum) -> bool {
        let n = grid.side();
        if n == 0 {
            return true;
        }

        let diag = (0..n).fold(Sum::zero(), |acc, i| acc + Sum::from(grid[(i, i)]));
        let anti = (0..n).fold(Sum::zero(), |acc, i| acc + Sum::from(grid[(i, n - 1 - i)]));
        if diag != target || anti != target {
            return false;
        }

        grid.rows()
            .all(|row| row.iter().fold(Sum::zero(), |acc, &v| acc + Sum::from(v)) == target)
            && (0..n).all(|j| grid.col(j).fold(Sum::zero(), |acc, v| acc + Sum::from(v)) == target)
    }
}
