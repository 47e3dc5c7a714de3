use num_traits::Zero;

use super::Check;
use crate::{Grid, Sum};

/// Checks row `i` and column `i` together in a single pass, with the
/// diagonal sums accumulated along the way and compared after the loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compact;

impl Check for Compact {
    fn is_target_sum(&self, grid: &Grid, target: Sum) -> bool {
        let n = grid.side();
        if n == 0 {
            return true;
        }

        let mut diag = Sum::zero();
        let mut anti = Sum::zero();

        for i in 0..n {
            let row_sum = grid
                .row(i)
                .iter()
                .fold(Sum::zero(), |acc, &v| acc + Sum::from(v));
            if row_sum != target {
                return false;
            }

            let mut col_sum = Sum::zero();
            for j in 0..n {
                col_sum += Sum::from(grid[(j, i)]);
            }
            if col_sum != target {
                return false;
            }

            diag += Sum::from(grid[(i, i)]);
            anti += Sum::from(grid[(i, n - 1 - i)]);
        }

        diag == target && anti == target
    }
}
