//! Magic-square validation and deterministic grid population.
//!
//! A [`Grid`] holds an N×N square of numbers; [`is_target_sum`] decides
//! whether every row, every column and both main diagonals add up to a
//! target, and [`fill_matrix`] populates a grid's empty cells from a
//! [`Pool`] of numbers before handing the result to a check.
//!
//! ```
//! use magic_square::check::Iterative;
//! use magic_square::{fill_matrix, is_target_sum, Grid, Pool};
//!
//! let square = Grid::from([[2, 7, 6], [9, 5, 1], [4, 3, 8]]);
//! assert!(is_target_sum(&square, 15));
//!
//! // Row-major fill, drawing from the end of the pool: 9, 8, ..., 1.
//! let pool = Pool::from(1..=9);
//! assert!(fill_matrix(&Grid::empty(3), &pool, 15, &Iterative).is_none());
//! ```

pub mod check;

mod error;
mod fill;
mod grid;
mod pool;
mod spans;

pub use check::{is_target_sum, Check};
pub use error::Error;
pub use fill::fill_matrix;
pub use grid::Grid;
pub use pool::Pool;

/// The type of a grid cell value.
pub type Val = i32;

/// The type of a line sum, wide enough to add a full row of the
/// largest cell values a benchmark-sized grid holds.
pub type Sum = i64;

/// The cell value marking "not yet assigned".
///
/// Reserved: pools must not contain it.
pub const EMPTY: Val = 0;

/// A result from building a grid (Err = malformed shape).
pub type MsResult<T> = Result<T, Error>;
