use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The rows handed to [`Grid::from_rows`](crate::Grid::from_rows)
    /// do not form a square.
    #[error("grid is not square: {side} rows, but row {row} has {len} cells")]
    NotSquare { side: usize, row: usize, len: usize },
}
