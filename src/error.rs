use crate::Coord;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate outside the current grid dimensions. The grid is left
    /// unchanged and the simulation may continue.
    #[error("coordinate {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },

    /// An initial configuration that is missing, unreadable, or does not
    /// parse into a rectangular 0/1 matrix. Raised at construction time,
    /// before any grid exists.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
