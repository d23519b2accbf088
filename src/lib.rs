//! Core library for a bounded-grid Game of Life simulation.

pub mod coord;
pub mod enc;
pub mod engine;
pub mod error;

pub use coord::Coord;
pub use enc::{GridCodec, NumericRows, SymbolRows};
pub use engine::{GridView, LifeGrid};
pub use error::{Error, Result};
