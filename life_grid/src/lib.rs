//! Conway's Game of Life on a fixed, bounded grid, plus the per-frame driver
//! that turns pointer and key input into grid edits and generation steps.

pub mod config;
pub mod error;
pub mod frontend;
pub mod grid;
pub mod patterns;
pub mod session;

pub use error::GridError;
pub use frontend::{Canvas, Input, Key};
pub use grid::Grid;
pub use session::Session;
