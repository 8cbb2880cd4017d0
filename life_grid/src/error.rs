use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("unexpected character {ch:?} on line {line}")]
    UnexpectedChar { ch: char, line: usize },

    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRows {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid text contains no rows")]
    Empty,
}
