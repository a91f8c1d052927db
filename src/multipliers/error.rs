use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MultiplyError {
    #[error("length mismatch: a has {a} elements, b has {b}, output has {out}")]
    LengthMismatch { a: usize, b: usize, out: usize },
}
