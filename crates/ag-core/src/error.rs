use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

/// Check `index < len`, reporting `what` on failure.
pub fn ensure_in_bounds(index: usize, len: usize, what: &'static str) -> CoreResult<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(CoreError::IndexOob { what, index, len })
    }
}
