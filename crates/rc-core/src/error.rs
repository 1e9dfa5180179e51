use thiserror::Error;

pub type RcResult<T> = Result<T, RcError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RcError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
