use thiserror::Error;

pub type Result<T, E = CodeError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Nothing to build a coding tree from.
    #[error("invalid input: no symbols to build a code from")]
    InvalidInput,

    #[error("unknown symbol at input position {position}: no codeword in table")]
    UnknownSymbol { position: usize },

    /// The bitstring ended part way through a codeword.
    #[error("truncated input: {consumed} bits consumed, {dangling} of them belong to an unfinished codeword")]
    TruncatedInput { consumed: usize, dangling: usize },

    /// Bit leads to a child the tree does not have.
    #[error("invalid code: bit {position} does not lead to any symbol")]
    InvalidCode { position: usize },

    #[error("invalid digit {found:?} at position {position}: expected '0' or '1'")]
    InvalidDigit { position: usize, found: char },
}
