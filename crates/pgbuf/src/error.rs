//! Error types for pgbuf

use thiserror::Error;

/// Result type alias for pgbuf operations
pub type BufResult<T> = Result<T, BufError>;

/// Errors reported by the checked builder operations.
///
/// Accumulating text and parameters never fails; only the explicitly checked
/// variants (such as [`Builder::try_set_param`](crate::Builder::try_set_param))
/// return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufError {
    /// Positional parameters are 1-based, so this index has no slot.
    #[error("Invalid parameter index {0}: positions start at 1")]
    InvalidParamIndex(usize),
}

impl BufError {
    /// Check if this is an invalid parameter index error
    pub fn is_invalid_param_index(&self) -> bool {
        matches!(self, Self::InvalidParamIndex(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_message_names_the_index() {
        let err = BufError::InvalidParamIndex(0);
        assert!(err.is_invalid_param_index());
        assert_eq!(
            err.to_string(),
            "Invalid parameter index 0: positions start at 1"
        );
    }
}
