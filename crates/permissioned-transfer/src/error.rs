use thiserror::Error;

/// Errors raised while assembling permissioned transfer instructions.
///
/// Malformed input addresses are the only failure mode of this crate.
/// Everything else (missing gateway token, insufficient funds, submission
/// failures) is reported by the token program or the RPC layer at execution
/// time and never surfaces here.
#[derive(Debug, Error)]
pub enum TransferBuilderError {
    /// A supplied value does not decode to a well-formed 32-byte address
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, TransferBuilderError>;
