// Error types
// The multiply itself is total; these only arise at the edges (parsing, verification)

use thiserror::Error;

/// Errors reported by strategy selection, operand parsing and verification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MulError {
    #[error("unknown strategy `{0}` (expected native, limb or asm)")]
    UnknownStrategy(String),

    #[error("invalid operand `{0}`: expected a decimal or 0x-prefixed hex u64")]
    InvalidOperand(String),

    #[error("{strategy} strategy disagrees with reference for {x} * {y}: expected {expected}, got {actual}")]
    Mismatch {
        strategy: &'static str,
        x: u64,
        y: u64,
        expected: String,
        actual: u128,
    },
}

/// Result type for multiply helpers
pub type MulResult<T> = Result<T, MulError>;
