use thiserror::Error;

/// Everything that can go wrong between reading a digest and printing its art
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalkError {
    #[error("invalid digest {digest:?}: {reason}")]
    InvalidDigest { digest: String, reason: String },
    /// The walker ended up somewhere no boundary class covers. Only a bug in
    /// the position bookkeeping can cause this.
    #[error("illegal board state: walker at ({x}, {y}) is off the board")]
    IllegalBoardState { x: u32, y: u32 },
    #[error("cell ({x}, {y}) holds {count}, which has no symbol")]
    SymbolOverflow { x: u32, y: u32, count: u32 },
    #[error("cannot load moves once the walk has started")]
    WalkInProgress,
    #[error("walk still has {remaining} moves left")]
    WalkIncomplete { remaining: usize },
}
