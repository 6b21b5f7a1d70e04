//! Engine error taxonomy.
//!
//! `InvalidMoveEncoding`, `UnknownPlayer` and the export/feature variants are
//! returned to callers as recoverable errors. `IllegalMove`, `HandArithmetic`
//! and `CardCount` describe broken invariants: the engine builds them for a
//! precise message and then panics, since a correct caller never triggers them.

use thiserror::Error;

use crate::moves::{Move, Rank};

/// Errors raised by the rules engine and the self-play pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A move id outside the dense encoding range.
    #[error("invalid move encoding {0} (valid ids are 0..{max})", max = crate::moves::MOVE_COUNT)]
    InvalidMoveEncoding(u16),

    /// A move that does not follow the current trick.
    #[error("illegal move {played} over {last}")]
    IllegalMove { played: Move, last: Move },

    /// A per-rank count would leave its valid range.
    #[error("hand arithmetic out of range at rank {rank}: have {have}, need {need}")]
    HandArithmetic { rank: Rank, have: u8, need: u8 },

    /// A move needs more cards than the seat still holds.
    #[error("card count out of range: have {have}, need {need}")]
    CardCount { have: u32, need: u32 },

    /// A player strategy name that is not built in.
    #[error("unknown player kind `{0}` (expected `random` or `greedy`)")]
    UnknownPlayer(String),

    /// A feature extractor returned the wrong number of values.
    #[error("feature `{name}` produced {actual} values, expected {expected}")]
    FeatureShape {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A record could not be encoded or decoded.
    #[error("record serialization failed")]
    Serialization(#[from] bincode::Error),

    /// The export collaborator rejected a batch.
    #[error("export of batch {batch} failed")]
    Export {
        batch: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Abort on a broken engine invariant with the error's message.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: EngineError) -> ! {
    panic!("{err}")
}
