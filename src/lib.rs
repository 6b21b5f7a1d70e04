//! # big2
//!
//! A two-player Big 2 rules engine and a parallel self-play generator for
//! training data.
//!
//! ## Design Principles
//!
//! 1. **Dense Moves**: Every possible play is one of [`MOVE_COUNT`] ids.
//!    Legal-move sets, records and features all speak in those ids.
//!
//! 2. **Two Views of a Game**: [`GameState`] sees both hands and drives the
//!    simulation. [`PartialView`] sees one hand and is all a player or a
//!    feature extractor ever gets.
//!
//! 3. **Reproducible Runs**: All randomness flows through [`GameRng`]. A run
//!    is fixed by its base seed, whatever the thread count.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, errors
//! - `moves`: Ranks, hands, moves and the move codec
//! - `rules`: Trick following, full game state, per-seat views
//! - `players`: The player capability and built-in strategies
//! - `training`: Game simulation, records and the parallel coordinator
//! - `features`: Feature extraction from finished games
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod features;
pub mod moves;
pub mod players;
pub mod rules;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, GameRngState, Seat, SeatMap};

pub use crate::moves::{Combination, Hand, Move, MoveCodec, MoveList, Rank, MOVE_COUNT};

pub use crate::rules::{follows, FirstMover, GameState, PartialView};

pub use crate::players::{GreedyPlayer, Player, PlayerFactory, PlayerKind, RandomPlayer};

pub use crate::training::{
    CoordinatorConfig, GameCoordinator, GameRecord, GameSimulator, RecordSink, SimConfig,
    TurnRecord,
};

pub use crate::features::{
    standard_features, FeatureExtractor, FeatureLevel, FeatureSink, FeatureTable,
};
