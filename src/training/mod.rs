//! Self-play: simulating games and collecting their records.
//!
//! ## Overview
//!
//! - **GameSimulator**: plays one game between two players, turn by turn
//! - **GameRecord / TurnRecord**: the full history of a finished game
//! - **GameCoordinator**: plays many games across worker threads and hands
//!   finished batches to a [`RecordSink`]
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use big2::players::{GreedyPlayerFactory, RandomPlayerFactory};
//! use big2::training::{CoordinatorConfig, GameCoordinator};
//!
//! let config = CoordinatorConfig::new()
//!     .with_num_games(8)
//!     .with_num_threads(2)
//!     .with_base_seed(42);
//!
//! let coordinator = GameCoordinator::new(
//!     config,
//!     Arc::new(RandomPlayerFactory),
//!     Arc::new(GreedyPlayerFactory),
//! );
//! let records = coordinator.run_all();
//! assert_eq!(records.len(), 8);
//! assert!(records.iter().all(|r| r.winner().is_some()));
//! ```

pub mod coordinator;
pub mod record;
pub mod simulator;

pub use coordinator::{CoordinatorConfig, GameCoordinator, RecordSink};
pub use record::{GameRecord, TurnRecord};
pub use simulator::{GameSimulator, SimConfig, SimPhase};
