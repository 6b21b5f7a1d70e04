//! Core engine types: seats, deterministic RNG, errors.
//!
//! This module contains the building blocks shared by the rules engine and
//! the self-play pipeline.

pub mod error;
pub mod rng;
pub mod seat;

pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, SeatMap};
