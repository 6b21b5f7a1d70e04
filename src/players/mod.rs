//! Players: the strategy capability and the built-in strategies.

pub mod greedy;
pub mod player;
pub mod random;

pub use greedy::{GreedyEval, GreedyPlayer, GreedyPlayerFactory};
pub use player::{Player, PlayerFactory, PlayerKind};
pub use random::{RandomPlayer, RandomPlayerFactory};
