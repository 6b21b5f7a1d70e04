//! The player capability consumed by the simulator.

use std::str::FromStr;
use std::sync::Arc;

use super::greedy::GreedyPlayerFactory;
use super::random::RandomPlayerFactory;
use crate::core::{EngineError, GameRng, Seat};
use crate::moves::{Hand, Move};

/// A strategy seated at the table.
///
/// ## Contract
///
/// - `accept_deal` is called once, before any other method.
/// - `select_move` is only called on this player's turn and must return one
///   of the moves in its own view's legal set. The player applies the chosen
///   move to its own view before returning it.
/// - `accept_opponent_move` is called with every move the opponent makes.
pub trait Player: Send {
    /// Receive the dealt hand, the seat, and which seat leads.
    fn accept_deal(&mut self, hand: Hand, seat: Seat, leader: Seat);

    /// Observe a move made by the opponent.
    fn accept_opponent_move(&mut self, mv: &Move);

    /// Choose and commit to a move.
    fn select_move(&mut self) -> Move;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Builds fresh players, one per seat per game.
///
/// Factories are shared across worker threads; each created player gets its
/// own RNG stream so games stay reproducible.
pub trait PlayerFactory: Send + Sync {
    fn create_player(&self, rng: GameRng) -> Box<dyn Player>;
}

/// The built-in strategies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Random,
    Greedy,
}

impl PlayerKind {
    /// A shareable factory for this strategy.
    #[must_use]
    pub fn factory(self) -> Arc<dyn PlayerFactory> {
        match self {
            PlayerKind::Random => Arc::new(RandomPlayerFactory),
            PlayerKind::Greedy => Arc::new(GreedyPlayerFactory),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(PlayerKind::Random),
            "greedy" => Ok(PlayerKind::Greedy),
            _ => Err(EngineError::UnknownPlayer(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_kind_from_str() {
        assert_eq!("random".parse::<PlayerKind>().unwrap(), PlayerKind::Random);
        assert_eq!("Greedy".parse::<PlayerKind>().unwrap(), PlayerKind::Greedy);

        let err = "mcts".parse::<PlayerKind>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownPlayer(ref name) if name == "mcts"));
    }

    #[test]
    fn test_factory_names() {
        let rng = GameRng::new(0);
        assert_eq!(PlayerKind::Random.factory().create_player(rng.clone()).name(), "random");
        assert_eq!(PlayerKind::Greedy.factory().create_player(rng).name(), "greedy");
    }
}
