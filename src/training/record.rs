//! Game and turn records produced by self-play.
//!
//! A [`GameRecord`] is the complete history of one game: the RNG state the
//! deal was drawn from, the dealt position, one [`TurnRecord`] per move and
//! the final position. Records are immutable once the game ends and are the
//! input to feature extraction.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, GameRngState, Seat, SeatMap};
use crate::moves::{Move, MoveList};
use crate::rules::{FirstMover, GameState, PartialView};

/// One move and the position it was made from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The seat that moved.
    pub current_player: Seat,

    /// Full state before the move.
    pub state: GameState,

    /// Both seats' views before the move.
    pub views: SeatMap<PartialView>,

    /// The mover's legal moves.
    pub legal_moves: MoveList,

    /// What the waiting seat could infer the mover might play.
    pub possible_moves: MoveList,

    /// The move made.
    pub played: Move,
}

impl TurnRecord {
    /// The view of the seat that moved.
    #[must_use]
    pub fn mover_view(&self) -> &PartialView {
        &self.views[self.current_player]
    }

    /// The view of the seat that waited.
    #[must_use]
    pub fn waiting_view(&self) -> &PartialView {
        &self.views[self.current_player.other()]
    }
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    deal: GameRngState,
    initial: GameState,
    turns: Vec<TurnRecord>,
    final_state: GameState,
}

impl GameRecord {
    pub(crate) fn new(
        deal: GameRngState,
        initial: GameState,
        turns: Vec<TurnRecord>,
        final_state: GameState,
    ) -> Self {
        Self {
            deal,
            initial,
            turns,
            final_state,
        }
    }

    /// RNG state the deal was drawn from.
    #[must_use]
    pub fn deal(&self) -> &GameRngState {
        &self.deal
    }

    /// Position right after the deal.
    #[must_use]
    pub fn initial(&self) -> &GameState {
        &self.initial
    }

    /// Every turn in play order.
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    #[must_use]
    pub fn final_state(&self) -> &GameState {
        &self.final_state
    }

    /// The seat that went out.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.final_state.winner()
    }

    /// Number of turns, passes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Deal again from the recorded RNG state.
    ///
    /// The shuffle comes before the leader draw, so fixing the recorded leader
    /// reproduces the initial position exactly.
    #[must_use]
    pub fn replay_deal(&self) -> GameState {
        let mut rng = GameRng::from_state(&self.deal);
        GameState::deal(&mut rng, FirstMover::Fixed(self.initial.current_player()))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_game() -> GameRecord {
        let mut rng = GameRng::new(1);
        let deal = rng.state();
        let initial = GameState::deal(&mut rng, FirstMover::default());

        let mut state = initial.clone();
        let mut turns = Vec::new();
        while !state.is_over() {
            let mover = state.current_player();
            let views = SeatMap::new(|seat| PartialView::from_game(&state, seat));
            let legal_moves = state.get_legal_moves();
            let played = *legal_moves.last().unwrap();
            turns.push(TurnRecord {
                current_player: mover,
                state: state.clone(),
                possible_moves: views[mover.other()].get_possible_moves(),
                views,
                legal_moves,
                played,
            });
            state.apply_move(&played);
        }
        GameRecord::new(deal, initial, turns, state)
    }

    #[test]
    fn test_replay_deal() {
        let record = short_game();
        assert_eq!(record.replay_deal(), *record.initial());
        assert!(record.winner().is_some());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_bytes_round_trip() {
        let record = short_game();
        let bytes = record.to_bytes().unwrap();
        assert_eq!(GameRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            GameRecord::from_bytes(&[1, 2, 3]),
            Err(EngineError::Serialization(_))
        ));
    }

    #[test]
    fn test_turn_views() {
        let record = short_game();
        let first = &record.turns()[0];
        assert!(first.mover_view().is_my_turn());
        assert!(!first.waiting_view().is_my_turn());
        assert_eq!(first.mover_view().hand().total(), 16);
        let top = first.state.hand(first.current_player).highest_with(1).unwrap();
        assert!(first.legal_moves.contains(&Move::single(top)));
    }
}
