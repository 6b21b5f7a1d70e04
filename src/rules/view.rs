//! One seat's imperfect-information view of a game.
//!
//! A view knows its own hand exactly, the discard pile (plays are open) and
//! the opponent's card count. It cannot tell the opponent's cards from the
//! undealt ones, so the opponent's holding at each rank is only bounded by
//! `deck_count - own - discard`. [`PartialView::get_possible_moves`]
//! enumerates against that bound plus the card count, which over-approximates
//! what the opponent can actually play.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use super::trick::{enumerate_moves, follows};
use crate::core::error::fatal;
use crate::core::{EngineError, Seat};
use crate::moves::{Hand, Move, MoveList, Rank};

/// A seat's view of the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialView {
    seat: Seat,
    hand: Hand,
    opponent_card_count: u32,
    discard: Hand,
    my_turn: bool,
    last_move: Move,
}

impl PartialView {
    /// View at deal time.
    ///
    /// The opponent is assumed to hold as many cards as `hand`, which is true
    /// of every regular deal. Use [`from_game`](Self::from_game) for uneven
    /// hands.
    #[must_use]
    pub fn new(hand: Hand, seat: Seat, my_turn: bool) -> Self {
        Self {
            seat,
            hand,
            opponent_card_count: hand.total(),
            discard: Hand::EMPTY,
            my_turn,
            last_move: Move::PASS,
        }
    }

    /// The view `seat` holds of a full state.
    #[must_use]
    pub fn from_game(state: &GameState, seat: Seat) -> Self {
        Self {
            seat,
            hand: *state.hand(seat),
            opponent_card_count: state.hand_size(seat.other()),
            discard: *state.discard(),
            my_turn: state.current_player() == seat,
            last_move: *state.last_move(),
        }
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn opponent_card_count(&self) -> u32 {
        self.opponent_card_count
    }

    #[must_use]
    pub fn discard(&self) -> &Hand {
        &self.discard
    }

    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.my_turn
    }

    #[must_use]
    pub fn last_move(&self) -> &Move {
        &self.last_move
    }

    /// Rank of the move on the table, `None` on a new trick.
    #[must_use]
    pub fn trick_rank(&self) -> Option<Rank> {
        (!self.last_move.is_pass()).then(|| self.last_move.rank())
    }

    /// Bombs in this seat's own hand.
    #[must_use]
    pub fn bomb_count(&self) -> u32 {
        self.hand.bomb_count()
    }

    /// Per-rank bound on the opponent's cards: everything neither held nor
    /// played.
    #[must_use]
    pub fn unseen(&self) -> Hand {
        self.hand.unseen_with(&self.discard)
    }

    /// Moves this seat could play now if it were its turn.
    #[must_use]
    pub fn get_legal_moves(&self) -> MoveList {
        enumerate_moves(&self.hand, &self.last_move, |_| true)
    }

    /// Moves the opponent might hold that follow the current trick.
    #[must_use]
    pub fn get_possible_moves(&self) -> MoveList {
        let limit = self.opponent_card_count;
        enumerate_moves(&self.unseen(), &self.last_move, |mv| mv.card_count() <= limit)
    }

    /// [`get_possible_moves`](Self::get_possible_moves) without bombs.
    #[must_use]
    pub fn get_possible_moves_not_bomb(&self) -> MoveList {
        let limit = self.opponent_card_count;
        enumerate_moves(&self.unseen(), &self.last_move, |mv| {
            !mv.is_bomb() && mv.card_count() <= limit
        })
    }

    /// Record a move by whichever seat is to move, then flip the turn.
    ///
    /// On this seat's turn the cards leave its hand; otherwise they come out
    /// of the opponent's count. Panics if the move cannot have been played.
    pub fn apply_move(&mut self, mv: &Move) {
        if !follows(mv, &self.last_move) {
            fatal(EngineError::IllegalMove {
                played: *mv,
                last: self.last_move,
            });
        }
        let cost = mv.cost();
        if self.my_turn {
            if let Err(err) = self.hand.try_remove(&cost) {
                fatal(err);
            }
        } else {
            // Unseen cards bound what the opponent can reveal
            if let Err(err) = self.unseen().try_remove(&cost) {
                fatal(err);
            }
            let need = mv.card_count();
            match self.opponent_card_count.checked_sub(need) {
                Some(left) => self.opponent_card_count = left,
                None => fatal(EngineError::CardCount {
                    have: self.opponent_card_count,
                    need,
                }),
            }
        }
        if let Err(err) = self.discard.try_add(&cost) {
            fatal(err);
        }
        self.last_move = *mv;
        self.my_turn = !self.my_turn;
    }
}

impl std::fmt::Display for PartialView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let turn = if self.my_turn { "to move" } else { "waiting" };
        writeln!(f, "{} ({turn}): {}", self.seat, self.hand)?;
        writeln!(f, "opponent cards: {}", self.opponent_card_count)?;
        writeln!(f, "discard: {}", self.discard)?;
        write!(f, "last move: {}", self.last_move)
    }
}
