//! Full-information game state.
//!
//! `GameState` holds both hands, the discard pile, the seat to move and the
//! move on the table. It is the authority the simulator plays against; the
//! players themselves only ever see a [`PartialView`](super::PartialView).
//!
//! ## Invariant
//!
//! Only 32 of the 48 cards are dealt. The other 16 sit in `undealt`, out of
//! play and hidden from both seats. For every rank,
//! `hand(0) + hand(1) + discard + undealt == deck_count`, where `discard`
//! holds the cards played so far. `apply_move` preserves this and panics on
//! any move that would break it.

use serde::{Deserialize, Serialize};

use super::trick::{enumerate_moves, follows};
use crate::core::error::fatal;
use crate::core::{EngineError, GameRng, Seat, SeatMap};
use crate::moves::{Hand, Move, MoveList, Rank};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 16;

/// Who leads the first trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstMover {
    /// Always the given seat.
    Fixed(Seat),
    /// A seat drawn from the deal stream after shuffling.
    Random,
}

impl Default for FirstMover {
    fn default() -> Self {
        FirstMover::Fixed(Seat::FIRST)
    }
}

/// Complete two-seat game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    hands: SeatMap<Hand>,
    undealt: Hand,
    discard: Hand,
    current_player: Seat,
    last_move: Move,
}

impl GameState {
    /// Shuffle the 48-card deck and deal 16 cards to each seat.
    pub fn deal(rng: &mut GameRng, first_mover: FirstMover) -> Self {
        let mut deck: Vec<Rank> = Hand::FULL_DECK.cards().collect();
        rng.shuffle(&mut deck);

        let first = Hand::from_cards(deck[..HAND_SIZE].iter().copied());
        let second = Hand::from_cards(deck[HAND_SIZE..2 * HAND_SIZE].iter().copied());
        let leader = match first_mover {
            FirstMover::Fixed(seat) => seat,
            FirstMover::Random => Seat::new(rng.gen_range(0..2) as u8),
        };
        Self::deal_with(SeatMap::from_pair(first, second), leader)
    }

    /// Start a game from fixed hands.
    ///
    /// Cards in neither hand are left undealt. Panics if either hand, or the
    /// two together, hold more of a rank than the deck has.
    #[must_use]
    pub fn deal_with(hands: SeatMap<Hand>, leader: Seat) -> Self {
        let mut held = Hand::EMPTY;
        for (_, hand) in hands.iter() {
            if let Err(err) = held.try_add(hand) {
                fatal(err);
            }
        }
        Self {
            undealt: held.unseen_with(&Hand::EMPTY),
            discard: Hand::EMPTY,
            hands,
            current_player: leader,
            last_move: Move::PASS,
        }
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat]
    }

    #[must_use]
    pub fn hands(&self) -> &SeatMap<Hand> {
        &self.hands
    }

    /// Cards left in a seat's hand.
    #[must_use]
    pub fn hand_size(&self, seat: Seat) -> u32 {
        self.hands[seat].total()
    }

    /// Cards played so far.
    #[must_use]
    pub fn discard(&self) -> &Hand {
        &self.discard
    }

    /// Cards that were never dealt.
    #[must_use]
    pub fn undealt(&self) -> &Hand {
        &self.undealt
    }

    #[must_use]
    pub fn current_player(&self) -> Seat {
        self.current_player
    }

    /// The move on the table; a pass when a new trick starts.
    #[must_use]
    pub fn last_move(&self) -> &Move {
        &self.last_move
    }

    /// Legal moves for the seat to move, in id order.
    #[must_use]
    pub fn get_legal_moves(&self) -> MoveList {
        enumerate_moves(&self.hands[self.current_player], &self.last_move, |_| true)
    }

    /// Check that the seat to move may play `mv`.
    pub fn check_move(&self, mv: &Move) -> Result<(), EngineError> {
        if !follows(mv, &self.last_move) {
            return Err(EngineError::IllegalMove {
                played: *mv,
                last: self.last_move,
            });
        }
        let mut hand = self.hands[self.current_player];
        hand.try_remove(&mv.cost())
    }

    /// Play `mv` for the seat to move and pass the turn.
    ///
    /// Panics if the move is not legal here.
    pub fn apply_move(&mut self, mv: &Move) {
        if let Err(err) = self.check_move(mv) {
            fatal(err);
        }
        let cost = mv.cost();
        if let Err(err) = self.hands[self.current_player].try_remove(&cost) {
            fatal(err);
        }
        if let Err(err) = self.discard.try_add(&cost) {
            fatal(err);
        }
        self.last_move = *mv;
        self.current_player = self.current_player.other();
    }

    /// True once either hand is empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.hands.iter().any(|(_, hand)| hand.is_empty())
    }

    /// The seat that emptied its hand, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.is_empty())
            .map(|(seat, _)| seat)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (seat, hand) in self.hands.iter() {
            let marker = if seat == self.current_player { "*" } else { " " };
            writeln!(f, "{marker}{seat} ({:2}): {hand}", hand.total())?;
        }
        writeln!(f, " discard   : {}", self.discard)?;
        write!(f, " last move : {}", self.last_move)
    }
}
