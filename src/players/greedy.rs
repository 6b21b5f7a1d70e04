//! Greedy one-ply player.
//!
//! Scores the hand left after each non-pass legal move and plays the best.
//! Scores compare lexicographically: emptying the hand first, then bombs kept,
//! then fewest cards left, then the most high cards kept from the 2 down to
//! the 4. Ties go to the lowest move id. Passing happens only when nothing
//! else is legal.

use super::player::{Player, PlayerFactory};
use crate::core::{GameRng, Seat};
use crate::moves::{Hand, Move, Rank};
use crate::rules::PartialView;

/// Score of the hand left after a candidate move. Field order is priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreedyEval {
    pub win_now: bool,
    pub bombs: u32,
    pub neg_cards: i32,
    /// Counts of 2, A, K, ..., 4, highest first.
    pub high_cards: [u8; 12],
}

impl GreedyEval {
    /// Score a hand.
    #[must_use]
    pub fn of(hand: &Hand) -> Self {
        let mut high_cards = [0; 12];
        for (slot, rank) in high_cards.iter_mut().zip(Rank::ALL[1..].iter().rev()) {
            *slot = hand[*rank];
        }
        Self {
            win_now: hand.is_empty(),
            bombs: hand.bomb_count(),
            neg_cards: -(hand.total() as i32),
            high_cards,
        }
    }
}

/// Plays the move that leaves the best-scoring hand.
pub struct GreedyPlayer {
    view: Option<PartialView>,
}

impl GreedyPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self { view: None }
    }

    /// Best non-pass move for a view, or pass if there is none.
    #[must_use]
    pub fn choose(view: &PartialView) -> Move {
        let mut best: Option<(GreedyEval, Move)> = None;
        for mv in view.get_legal_moves() {
            if mv.is_pass() {
                continue;
            }
            let mut after = *view.hand();
            if after.try_remove(&mv.cost()).is_err() {
                continue;
            }
            let eval = GreedyEval::of(&after);
            if best.map_or(true, |(top, _)| eval > top) {
                best = Some((eval, mv));
            }
        }
        best.map_or(Move::PASS, |(_, mv)| mv)
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for GreedyPlayer {
    fn accept_deal(&mut self, hand: Hand, seat: Seat, leader: Seat) {
        self.view = Some(PartialView::new(hand, seat, seat == leader));
    }

    fn accept_opponent_move(&mut self, mv: &Move) {
        let Some(view) = self.view.as_mut() else {
            panic!("greedy player saw a move before the deal");
        };
        view.apply_move(mv);
    }

    fn select_move(&mut self) -> Move {
        let Some(view) = self.view.as_mut() else {
            panic!("greedy player asked to move before the deal");
        };
        let mv = Self::choose(view);
        view.apply_move(&mv);
        mv
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Creates [`GreedyPlayer`]s. The strategy is deterministic, so the RNG is
/// ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayerFactory;

impl PlayerFactory for GreedyPlayerFactory {
    fn create_player(&self, _rng: GameRng) -> Box<dyn Player> {
        Box::new(GreedyPlayer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_of(cards: &[Rank], last: Option<Move>) -> PartialView {
        let hand = Hand::from_cards(cards.iter().copied());
        match last {
            None => PartialView::new(hand, Seat::FIRST, true),
            Some(lead) => {
                let mut view = PartialView::new(hand, Seat::FIRST, false);
                view.apply_move(&lead);
                view
            }
        }
    }

    #[test]
    fn test_eval_ordering() {
        let empty = GreedyEval::of(&Hand::EMPTY);
        let two = GreedyEval::of(&Hand::from_cards([Rank::TWO]));
        let three = GreedyEval::of(&Hand::from_cards([Rank::THREE]));
        let pair = GreedyEval::of(&Hand::from_cards([Rank::FOUR, Rank::FOUR]));

        assert!(empty > two);
        assert!(two > three);
        assert!(three > pair);
    }

    #[test]
    fn test_takes_the_win() {
        let view = view_of(&[Rank::SEVEN, Rank::EIGHT, Rank::NINE, Rank::TEN, Rank::JACK], None);
        assert_eq!(GreedyPlayer::choose(&view), Move::straight(5, Rank::JACK));
    }

    #[test]
    fn test_keeps_bombs_and_high_cards() {
        let cards = [
            Rank::FIVE,
            Rank::FIVE,
            Rank::FIVE,
            Rank::FIVE,
            Rank::SIX,
            Rank::TWO,
        ];
        // Playing the bomb or the 2 costs more than dumping the 6
        assert_eq!(GreedyPlayer::choose(&view_of(&cards, None)), Move::single(Rank::SIX));
    }

    #[test]
    fn test_passes_only_when_forced() {
        let view = view_of(&[Rank::THREE], Some(Move::single(Rank::TWO)));
        assert_eq!(GreedyPlayer::choose(&view), Move::PASS);

        let view = view_of(&[Rank::KING], Some(Move::single(Rank::QUEEN)));
        assert_eq!(GreedyPlayer::choose(&view), Move::single(Rank::KING));
    }

    #[test]
    fn test_player_applies_own_move() {
        let mut player = GreedyPlayer::new();
        let hand = Hand::from_cards([Rank::THREE, Rank::FOUR, Rank::KING]);
        player.accept_deal(hand, Seat::SECOND, Seat::FIRST);
        player.accept_opponent_move(&Move::single(Rank::NINE));
        assert_eq!(player.select_move(), Move::single(Rank::KING));
        player.accept_opponent_move(&Move::PASS);
        // Both 3 and 4 leave one card; keeping the 4 scores higher
        assert_eq!(player.select_move(), Move::single(Rank::THREE));
    }
}
