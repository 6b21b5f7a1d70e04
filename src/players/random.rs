//! Uniform random player.

use super::player::{Player, PlayerFactory};
use crate::core::{GameRng, Seat};
use crate::moves::{Hand, Move};
use crate::rules::PartialView;

/// Plays a legal move chosen uniformly at random.
pub struct RandomPlayer {
    rng: GameRng,
    view: Option<PartialView>,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng, view: None }
    }

    /// The player's view, once dealt.
    #[must_use]
    pub fn view(&self) -> Option<&PartialView> {
        self.view.as_ref()
    }
}

impl Player for RandomPlayer {
    fn accept_deal(&mut self, hand: Hand, seat: Seat, leader: Seat) {
        self.view = Some(PartialView::new(hand, seat, seat == leader));
    }

    fn accept_opponent_move(&mut self, mv: &Move) {
        let Some(view) = self.view.as_mut() else {
            panic!("random player saw a move before the deal");
        };
        view.apply_move(mv);
    }

    fn select_move(&mut self) -> Move {
        let Some(view) = self.view.as_mut() else {
            panic!("random player asked to move before the deal");
        };
        let legal = view.get_legal_moves();
        let Some(&mv) = self.rng.choose(&legal) else {
            panic!("no legal move for {}", view.seat());
        };
        view.apply_move(&mv);
        mv
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Creates [`RandomPlayer`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayerFactory;

impl PlayerFactory for RandomPlayerFactory {
    fn create_player(&self, rng: GameRng) -> Box<dyn Player> {
        Box::new(RandomPlayer::new(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Rank;

    #[test]
    fn test_selects_legal_moves_and_tracks_view() {
        let hand = Hand::from_cards([Rank::THREE, Rank::FIVE, Rank::FIVE, Rank::KING]);
        let mut player = RandomPlayer::new(GameRng::new(9));
        player.accept_deal(hand, Seat::FIRST, Seat::FIRST);

        let legal = player.view().unwrap().get_legal_moves();
        let mv = player.select_move();
        assert!(legal.contains(&mv));
        assert!(!mv.is_pass());

        let view = player.view().unwrap();
        assert_eq!(view.hand().total(), 4 - mv.card_count());
        assert!(!view.is_my_turn());
    }

    #[test]
    fn test_same_seed_same_choice() {
        let hand = Hand::FULL_DECK;
        let pick = |seed| {
            let mut player = RandomPlayer::new(GameRng::new(seed));
            player.accept_deal(hand, Seat::SECOND, Seat::SECOND);
            player.select_move()
        };
        assert_eq!(pick(5), pick(5));
    }

    #[test]
    #[should_panic(expected = "before the deal")]
    fn test_select_before_deal_panics() {
        let mut player = RandomPlayer::new(GameRng::new(0));
        player.select_move();
    }
}
