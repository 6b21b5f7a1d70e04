//! Trick-following rules and move enumeration.

use crate::moves::{Hand, Move, MoveCodec, MoveList};

/// Whether `candidate` may be played when `last` is the move on the table.
///
/// - A pass on the table means a new trick: any non-pass move leads.
/// - Passing is allowed only inside a trick.
/// - A bomb beats any non-bomb, and a lower bomb.
/// - Anything else needs the same combination and length with a strictly
///   higher primary rank.
///
/// ```
/// use big2::moves::{Move, Rank};
/// use big2::rules::follows;
///
/// let lead = Move::double(Rank::NINE);
/// assert!(follows(&Move::double(Rank::KING), &lead));
/// assert!(!follows(&Move::single(Rank::TWO), &lead));
/// assert!(follows(&Move::bomb(Rank::THREE, None), &lead));
/// assert!(follows(&Move::PASS, &lead));
/// assert!(!follows(&Move::PASS, &Move::PASS));
/// ```
#[must_use]
pub fn follows(candidate: &Move, last: &Move) -> bool {
    if candidate.is_pass() {
        return !last.is_pass();
    }
    if last.is_pass() {
        return true;
    }
    if candidate.is_bomb() {
        return !last.is_bomb() || candidate.rank() > last.rank();
    }
    candidate.combination() == last.combination() && candidate.rank() > last.rank()
}

/// Every move whose cost fits in `hand` and which follows `last`, in id
/// order, subject to `keep`.
pub(crate) fn enumerate_moves(hand: &Hand, last: &Move, keep: impl Fn(&Move) -> bool) -> MoveList {
    MoveCodec::catalog()
        .iter()
        .filter(|&(_, mv, cost)| hand.covers(cost) && follows(mv, last) && keep(mv))
        .map(|(_, mv, _)| *mv)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Combination, Rank};

    #[test]
    fn test_same_combination_needs_higher_rank() {
        let last = Move::full_house(Rank::TEN, Rank::THREE);
        assert!(follows(&Move::full_house(Rank::JACK, Rank::THREE), &last));
        assert!(!follows(&Move::full_house(Rank::TEN, Rank::ACE), &last));
        assert!(!follows(&Move::full_house(Rank::NINE, Rank::ACE), &last));
    }

    #[test]
    fn test_straight_length_must_match() {
        let last = Move::straight(5, Rank::NINE);
        assert!(follows(&Move::straight(5, Rank::TEN), &last));
        assert!(!follows(&Move::straight(6, Rank::TEN), &last));
        assert!(!follows(&Move::double_straight(5, Rank::TEN), &last));
    }

    #[test]
    fn test_bombs() {
        let bomb = Move::bomb(Rank::SEVEN, Some(Rank::THREE));
        assert!(follows(&bomb, &Move::single(Rank::TWO)));
        assert!(follows(&bomb, &Move::straight(13, Rank::TWO)));
        assert!(follows(&Move::bomb(Rank::EIGHT, None), &bomb));
        assert!(!follows(&Move::bomb(Rank::SEVEN, Some(Rank::ACE)), &bomb));
        assert!(!follows(&Move::single(Rank::TWO), &bomb));
    }

    #[test]
    fn test_enumerate_new_trick() {
        let hand = Hand::from_cards([Rank::THREE, Rank::THREE, Rank::FIVE]);
        let moves = enumerate_moves(&hand, &Move::PASS, |_| true);

        assert_eq!(
            moves.as_slice(),
            &[Move::single(Rank::THREE), Move::single(Rank::FIVE), Move::double(Rank::THREE)]
        );
    }

    #[test]
    fn test_enumerate_filters() {
        let mut hand = Hand::EMPTY;
        hand[Rank::SIX] = 4;
        hand[Rank::KING] = 1;
        let moves = enumerate_moves(&hand, &Move::single(Rank::QUEEN), |mv| !mv.is_bomb());

        assert_eq!(moves.as_slice(), &[Move::PASS, Move::single(Rank::KING)]);
        assert!(moves.iter().all(|m| m.combination() != Combination::Bomb));
    }
}
