//! Per-rank card counts.
//!
//! Suits never matter in this variant, so a hand, a discard pile and the
//! card cost of a move are all the same shape: 13 counts indexed by `Rank`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::rank::Rank;
use crate::core::EngineError;

/// Card counts indexed by rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([u8; Rank::COUNT]);

impl Hand {
    /// No cards.
    pub const EMPTY: Hand = Hand([0; Rank::COUNT]);

    /// The whole 48-card deck.
    pub const FULL_DECK: Hand = Hand([4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 1]);

    /// Create a hand from raw counts, index 0 being the 3.
    #[must_use]
    pub const fn from_counts(counts: [u8; Rank::COUNT]) -> Self {
        Self(counts)
    }

    /// Create a hand holding one card per item.
    pub fn from_cards(cards: impl IntoIterator<Item = Rank>) -> Self {
        let mut hand = Self::EMPTY;
        for rank in cards {
            hand[rank] += 1;
        }
        hand
    }

    /// Raw counts, index 0 being the 3.
    #[must_use]
    pub const fn counts(&self) -> &[u8; Rank::COUNT] {
        &self.0
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }

    /// True when no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// True when every rank holds at least as many cards as `cost`.
    #[must_use]
    pub fn covers(&self, cost: &Hand) -> bool {
        self.0.iter().zip(cost.0.iter()).all(|(have, need)| have >= need)
    }

    /// Remove `cost` from this hand.
    ///
    /// Fails without modifying the hand if any rank would go negative.
    pub fn try_remove(&mut self, cost: &Hand) -> Result<(), EngineError> {
        for rank in Rank::ALL {
            if self[rank] < cost[rank] {
                return Err(EngineError::HandArithmetic {
                    rank,
                    have: self[rank],
                    need: cost[rank],
                });
            }
        }
        for (have, need) in self.0.iter_mut().zip(cost.0.iter()) {
            *have -= need;
        }
        Ok(())
    }

    /// Add `cost` to this pile.
    ///
    /// Fails without modifying the pile if any rank would exceed its deck
    /// count; `have` then reports the room left at that rank.
    pub fn try_add(&mut self, cost: &Hand) -> Result<(), EngineError> {
        for rank in Rank::ALL {
            let room = rank.deck_count().saturating_sub(self[rank]);
            if cost[rank] > room {
                return Err(EngineError::HandArithmetic {
                    rank,
                    have: room,
                    need: cost[rank],
                });
            }
        }
        for (have, add) in self.0.iter_mut().zip(cost.0.iter()) {
            *have += add;
        }
        Ok(())
    }

    /// Cards of the deck that are in neither `self` nor `other`.
    ///
    /// Saturates at zero; callers keep both piles within the deck.
    #[must_use]
    pub fn unseen_with(&self, other: &Hand) -> Hand {
        let mut rest = Hand::EMPTY;
        for rank in Rank::ALL {
            rest[rank] = rank
                .deck_count()
                .saturating_sub(self[rank])
                .saturating_sub(other[rank]);
        }
        rest
    }

    /// Number of bombs held: any full four-of-a-kind, or all three Aces.
    #[must_use]
    pub fn bomb_count(&self) -> u32 {
        Rank::ALL[..=Rank::ACE.index()]
            .iter()
            .filter(|&&rank| self[rank] == rank.deck_count())
            .count() as u32
    }

    /// Highest rank with at least `min` copies.
    #[must_use]
    pub fn highest_with(&self, min: u8) -> Option<Rank> {
        Rank::ALL.iter().rev().copied().find(|&rank| self[rank] >= min)
    }

    /// Cards at or below `rank`.
    #[must_use]
    pub fn count_at_most(&self, rank: Rank) -> u32 {
        self.0[..=rank.index()].iter().map(|&c| c as u32).sum()
    }

    /// Cards at or above `rank`.
    #[must_use]
    pub fn count_at_least(&self, rank: Rank) -> u32 {
        self.0[rank.index()..].iter().map(|&c| c as u32).sum()
    }

    /// Iterate over (rank, count) pairs in play order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Iterate over single cards in play order.
    pub fn cards(&self) -> impl Iterator<Item = Rank> + '_ {
        self.iter()
            .flat_map(|(rank, count)| std::iter::repeat(rank).take(count as usize))
    }
}

impl Index<Rank> for Hand {
    type Output = u8;

    fn index(&self, rank: Rank) -> &Self::Output {
        &self.0[rank.index()]
    }
}

impl IndexMut<Rank> for Hand {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        &mut self.0[rank.index()]
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in self.cards() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
