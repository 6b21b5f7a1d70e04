//! Combinations and moves.
//!
//! A move is a combination kind plus a primary rank (the highest card in
//! play order) and, for full houses and bombs, an auxiliary rank: the pair of
//! a full house, or the optional kicker of a bomb.
//!
//! ## Straight families
//!
//! A run of length `n` with top rank `t` uses the `n` consecutive ranks that
//! end at `t`. Single-card straights may additionally use the 2 as the card
//! below the 3, so `2-3-4-5-6` is a straight topped by the 6. That is the
//! only wrap: a 13-card straight is always `3..2`, and the 2 never appears in
//! double or triple straights because the deck holds a single copy.

use serde::{Deserialize, Serialize};

use super::hand::Hand;
use super::rank::Rank;

/// Shortest and longest single-card straight.
pub const STRAIGHT_LENGTHS: std::ops::RangeInclusive<u8> = 5..=13;
/// Shortest and longest run of pairs.
pub const DOUBLE_STRAIGHT_LENGTHS: std::ops::RangeInclusive<u8> = 2..=8;
/// Shortest and longest run of triples.
pub const TRIPLE_STRAIGHT_LENGTHS: std::ops::RangeInclusive<u8> = 2..=5;

/// The kind of a move. Run kinds carry their length in ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combination {
    Pass,
    Single,
    Double,
    Triple,
    FullHouse,
    Bomb,
    /// Consecutive singles, length 5..=13.
    Straight(u8),
    /// Consecutive pairs ("sisters"), length 2..=8.
    DoubleStraight(u8),
    /// Consecutive triples, length 2..=5.
    TripleStraight(u8),
}

impl Combination {
    /// Snake-case name, with the length appended for runs.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Combination::Pass => "pass".to_string(),
            Combination::Single => "single".to_string(),
            Combination::Double => "double".to_string(),
            Combination::Triple => "triple".to_string(),
            Combination::FullHouse => "full_house".to_string(),
            Combination::Bomb => "bomb".to_string(),
            Combination::Straight(n) => format!("straight{n}"),
            Combination::DoubleStraight(n) => format!("double_straight{n}"),
            Combination::TripleStraight(n) => format!("triple_straight{n}"),
        }
    }

    /// Copies per rank for run kinds, `None` otherwise.
    #[must_use]
    pub const fn run_width(&self) -> Option<u8> {
        match self {
            Combination::Straight(_) => Some(1),
            Combination::DoubleStraight(_) => Some(2),
            Combination::TripleStraight(_) => Some(3),
            _ => None,
        }
    }
}

/// A single play: combination, primary rank and optional auxiliary rank.
///
/// Moves are immutable values. Constructors do not validate; use
/// [`Move::is_valid`] before trusting a hand-built move, and note that the
/// codec treats encoding an invalid move as a programming error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    combination: Combination,
    rank: Rank,
    auxiliary: Option<Rank>,
}

impl Move {
    /// The pass, which also stands for "no trick in progress".
    pub const PASS: Move = Move {
        combination: Combination::Pass,
        rank: Rank::THREE,
        auxiliary: None,
    };

    /// Build a move from its parts.
    #[must_use]
    pub const fn new(combination: Combination, rank: Rank, auxiliary: Option<Rank>) -> Self {
        Self {
            combination,
            rank,
            auxiliary,
        }
    }

    #[must_use]
    pub const fn pass() -> Self {
        Self::PASS
    }

    #[must_use]
    pub const fn single(rank: Rank) -> Self {
        Self::new(Combination::Single, rank, None)
    }

    #[must_use]
    pub const fn double(rank: Rank) -> Self {
        Self::new(Combination::Double, rank, None)
    }

    #[must_use]
    pub const fn triple(rank: Rank) -> Self {
        Self::new(Combination::Triple, rank, None)
    }

    /// Three of `rank` plus a pair of `pair`.
    #[must_use]
    pub const fn full_house(rank: Rank, pair: Rank) -> Self {
        Self::new(Combination::FullHouse, rank, Some(pair))
    }

    /// Four of `rank` (three for the Ace) plus an optional kicker card.
    #[must_use]
    pub const fn bomb(rank: Rank, kicker: Option<Rank>) -> Self {
        Self::new(Combination::Bomb, rank, kicker)
    }

    #[must_use]
    pub const fn straight(length: u8, top: Rank) -> Self {
        Self::new(Combination::Straight(length), top, None)
    }

    #[must_use]
    pub const fn double_straight(length: u8, top: Rank) -> Self {
        Self::new(Combination::DoubleStraight(length), top, None)
    }

    #[must_use]
    pub const fn triple_straight(length: u8, top: Rank) -> Self {
        Self::new(Combination::TripleStraight(length), top, None)
    }

    #[must_use]
    pub const fn combination(&self) -> Combination {
        self.combination
    }

    /// Primary rank: the highest card in play order.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Full-house pair rank or bomb kicker.
    #[must_use]
    pub const fn auxiliary(&self) -> Option<Rank> {
        self.auxiliary
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self.combination, Combination::Pass)
    }

    #[must_use]
    pub const fn is_bomb(&self) -> bool {
        matches!(self.combination, Combination::Bomb)
    }

    /// Lowest top rank a run of this kind and length can have.
    pub(crate) const fn min_run_top(combination: Combination) -> Option<u8> {
        match combination {
            Combination::Straight(13) => Some(Rank::TWO.index() as u8),
            // 2-low wrap: the run below the top rank starts one under the 3
            Combination::Straight(n) => Some(n - 2),
            Combination::DoubleStraight(n) | Combination::TripleStraight(n) => Some(n - 1),
            _ => None,
        }
    }

    /// Whether this move can exist in a 48-card deck.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let top = self.rank.index() as u8;
        let ace = Rank::ACE.index() as u8;
        match (self.combination, self.auxiliary) {
            (Combination::Pass, None) => self.rank == Rank::THREE,
            (Combination::Single, None) => true,
            (Combination::Double, None) => self.rank <= Rank::ACE,
            // Three Aces is a bomb, not a triple
            (Combination::Triple, None) => self.rank < Rank::ACE,
            (Combination::FullHouse, Some(pair)) => {
                self.rank <= Rank::ACE && pair <= Rank::ACE && pair != self.rank
            }
            (Combination::Bomb, kicker) => {
                self.rank <= Rank::ACE && kicker.map_or(true, |k| k != self.rank)
            }
            (Combination::Straight(n), None) => {
                STRAIGHT_LENGTHS.contains(&n) && Self::min_run_top(self.combination).map_or(false, |min| top >= min)
            }
            (Combination::DoubleStraight(n), None) => {
                DOUBLE_STRAIGHT_LENGTHS.contains(&n) && top >= n - 1 && top <= ace
            }
            (Combination::TripleStraight(n), None) => {
                TRIPLE_STRAIGHT_LENGTHS.contains(&n) && top >= n - 1 && top <= ace
            }
            _ => false,
        }
    }

    /// Ranks used by a run, lowest first. Empty for non-run kinds.
    #[must_use]
    pub fn run_ranks(&self) -> Vec<Rank> {
        let length = match self.combination {
            Combination::Straight(n) | Combination::DoubleStraight(n) | Combination::TripleStraight(n) => n,
            _ => return Vec::new(),
        };
        let top = self.rank.index() as i16;
        (top - length as i16 + 1..=top)
            .map(|i| if i < 0 { Rank::TWO } else { Rank::new(i as u8) })
            .collect()
    }

    /// Cards this move takes out of the mover's hand, per rank.
    #[must_use]
    pub fn cost(&self) -> Hand {
        let mut cost = Hand::EMPTY;
        match self.combination {
            Combination::Pass => {}
            Combination::Single => cost[self.rank] = 1,
            Combination::Double => cost[self.rank] = 2,
            Combination::Triple => cost[self.rank] = 3,
            Combination::FullHouse => {
                cost[self.rank] = 3;
                if let Some(pair) = self.auxiliary {
                    cost[pair] = 2;
                }
            }
            Combination::Bomb => {
                cost[self.rank] = self.rank.deck_count();
                if let Some(kicker) = self.auxiliary {
                    cost[kicker] += 1;
                }
            }
            Combination::Straight(_) | Combination::DoubleStraight(_) | Combination::TripleStraight(_) => {
                let width = self.combination.run_width().unwrap_or(1);
                for rank in self.run_ranks() {
                    cost[rank] += width;
                }
            }
        }
        cost
    }

    /// Number of cards played.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        match self.combination {
            Combination::Pass => 0,
            Combination::Single => 1,
            Combination::Double => 2,
            Combination::Triple => 3,
            Combination::FullHouse => 5,
            Combination::Bomb => self.rank.deck_count() as u32 + u32::from(self.auxiliary.is_some()),
            Combination::Straight(n) => n as u32,
            Combination::DoubleStraight(n) => 2 * n as u32,
            Combination::TripleStraight(n) => 3 * n as u32,
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::PASS
    }
}

fn repeat(f: &mut std::fmt::Formatter<'_>, rank: Rank, times: u8) -> std::fmt::Result {
    for _ in 0..times {
        write!(f, "{}", rank)?;
    }
    Ok(())
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.combination {
            Combination::Pass => write!(f, "PASS"),
            Combination::Single => repeat(f, self.rank, 1),
            Combination::Double => repeat(f, self.rank, 2),
            Combination::Triple => repeat(f, self.rank, 3),
            Combination::FullHouse => {
                repeat(f, self.rank, 3)?;
                match self.auxiliary {
                    Some(pair) => repeat(f, pair, 2),
                    None => Ok(()),
                }
            }
            Combination::Bomb => {
                repeat(f, self.rank, self.rank.deck_count())?;
                match self.auxiliary {
                    Some(kicker) => repeat(f, kicker, 1),
                    None => Ok(()),
                }
            }
            Combination::Straight(_) | Combination::DoubleStraight(_) | Combination::TripleStraight(_) => {
                let width = self.combination.run_width().unwrap_or(1);
                for rank in self.run_ranks() {
                    repeat(f, rank, width)?;
                }
                Ok(())
            }
        }
    }
}
