//! Card ranks in play order.
//!
//! Ranks are stored as indices 0..=12 for 3,4,…,10,J,Q,K,A,2. Index order is
//! play order: the 2 beats everything, the Ace beats everything but the 2.
//! The 48-card deck holds four of each rank from 3 to K, three Aces and a
//! single 2.

use serde::{Deserialize, Serialize};

/// A card rank, 0 (the 3) through 12 (the 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const THREE: Rank = Rank(0);
    pub const FOUR: Rank = Rank(1);
    pub const FIVE: Rank = Rank(2);
    pub const SIX: Rank = Rank(3);
    pub const SEVEN: Rank = Rank(4);
    pub const EIGHT: Rank = Rank(5);
    pub const NINE: Rank = Rank(6);
    pub const TEN: Rank = Rank(7);
    pub const JACK: Rank = Rank(8);
    pub const QUEEN: Rank = Rank(9);
    pub const KING: Rank = Rank(10);
    pub const ACE: Rank = Rank(11);
    pub const TWO: Rank = Rank(12);

    /// Number of distinct ranks.
    pub const COUNT: usize = 13;

    /// Every rank in ascending play order.
    pub const ALL: [Rank; Rank::COUNT] = [
        Rank(0),
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
    ];

    const SYMBOLS: [char; Rank::COUNT] = ['3', '4', '5', '6', '7', '8', '9', '0', 'J', 'Q', 'K', 'A', '2'];

    const NAMES: [&'static str; Rank::COUNT] = [
        "three", "four", "five", "six", "seven", "eight", "nine", "ten", "jack", "queen", "king",
        "ace", "two",
    ];

    /// Create a rank from its play-order index.
    ///
    /// Panics if `index > 12`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < Rank::COUNT as u8, "rank index out of range");
        Self(index)
    }

    /// Create a rank from its play-order index, if in range.
    #[must_use]
    pub const fn try_new(index: u8) -> Option<Self> {
        if index < Rank::COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a rank from its face value, with J=11, Q=12, K=13, A=14, 2=15.
    ///
    /// ```
    /// use big2::moves::Rank;
    ///
    /// assert_eq!(Rank::from_face(3), Some(Rank::THREE));
    /// assert_eq!(Rank::from_face(14), Some(Rank::ACE));
    /// assert_eq!(Rank::from_face(15), Some(Rank::TWO));
    /// assert_eq!(Rank::from_face(2), None);
    /// ```
    #[must_use]
    pub const fn from_face(face: u8) -> Option<Self> {
        if face >= 3 && face <= 15 {
            Some(Self(face - 3))
        } else {
            None
        }
    }

    /// The play-order index, 0..=12.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The face value, 3..=15.
    #[must_use]
    pub const fn face(self) -> u8 {
        self.0 + 3
    }

    /// How many copies of this rank the deck holds.
    #[must_use]
    pub const fn deck_count(self) -> u8 {
        match self.0 {
            11 => 3,
            12 => 1,
            _ => 4,
        }
    }

    /// One-character symbol; the ten prints as `0`.
    #[must_use]
    pub const fn symbol(self) -> char {
        Self::SYMBOLS[self.0 as usize]
    }

    /// Lower-case English name, used in feature column names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.0 as usize]
    }

    /// The next rank up, if any.
    #[must_use]
    pub const fn succ(self) -> Option<Self> {
        Self::try_new(self.0 + 1)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
