//! Dense move encoding.
//!
//! Every valid move maps to a unique id in `0..MOVE_COUNT`. Ids are laid out
//! in contiguous bands, one per combination kind, and within a band ordered by
//! length and then by primary rank. The layout is a stable interchange format:
//! recorded games and downstream models index moves by these ids.
//!
//! | band              | start | count |
//! |-------------------|------:|------:|
//! | pass              |     0 |     1 |
//! | single            |     1 |    13 |
//! | double            |    14 |    12 |
//! | triple            |    26 |    11 |
//! | full house        |    37 |   132 |
//! | bomb              |   169 |   156 |
//! | straight 5..13    |   325 |    53 |
//! | double straight   |   378 |    56 |
//! | triple straight   |   434 |    38 |

use smallvec::SmallVec;
use std::sync::OnceLock;

use super::combination::{Combination, Move, DOUBLE_STRAIGHT_LENGTHS, STRAIGHT_LENGTHS, TRIPLE_STRAIGHT_LENGTHS};
use super::hand::Hand;
use super::rank::Rank;
use crate::core::EngineError;

/// A list of moves, inline for the common case.
pub type MoveList = SmallVec<[Move; 32]>;

pub const PASS_ID: u16 = 0;
pub const SINGLE_START: u16 = 1;
pub const SINGLE_COUNT: u16 = 13;
pub const DOUBLE_START: u16 = SINGLE_START + SINGLE_COUNT;
pub const DOUBLE_COUNT: u16 = 12;
pub const TRIPLE_START: u16 = DOUBLE_START + DOUBLE_COUNT;
pub const TRIPLE_COUNT: u16 = 11;
pub const FULL_HOUSE_START: u16 = TRIPLE_START + TRIPLE_COUNT;
pub const FULL_HOUSE_COUNT: u16 = 12 * 11;
pub const BOMB_START: u16 = FULL_HOUSE_START + FULL_HOUSE_COUNT;
pub const BOMB_COUNT: u16 = 12 * 13;
pub const STRAIGHT_START: u16 = BOMB_START + BOMB_COUNT;
pub const STRAIGHT_COUNT: u16 = straight_offset(14);
pub const DOUBLE_STRAIGHT_START: u16 = STRAIGHT_START + STRAIGHT_COUNT;
pub const DOUBLE_STRAIGHT_COUNT: u16 = run_offset(9);
pub const TRIPLE_STRAIGHT_START: u16 = DOUBLE_STRAIGHT_START + DOUBLE_STRAIGHT_COUNT;
pub const TRIPLE_STRAIGHT_COUNT: u16 = run_offset(6);

/// Size of the move space.
pub const MOVE_COUNT: usize = (TRIPLE_STRAIGHT_START + TRIPLE_STRAIGHT_COUNT) as usize;

/// Number of distinct tops for a single-card straight of `length`.
pub const fn straight_count(length: u8) -> u16 {
    if length == 13 {
        1
    } else {
        15 - length as u16
    }
}

/// Ids used by straights shorter than `length`.
pub const fn straight_offset(length: u8) -> u16 {
    let mut total = 0;
    let mut n = 5;
    while n < length {
        total += straight_count(n);
        n += 1;
    }
    total
}

/// Ids used by pair or triple runs shorter than `length`. Both run families
/// have `13 - n` tops for length `n`.
pub const fn run_offset(length: u8) -> u16 {
    let mut total = 0;
    let mut n = 2;
    while n < length {
        total += 13 - n as u16;
        n += 1;
    }
    total
}

/// One contiguous id range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub name: &'static str,
    pub start: u16,
    pub count: u16,
}

impl Band {
    /// Whether `id` falls inside this band.
    #[must_use]
    pub const fn contains(&self, id: u16) -> bool {
        id >= self.start && id < self.start + self.count
    }
}

/// Encoder and decoder between moves and dense ids.
pub struct MoveCodec;

impl MoveCodec {
    /// Bands in id order.
    pub const BANDS: [Band; 9] = [
        Band { name: "pass", start: PASS_ID, count: 1 },
        Band { name: "single", start: SINGLE_START, count: SINGLE_COUNT },
        Band { name: "double", start: DOUBLE_START, count: DOUBLE_COUNT },
        Band { name: "triple", start: TRIPLE_START, count: TRIPLE_COUNT },
        Band { name: "full_house", start: FULL_HOUSE_START, count: FULL_HOUSE_COUNT },
        Band { name: "bomb", start: BOMB_START, count: BOMB_COUNT },
        Band { name: "straight", start: STRAIGHT_START, count: STRAIGHT_COUNT },
        Band { name: "double_straight", start: DOUBLE_STRAIGHT_START, count: DOUBLE_STRAIGHT_COUNT },
        Band { name: "triple_straight", start: TRIPLE_STRAIGHT_START, count: TRIPLE_STRAIGHT_COUNT },
    ];

    /// Encode a move to its id.
    ///
    /// Panics if the move is not valid; every move the engine produces is.
    #[must_use]
    pub fn encode(mv: &Move) -> u16 {
        assert!(mv.is_valid(), "cannot encode invalid move {mv:?}");
        let rank = mv.rank().index() as u16;
        match mv.combination() {
            Combination::Pass => PASS_ID,
            Combination::Single => SINGLE_START + rank,
            Combination::Double => DOUBLE_START + rank,
            Combination::Triple => TRIPLE_START + rank,
            Combination::FullHouse => {
                let pair = mv.auxiliary().map_or(0, |r| r.index() as u16);
                let slot = pair - u16::from(pair > rank);
                FULL_HOUSE_START + 11 * rank + slot
            }
            Combination::Bomb => {
                let slot = match mv.auxiliary() {
                    None => 0,
                    Some(kicker) => {
                        let kicker = kicker.index() as u16;
                        1 + kicker - u16::from(kicker > rank)
                    }
                };
                BOMB_START + 13 * rank + slot
            }
            Combination::Straight(n) => {
                let min = Move::min_run_top(Combination::Straight(n)).unwrap_or(0) as u16;
                STRAIGHT_START + straight_offset(n) + (rank - min)
            }
            Combination::DoubleStraight(n) => {
                DOUBLE_STRAIGHT_START + run_offset(n) + (rank - (n as u16 - 1))
            }
            Combination::TripleStraight(n) => {
                TRIPLE_STRAIGHT_START + run_offset(n) + (rank - (n as u16 - 1))
            }
        }
    }

    /// Decode an id back to its move.
    pub fn decode(id: u16) -> Result<Move, EngineError> {
        let rank = |i: u16| Rank::new(i as u8);
        let mv = if id == PASS_ID {
            Move::PASS
        } else if id < DOUBLE_START {
            Move::single(rank(id - SINGLE_START))
        } else if id < TRIPLE_START {
            Move::double(rank(id - DOUBLE_START))
        } else if id < FULL_HOUSE_START {
            Move::triple(rank(id - TRIPLE_START))
        } else if id < BOMB_START {
            let offset = id - FULL_HOUSE_START;
            let (primary, slot) = (offset / 11, offset % 11);
            let pair = slot + u16::from(slot >= primary);
            Move::full_house(rank(primary), rank(pair))
        } else if id < STRAIGHT_START {
            let offset = id - BOMB_START;
            let (primary, slot) = (offset / 13, offset % 13);
            let kicker = match slot {
                0 => None,
                s => {
                    let k = s - 1;
                    Some(rank(k + u16::from(k >= primary)))
                }
            };
            Move::bomb(rank(primary), kicker)
        } else if id < DOUBLE_STRAIGHT_START {
            let offset = id - STRAIGHT_START;
            let length = STRAIGHT_LENGTHS
                .rev()
                .find(|&n| straight_offset(n) <= offset)
                .unwrap_or(5);
            let min = Move::min_run_top(Combination::Straight(length)).unwrap_or(0) as u16;
            Move::straight(length, rank(min + offset - straight_offset(length)))
        } else if id < TRIPLE_STRAIGHT_START {
            let offset = id - DOUBLE_STRAIGHT_START;
            let length = DOUBLE_STRAIGHT_LENGTHS
                .rev()
                .find(|&n| run_offset(n) <= offset)
                .unwrap_or(2);
            Move::double_straight(length, rank(length as u16 - 1 + offset - run_offset(length)))
        } else if (id as usize) < MOVE_COUNT {
            let offset = id - TRIPLE_STRAIGHT_START;
            let length = TRIPLE_STRAIGHT_LENGTHS
                .rev()
                .find(|&n| run_offset(n) <= offset)
                .unwrap_or(2);
            Move::triple_straight(length, rank(length as u16 - 1 + offset - run_offset(length)))
        } else {
            return Err(EngineError::InvalidMoveEncoding(id));
        };
        Ok(mv)
    }

    /// Band containing `id`, if any.
    #[must_use]
    pub fn band_of(id: u16) -> Option<&'static Band> {
        Self::BANDS.iter().find(|band| band.contains(id))
    }

    /// The shared table of every move and its card cost, indexed by id.
    pub fn catalog() -> &'static MoveCatalog {
        static CATALOG: OnceLock<MoveCatalog> = OnceLock::new();
        CATALOG.get_or_init(MoveCatalog::build)
    }
}

/// Every move with its card cost, indexed by id.
///
/// Built once on first use and shared read-only across threads.
#[derive(Debug)]
pub struct MoveCatalog {
    moves: Vec<Move>,
    costs: Vec<Hand>,
}

impl MoveCatalog {
    fn build() -> Self {
        let moves: Vec<Move> = (0..MOVE_COUNT as u16)
            .filter_map(|id| MoveCodec::decode(id).ok())
            .collect();
        let costs = moves.iter().map(Move::cost).collect();
        Self { moves, costs }
    }

    /// Number of entries; always `MOVE_COUNT`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u16) -> Option<&Move> {
        self.moves.get(id as usize)
    }

    #[must_use]
    pub fn cost(&self, id: u16) -> Option<&Hand> {
        self.costs.get(id as usize)
    }

    /// Iterate `(id, move, cost)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Move, &Hand)> + '_ {
        self.moves
            .iter()
            .zip(self.costs.iter())
            .enumerate()
            .map(|(id, (mv, cost))| (id as u16, mv, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_layout() {
        assert_eq!(MOVE_COUNT, 472);
        assert_eq!(FULL_HOUSE_START, 37);
        assert_eq!(BOMB_START, 169);
        assert_eq!(STRAIGHT_START, 325);
        assert_eq!(STRAIGHT_COUNT, 53);
        assert_eq!(DOUBLE_STRAIGHT_START, 378);
        assert_eq!(DOUBLE_STRAIGHT_COUNT, 56);
        assert_eq!(TRIPLE_STRAIGHT_START, 434);
        assert_eq!(TRIPLE_STRAIGHT_COUNT, 38);

        let mut next = 0;
        for band in MoveCodec::BANDS {
            assert_eq!(band.start, next, "band {} is not contiguous", band.name);
            next += band.count;
        }
        assert_eq!(next as usize, MOVE_COUNT);
    }

    #[test]
    fn test_known_ids() {
        assert_eq!(MoveCodec::encode(&Move::PASS), 0);
        assert_eq!(MoveCodec::encode(&Move::single(Rank::THREE)), 1);
        assert_eq!(MoveCodec::encode(&Move::single(Rank::TWO)), 13);
        assert_eq!(MoveCodec::encode(&Move::double(Rank::THREE)), 14);
        assert_eq!(MoveCodec::encode(&Move::full_house(Rank::THREE, Rank::FOUR)), 37);
        assert_eq!(MoveCodec::encode(&Move::full_house(Rank::FOUR, Rank::THREE)), 48);
        assert_eq!(MoveCodec::encode(&Move::bomb(Rank::THREE, None)), 169);
        assert_eq!(MoveCodec::encode(&Move::bomb(Rank::THREE, Some(Rank::FOUR))), 170);
        assert_eq!(MoveCodec::encode(&Move::bomb(Rank::ACE, Some(Rank::TWO))), 324);
        assert_eq!(MoveCodec::encode(&Move::straight(5, Rank::SIX)), 325);
        assert_eq!(MoveCodec::encode(&Move::straight(13, Rank::TWO)), 377);
        assert_eq!(MoveCodec::encode(&Move::double_straight(2, Rank::FOUR)), 378);
        assert_eq!(MoveCodec::encode(&Move::triple_straight(5, Rank::ACE)), 471);
    }

    #[test]
    fn test_catalog_matches_codec() {
        let catalog = MoveCodec::catalog();
        assert_eq!(catalog.len(), MOVE_COUNT);
        for (id, mv, cost) in catalog.iter() {
            assert!(mv.is_valid());
            assert_eq!(MoveCodec::encode(mv), id);
            assert_eq!(*cost, mv.cost());
        }
    }

    #[test]
    fn test_decode_out_of_range() {
        assert!(matches!(
            MoveCodec::decode(472),
            Err(EngineError::InvalidMoveEncoding(472))
        ));
        assert!(MoveCodec::decode(u16::MAX).is_err());
    }

    #[test]
    fn test_band_of() {
        assert_eq!(MoveCodec::band_of(0).map(|b| b.name), Some("pass"));
        assert_eq!(MoveCodec::band_of(200).map(|b| b.name), Some("bomb"));
        assert_eq!(MoveCodec::band_of(471).map(|b| b.name), Some("triple_straight"));
        assert_eq!(MoveCodec::band_of(472), None);
    }
}
