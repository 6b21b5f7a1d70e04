//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Big 2 here is strictly heads-up, so a seat is either 0 or 1.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`, used for hands, views and
//! players.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
///
/// Seat indices are 0-based: the first seat is `Seat::new(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Seat 0.
    pub const FIRST: Seat = Seat(0);
    /// Seat 1.
    pub const SECOND: Seat = Seat(1);
    /// Both seats in index order.
    pub const BOTH: [Seat; 2] = [Seat::FIRST, Seat::SECOND];

    /// Create a seat from its index.
    ///
    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 2, "Big 2 is played by exactly two seats");
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use big2::core::Seat;
    ///
    /// assert_eq!(Seat::FIRST.other(), Seat::SECOND);
    /// assert_eq!(Seat::SECOND.other(), Seat::FIRST);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use big2::core::{Seat, SeatMap};
///
/// let mut counts: SeatMap<u32> = SeatMap::new(|_| 16);
/// counts[Seat::SECOND] -= 5;
/// assert_eq!(counts[Seat::FIRST], 16);
/// assert_eq!(counts[Seat::SECOND], 11);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::FIRST), factory(Seat::SECOND)],
        }
    }

    /// Create a SeatMap from the two values in seat order.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::BOTH.into_iter().zip(self.data.iter())
    }

    /// Mutable references to both entries at once, in seat order.
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        (first, second)
    }

    /// Transform every entry.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SeatMap<U> {
        SeatMap {
            data: self.data.map(f),
        }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        let s1 = Seat::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(s0.other(), s1);
        assert_eq!(s1.other().other(), s1);
        assert_eq!(format!("{}", s1), "Seat 1");
    }

    #[test]
    #[should_panic(expected = "exactly two seats")]
    fn test_seat_out_of_range() {
        let _ = Seat::new(2);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        assert_eq!(map[Seat::FIRST], 0);
        assert_eq!(map[Seat::SECOND], 10);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map = SeatMap::from_pair(0, 0);

        map[Seat::FIRST] = 10;
        let (_, second) = map.both_mut();
        *second = 20;

        assert_eq!(map[Seat::FIRST], 10);
        assert_eq!(map[Seat::SECOND], 20);
    }

    #[test]
    fn test_seat_map_iter_and_map() {
        let map = SeatMap::from_pair(1, 2);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::FIRST, &1), (Seat::SECOND, &2)]);

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled, SeatMap::from_pair(2, 4));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map = SeatMap::from_pair(3u8, 7u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
