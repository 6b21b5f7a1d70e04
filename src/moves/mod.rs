//! Cards, hands and moves.
//!
//! - [`Rank`]: the 13 ranks in play order
//! - [`Hand`]: per-rank card counts, used for hands, discard piles and costs
//! - [`Move`] and [`Combination`]: what a player puts on the table
//! - [`MoveCodec`]: the dense `0..MOVE_COUNT` encoding of moves

pub mod codec;
pub mod combination;
pub mod hand;
pub mod rank;

pub use codec::{Band, MoveCatalog, MoveCodec, MoveList, MOVE_COUNT};
pub use combination::{Combination, Move};
pub use hand::Hand;
pub use rank::Rank;
