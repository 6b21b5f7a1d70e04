//! Big 2 rules: trick following, the full game state and per-seat views.
//!
//! - [`follows`]: whether one move may be played over another
//! - [`GameState`]: both hands, used by the simulator
//! - [`PartialView`]: what one seat knows, used by players and features

pub mod state;
pub mod trick;
pub mod view;

pub use state::{FirstMover, GameState, HAND_SIZE};
pub use trick::follows;
pub use view::PartialView;
