//! Python bindings for the Big 2 engine.
//!
//! # Quick Start
//!
//! ```python
//! import big2
//!
//! mv = big2.Move.from_id(170)
//! print(mv, mv.id)
//!
//! run = big2.SelfPlay(num_games=1000, num_threads=4, seed=42)
//! columns = run.run()
//! columns["outcome"]        # int32 array, one value per game
//! columns["possible_moves"] # int32 array, two values per turn
//! ```

use pyo3::prelude::*;

mod py_moves;
mod py_self_play;

pub use py_moves::*;
pub use py_self_play::*;

/// big2: Big 2 rules engine and self-play feature generator.
#[pymodule]
fn big2(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PySelfPlay>()?;
    m.add("MOVE_COUNT", crate::moves::MOVE_COUNT)?;
    Ok(())
}
