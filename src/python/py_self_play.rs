//! Self-play bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::features::FeatureSink;
use crate::players::PlayerKind;
use crate::training::{CoordinatorConfig, GameCoordinator, SimConfig};

/// A configured self-play run.
#[pyclass(name = "SelfPlay")]
#[derive(Clone)]
pub struct PySelfPlay {
    config: CoordinatorConfig,
    players: (PlayerKind, PlayerKind),
}

#[pymethods]
impl PySelfPlay {
    /// Configure a run.
    ///
    /// # Arguments
    /// - num_games: Games to play
    /// - num_threads: Worker threads (default: 1)
    /// - seed: Base seed; game `n` is seeded from `seed + n` (default: 0)
    /// - player0, player1: `"random"` or `"greedy"`
    /// - batch_size: Games per batch (default: 200000)
    /// - max_turns: Runaway turn cap per game (default: 128)
    #[new]
    #[pyo3(signature = (
        num_games,
        num_threads = 1,
        seed = 0,
        player0 = "random",
        player1 = "greedy",
        batch_size = 200_000,
        max_turns = 128
    ))]
    fn new(
        num_games: usize,
        num_threads: usize,
        seed: u64,
        player0: &str,
        player1: &str,
        batch_size: usize,
        max_turns: usize,
    ) -> PyResult<Self> {
        let parse = |name: &str| {
            name.parse::<PlayerKind>()
                .map_err(|err| PyValueError::new_err(err.to_string()))
        };
        Ok(Self {
            config: CoordinatorConfig::new()
                .with_num_games(num_games)
                .with_num_threads(num_threads)
                .with_base_seed(seed)
                .with_batch_size(batch_size)
                .with_sim(SimConfig::new().with_max_turns(max_turns)),
            players: (parse(player0)?, parse(player1)?),
        })
    }

    #[getter]
    fn num_games(&self) -> usize {
        self.config.num_games
    }

    #[getter]
    fn num_threads(&self) -> usize {
        self.config.num_threads
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.config.base_seed
    }

    /// Play every game and return the standard feature columns.
    ///
    /// Game-level columns hold one value per game; turn-level columns hold
    /// two per turn, seat 0 first. The GIL is released while games run.
    fn run<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let coordinator = GameCoordinator::new(
            self.config.clone(),
            self.players.0.factory(),
            self.players.1.factory(),
        );
        let mut sink = FeatureSink::standard();
        py.allow_threads(|| coordinator.run(&mut sink))
            .map_err(|err| PyRuntimeError::new_err(err.to_string()))?;

        let (games, turns) = sink.into_tables();
        let columns = PyDict::new_bound(py);
        for (name, values) in games.into_columns().into_iter().chain(turns.into_columns()) {
            columns.set_item(name, PyArray1::from_vec_bound(py, values))?;
        }
        Ok(columns)
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlay(games={}, threads={}, seed={}, players=({:?}, {:?}))",
            self.config.num_games,
            self.config.num_threads,
            self.config.base_seed,
            self.players.0,
            self.players.1
        )
    }
}
