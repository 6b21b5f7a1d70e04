//! Parallel self-play across worker threads.
//!
//! ## Scheduling
//!
//! A batch of games is shared by `num_threads` scoped OS threads. Workers
//! claim game indices from one atomic counter, simulate each game
//! synchronously and keep records in a private buffer. After the join the
//! buffers are merged in game order.
//!
//! ## Seeding
//!
//! Game `n` of a run (counted across batches) draws every random choice from
//! `GameRng::for_game(base_seed, n)`: a `"deal"` stream for the shuffle and
//! one stream per seat for the players. Results therefore do not depend on
//! the thread count, the batch size or which worker claimed which game.

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::core::{EngineError, GameRng, Seat, SeatMap};
use crate::players::PlayerFactory;

use super::record::GameRecord;
use super::simulator::{GameSimulator, SimConfig};

/// Receives finished batches, e.g. to extract features or write them out.
pub trait RecordSink {
    fn accept_batch(
        &mut self,
        batch_id: usize,
        records: Vec<GameRecord>,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

impl RecordSink for Vec<GameRecord> {
    fn accept_batch(
        &mut self,
        _batch_id: usize,
        records: Vec<GameRecord>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.extend(records);
        Ok(())
    }
}

/// Configuration for a self-play run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Total games to play.
    pub num_games: usize,

    /// Worker threads per batch.
    pub num_threads: usize,

    /// Seed for the whole run.
    pub base_seed: u64,

    /// Games per batch handed to the sink. Bounds peak memory.
    pub batch_size: usize,

    /// Per-game settings.
    pub sim: SimConfig,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            num_games: 1000,
            num_threads: 1,
            base_seed: 0,
            batch_size: 200_000,
            sim: SimConfig::default(),
        }
    }
}

impl CoordinatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_games(mut self, games: usize) -> Self {
        self.num_games = games;
        self
    }

    /// Set the worker count; zero is treated as one.
    pub fn with_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads.max(1);
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Set the batch size; zero is treated as one.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    pub fn with_sim(mut self, sim: SimConfig) -> Self {
        self.sim = sim;
        self
    }

    /// `(batch_id, games)` for every batch of the run.
    fn batches(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.batch_size.max(1);
        let total = self.num_games;
        (0..total.div_ceil(size)).map(move |batch| (batch, size.min(total - batch * size)))
    }
}

/// Plays many games in parallel.
pub struct GameCoordinator {
    config: CoordinatorConfig,
    factories: SeatMap<Arc<dyn PlayerFactory>>,
}

impl GameCoordinator {
    /// Create a coordinator seating `first` in seat 0 and `second` in seat 1.
    pub fn new(
        config: CoordinatorConfig,
        first: Arc<dyn PlayerFactory>,
        second: Arc<dyn PlayerFactory>,
    ) -> Self {
        Self {
            config,
            factories: SeatMap::from_pair(first, second),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Play game number `game_number` of the run.
    pub fn play_game(&self, game_number: u64) -> GameRecord {
        let game = GameRng::for_game(self.config.base_seed, game_number);
        let players = SeatMap::new(|seat: Seat| {
            let context = if seat == Seat::FIRST { "seat0" } else { "seat1" };
            self.factories[seat].create_player(game.for_context(context))
        });
        GameSimulator::new(players, game.for_context("deal"), self.config.sim.clone()).run()
    }

    /// Play one batch of `games` games and return their records in game order.
    ///
    /// A panic in any worker is re-raised here once all workers have stopped.
    pub fn run_batch(&self, batch_id: usize, games: usize) -> Vec<GameRecord> {
        let first = (batch_id * self.config.batch_size) as u64;
        let threads = self.config.num_threads.max(1).min(games.max(1));
        let next = AtomicUsize::new(0);

        let mut indexed: Vec<(usize, GameRecord)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let next = &next;
                    scope.spawn(move || {
                        let mut buffer = Vec::new();
                        loop {
                            let index = next.fetch_add(1, Ordering::Relaxed);
                            if index >= games {
                                break;
                            }
                            buffer.push((index, self.play_game(first + index as u64)));
                        }
                        buffer
                    })
                })
                .collect();

            let mut merged = Vec::with_capacity(games);
            let mut failure = None;
            for handle in handles {
                match handle.join() {
                    Ok(buffer) => merged.extend(buffer),
                    Err(payload) => failure = failure.or(Some(payload)),
                }
            }
            if let Some(payload) = failure {
                std::panic::resume_unwind(payload);
            }
            merged
        });

        indexed.sort_unstable_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, record)| record).collect()
    }

    /// Play the whole run, handing each batch to `sink`.
    ///
    /// Returns the number of games played. Stops at the first batch the sink
    /// rejects.
    pub fn run(&self, sink: &mut dyn RecordSink) -> Result<usize, EngineError> {
        let mut played = 0;
        for (batch_id, games) in self.config.batches() {
            log::info!(
                "batch {batch_id}: {games} games on {} threads",
                self.config.num_threads
            );
            let started = Instant::now();
            let records = self.run_batch(batch_id, games);
            let turns: usize = records.iter().map(GameRecord::len).sum();
            log::info!(
                "batch {batch_id}: done in {:.2?} ({turns} turns)",
                started.elapsed()
            );

            sink.accept_batch(batch_id, records)
                .map_err(|source| EngineError::Export {
                    batch: batch_id,
                    source,
                })?;
            played += games;
        }
        log::info!("played {played} games");
        Ok(played)
    }

    /// Play the whole run and keep every record in memory.
    pub fn run_all(&self) -> Vec<GameRecord> {
        self.config
            .batches()
            .flat_map(|(batch_id, games)| self.run_batch(batch_id, games))
            .collect()
    }
}
