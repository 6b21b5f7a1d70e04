//! Runs one game between two players.
//!
//! The simulator owns the authoritative [`GameState`] and both seats' views.
//! Each turn it asks the mover for a move, checks it against the mover's
//! legal set, records the turn and tells the other seat what was played.

use crate::core::error::fatal;
use crate::core::{EngineError, GameRng, GameRngState, Seat, SeatMap};
use crate::moves::Move;
use crate::players::Player;
use crate::rules::{FirstMover, GameState, PartialView};

use super::record::{GameRecord, TurnRecord};

/// Lifecycle of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimPhase {
    NotStarted,
    Dealt,
    Over,
}

/// Per-game settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Turns after which a game is treated as runaway. Real games end well
    /// before 64 turns.
    pub max_turns: usize,

    /// Who leads the first trick.
    pub first_mover: FirstMover,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_turns: 128,
            first_mover: FirstMover::default(),
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runaway turn cap.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Set who leads the first trick.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }
}

/// One game in progress.
pub struct GameSimulator {
    config: SimConfig,
    rng: GameRng,
    players: SeatMap<Box<dyn Player>>,
    phase: SimPhase,
    deal: Option<(GameRngState, GameState)>,
    state: Option<GameState>,
    views: Option<SeatMap<PartialView>>,
    turns: Vec<TurnRecord>,
}

impl GameSimulator {
    /// Create a simulator. `rng` is the deal stream; players bring their own.
    pub fn new(players: SeatMap<Box<dyn Player>>, rng: GameRng, config: SimConfig) -> Self {
        Self {
            config,
            rng,
            players,
            phase: SimPhase::NotStarted,
            deal: None,
            state: None,
            views: None,
            turns: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// The current position, once dealt.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Turns played so far.
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Deal and hand each player its cards.
    ///
    /// Panics if called twice.
    pub fn initialize(&mut self) {
        assert_eq!(self.phase, SimPhase::NotStarted, "game already dealt");

        let deal = self.rng.state();
        let state = GameState::deal(&mut self.rng, self.config.first_mover);
        let leader = state.current_player();
        for seat in Seat::BOTH {
            self.players[seat].accept_deal(*state.hand(seat), seat, leader);
        }
        log::debug!(
            "dealt {} / {}, {} leads",
            state.hand(Seat::FIRST),
            state.hand(Seat::SECOND),
            leader
        );

        self.views = Some(SeatMap::new(|seat| PartialView::from_game(&state, seat)));
        self.deal = Some((deal, state.clone()));
        self.state = Some(state);
        self.phase = SimPhase::Dealt;
    }

    /// Play one turn and return the move made.
    ///
    /// Panics if the game is not in progress, if the mover returns a move
    /// outside its legal set, or if the turn cap is exceeded.
    pub fn play_turn(&mut self) -> Move {
        assert_eq!(self.phase, SimPhase::Dealt, "no game in progress");
        let (Some(state), Some(views)) = (self.state.as_mut(), self.views.as_mut()) else {
            unreachable!("dealt game without state");
        };
        if self.turns.len() >= self.config.max_turns {
            panic!("game exceeded {} turns", self.config.max_turns);
        }

        let mover = state.current_player();
        let legal_moves = views[mover].get_legal_moves();
        let possible_moves = views[mover.other()].get_possible_moves();

        let played = self.players[mover].select_move();
        if !legal_moves.contains(&played) {
            fatal(EngineError::IllegalMove {
                played,
                last: *state.last_move(),
            });
        }

        self.turns.push(TurnRecord {
            current_player: mover,
            state: state.clone(),
            views: views.clone(),
            legal_moves,
            possible_moves,
            played,
        });

        state.apply_move(&played);
        for seat in Seat::BOTH {
            views[seat].apply_move(&played);
        }
        self.players[mover.other()].accept_opponent_move(&played);
        log::trace!("turn {}: {} plays {}", self.turns.len(), mover, played);

        if state.is_over() {
            self.phase = SimPhase::Over;
            log::debug!("{} wins after {} turns", mover, self.turns.len());
        }
        played
    }

    /// Play the game to the end and return its record.
    pub fn run(mut self) -> GameRecord {
        if self.phase == SimPhase::NotStarted {
            self.initialize();
        }
        while self.phase != SimPhase::Over {
            self.play_turn();
        }
        self.into_record()
    }

    /// The record of a finished game.
    ///
    /// Panics if the game is not over.
    pub fn into_record(self) -> GameRecord {
        assert_eq!(self.phase, SimPhase::Over, "game is not over");
        let (Some((deal, initial)), Some(final_state)) = (self.deal, self.state) else {
            unreachable!("finished game without state");
        };
        GameRecord::new(deal, initial, self.turns, final_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{GreedyPlayer, RandomPlayer};

    fn simulator(seed: u64, config: SimConfig) -> GameSimulator {
        let game = GameRng::new(seed);
        let players = SeatMap::from_pair(
            Box::new(RandomPlayer::new(game.for_context("seat0"))) as Box<dyn Player>,
            Box::new(GreedyPlayer::new()),
        );
        GameSimulator::new(players, game.for_context("deal"), config)
    }

    #[test]
    fn test_sim_config_builder() {
        let config = SimConfig::new()
            .with_max_turns(10)
            .with_first_mover(FirstMover::Random);
        assert_eq!(config.max_turns, 10);
        assert_eq!(config.first_mover, FirstMover::Random);
        assert_eq!(SimConfig::default().max_turns, 128);
    }

    #[test]
    fn test_phases() {
        let mut sim = simulator(42, SimConfig::default());
        assert_eq!(sim.phase(), SimPhase::NotStarted);
        assert!(sim.state().is_none());

        sim.initialize();
        assert_eq!(sim.phase(), SimPhase::Dealt);

        let mv = sim.play_turn();
        assert!(!mv.is_pass());
        assert_eq!(sim.turns().len(), 1);

        while sim.phase() != SimPhase::Over {
            sim.play_turn();
        }
        let record = sim.into_record();
        assert_eq!(record.final_state().winner(), record.winner());
        assert!(record.winner().is_some());
    }

    #[test]
    fn test_turn_records_are_pre_move() {
        let record = simulator(7, SimConfig::default()).run();
        for (i, turn) in record.turns().iter().enumerate() {
            assert_eq!(turn.state.current_player(), turn.current_player);
            assert!(turn.legal_moves.contains(&turn.played));
            for seat in Seat::BOTH {
                assert_eq!(turn.views[seat], PartialView::from_game(&turn.state, seat));
            }
            let next = record
                .turns()
                .get(i + 1)
                .map_or(record.final_state(), |t| &t.state);
            assert_eq!(next.last_move(), &turn.played);
        }
    }

    #[test]
    #[should_panic(expected = "game exceeded 2 turns")]
    fn test_turn_cap() {
        simulator(3, SimConfig::default().with_max_turns(2)).run();
    }

    #[test]
    #[should_panic(expected = "game already dealt")]
    fn test_initialize_twice() {
        let mut sim = simulator(1, SimConfig::default());
        sim.initialize();
        sim.initialize();
    }
}
