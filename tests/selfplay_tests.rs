//! Integration tests for simulation, records and the parallel coordinator.

use std::sync::Arc;

use big2::core::{GameRng, Seat, SeatMap};
use big2::moves::{Hand, Move};
use big2::players::{GreedyPlayer, Player, PlayerFactory, PlayerKind};
use big2::rules::FirstMover;
use big2::training::{CoordinatorConfig, GameCoordinator, GameRecord, GameSimulator, SimConfig};

fn coordinator(config: CoordinatorConfig) -> GameCoordinator {
    GameCoordinator::new(
        config,
        PlayerKind::Random.factory(),
        PlayerKind::Greedy.factory(),
    )
}

fn encode_all(records: &[GameRecord]) -> Vec<Vec<u8>> {
    records.iter().map(|r| r.to_bytes().unwrap()).collect()
}

/// Passes on every turn, even when leading.
struct AlwaysPass;

impl Player for AlwaysPass {
    fn accept_deal(&mut self, _hand: Hand, _seat: Seat, _leader: Seat) {}

    fn accept_opponent_move(&mut self, _mv: &Move) {}

    fn select_move(&mut self) -> Move {
        Move::PASS
    }

    fn name(&self) -> &'static str {
        "always-pass"
    }
}

struct AlwaysPassFactory;

impl PlayerFactory for AlwaysPassFactory {
    fn create_player(&self, _rng: GameRng) -> Box<dyn Player> {
        Box::new(AlwaysPass)
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_bytes() {
    let config = CoordinatorConfig::new().with_num_games(16).with_base_seed(42);
    let a = coordinator(config.clone()).run_all();
    let b = coordinator(config).run_all();
    assert_eq!(encode_all(&a), encode_all(&b));
}

#[test]
fn test_threads_and_batches_do_not_matter() {
    let base = CoordinatorConfig::new().with_num_games(20).with_base_seed(7);
    let serial = coordinator(base.clone()).run_all();
    let parallel = coordinator(base.with_num_threads(4).with_batch_size(3)).run_all();
    assert_eq!(encode_all(&serial), encode_all(&parallel));
}

#[test]
fn test_different_seeds_differ() {
    let a = coordinator(CoordinatorConfig::new().with_num_games(4).with_base_seed(1)).run_all();
    let b = coordinator(CoordinatorConfig::new().with_num_games(4).with_base_seed(2)).run_all();
    assert_ne!(a, b);
}

#[test]
fn test_game_number_continues_across_batches() {
    let config = CoordinatorConfig::new()
        .with_num_games(6)
        .with_batch_size(4)
        .with_base_seed(100);
    let c = coordinator(config);
    let records = c.run_all();
    assert_eq!(records[5], c.play_game(5));
}

// =============================================================================
// Record shape
// =============================================================================

#[test]
fn test_records_are_well_formed() {
    let config = CoordinatorConfig::new()
        .with_num_games(12)
        .with_num_threads(3)
        .with_base_seed(9);
    for record in coordinator(config).run_all() {
        let winner = record.winner().unwrap();
        assert!(record.final_state().hand(winner).is_empty());
        assert_eq!(record.replay_deal(), *record.initial());

        let turns = record.turns();
        assert!(!turns[0].played.is_pass());
        assert_eq!(turns[0].state, *record.initial());
        for pair in turns.windows(2) {
            assert_eq!(pair[1].current_player, pair[0].current_player.other());
            assert!(!(pair[0].played.is_pass() && pair[1].played.is_pass()));
        }
        for turn in turns {
            assert!(turn.legal_moves.contains(&turn.played));
            assert!(turn
                .legal_moves
                .iter()
                .all(|mv| turn.possible_moves.contains(mv)));
        }
        assert_eq!(turns.last().unwrap().current_player, winner);
    }
}

#[test]
fn test_random_first_mover_varies() {
    let config = CoordinatorConfig::new()
        .with_num_games(24)
        .with_base_seed(3)
        .with_sim(SimConfig::new().with_first_mover(FirstMover::Random));
    let leaders: Vec<Seat> = coordinator(config)
        .run_all()
        .iter()
        .map(|r| r.initial().current_player())
        .collect();
    assert!(leaders.contains(&Seat::FIRST));
    assert!(leaders.contains(&Seat::SECOND));
}

#[test]
fn test_record_bytes_round_trip() {
    let record = coordinator(CoordinatorConfig::new().with_base_seed(12)).play_game(0);
    let bytes = record.to_bytes().unwrap();
    assert_eq!(GameRecord::from_bytes(&bytes).unwrap(), record);
}

#[test]
fn test_record_json_round_trip() {
    let record = coordinator(CoordinatorConfig::new().with_base_seed(13)).play_game(1);
    let json = serde_json::to_string(&record).unwrap();
    let back: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_greedy_mirror_match() {
    let config = CoordinatorConfig::new().with_num_games(4).with_base_seed(21);
    let records = GameCoordinator::new(
        config,
        PlayerKind::Greedy.factory(),
        PlayerKind::Greedy.factory(),
    )
    .run_all();
    for record in &records {
        for turn in record.turns() {
            // Greedy never passes while it has something to play
            let forced = turn.legal_moves.as_slice() == [Move::PASS];
            assert_eq!(turn.played.is_pass(), forced);
        }
    }
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
#[should_panic(expected = "game exceeded 2 turns")]
fn test_turn_cap_is_fatal() {
    let config = CoordinatorConfig::new()
        .with_num_games(4)
        .with_num_threads(2)
        .with_sim(SimConfig::new().with_max_turns(2));
    coordinator(config).run_all();
}

#[test]
#[should_panic(expected = "illegal move PASS over PASS")]
fn test_player_outside_legal_set_is_fatal() {
    let config = CoordinatorConfig::new().with_num_games(1);
    GameCoordinator::new(config, Arc::new(AlwaysPassFactory), PlayerKind::Random.factory())
        .run_all();
}

#[test]
fn test_simulator_with_hand_built_players() {
    let players = SeatMap::from_pair(
        Box::new(GreedyPlayer::new()) as Box<dyn Player>,
        Box::new(GreedyPlayer::new()),
    );
    let record = GameSimulator::new(players, GameRng::new(77), SimConfig::default()).run();
    assert!(record.winner().is_some());
    assert!(record.len() >= 2);
}
