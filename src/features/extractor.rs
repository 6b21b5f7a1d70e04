//! Feature extractors over finished games.
//!
//! A game-level extractor yields one value per game. A turn-level extractor
//! yields two values per turn, the seat 0 perspective first, computed from
//! the views as they stood before the turn's move.

use crate::core::Seat;
use crate::moves::{Combination, Move, Rank};
use crate::rules::PartialView;
use crate::training::{GameRecord, TurnRecord};

/// Granularity of an extractor's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureLevel {
    /// One value per game.
    Game,
    /// Two values per turn, one per seat.
    Turn,
}

impl FeatureLevel {
    /// Number of values expected from `record`.
    #[must_use]
    pub fn expected_len(self, record: &GameRecord) -> usize {
        match self {
            FeatureLevel::Game => 1,
            FeatureLevel::Turn => 2 * record.len(),
        }
    }
}

/// Maps a finished game to integer feature values.
pub trait FeatureExtractor: Send + Sync {
    /// Column name.
    fn name(&self) -> String;

    fn level(&self) -> FeatureLevel;

    fn extract(&self, record: &GameRecord) -> Vec<i32>;
}

/// Game-level features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameFeature {
    /// Number of turns, passes included.
    Length,
    /// Index of the winning seat.
    Outcome,
}

impl FeatureExtractor for GameFeature {
    fn name(&self) -> String {
        match self {
            GameFeature::Length => "game_length".to_string(),
            GameFeature::Outcome => "outcome".to_string(),
        }
    }

    fn level(&self) -> FeatureLevel {
        FeatureLevel::Game
    }

    fn extract(&self, record: &GameRecord) -> Vec<i32> {
        let value = match self {
            GameFeature::Length => record.len() as i32,
            GameFeature::Outcome => record.winner().map_or(-1, |seat| seat.index() as i32),
        };
        vec![value]
    }
}

/// Coarse kind of the move on the table, for `last_trick_is_*` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrickKind {
    Single,
    Double,
    Triple,
    FullHouse,
    Bomb,
    SingleStraight,
    DoubleStraight,
    TripleStraight,
}

impl TrickKind {
    pub const ALL: [TrickKind; 8] = [
        TrickKind::Single,
        TrickKind::Double,
        TrickKind::Triple,
        TrickKind::FullHouse,
        TrickKind::Bomb,
        TrickKind::SingleStraight,
        TrickKind::DoubleStraight,
        TrickKind::TripleStraight,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TrickKind::Single => "single",
            TrickKind::Double => "double",
            TrickKind::Triple => "triple",
            TrickKind::FullHouse => "full_house",
            TrickKind::Bomb => "bomb",
            TrickKind::SingleStraight => "single_straight",
            TrickKind::DoubleStraight => "double_straight",
            TrickKind::TripleStraight => "triple_straight",
        }
    }

    /// Whether `mv` is of this kind. A pass matches no kind.
    #[must_use]
    pub fn matches(self, mv: &Move) -> bool {
        matches!(
            (self, mv.combination()),
            (TrickKind::Single, Combination::Single)
                | (TrickKind::Double, Combination::Double)
                | (TrickKind::Triple, Combination::Triple)
                | (TrickKind::FullHouse, Combination::FullHouse)
                | (TrickKind::Bomb, Combination::Bomb)
                | (TrickKind::SingleStraight, Combination::Straight(_))
                | (TrickKind::DoubleStraight, Combination::DoubleStraight(_))
                | (TrickKind::TripleStraight, Combination::TripleStraight(_))
        )
    }
}

/// Turn-level features, each computed once per seat per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnFeature {
    /// 1 if this seat moves this turn.
    NextPlayer,
    /// 1 if this seat went on to win.
    TurnOutcome,
    OpponentHandSize,
    PlayerHandSize,
    /// Cards of one rank held.
    RankCount(Rank),
    /// Cards held at or below a rank.
    RankAtMost(Rank),
    /// Cards held at or above a rank.
    RankAtLeast(Rank),
    /// Highest rank held, -1 with an empty hand.
    HighestRank,
    /// Highest rank held at least twice, -1 if none.
    HighestDouble,
    HasTwo,
    Aces,
    Bombs,
    /// 1 if the mover leads a new trick.
    NewTrick,
    /// Rank of the move on the table, -1 on a new trick.
    TrickRank,
    LastMoveCardCount,
    LastTrickIs(TrickKind),
    /// Moves the opponent might make, seen from the waiting seat. 0 for the
    /// mover's own perspective.
    PossibleMoves,
    PossibleMovesNotBomb,
}

impl TurnFeature {
    fn value(&self, record: &GameRecord, turn: &TurnRecord, seat: Seat) -> i32 {
        let view: &PartialView = &turn.views[seat];
        let hand = view.hand();
        match self {
            TurnFeature::NextPlayer => i32::from(turn.current_player == seat),
            TurnFeature::TurnOutcome => i32::from(record.winner() == Some(seat)),
            TurnFeature::OpponentHandSize => turn.state.hand_size(seat.other()) as i32,
            TurnFeature::PlayerHandSize => turn.state.hand_size(seat) as i32,
            TurnFeature::RankCount(rank) => i32::from(hand[*rank]),
            TurnFeature::RankAtMost(rank) => hand.count_at_most(*rank) as i32,
            TurnFeature::RankAtLeast(rank) => hand.count_at_least(*rank) as i32,
            TurnFeature::HighestRank => hand.highest_with(1).map_or(-1, |r| r.index() as i32),
            TurnFeature::HighestDouble => hand.highest_with(2).map_or(-1, |r| r.index() as i32),
            TurnFeature::HasTwo => i32::from(hand[Rank::TWO] > 0),
            TurnFeature::Aces => i32::from(hand[Rank::ACE]),
            TurnFeature::Bombs => view.bomb_count() as i32,
            TurnFeature::NewTrick => i32::from(view.last_move().is_pass()),
            TurnFeature::TrickRank => view.trick_rank().map_or(-1, |r| r.index() as i32),
            TurnFeature::LastMoveCardCount => view.last_move().card_count() as i32,
            TurnFeature::LastTrickIs(kind) => i32::from(kind.matches(view.last_move())),
            TurnFeature::PossibleMoves if !view.is_my_turn() => view.get_possible_moves().len() as i32,
            TurnFeature::PossibleMovesNotBomb if !view.is_my_turn() => {
                view.get_possible_moves_not_bomb().len() as i32
            }
            TurnFeature::PossibleMoves | TurnFeature::PossibleMovesNotBomb => 0,
        }
    }
}

impl FeatureExtractor for TurnFeature {
    fn name(&self) -> String {
        match self {
            TurnFeature::NextPlayer => "next_player".to_string(),
            TurnFeature::TurnOutcome => "turn_outcome".to_string(),
            TurnFeature::OpponentHandSize => "opponent_hand_size".to_string(),
            TurnFeature::PlayerHandSize => "player_hand_size".to_string(),
            TurnFeature::RankCount(rank) => format!("n_{}", rank.name()),
            TurnFeature::RankAtMost(rank) => format!("n_le_{}", rank.name()),
            TurnFeature::RankAtLeast(rank) => format!("n_ge_{}", rank.name()),
            TurnFeature::HighestRank => "highest_rank".to_string(),
            TurnFeature::HighestDouble => "highest_double".to_string(),
            TurnFeature::HasTwo => "has_two".to_string(),
            TurnFeature::Aces => "n_aces".to_string(),
            TurnFeature::Bombs => "n_bombs".to_string(),
            TurnFeature::NewTrick => "new_trick".to_string(),
            TurnFeature::TrickRank => "trick_rank".to_string(),
            TurnFeature::LastMoveCardCount => "last_move_card_count".to_string(),
            TurnFeature::LastTrickIs(kind) => format!("last_trick_is_{}", kind.name()),
            TurnFeature::PossibleMoves => "possible_moves".to_string(),
            TurnFeature::PossibleMovesNotBomb => "possible_moves_not_bomb".to_string(),
        }
    }

    fn level(&self) -> FeatureLevel {
        FeatureLevel::Turn
    }

    fn extract(&self, record: &GameRecord) -> Vec<i32> {
        record
            .turns()
            .iter()
            .flat_map(|turn| Seat::BOTH.map(|seat| self.value(record, turn, seat)))
            .collect()
    }
}

/// The full feature set: both game features and every turn feature, with
/// per-rank counts and cumulative counts for each rank.
#[must_use]
pub fn standard_features() -> Vec<Box<dyn FeatureExtractor>> {
    let mut features: Vec<Box<dyn FeatureExtractor>> =
        vec![Box::new(GameFeature::Length), Box::new(GameFeature::Outcome)];

    let fixed = [
        TurnFeature::NextPlayer,
        TurnFeature::TurnOutcome,
        TurnFeature::OpponentHandSize,
        TurnFeature::PlayerHandSize,
        TurnFeature::HighestRank,
        TurnFeature::HighestDouble,
        TurnFeature::HasTwo,
        TurnFeature::Aces,
        TurnFeature::Bombs,
        TurnFeature::NewTrick,
        TurnFeature::TrickRank,
        TurnFeature::LastMoveCardCount,
        TurnFeature::PossibleMoves,
        TurnFeature::PossibleMovesNotBomb,
    ];
    features.extend(fixed.into_iter().map(|f| Box::new(f) as Box<dyn FeatureExtractor>));

    for rank in Rank::ALL {
        features.push(Box::new(TurnFeature::RankCount(rank)));
        features.push(Box::new(TurnFeature::RankAtMost(rank)));
        features.push(Box::new(TurnFeature::RankAtLeast(rank)));
    }
    for kind in TrickKind::ALL {
        features.push(Box::new(TurnFeature::LastTrickIs(kind)));
    }
    features
}
