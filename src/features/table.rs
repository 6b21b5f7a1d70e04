//! Columnar feature tables and the sink that fills them.

use rustc_hash::FxHashMap;
use std::error::Error;

use super::extractor::{standard_features, FeatureExtractor, FeatureLevel};
use crate::core::EngineError;
use crate::training::{GameRecord, RecordSink};

/// Named `i32` columns of equal length, all at one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureTable {
    level: FeatureLevel,
    names: Vec<String>,
    index: FxHashMap<String, usize>,
    columns: Vec<Vec<i32>>,
}

impl FeatureTable {
    /// Empty table with one column per extractor at `level`.
    #[must_use]
    pub fn new(level: FeatureLevel, extractors: &[Box<dyn FeatureExtractor>]) -> Self {
        let names: Vec<String> = extractors
            .iter()
            .filter(|e| e.level() == level)
            .map(|e| e.name())
            .collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let columns = vec![Vec::new(); names.len()];
        Self {
            level,
            names,
            index,
            columns,
        }
    }

    #[must_use]
    pub fn level(&self) -> FeatureLevel {
        self.level
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[i32]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    /// Extract one record into new rows.
    ///
    /// Fails without adding anything if an extractor returns the wrong
    /// number of values.
    pub fn append(
        &mut self,
        extractors: &[Box<dyn FeatureExtractor>],
        record: &GameRecord,
    ) -> Result<(), EngineError> {
        let expected = self.level.expected_len(record);
        let mut staged = Vec::with_capacity(self.names.len());
        for extractor in extractors.iter().filter(|e| e.level() == self.level) {
            let values = extractor.extract(record);
            if values.len() != expected {
                return Err(EngineError::FeatureShape {
                    name: extractor.name(),
                    expected,
                    actual: values.len(),
                });
            }
            staged.push(values);
        }
        for (column, values) in self.columns.iter_mut().zip(staged) {
            column.extend(values);
        }
        Ok(())
    }

    /// Consume the table into `(name, column)` pairs.
    #[must_use]
    pub fn into_columns(self) -> Vec<(String, Vec<i32>)> {
        self.names.into_iter().zip(self.columns).collect()
    }
}

/// A [`RecordSink`] that turns each batch into feature rows and drops the
/// records.
pub struct FeatureSink {
    extractors: Vec<Box<dyn FeatureExtractor>>,
    games: FeatureTable,
    turns: FeatureTable,
}

impl FeatureSink {
    #[must_use]
    pub fn new(extractors: Vec<Box<dyn FeatureExtractor>>) -> Self {
        Self {
            games: FeatureTable::new(FeatureLevel::Game, &extractors),
            turns: FeatureTable::new(FeatureLevel::Turn, &extractors),
            extractors,
        }
    }

    /// Sink for [`standard_features`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_features())
    }

    /// Extract one record.
    pub fn add_record(&mut self, record: &GameRecord) -> Result<(), EngineError> {
        self.games.append(&self.extractors, record)?;
        self.turns.append(&self.extractors, record)
    }

    #[must_use]
    pub fn games(&self) -> &FeatureTable {
        &self.games
    }

    #[must_use]
    pub fn turns(&self) -> &FeatureTable {
        &self.turns
    }

    /// The game table and the turn table.
    #[must_use]
    pub fn into_tables(self) -> (FeatureTable, FeatureTable) {
        (self.games, self.turns)
    }
}

impl RecordSink for FeatureSink {
    fn accept_batch(
        &mut self,
        batch_id: usize,
        records: Vec<GameRecord>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        for record in &records {
            self.add_record(record)?;
        }
        log::debug!(
            "batch {batch_id}: {} game rows, {} turn rows",
            self.games.rows(),
            self.turns.rows()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{GameFeature, TurnFeature};

    /// Claims turn level but emits one value per game.
    struct Broken;

    impl FeatureExtractor for Broken {
        fn name(&self) -> String {
            "broken".to_string()
        }

        fn level(&self) -> FeatureLevel {
            FeatureLevel::Turn
        }

        fn extract(&self, _record: &GameRecord) -> Vec<i32> {
            vec![0]
        }
    }

    fn record() -> GameRecord {
        use crate::players::{GreedyPlayerFactory, RandomPlayerFactory};
        use crate::training::{CoordinatorConfig, GameCoordinator};
        use std::sync::Arc;

        let config = CoordinatorConfig::new().with_num_games(1).with_base_seed(17);
        GameCoordinator::new(config, Arc::new(GreedyPlayerFactory), Arc::new(RandomPlayerFactory))
            .play_game(0)
    }

    #[test]
    fn test_sink_fills_both_levels() {
        let record = record();
        let mut sink = FeatureSink::new(vec![
            Box::new(GameFeature::Length),
            Box::new(TurnFeature::NextPlayer),
            Box::new(TurnFeature::Aces),
        ]);
        sink.add_record(&record).unwrap();

        assert_eq!(sink.games().names(), &["game_length".to_string()]);
        assert_eq!(sink.games().column("game_length"), Some(&[record.len() as i32][..]));
        assert_eq!(sink.turns().rows(), 2 * record.len());
        assert_eq!(sink.turns().column("next_player").map(|c| c[..2].to_vec()), Some(vec![1, 0]));
        assert!(sink.turns().column("missing").is_none());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let record = record();
        let mut sink = FeatureSink::new(vec![Box::new(TurnFeature::HasTwo), Box::new(Broken)]);
        let err = sink.add_record(&record).unwrap_err();

        assert!(matches!(
            err,
            EngineError::FeatureShape { ref name, expected, actual: 1 } if name == "broken" && expected == 2 * record.len()
        ));
        // Nothing half-written
        assert_eq!(sink.turns().rows(), 0);
    }

    #[test]
    fn test_into_columns_keeps_order() {
        let table = FeatureTable::new(
            FeatureLevel::Turn,
            &[Box::new(TurnFeature::Bombs) as Box<dyn FeatureExtractor>, Box::new(TurnFeature::HasTwo)],
        );
        let names: Vec<String> = table.into_columns().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["n_bombs", "has_two"]);
    }
}
