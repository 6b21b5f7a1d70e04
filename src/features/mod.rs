//! Feature extraction from self-play records.
//!
//! Extractors turn a [`GameRecord`](crate::training::GameRecord) into
//! integer columns. [`FeatureSink`] plugs into the coordinator and collects
//! the columns batch by batch, so records never outlive their batch.

pub mod extractor;
pub mod table;

pub use extractor::{
    standard_features, FeatureExtractor, FeatureLevel, GameFeature, TrickKind, TurnFeature,
};
pub use table::{FeatureSink, FeatureTable};
