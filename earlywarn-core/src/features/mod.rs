//! Features Module - Classifier input derivation
//!
//! Maps a sanitized `Reading` onto the fixed column order the classifier
//! was trained with. The layout module is the single source of truth for
//! that order.

pub mod engineer;
pub mod layout;
pub mod vector;

// Re-export common types
pub use engineer::{engineer, EngineeredReading};
pub use layout::{feature_index, feature_name, FEATURE_COLUMNS, FEATURE_COUNT};
pub use vector::FeatureVector;
