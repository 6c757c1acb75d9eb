//! Model Module - the pre-trained pipeline artifact
//!
//! Loading, schema extraction and the two pipeline stages.
//! The prediction logic built on top lives in `crate::prediction`.

pub mod artifact;
pub mod classifier;
pub mod scaler;
pub mod schema;

#[cfg(test)]
pub mod testing;

// Re-export common types
pub use artifact::{load_pipeline, ModelHandle, SharedModel};
pub use classifier::{class_index, BinaryClassifier};
pub use schema::FeatureSchema;
