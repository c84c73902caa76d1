//! Errors
//!
//! Custom error types used throughout the `canopy` crate.
use thiserror::Error;

/// Errors that can occur when inducing or querying a decision tree.
#[derive(Debug, Error)]
pub enum CanopyError {
    /// Feature matrix and target have a different number of samples.
    #[error("The feature matrix has {0} rows but the target has {1} values.")]
    ShapeMismatch(usize, usize),
    /// Cardinality array length does not match the feature count.
    #[error("The cardinality array declares {0} features but the data has {1}.")]
    CardinalityMismatch(usize, usize),
    /// An observed category code is outside the declared range for a feature.
    #[error("Feature {0} contains category code {1}, but only {2} categories are declared.")]
    CardinalityViolation(usize, u16, u16),
    /// No samples were supplied.
    #[error("At least one sample is required to induce a tree.")]
    EmptyDataset,
    /// A row passed for prediction has no value for a split feature.
    #[error("A row with {0} features has no value for split feature {1}.")]
    MissingFeature(usize, usize),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
}
