//! Error types for the op-near data sources.

mod pipeline;
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineResult, ResetError};

mod sources;
pub use sources::BlobStoreError;
