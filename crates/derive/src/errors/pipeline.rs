//! This module contains the errors returned to the derivation pipeline by a data source.

use alloc::string::String;
use alloy_primitives::B256;
use op_near_primitives::FrameRefError;

/// A result type for the derivation pipeline stages.
pub type PipelineResult<T> = Result<T, PipelineErrorKind>;

/// A top level filter for [PipelineError] that sorts by severity.
#[derive(derive_more::Display, Debug, PartialEq, Eq)]
pub enum PipelineErrorKind {
    /// A temporary error. The same call may succeed if retried.
    #[display("Temporary error: {_0}")]
    Temporary(PipelineError),
    /// A critical error.
    #[display("Critical error: {_0}")]
    Critical(PipelineError),
    /// A reset error. The pipeline must re-derive from an earlier point.
    #[display("Pipeline reset: {_0}")]
    Reset(ResetError),
}

impl From<ResetError> for PipelineErrorKind {
    fn from(err: ResetError) -> Self {
        Self::Reset(err)
    }
}

impl From<FrameRefError> for PipelineErrorKind {
    fn from(err: FrameRefError) -> Self {
        PipelineError::BadEncoding(err).crit()
    }
}

impl core::error::Error for PipelineErrorKind {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Temporary(err) => Some(err),
            Self::Critical(err) => Some(err),
            Self::Reset(err) => Some(err),
        }
    }
}

impl PipelineErrorKind {
    /// Returns `true` if the error marks the end of the data source.
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Temporary(PipelineError::Eof))
    }
}

/// An error encountered while reading from a data source.
#[derive(derive_more::Display, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// The data source has no more data for the block.
    #[display("EOF")]
    Eof,
    /// A frame reference in batcher calldata could not be decoded.
    #[display("Decode error: {_0}")]
    BadEncoding(FrameRefError),
    /// Provider error variant.
    #[display("Provider error: {_0}")]
    Provider(String),
}

impl From<FrameRefError> for PipelineError {
    fn from(err: FrameRefError) -> Self {
        Self::BadEncoding(err)
    }
}

impl core::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::BadEncoding(err) => Some(err),
            _ => None,
        }
    }
}

impl PipelineError {
    /// Wrap [PipelineError] as a [PipelineErrorKind::Critical].
    pub const fn crit(self) -> PipelineErrorKind {
        PipelineErrorKind::Critical(self)
    }

    /// Wrap [PipelineError] as a [PipelineErrorKind::Temporary].
    pub const fn temp(self) -> PipelineErrorKind {
        PipelineErrorKind::Temporary(self)
    }
}

/// A reset error
#[derive(derive_more::Display, Clone, Debug, Eq, PartialEq)]
pub enum ResetError {
    /// The L1 block is unknown to the chain provider.
    #[display("L1 block not found: {_0}")]
    BlockNotFound(B256),
}

impl core::error::Error for ResetError {}

impl ResetError {
    /// Wrap [ResetError] as a [PipelineErrorKind::Reset].
    pub const fn reset(self) -> PipelineErrorKind {
        PipelineErrorKind::Reset(self)
    }
}
