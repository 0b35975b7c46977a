#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]

pub mod block;
pub use block::{BlockID, BlockInfo};

pub mod frame;
pub use frame::{FrameRef, FrameRefError, FRAME_REF_SIZE};

pub mod blob;
pub use blob::DaBlob;

pub mod da_config;
pub use da_config::{DaConfig, Namespace, NamespaceError};

pub mod rollup_config;
pub use rollup_config::RollupConfig;

/// The prelude exports common types.
pub mod prelude {
    pub use crate::{
        block::{BlockID, BlockInfo},
        blob::DaBlob,
        da_config::{DaConfig, Namespace},
        frame::{FrameRef, FrameRefError},
        rollup_config::RollupConfig,
    };
}
