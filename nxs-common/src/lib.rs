// nxs-common/src/lib.rs
pub mod config;
pub mod error;
pub mod model;

// Re-export key types
pub use config::{Config, ConfigOverrides, Credentials};
pub use error::{NxsError, Result};
pub use model::{
    Change, ChecksumAlgorithm, ChecksumPair, CoordinateFields, Coordinates, SyncReport,
};
