// nxs-common/src/model/mod.rs
pub mod checksum;
pub mod coordinates;
pub mod report;

pub use checksum::{ChecksumAlgorithm, ChecksumPair};
pub use coordinates::{CoordinateFields, Coordinates};
pub use report::{Change, SyncReport};
