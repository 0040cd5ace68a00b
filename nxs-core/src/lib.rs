// nxs-core/src/lib.rs

// Coordinate resolution and repository layout
pub mod location;
pub mod pom;
pub mod request;
pub mod resolver;

// Checksum-driven sync against the repository
pub mod remote;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use request::ArtifactRequest;
pub use resolver::ResolvedArtifact;
pub use sync::{Action, SyncEngine};
