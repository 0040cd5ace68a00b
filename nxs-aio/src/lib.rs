// nxs-aio/src/lib.rs
//! Local IO for nxs (streamed checksums, scratch file placement)

pub mod checksum;
pub mod fs;

pub use checksum::{checksums_of, digest_bytes, local_checksums, local_digest};
pub use fs::{persist_scratch, scratch_file_for};
