// nxs-net/src/transport.rs
use std::path::Path;

use nxs_common::error::Result;

/// Body of a PUT request.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Small in-memory content such as a POM or a checksum sidecar.
    Bytes(&'a [u8]),
    /// A local file, streamed from disk.
    File(&'a Path),
}

/// Blocking round trips against the repository, issued one at a time.
///
/// A successful `put` or `delete` only means the server accepted the request;
/// callers re-check with [`Transport::exists`] before relying on the result.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// HEAD request. True only on a success status.
    async fn exists(&self, url: &str) -> Result<bool>;

    /// GET request. `None` when the server answers 404.
    async fn get(&self, url: &str) -> Result<Option<Vec<u8>>>;

    /// GET request streamed into `dest`, which is created or truncated.
    async fn download(&self, url: &str, dest: &Path) -> Result<()>;

    async fn put(&self, url: &str, payload: Payload<'_>) -> Result<()>;

    async fn delete(&self, url: &str) -> Result<()>;
}
