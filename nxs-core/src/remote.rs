// nxs-core/src/remote.rs
//! Repository side of the checksum engine plus verified writes.
use nxs_common::error::{NxsError, Result};
use nxs_common::model::checksum::parse_sidecar;
use nxs_common::model::{ChecksumAlgorithm, ChecksumPair};
use nxs_net::{Payload, Transport};
use tracing::debug;

/// Wraps a transport with the checks every write must pass: a PUT is only
/// done once the URL exists, a DELETE once it is gone.
pub struct Remote<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Remote<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn exists(&self, url: &str) -> Result<bool> {
        self.transport.exists(url).await
    }

    /// Content of the `<url>.<algorithm>` sidecar, `None` when it is absent.
    pub async fn remote_digest(&self, url: &str, algorithm: ChecksumAlgorithm) -> Result<Option<String>> {
        let sidecar = algorithm.sidecar_url(url);
        let body = self.transport.get(&sidecar).await?;
        let digest = body.and_then(|b| parse_sidecar(&String::from_utf8_lossy(&b)));
        debug!("Remote {} for {}: {:?}", algorithm, url, digest);
        Ok(digest)
    }

    pub async fn remote_checksums(&self, url: &str) -> Result<ChecksumPair> {
        let mut pair = ChecksumPair::default();
        for algorithm in ChecksumAlgorithm::ALL {
            pair.set(algorithm, self.remote_digest(url, algorithm).await?);
        }
        Ok(pair)
    }

    pub async fn upload(&self, url: &str, payload: Payload<'_>) -> Result<()> {
        self.transport.put(url, payload).await?;
        if !self.transport.exists(url).await? {
            return Err(NxsError::postcondition(format!(
                "Server responded with successful creation, but '{url}' does not exist."
            )));
        }
        Ok(())
    }

    pub async fn delete(&self, url: &str) -> Result<()> {
        self.transport.delete(url).await?;
        if self.transport.exists(url).await? {
            return Err(NxsError::postcondition(format!(
                "Server responded with successful deletion, but '{url}' still exists."
            )));
        }
        Ok(())
    }

    /// Deletes `url` when present. Returns whether anything was deleted.
    pub async fn delete_if_exists(&self, url: &str) -> Result<bool> {
        if !self.transport.exists(url).await? {
            return Ok(false);
        }
        self.delete(url).await?;
        Ok(true)
    }

    /// Replaces the sidecar of `url` with `digest`.
    pub async fn write_sidecar(&self, url: &str, algorithm: ChecksumAlgorithm, digest: &str) -> Result<String> {
        let sidecar = algorithm.sidecar_url(url);
        self.delete_if_exists(&sidecar).await?;
        self.upload(&sidecar, Payload::Bytes(digest.as_bytes())).await?;
        Ok(sidecar)
    }
}
