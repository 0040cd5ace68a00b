// nxs-core/src/sync/delete.rs
use nxs_common::error::{NxsError, Result};
use nxs_common::model::{Change, SyncReport};
use nxs_net::Transport;
use tracing::info;

use super::SyncEngine;
use crate::request::ArtifactRequest;
use crate::resolver::ResolvedArtifact;

pub const DELETE_REJECTS_REMOTE_URL: &str = "delete does not accept remote_url as it cannot reliably determine the artifact version directory, use Maven coordinates instead, or use delete_url instead";

pub const DELETE_URL_REQUIRES_REMOTE_URL: &str = "delete_url requires remote_url";

impl<T: Transport> SyncEngine<T> {
    /// Removes the whole version directory of the artifact.
    pub async fn delete(&self, request: &ArtifactRequest) -> Result<SyncReport> {
        if request.remote_url.is_some() {
            return Err(NxsError::input(DELETE_REJECTS_REMOTE_URL));
        }
        let resolved = ResolvedArtifact::resolve(request)?;
        let directory = resolved.version_directory_url(&self.config)?;

        let mut report = SyncReport::new();
        if self.remote().delete_if_exists(&directory).await? {
            report.record(Change::DeletedArtifact { url: directory });
        } else {
            info!("'{}' is already absent", directory);
        }
        Ok(report)
    }

    /// Removes exactly `remote_url`, with no coordinate resolution.
    pub async fn delete_url(&self, request: &ArtifactRequest) -> Result<SyncReport> {
        let url = request
            .remote_url
            .as_deref()
            .ok_or_else(|| NxsError::input(DELETE_URL_REQUIRES_REMOTE_URL))?;

        let mut report = SyncReport::new();
        if self.remote().delete_if_exists(url).await? {
            report.record(Change::DeletedUrl {
                url: url.to_string(),
            });
        } else {
            info!("'{}' is already absent", url);
        }
        Ok(report)
    }
}
