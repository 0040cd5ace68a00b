// nxs-core/src/sync/download.rs
use nxs_aio::checksum::{local_checksums, verify_checksum_sync};
use nxs_aio::fs::{persist_scratch, scratch_file_for};
use nxs_common::error::{NxsError, Result};
use nxs_common::model::{Change, ChecksumAlgorithm, SyncReport};
use nxs_net::Transport;
use tracing::{debug, info};

use super::{SyncEngine, LOCAL_FILE_MISSING};
use crate::request::ArtifactRequest;
use crate::resolver::ResolvedArtifact;

pub const LOCAL_CONFLICT: &str = "Different version currently exists locally, if you want to overwrite it, set update_if_exists to true";

impl<T: Transport> SyncEngine<T> {
    /// Makes the local file equal to the artifact in the repository.
    pub async fn download(&self, request: &ArtifactRequest) -> Result<SyncReport> {
        let local_file = request
            .local_file
            .as_deref()
            .ok_or_else(|| NxsError::input(LOCAL_FILE_MISSING))?;
        let resolved = ResolvedArtifact::resolve(request)?;
        let url = resolved.artifact_url(&self.config)?;
        let remote = self.remote();

        if !remote.exists(&url).await? {
            return Err(NxsError::precondition(format!(
                "No file exists at '{url}' or you do not have permissions"
            )));
        }

        let remote_pair = remote.remote_checksums(&url).await?;
        let local_pair = local_checksums(local_file).await?;
        let mut report = SyncReport::new();
        if local_pair.matches(&remote_pair) {
            info!("'{}' is up to date with '{}'", local_file.display(), url);
            return Ok(report);
        }

        if local_file.exists() && !request.update_if_exists {
            return Err(NxsError::precondition(LOCAL_CONFLICT));
        }

        let scratch = scratch_file_for(local_file)?;
        self.transport.download(&url, scratch.path()).await?;

        let expected = ChecksumAlgorithm::ALL
            .into_iter()
            .find_map(|alg| remote_pair.get(alg).map(|digest| (alg, digest)));
        match expected {
            Some((algorithm, digest)) => verify_checksum_sync(scratch.path(), algorithm, digest)?,
            None => debug!("No remote checksums for '{}', skipping verification", url),
        }
        persist_scratch(scratch, local_file)?;

        if !local_file.exists() {
            return Err(NxsError::postcondition(format!(
                "File appears to have been downloaded, but '{}' does not exist.",
                local_file.display()
            )));
        }
        report.record(Change::DownloadedFile {
            local: local_file.to_path_buf(),
            url,
        });
        Ok(report)
    }
}
