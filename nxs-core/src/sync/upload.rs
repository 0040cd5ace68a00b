// nxs-core/src/sync/upload.rs
use std::path::Path;

use nxs_aio::checksum::{checksums_of, local_checksums};
use nxs_common::error::{NxsError, Result};
use nxs_common::model::{Change, ChecksumAlgorithm, ChecksumPair, SyncReport};
use nxs_net::{Payload, Transport};
use tracing::{debug, info};

use super::{SyncEngine, LOCAL_FILE_MISSING};
use crate::location::pom_location;
use crate::pom;
use crate::remote::Remote;
use crate::request::ArtifactRequest;
use crate::resolver::ResolvedArtifact;

pub const POM_UNAVAILABLE: &str = "unable to retrieve enough information to generate a pom
is remote_url correct in terms of Maven & Nexus syntax?
Set upload_pom to false to bypass this error.";

pub const FILE_CONFLICT: &str = "Different file currently exists on Nexus (or checksums are missing), if you want to overwrite it, set update_if_exists to true";

pub const POM_CONFLICT: &str = "Different pom currently exists on Nexus (or checksums are missing), if you want to overwrite it, set update_if_exists to true";

enum Content<'a> {
    File(&'a Path),
    Pom(String),
}

impl Content<'_> {
    fn payload(&self) -> Payload<'_> {
        match self {
            Content::File(path) => Payload::File(path),
            Content::Pom(body) => Payload::Bytes(body.as_bytes()),
        }
    }

    fn conflict_message(&self) -> &'static str {
        match self {
            Content::File(_) => FILE_CONFLICT,
            Content::Pom(_) => POM_CONFLICT,
        }
    }

    fn uploaded(&self, url: &str) -> Change {
        match self {
            Content::File(path) => Change::UploadedFile {
                local: path.to_path_buf(),
                url: url.to_string(),
            },
            Content::Pom(_) => Change::UploadedPom {
                url: url.to_string(),
            },
        }
    }
}

/// Content to publish at `url`, with the digests on both sides.
struct Target<'a> {
    url: String,
    content: Content<'a>,
    local: ChecksumPair,
    remote: ChecksumPair,
}

impl<T: Transport> SyncEngine<T> {
    /// Publishes the local file, its sidecars and optionally a generated POM.
    pub async fn upload(&self, request: &ArtifactRequest) -> Result<SyncReport> {
        let local_file = request
            .local_file
            .as_deref()
            .ok_or_else(|| NxsError::input(LOCAL_FILE_MISSING))?;
        if !local_file.exists() {
            return Err(NxsError::input(format!(
                "'{}' does not exist",
                local_file.display()
            )));
        }

        let resolved = ResolvedArtifact::resolve(request)?;
        let pom_coordinates = if request.upload_pom {
            Some(
                resolved
                    .pom_coordinates()
                    .ok_or_else(|| NxsError::input(POM_UNAVAILABLE))?,
            )
        } else {
            None
        };
        let artifact_url = resolved.artifact_url(&self.config)?;
        let remote = self.remote();

        let artifact = Target {
            local: local_checksums(local_file).await?,
            remote: remote.remote_checksums(&artifact_url).await?,
            url: artifact_url,
            content: Content::File(local_file),
        };

        let pom_target = match pom_coordinates {
            Some(coordinates) => {
                let body = pom::render(&coordinates).ok_or_else(|| NxsError::input(POM_UNAVAILABLE))?;
                let url = pom_location(&resolved.base_url(&self.config)?);
                Some(Target {
                    local: checksums_of(body.as_bytes()),
                    remote: remote.remote_checksums(&url).await?,
                    url,
                    content: Content::Pom(body),
                })
            }
            None => None,
        };

        let mut report = SyncReport::new();
        self.converge(&remote, &artifact, request.update_if_exists, &mut report)
            .await?;
        if let Some(pom_target) = &pom_target {
            self.converge(&remote, pom_target, request.update_if_exists, &mut report)
                .await?;
        }

        if report.is_up_to_date() {
            info!("'{}' is up to date", artifact.url);
        }
        Ok(report)
    }

    async fn converge(
        &self,
        remote: &Remote<'_, T>,
        target: &Target<'_>,
        update_if_exists: bool,
        report: &mut SyncReport,
    ) -> Result<()> {
        let exists = remote.exists(&target.url).await?;
        if !(exists && target.local.matches(&target.remote)) {
            if exists {
                if !update_if_exists {
                    return Err(NxsError::precondition(target.content.conflict_message()));
                }
                debug!("Replacing existing '{}'", target.url);
                remote.delete(&target.url).await?;
            }
            remote.upload(&target.url, target.content.payload()).await?;
            report.record(target.content.uploaded(&target.url));
        }

        for algorithm in ChecksumAlgorithm::ALL {
            if target.local.agrees_on(&target.remote, algorithm) {
                continue;
            }
            let Some(digest) = target.local.get(algorithm) else {
                continue;
            };
            let sidecar = remote.write_sidecar(&target.url, algorithm, digest).await?;
            report.record(Change::UpdatedChecksum {
                algorithm,
                url: sidecar,
                from: target.remote.get(algorithm).map(str::to_string),
                to: digest.to_string(),
            });
        }
        Ok(())
    }
}
