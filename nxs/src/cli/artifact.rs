// nxs/src/cli/artifact.rs
use std::path::PathBuf;

use clap::Args;
use nxs_common::model::CoordinateFields;
use nxs_core::ArtifactRequest;

/// Options naming one artifact, shared by every command that resolves coordinates.
#[derive(Args, Debug, Default)]
pub struct ArtifactArgs {
    /// groupId:artifactId[:packaging[:classifier]]:version
    #[arg(short, long)]
    pub coordinates: Option<String>,
    /// Full artifact url, used as is
    #[arg(long)]
    pub remote_url: Option<String>,
    #[arg(short = 'f', long)]
    pub local_file: Option<PathBuf>,
    #[arg(long)]
    pub group_id: Option<String>,
    #[arg(long)]
    pub artifact_id: Option<String>,
    #[arg(long)]
    pub artifact_version: Option<String>,
    /// Defaults to the local file extension
    #[arg(long)]
    pub packaging: Option<String>,
    #[arg(long)]
    pub classifier: Option<String>,
}

impl ArtifactArgs {
    pub fn request(&self) -> ArtifactRequest {
        ArtifactRequest {
            coordinates: self.coordinates.clone(),
            remote_url: self.remote_url.clone(),
            local_file: self.local_file.clone(),
            fields: CoordinateFields {
                group_id: self.group_id.clone(),
                artifact_id: self.artifact_id.clone(),
                version: self.artifact_version.clone(),
                packaging: self.packaging.clone(),
                classifier: self.classifier.clone(),
            },
            ..Default::default()
        }
    }
}
