// nxs/src/cli/upload.rs
use clap::Args;
use nxs_common::error::Result;
use nxs_common::model::SyncReport;
use nxs_core::{Action, ArtifactRequest, SyncEngine};
use nxs_net::HttpTransport;

use crate::cli::artifact::ArtifactArgs;

#[derive(Args, Debug)]
pub struct UploadArgs {
    #[command(flatten)]
    pub artifact: ArtifactArgs,
    /// Skip generating and uploading a pom
    #[arg(long)]
    pub no_pom: bool,
    /// Replace a different artifact already on Nexus
    #[arg(long)]
    pub update_if_exists: bool,
}

impl UploadArgs {
    pub fn request(&self) -> ArtifactRequest {
        ArtifactRequest {
            upload_pom: !self.no_pom,
            update_if_exists: self.update_if_exists,
            ..self.artifact.request()
        }
    }

    pub async fn run(&self, engine: &SyncEngine<HttpTransport>) -> Result<SyncReport> {
        engine.run(Action::Upload, &self.request()).await
    }
}
