// nxs/src/cli/download.rs
use clap::Args;
use nxs_common::error::Result;
use nxs_common::model::SyncReport;
use nxs_core::{Action, ArtifactRequest, SyncEngine};
use nxs_net::HttpTransport;

use crate::cli::artifact::ArtifactArgs;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub artifact: ArtifactArgs,
    /// Replace a different local file
    #[arg(long)]
    pub update_if_exists: bool,
}

impl DownloadArgs {
    pub fn request(&self) -> ArtifactRequest {
        ArtifactRequest {
            update_if_exists: self.update_if_exists,
            ..self.artifact.request()
        }
    }

    pub async fn run(&self, engine: &SyncEngine<HttpTransport>) -> Result<SyncReport> {
        engine.run(Action::Download, &self.request()).await
    }
}
