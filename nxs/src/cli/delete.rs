// nxs/src/cli/delete.rs
use clap::Args;
use nxs_common::error::Result;
use nxs_common::model::SyncReport;
use nxs_core::{Action, SyncEngine};
use nxs_net::HttpTransport;

use crate::cli::artifact::ArtifactArgs;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub artifact: ArtifactArgs,
}

impl DeleteArgs {
    pub async fn run(&self, engine: &SyncEngine<HttpTransport>) -> Result<SyncReport> {
        engine.run(Action::Delete, &self.artifact.request()).await
    }
}
