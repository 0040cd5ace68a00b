// nxs/src/cli/delete_url.rs
use clap::Args;
use nxs_common::error::Result;
use nxs_common::model::SyncReport;
use nxs_core::{Action, ArtifactRequest, SyncEngine};
use nxs_net::HttpTransport;

#[derive(Args, Debug)]
pub struct DeleteUrlArgs {
    /// Exact url to remove
    #[arg(long)]
    pub remote_url: String,
}

impl DeleteUrlArgs {
    pub async fn run(&self, engine: &SyncEngine<HttpTransport>) -> Result<SyncReport> {
        let request = ArtifactRequest {
            remote_url: Some(self.remote_url.clone()),
            ..Default::default()
        };
        engine.run(Action::DeleteUrl, &request).await
    }
}
