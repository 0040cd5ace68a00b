// nxs-core/src/sync/mod.rs
//! Checksum-driven converge actions against one artifact.
//!
//! Every action resolves its coordinates and locations first, reads the
//! remote state it compares against, and only then starts writing. Writes are
//! issued one at a time and each is verified before the next one starts; the
//! first failure aborts the action.
use std::fmt;

use nxs_common::config::Config;
use nxs_common::error::Result;
use nxs_common::model::SyncReport;
use nxs_net::Transport;

use crate::remote::Remote;
use crate::request::ArtifactRequest;

mod delete;
mod download;
mod upload;

pub const LOCAL_FILE_MISSING: &str = "local_file is missing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upload,
    Download,
    Delete,
    DeleteUrl,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Upload => "upload",
            Action::Download => "download",
            Action::Delete => "delete",
            Action::DeleteUrl => "delete_url",
        })
    }
}

/// Runs sync actions for one repository configuration.
pub struct SyncEngine<T: Transport> {
    transport: T,
    config: Config,
}

impl<T: Transport> SyncEngine<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn run(&self, action: Action, request: &ArtifactRequest) -> Result<SyncReport> {
        tracing::debug!("Running action {} for {:?}", action, request);
        match action {
            Action::Upload => self.upload(request).await,
            Action::Download => self.download(request).await,
            Action::Delete => self.delete(request).await,
            Action::DeleteUrl => self.delete_url(request).await,
        }
    }

    fn remote(&self) -> Remote<'_, T> {
        Remote::new(&self.transport)
    }
}
