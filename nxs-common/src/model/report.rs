// nxs-common/src/model/report.rs
use std::fmt;
use std::path::PathBuf;

use super::checksum::ChecksumAlgorithm;

/// One side effect applied to the repository or the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    UploadedFile { local: PathBuf, url: String },
    UploadedPom { url: String },
    UpdatedChecksum {
        algorithm: ChecksumAlgorithm,
        url: String,
        from: Option<String>,
        to: String,
    },
    DownloadedFile { local: PathBuf, url: String },
    DeletedArtifact { url: String },
    DeletedUrl { url: String },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::UploadedFile { local, url } => write!(
                f,
                "uploaded file '{}' to Nexus at '{url}'",
                local.display()
            ),
            Change::UploadedPom { url } => write!(f, "uploaded pom to Nexus at '{url}'"),
            Change::UpdatedChecksum {
                algorithm,
                url,
                from,
                to,
            } => write!(
                f,
                "updated {algorithm} at '{url}' from {} to {to}",
                from.as_deref().unwrap_or("nil")
            ),
            Change::DownloadedFile { local, url } => write!(
                f,
                "downloaded file '{}' from Nexus at '{url}'",
                local.display()
            ),
            Change::DeletedArtifact { url } => write!(f, "deleted artifact '{url}' from Nexus"),
            Change::DeletedUrl { url } => write!(f, "deleted '{url}' from Nexus"),
        }
    }
}

/// The changes made by one action, in the order they were applied.
/// An empty report means the target was already up to date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    changes: Vec<Change>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, change: Change) {
        tracing::debug!("{}", change);
        self.changes.push(change);
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn is_up_to_date(&self) -> bool {
        self.changes.is_empty()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            return f.write_str("(up to date)");
        }
        for (i, change) in self.changes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {change}")?;
        }
        Ok(())
    }
}
