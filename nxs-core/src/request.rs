// nxs-core/src/request.rs
use std::path::PathBuf;

use nxs_common::model::CoordinateFields;

/// Attributes of one sync action.
#[derive(Debug, Clone)]
pub struct ArtifactRequest {
    /// `g:a:v`, `g:a:packaging:v` or `g:a:packaging:classifier:v`.
    pub coordinates: Option<String>,
    /// Full artifact URL, used verbatim instead of a derived location.
    pub remote_url: Option<String>,
    pub local_file: Option<PathBuf>,
    /// Individual fields; each one overrides the coordinate string and the URL.
    pub fields: CoordinateFields,
    pub upload_pom: bool,
    pub update_if_exists: bool,
}

impl Default for ArtifactRequest {
    fn default() -> Self {
        Self {
            coordinates: None,
            remote_url: None,
            local_file: None,
            fields: CoordinateFields::default(),
            upload_pom: true,
            update_if_exists: false,
        }
    }
}
