// nxs-core/src/resolver.rs
//! Derives Maven coordinates from a remote URL, a coordinate string, explicit
//! fields and the local file name.
use std::path::Path;

use lazy_static::lazy_static;
use nxs_common::config::Config;
use nxs_common::error::{NxsError, Result};
use nxs_common::model::{CoordinateFields, Coordinates};
use regex::Regex;
use tracing::debug;

use crate::location;
use crate::request::ArtifactRequest;

pub const COORDINATES_USAGE: &str = "coordinates must follow one of the following formats
groupId:artifactId:version
groupId:artifactId:packaging:version
groupId:artifactId:packaging:classifier:version";

pub const GAV_REQUIRED: &str =
    "You must specify coordinates OR at least all of [groupId, artifactId, version]";

pub const EXTENSION_REQUIRED: &str = "Files require an extension, or specify it with packaging";

pub const PACKAGING_REQUIRED: &str =
    "packaging required: set packaging explicitly or give the local file an extension";

lazy_static! {
    // <anything>/repositories/<repo>/<group path>/<artifactId>/<version>/<artifactId>-<version>[-<classifier>].<packaging>
    static ref REMOTE_URL_LAYOUT: Regex = Regex::new(
        r"^.*?/repositories/.*?/(.*?)/((?:\d+\.)*\d+)/(.*?)-((?:\d+\.)*\d+)(?:-(.*?))?\.(.*)$"
    )
    .expect("remote url layout regex is valid");
}

/// Infers coordinates from a repository URL.
///
/// Returns `None` unless both version segments are identical and the path
/// segment before the version equals the artifactId of the file name.
pub fn infer_from_remote_url(url: &str) -> Option<CoordinateFields> {
    let caps = REMOTE_URL_LAYOUT.captures(url)?;
    let group_and_artifact = caps.get(1)?.as_str();
    let dir_version = caps.get(2)?.as_str();
    let file_artifact = caps.get(3)?.as_str();
    let file_version = caps.get(4)?.as_str();

    if dir_version != file_version {
        return None;
    }
    let (group_path, artifact_id) = group_and_artifact.rsplit_once('/')?;
    if group_path.is_empty() || artifact_id != file_artifact {
        return None;
    }

    Some(CoordinateFields {
        group_id: Some(group_path.replace('/', ".")),
        artifact_id: Some(artifact_id.to_string()),
        version: Some(dir_version.to_string()),
        packaging: caps.get(6).map(|m| m.as_str().to_string()),
        classifier: caps.get(5).map(|m| m.as_str().to_string()),
    })
}

/// Parses `g:a:v`, `g:a:packaging:v` or `g:a:packaging:classifier:v`.
///
/// Trailing empty fields are dropped, so `g:a:v:` reads as `g:a:v`.
pub fn parse_coordinates(raw: &str) -> Result<CoordinateFields> {
    let mut parts: Vec<&str> = raw.split(':').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    let owned = |s: &str| Some(s.to_string());
    match parts.as_slice() {
        [g, a, v] => Ok(CoordinateFields {
            group_id: owned(g),
            artifact_id: owned(a),
            version: owned(v),
            ..Default::default()
        }),
        [g, a, p, v] => Ok(CoordinateFields {
            group_id: owned(g),
            artifact_id: owned(a),
            version: owned(v),
            packaging: owned(p),
            classifier: None,
        }),
        [g, a, p, c, v] => Ok(CoordinateFields {
            group_id: owned(g),
            artifact_id: owned(a),
            version: owned(v),
            packaging: owned(p),
            classifier: owned(c),
        }),
        _ => Err(NxsError::input(COORDINATES_USAGE)),
    }
}

/// Packaging implied by a file name: its extension without the dot.
pub fn packaging_from_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .filter(|ext| !ext.is_empty())
}

/// Merges every coordinate source of a request. Later sources win:
/// remote URL inference, then the coordinate string, then explicit fields.
pub fn resolve(request: &ArtifactRequest) -> Result<CoordinateFields> {
    let mut fields = CoordinateFields::default();

    if let Some(url) = &request.remote_url {
        match infer_from_remote_url(url) {
            Some(inferred) => {
                debug!("Inferred coordinates from remote_url '{}': {:?}", url, inferred);
                fields.merge(&inferred);
            }
            None => debug!(
                "remote_url '{}' does not follow the Maven layout, no coordinates inferred",
                url
            ),
        }
    }

    if let Some(raw) = &request.coordinates {
        fields.merge(&parse_coordinates(raw)?);
    }

    fields.merge(&request.fields);

    if request.remote_url.is_none() && !fields.has_gav() {
        return Err(NxsError::input(GAV_REQUIRED));
    }

    let has_packaging = fields.packaging.as_deref().is_some_and(|p| !p.is_empty());
    if !has_packaging {
        if let Some(local) = &request.local_file {
            match packaging_from_extension(local) {
                Some(ext) => {
                    debug!("Inferred packaging '{}' from {}", ext, local.display());
                    fields.packaging = Some(ext);
                }
                None if request.remote_url.is_none() => {
                    return Err(NxsError::input(EXTENSION_REQUIRED));
                }
                None => {}
            }
        }
    }

    Ok(fields)
}

/// Coordinates and remote location of one request, resolved once per action.
#[derive(Debug, Clone)]
pub struct ResolvedArtifact {
    pub fields: CoordinateFields,
    remote_url: Option<String>,
}

impl ResolvedArtifact {
    pub fn resolve(request: &ArtifactRequest) -> Result<Self> {
        Ok(Self {
            fields: resolve(request)?,
            remote_url: request.remote_url.clone(),
        })
    }

    pub fn coordinates(&self) -> Result<Coordinates> {
        self.fields
            .to_coordinates()
            .ok_or_else(|| NxsError::input(GAV_REQUIRED))
    }

    /// Coordinates complete enough to generate a POM (packaging included).
    pub fn pom_coordinates(&self) -> Option<Coordinates> {
        self.fields
            .to_coordinates()
            .filter(|c| c.packaging.is_some())
    }

    /// The artifact URL: the explicit remote URL verbatim, or the location
    /// derived from the coordinates.
    pub fn artifact_url(&self, config: &Config) -> Result<String> {
        if let Some(url) = &self.remote_url {
            return Ok(url.clone());
        }
        let base = self.base_url(config)?;
        location::build_full_location(&base, &self.coordinates()?)
    }

    pub fn base_url(&self, config: &Config) -> Result<String> {
        Ok(location::build_base_location(
            config.url()?,
            config.repo()?,
            &self.coordinates()?,
        ))
    }

    pub fn version_directory_url(&self, config: &Config) -> Result<String> {
        Ok(location::version_directory(
            config.url()?,
            config.repo()?,
            &self.coordinates()?,
        ))
    }
}
