// nxs-core/src/location.rs
use nxs_common::error::{NxsError, Result};
use nxs_common::model::Coordinates;

use crate::resolver::PACKAGING_REQUIRED;

/// `<url>/repositories/<repo>/<group path>/<artifactId>/<version>/<artifactId>-<version>`
pub fn build_base_location(repository_url: &str, repo: &str, coordinates: &Coordinates) -> String {
    format!(
        "{}/{}",
        version_directory(repository_url, repo, coordinates),
        coordinates.file_stem()
    )
}

/// Base location plus the optional `-<classifier>` and the `.<packaging>` suffix.
pub fn build_full_location(base: &str, coordinates: &Coordinates) -> Result<String> {
    let packaging = coordinates
        .packaging
        .as_deref()
        .ok_or_else(|| NxsError::input(PACKAGING_REQUIRED))?;
    let mut url = base.to_string();
    if let Some(classifier) = &coordinates.classifier {
        url.push('-');
        url.push_str(classifier);
    }
    url.push('.');
    url.push_str(packaging);
    Ok(url)
}

/// The directory holding every file of one artifact version.
pub fn version_directory(repository_url: &str, repo: &str, coordinates: &Coordinates) -> String {
    [
        repository_url.trim_end_matches('/'),
        "repositories",
        repo,
        &coordinates.group_path(),
        &coordinates.artifact_id,
        &coordinates.version,
    ]
    .join("/")
}

/// `<base>.pom`; the POM never carries the classifier.
pub fn pom_location(base: &str) -> String {
    format!("{base}.pom")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(packaging: Option<&str>, classifier: Option<&str>) -> Coordinates {
        Coordinates {
            group_id: "chef-nexus-rspec-test.sub".to_string(),
            artifact_id: "artifact".to_string(),
            version: "1.0.0".to_string(),
            packaging: packaging.map(String::from),
            classifier: classifier.map(String::from),
        }
    }

    #[test]
    fn base_location_joins_group_path() {
        let base = build_base_location("http://nexus/nexus/content/", "releases", &coords(None, None));
        assert_eq!(
            base,
            "http://nexus/nexus/content/repositories/releases/chef-nexus-rspec-test/sub/artifact/1.0.0/artifact-1.0.0"
        );
    }

    #[test]
    fn full_location_appends_classifier_and_packaging() {
        let c = coords(Some("jar"), Some("classifier"));
        let base = build_base_location("http://n", "r", &c);
        assert_eq!(
            build_full_location(&base, &c).unwrap(),
            "http://n/repositories/r/chef-nexus-rspec-test/sub/artifact/1.0.0/artifact-1.0.0-classifier.jar"
        );
        assert_eq!(
            pom_location(&base),
            "http://n/repositories/r/chef-nexus-rspec-test/sub/artifact/1.0.0/artifact-1.0.0.pom"
        );
    }

    #[test]
    fn full_location_needs_packaging() {
        let c = coords(None, None);
        let err = build_full_location("http://n/x", &c).unwrap_err();
        assert_eq!(err.to_string(), PACKAGING_REQUIRED);
    }

    #[test]
    fn version_directory_is_parent_of_base() {
        let c = coords(Some("jar"), None);
        let base = build_base_location("http://n", "r", &c);
        let dir = version_directory("http://n", "r", &c);
        assert_eq!(base.rsplit_once('/').unwrap().0, dir);
    }
}
