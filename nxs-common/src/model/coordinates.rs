// nxs-common/src/model/coordinates.rs
use std::fmt;

/// Partially known Maven coordinates. Used for explicit caller fields and for
/// the merged result of coordinate resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateFields {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub classifier: Option<String>,
}

impl CoordinateFields {
    /// Overlays every field that is set in `other` onto `self`.
    pub fn merge(&mut self, other: &CoordinateFields) {
        fn overlay(slot: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                slot.clone_from(value);
            }
        }
        overlay(&mut self.group_id, &other.group_id);
        overlay(&mut self.artifact_id, &other.artifact_id);
        overlay(&mut self.version, &other.version);
        overlay(&mut self.packaging, &other.packaging);
        overlay(&mut self.classifier, &other.classifier);
    }

    /// True when groupId, artifactId and version are all present and non-empty.
    pub fn has_gav(&self) -> bool {
        [&self.group_id, &self.artifact_id, &self.version]
            .iter()
            .all(|f| f.as_deref().is_some_and(|s| !s.is_empty()))
    }

    /// Promotes to full coordinates once groupId, artifactId and version are known.
    pub fn to_coordinates(&self) -> Option<Coordinates> {
        if !self.has_gav() {
            return None;
        }
        Some(Coordinates {
            group_id: self.group_id.clone()?,
            artifact_id: self.artifact_id.clone()?,
            version: self.version.clone()?,
            packaging: self.packaging.clone().filter(|p| !p.is_empty()),
            classifier: self.classifier.clone().filter(|c| !c.is_empty()),
        })
    }
}

/// Coordinates identifying one artifact in a Maven-style repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: Option<String>,
    pub classifier: Option<String>,
}

impl Coordinates {
    /// Group id as a repository path (`org.example` -> `org/example`).
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// `<artifactId>-<version>`, the shared file name stem of the artifact and its POM.
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.artifact_id, self.version)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(packaging) = &self.packaging {
            write!(f, ":{packaging}")?;
            if let Some(classifier) = &self.classifier {
                write!(f, ":{classifier}")?;
            }
        }
        write!(f, ":{}", self.version)
    }
}
