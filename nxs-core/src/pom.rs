// nxs-core/src/pom.rs
//! Minimal Maven POM generated from resolved coordinates.
use nxs_common::model::Coordinates;

/// Renders the POM for `coordinates`. `None` when packaging is unknown.
///
/// Output depends only on the coordinates so repeated runs produce identical
/// bytes and therefore identical checksums.
pub fn render(coordinates: &Coordinates) -> Option<String> {
    let packaging = coordinates.packaging.as_deref()?;
    Some(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{}</groupId>
  <artifactId>{}</artifactId>
  <version>{}</version>
  <packaging>{}</packaging>
  <description>POM was generated by nxs</description>
</project>
"#,
        escape(&coordinates.group_id),
        escape(&coordinates.artifact_id),
        escape(&coordinates.version),
        escape(packaging),
    ))
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
