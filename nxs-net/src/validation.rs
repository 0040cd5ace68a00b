// nxs-net/src/validation.rs
use nxs_common::error::{NxsError, Result};
use url::Url;

/// Validates a repository URL, ensuring it uses the http or https scheme.
pub fn validate_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| NxsError::ValidationError(format!("Failed to parse URL '{url_str}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NxsError::ValidationError(format!(
            "Invalid URL scheme for '{url_str}': Must be http or https, but got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("http://nexus.local/nexus/content/repositories/r/a").is_ok());
        assert!(validate_url("https://nexus.example.com/repositories/r/a").is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(matches!(
            validate_url("ftp://example.com/file.jar"),
            Err(NxsError::ValidationError(_))
        ));
        assert!(validate_url("not a url").is_err());
    }
}
