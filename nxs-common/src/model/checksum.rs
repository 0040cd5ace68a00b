// nxs-common/src/model/checksum.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Sha1,
    Md5,
}

impl ChecksumAlgorithm {
    /// Sidecar order used when syncing: sha1 first, then md5.
    pub const ALL: [ChecksumAlgorithm; 2] = [ChecksumAlgorithm::Sha1, ChecksumAlgorithm::Md5];

    /// File extension of the sidecar file, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha1 => "sha1",
            ChecksumAlgorithm::Md5 => "md5",
        }
    }

    /// `<url>.<extension>`
    pub fn sidecar_url(self, url: &str) -> String {
        format!("{url}.{}", self.extension())
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Hex digests of one piece of content. Either side may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumPair {
    pub sha1: Option<String>,
    pub md5: Option<String>,
}

impl ChecksumPair {
    pub fn get(&self, algorithm: ChecksumAlgorithm) -> Option<&str> {
        match algorithm {
            ChecksumAlgorithm::Sha1 => self.sha1.as_deref(),
            ChecksumAlgorithm::Md5 => self.md5.as_deref(),
        }
    }

    pub fn set(&mut self, algorithm: ChecksumAlgorithm, value: Option<String>) {
        match algorithm {
            ChecksumAlgorithm::Sha1 => self.sha1 = value,
            ChecksumAlgorithm::Md5 => self.md5 = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sha1.is_none() && self.md5.is_none()
    }

    /// True iff a digest known on the `remote` side equals the local one.
    ///
    /// A remote side without any digest never matches.
    pub fn matches(&self, remote: &ChecksumPair) -> bool {
        ChecksumAlgorithm::ALL
            .iter()
            .any(|&alg| digest_eq(self.get(alg), remote.get(alg)))
    }

    /// True when the `remote` digest for `algorithm` already equals the local one.
    pub fn agrees_on(&self, remote: &ChecksumPair, algorithm: ChecksumAlgorithm) -> bool {
        digest_eq(self.get(algorithm), remote.get(algorithm))
    }
}

fn digest_eq(local: Option<&str>, remote: Option<&str>) -> bool {
    match (local, remote) {
        (Some(l), Some(r)) => l.eq_ignore_ascii_case(r),
        _ => false,
    }
}

/// Normalises the body of a sidecar file.
///
/// Sidecars may carry a trailing newline or the `<hash>  <filename>` form of
/// `sha1sum`; only the first token is the digest.
pub fn parse_sidecar(body: &str) -> Option<String> {
    body.split_whitespace()
        .next()
        .map(|s| s.to_ascii_lowercase())
}
