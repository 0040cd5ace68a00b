// nxs-aio/src/checksum.rs
use std::io;
use std::path::Path;
use std::sync::Arc;

use md5::Md5;
use nxs_common::error::{NxsError, Result};
use nxs_common::model::{ChecksumAlgorithm, ChecksumPair};
use sha1::{Digest, Sha1};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;

const CHUNK_SIZE: usize = 8192;

/// Feeds the same bytes to a sha1 and an md5 hasher.
#[derive(Default)]
struct PairHasher {
    sha1: Sha1,
    md5: Md5,
}

impl PairHasher {
    fn update(&mut self, data: &[u8]) {
        self.sha1.update(data);
        self.md5.update(data);
    }

    fn finalize(self) -> ChecksumPair {
        ChecksumPair {
            sha1: Some(hex::encode(self.sha1.finalize())),
            md5: Some(hex::encode(self.md5.finalize())),
        }
    }
}

/// Computes the sha1 and md5 digests of a local file in one streamed pass.
///
/// A missing file yields an empty pair rather than an error.
pub async fn local_checksums(path: &Path) -> Result<ChecksumPair> {
    debug!("Computing checksums for: {}", path.display());
    let mut file = match File::open(path).await {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, no local checksums", path.display());
            return Ok(ChecksumPair::default());
        }
        Err(e) => return Err(NxsError::Io(Arc::new(e))),
    };

    let mut hasher = PairHasher::default();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total_bytes_read: u64 = 0;

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        total_bytes_read += n as u64;
    }

    let pair = hasher.finalize();
    debug!(
        "Calculated sha1={:?} md5={:?} ({} bytes read)",
        pair.sha1, pair.md5, total_bytes_read
    );
    Ok(pair)
}

/// Digest of a local file for one algorithm, `None` when the file is missing.
pub async fn local_digest(path: &Path, algorithm: ChecksumAlgorithm) -> Result<Option<String>> {
    let pair = local_checksums(path).await?;
    Ok(pair.get(algorithm).map(str::to_string))
}

/// Digest of in-memory content.
pub fn digest_bytes(data: &[u8], algorithm: ChecksumAlgorithm) -> String {
    match algorithm {
        ChecksumAlgorithm::Sha1 => hex::encode(Sha1::digest(data)),
        ChecksumAlgorithm::Md5 => hex::encode(Md5::digest(data)),
    }
}

pub fn checksums_of(data: &[u8]) -> ChecksumPair {
    let mut hasher = PairHasher::default();
    hasher.update(data);
    hasher.finalize()
}

/// Verifies one digest of a file synchronously.
pub fn verify_checksum_sync(path: &Path, algorithm: ChecksumAlgorithm, expected: &str) -> Result<()> {
    debug!("Sync Verifying {} for: {}", algorithm, path.display());
    let std_file = std::fs::File::open(path).map_err(|e| NxsError::Io(Arc::new(e)))?;
    let mut std_reader = std::io::BufReader::new(std_file);
    let actual = match algorithm {
        ChecksumAlgorithm::Sha1 => {
            let mut hasher = Sha1::new();
            io::copy(&mut std_reader, &mut hasher)?;
            hex::encode(hasher.finalize())
        }
        ChecksumAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            io::copy(&mut std_reader, &mut hasher)?;
            hex::encode(hasher.finalize())
        }
    };

    debug!("Calculated {}: {}", algorithm, actual);
    debug!("Expected {}:   {}", algorithm, expected);

    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(NxsError::ChecksumMismatch(format!(
            "{} mismatch for {}: expected {}, got {}",
            algorithm,
            path.display(),
            expected,
            actual
        )))
    }
}
