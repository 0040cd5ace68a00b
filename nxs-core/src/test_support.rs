// nxs-core/src/test_support.rs
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::Path;

use nxs_common::config::{Config, ConfigOverrides};
use nxs_common::error::{NxsError, Result};
use nxs_net::{Payload, Transport};

pub const NEXUS_URL: &str = "http://nexus.test/nexus/content";
pub const NEXUS_REPO: &str = "releases";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Exists(String),
    Get(String),
    Download(String),
    Put(String),
    Delete(String),
}

impl Op {
    pub fn is_write(&self) -> bool {
        matches!(self, Op::Put(_) | Op::Delete(_))
    }
}

/// Repository held in memory. Directories exist implicitly while any file
/// lives below them; deleting a directory deletes everything below it.
#[derive(Default)]
pub struct MemoryTransport {
    files: RefCell<BTreeMap<String, Vec<u8>>>,
    ops: RefCell<Vec<Op>>,
    pub drop_puts: Cell<bool>,
    pub drop_deletes: Cell<bool>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(url.to_string(), body.into());
    }

    pub fn body(&self, url: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(url).cloned()
    }

    pub fn body_str(&self, url: &str) -> Option<String> {
        self.body(url).map(|b| String::from_utf8_lossy(&b).to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        let prefix = format!("{}/", url.trim_end_matches('/'));
        self.files
            .borrow()
            .keys()
            .any(|k| k == url || k.starts_with(&prefix))
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Op> {
        self.ops.borrow().iter().filter(|op| op.is_write()).cloned().collect()
    }

    pub fn clear_ops(&self) {
        self.ops.borrow_mut().clear();
    }

    fn log(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

impl Transport for MemoryTransport {
    async fn exists(&self, url: &str) -> Result<bool> {
        self.log(Op::Exists(url.to_string()));
        Ok(self.contains(url))
    }

    async fn get(&self, url: &str) -> Result<Option<Vec<u8>>> {
        self.log(Op::Get(url.to_string()));
        Ok(self.body(url))
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        self.log(Op::Download(url.to_string()));
        let body = self
            .body(url)
            .ok_or_else(|| NxsError::HttpError(format!("HTTP error 404 Not Found for URL {url}")))?;
        std::fs::write(dest, body)?;
        Ok(())
    }

    async fn put(&self, url: &str, payload: Payload<'_>) -> Result<()> {
        self.log(Op::Put(url.to_string()));
        if self.drop_puts.get() {
            return Ok(());
        }
        let body = match payload {
            Payload::Bytes(bytes) => bytes.to_vec(),
            Payload::File(path) => std::fs::read(path)?,
        };
        self.insert(url, body);
        Ok(())
    }

    async fn delete(&self, url: &str) -> Result<()> {
        self.log(Op::Delete(url.to_string()));
        if self.drop_deletes.get() {
            return Ok(());
        }
        let prefix = format!("{}/", url.trim_end_matches('/'));
        self.files
            .borrow_mut()
            .retain(|k, _| k != url && !k.starts_with(&prefix));
        Ok(())
    }
}

pub fn test_config() -> Config {
    let overrides = ConfigOverrides {
        url: Some(NEXUS_URL.to_string()),
        repo: Some(NEXUS_REPO.to_string()),
        use_auth: false,
        ..Default::default()
    };
    Config::from_sources(overrides, |_| None, None, Path::new("/nonexistent/nxs/config"))
        .expect("test config resolves")
}

/// Config without repository url or name.
pub fn bare_config() -> Config {
    let overrides = ConfigOverrides {
        use_auth: false,
        ..Default::default()
    };
    Config::from_sources(overrides, |_| None, None, Path::new("/nonexistent/nxs/config"))
        .expect("bare config resolves")
}

pub fn repo_url(path: &str) -> String {
    format!("{NEXUS_URL}/repositories/{NEXUS_REPO}/{path}")
}
