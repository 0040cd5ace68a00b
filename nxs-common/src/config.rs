// nxs-common/src/config.rs
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::error::{NxsError, Result};

pub const DEFAULT_PROFILE: &str = "default";
const USER_CONFIG_RELATIVE_PATH: &str = ".nexus/config";
const SYSTEM_CONFIG_PATH: &str = "/etc/.nexus/config";

pub const ENV_URL: &str = "NEXUS_URL";
pub const ENV_REPO: &str = "NEXUS_REPO";
pub const ENV_AUTH: &str = "NEXUS_AUTH";
pub const ENV_PROFILE: &str = "NEXUS_PROFILE";
pub const ENV_CONFIG: &str = "NEXUS_CONFIG";

/// Values given explicitly by the caller. These win over the environment and
/// over the config file profile.
#[derive(Debug, Clone)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub repo: Option<String>,
    pub auth: Option<String>,
    pub profile: Option<String>,
    pub config_file: Option<PathBuf>,
    pub use_auth: bool,
}

impl Default for ConfigOverrides {
    fn default() -> Self {
        Self {
            url: None,
            repo: None,
            auth: None,
            profile: None,
            config_file: None,
            use_auth: true,
        }
    }
}

/// One profile of the JSON config file, e.g.
/// `{"default": {"url": "...", "repo": "...", "auth": "user:secret"}}`.
#[derive(Debug, Clone, Default, Deserialize)]
struct ProfileEntry {
    url: Option<String>,
    repo: Option<String>,
    auth: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl Credentials {
    /// Parses the `user:password` form. A value without a colon is a bare username.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((user, pass)) => Self {
                username: user.to_string(),
                password: Some(pass.to_string()),
            },
            None => Self {
                username: raw.to_string(),
                password: None,
            },
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Repository settings resolved from all configuration layers.
///
/// Required values are checked lazily: a raw remote URL upload without a POM
/// never needs the repository url or name, so their absence only fails the
/// operations that actually build a location from them.
#[derive(Debug, Clone)]
pub struct Config {
    url: Option<String>,
    repo: Option<String>,
    auth: Option<String>,
    profile: String,
    pub use_auth: bool,
}

impl Config {
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        debug!("Loading nxs configuration");
        Self::from_sources(
            overrides,
            |key| env::var(key).ok().filter(|s| !s.is_empty()),
            dirs::home_dir(),
            Path::new(SYSTEM_CONFIG_PATH),
        )
    }

    /// Resolves configuration from explicit sources. `env` stands in for the
    /// process environment and `home` for the user's home directory.
    pub fn from_sources<F>(
        overrides: ConfigOverrides,
        env: F,
        home: Option<PathBuf>,
        system_config: &Path,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = overrides
            .profile
            .clone()
            .or_else(|| env(ENV_PROFILE))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
        debug!("Using nexus config profile '{}'", profile);

        let config_path = locate_config_file(
            overrides.config_file.as_deref(),
            env(ENV_CONFIG).map(PathBuf::from),
            home.as_deref(),
            system_config,
        )?;
        let entry = match config_path {
            Some(path) => read_profile(&path, &profile)?,
            None => {
                debug!("No nexus config file found, relying on attributes and environment");
                ProfileEntry::default()
            }
        };

        let url = overrides.url.or_else(|| env(ENV_URL)).or(entry.url);
        let repo = overrides.repo.or_else(|| env(ENV_REPO)).or(entry.repo);
        let auth = overrides.auth.or_else(|| env(ENV_AUTH)).or(entry.auth);

        debug!("Configuration loaded successfully.");
        Ok(Self {
            url,
            repo,
            auth,
            profile,
            use_auth: overrides.use_auth,
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Repository base URL without a trailing slash.
    pub fn url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .ok_or_else(|| self.missing("url", "url"))
    }

    pub fn repo(&self) -> Result<&str> {
        self.repo
            .as_deref()
            .ok_or_else(|| self.missing("repository", "repo"))
    }

    /// Basic-auth credentials, or `None` when auth is disabled.
    pub fn credentials(&self) -> Result<Option<Credentials>> {
        if !self.use_auth {
            return Ok(None);
        }
        self.auth
            .as_deref()
            .map(|raw| Some(Credentials::parse(raw)))
            .ok_or_else(|| self.missing("auth", "auth"))
    }

    fn missing(&self, what: &str, attribute: &str) -> NxsError {
        NxsError::Config(format!(
            "Please provide Nexus {what} as either the {attribute} attribute or in the nexus config profile '{}'",
            self.profile
        ))
    }
}

fn locate_config_file(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    home: Option<&Path>,
    system_config: &Path,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(NxsError::Config(format!(
                "Config file '{}' does not exist",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }
    if let Some(path) = from_env.filter(|p| p.is_file()) {
        return Ok(Some(path));
    }
    if let Some(path) = home
        .map(|h| h.join(USER_CONFIG_RELATIVE_PATH))
        .filter(|p| p.is_file())
    {
        return Ok(Some(path));
    }
    if system_config.is_file() {
        return Ok(Some(system_config.to_path_buf()));
    }
    Ok(None)
}

fn read_profile(path: &Path, profile: &str) -> Result<ProfileEntry> {
    debug!("Reading nexus config file: {}", path.display());
    let raw = fs::read_to_string(path)?;
    let parse_error = |e: serde_json::Error| {
        NxsError::Config(format!(
            "Failed to parse nexus config file {}: {e}",
            path.display()
        ))
    };
    let mut profiles: HashMap<String, serde_json::Value> =
        serde_json::from_str(&raw).map_err(parse_error)?;
    match profiles.remove(profile) {
        Some(value) => serde_json::from_value(value).map_err(parse_error),
        None => {
            debug!(
                "Profile '{}' not present in {}, using empty profile",
                profile,
                path.display()
            );
            Ok(ProfileEntry::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &Path, rel: &str, body: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_values_beat_env_and_profile() {
        let home = TempDir::new().unwrap();
        write_config(
            home.path(),
            ".nexus/config",
            r#"{"default": {"url": "http://file", "repo": "file-repo", "auth": "f:f"}}"#,
        );
        let overrides = ConfigOverrides {
            url: Some("http://explicit/".to_string()),
            ..Default::default()
        };
        let env = env_from(&[("NEXUS_URL", "http://env"), ("NEXUS_REPO", "env-repo")]);
        let config = Config::from_sources(
            overrides,
            env,
            Some(home.path().to_path_buf()),
            Path::new("/nonexistent/system"),
        )
        .unwrap();

        assert_eq!(config.url().unwrap(), "http://explicit");
        assert_eq!(config.repo().unwrap(), "env-repo");
        let creds = config.credentials().unwrap().unwrap();
        assert_eq!(creds.username, "f");
        assert_eq!(creds.password.as_deref(), Some("f"));
    }

    #[test]
    fn named_profile_from_env_config_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "custom.json",
            r#"{"default": {"url": "http://a"}, "ci": {"url": "http://ci", "repo": "ci-repo"}}"#,
        );
        let env = env_from(&[
            ("NEXUS_CONFIG", path.to_str().unwrap()),
            ("NEXUS_PROFILE", "ci"),
        ]);
        let config =
            Config::from_sources(ConfigOverrides::default(), env, None, Path::new("/nope"))
                .unwrap();

        assert_eq!(config.profile(), "ci");
        assert_eq!(config.url().unwrap(), "http://ci");
        assert_eq!(config.repo().unwrap(), "ci-repo");
    }

    #[test]
    fn env_config_path_that_does_not_exist_falls_back_to_home() {
        let home = TempDir::new().unwrap();
        write_config(home.path(), ".nexus/config", r#"{"default": {"repo": "home"}}"#);
        let env = env_from(&[("NEXUS_CONFIG", "/definitely/missing")]);
        let config = Config::from_sources(
            ConfigOverrides::default(),
            env,
            Some(home.path().to_path_buf()),
            Path::new("/nope"),
        )
        .unwrap();
        assert_eq!(config.repo().unwrap(), "home");
    }

    #[test]
    fn system_config_is_last_resort() {
        let dir = TempDir::new().unwrap();
        let system = write_config(dir.path(), "etc/config", r#"{"default": {"repo": "sys"}}"#);
        let config =
            Config::from_sources(ConfigOverrides::default(), env_from(&[]), None, &system)
                .unwrap();
        assert_eq!(config.repo().unwrap(), "sys");
    }

    #[test]
    fn missing_values_name_attribute_and_profile() {
        let config = Config::from_sources(
            ConfigOverrides::default(),
            env_from(&[]),
            None,
            Path::new("/nope"),
        )
        .unwrap();

        let err = config.url().unwrap_err().to_string();
        assert!(err.contains("Nexus url"), "{err}");
        assert!(err.contains("profile 'default'"), "{err}");
        assert!(config.repo().unwrap_err().to_string().contains("repository"));
        assert!(config.credentials().unwrap_err().to_string().contains("auth"));
    }

    #[test]
    fn disabled_auth_needs_no_credentials() {
        let overrides = ConfigOverrides {
            use_auth: false,
            ..Default::default()
        };
        let config =
            Config::from_sources(overrides, env_from(&[]), None, Path::new("/nope")).unwrap();
        assert!(config.credentials().unwrap().is_none());
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let overrides = ConfigOverrides {
            config_file: Some(PathBuf::from("/no/such/nexus/config")),
            ..Default::default()
        };
        let err = Config::from_sources(overrides, env_from(&[]), None, Path::new("/nope"))
            .unwrap_err();
        assert!(matches!(err, NxsError::Config(_)));
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "bad.json", "{not json");
        let overrides = ConfigOverrides {
            config_file: Some(path),
            ..Default::default()
        };
        let err = Config::from_sources(overrides, env_from(&[]), None, Path::new("/nope"))
            .unwrap_err();
        assert!(matches!(err, NxsError::Config(_)));
        assert!(err.to_string().contains("Failed to parse nexus config file"));
    }

    #[test]
    fn only_the_selected_profile_has_to_be_well_formed() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "shared.json",
            r#"{"default": {"url": "http://a", "repo": "r"}, "comment": "shared", "ci": 42}"#,
        );
        let overrides = ConfigOverrides {
            config_file: Some(path.clone()),
            ..Default::default()
        };
        let config =
            Config::from_sources(overrides, env_from(&[]), None, Path::new("/nope")).unwrap();
        assert_eq!(config.url().unwrap(), "http://a");

        let overrides = ConfigOverrides {
            config_file: Some(path),
            profile: Some("ci".to_string()),
            ..Default::default()
        };
        let err = Config::from_sources(overrides, env_from(&[]), None, Path::new("/nope"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse nexus config file"));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials::parse("gary:secr3t");
        let shown = format!("{creds:?}");
        assert!(shown.contains("gary"));
        assert!(!shown.contains("secr3t"));
    }
}
