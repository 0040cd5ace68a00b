// nxs/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use nxs_common::config::ConfigOverrides;
use nxs_common::error::Result;
use nxs_common::model::SyncReport;
use nxs_core::SyncEngine;
use nxs_net::HttpTransport;

pub mod artifact;
pub mod delete;
pub mod delete_url;
pub mod download;
pub mod upload;

use crate::cli::delete::DeleteArgs;
use crate::cli::delete_url::DeleteUrlArgs;
use crate::cli::download::DownloadArgs;
use crate::cli::upload::UploadArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "nxs", bin_name = "nxs")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub repository: RepositoryArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the repository lives and how to authenticate against it.
#[derive(Args, Debug, Default)]
pub struct RepositoryArgs {
    /// Nexus base url, e.g. https://nexus.example.com/nexus/content
    #[arg(long, global = true)]
    pub url: Option<String>,
    /// Repository name
    #[arg(long, global = true)]
    pub repo: Option<String>,
    /// Credentials as user:password
    #[arg(long, global = true)]
    pub auth: Option<String>,
    /// Profile of the nexus config file
    #[arg(long, global = true)]
    pub profile: Option<String>,
    /// Nexus config file to read instead of ~/.nexus/config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Send requests without credentials
    #[arg(long, global = true)]
    pub no_auth: bool,
}

impl RepositoryArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            repo: self.repo.clone(),
            auth: self.auth.clone(),
            profile: self.profile.clone(),
            config_file: self.config.clone(),
            use_auth: !self.no_auth,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish a local file, its checksums and a generated pom
    Upload(UploadArgs),
    /// Fetch an artifact into a local file
    Download(DownloadArgs),
    /// Remove an artifact version directory
    Delete(DeleteArgs),
    /// Remove exactly one repository url
    DeleteUrl(DeleteUrlArgs),
}

impl Command {
    pub async fn run(&self, engine: &SyncEngine<HttpTransport>) -> Result<SyncReport> {
        match self {
            Self::Upload(command) => command.run(engine).await,
            Self::Download(command) => command.run(engine).await,
            Self::Delete(command) => command.run(engine).await,
            Self::DeleteUrl(command) => command.run(engine).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn global_repository_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "nxs",
            "upload",
            "-c",
            "g:a:1.0.0",
            "-f",
            "a.jar",
            "--url",
            "http://nexus",
            "--no-auth",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        let overrides = args.repository.overrides();
        assert_eq!(overrides.url.as_deref(), Some("http://nexus"));
        assert!(!overrides.use_auth);
        let Command::Upload(upload) = args.command else {
            panic!("expected upload");
        };
        let request = upload.request();
        assert!(request.upload_pom);
        assert!(!request.update_if_exists);
        assert_eq!(request.coordinates.as_deref(), Some("g:a:1.0.0"));
    }

    #[test]
    fn upload_flags_map_onto_request() {
        let args = CliArgs::try_parse_from([
            "nxs",
            "upload",
            "--remote-url",
            "http://nexus/x",
            "--local-file",
            "x",
            "--no-pom",
            "--update-if-exists",
            "--packaging",
            "pkg",
        ])
        .unwrap();
        let Command::Upload(upload) = args.command else {
            panic!("expected upload");
        };
        let request = upload.request();
        assert!(!request.upload_pom);
        assert!(request.update_if_exists);
        assert_eq!(request.fields.packaging.as_deref(), Some("pkg"));
    }

    #[test]
    fn delete_url_requires_remote_url_flag() {
        assert!(CliArgs::try_parse_from(["nxs", "delete-url"]).is_err());
        let args =
            CliArgs::try_parse_from(["nxs", "delete-url", "--remote-url", "http://nexus/x"]).unwrap();
        assert!(matches!(args.command, Command::DeleteUrl(_)));
    }
}
