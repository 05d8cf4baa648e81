//! Operator command line
//!
//! | Command | Description |
//! |---------|-------------|
//! | `credsync config` | Print the effective configuration as TOML |
//! | `credsync peek <owner> <field>` | Show a cached credential without refreshing it |

use clap::{Parser, Subcommand};
use credsync_application::CredentialCache;
use credsync_domain::error::Result;
use credsync_domain::value_objects::{CredentialField, CredentialKey};
use credsync_infrastructure::config::loader::to_toml;
use credsync_infrastructure::error_ext::ErrorContext;
use credsync_infrastructure::logging::install_logging;
use credsync_infrastructure::{AppConfig, ConfigLoader, SharedStoreFactory};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface for credsync
#[derive(Parser, Debug)]
#[command(name = "credsync")]
#[command(about = "Inspect shared credential configuration and cached credentials")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operator commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the effective configuration as TOML
    Config,
    /// Show a cached credential without refreshing it
    Peek {
        /// Owner (application) id
        owner: String,
        /// Credential field (`token`, `ticket` or a custom name)
        field: String,
    },
}

/// Result of a successful command run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked
    Done,
    /// The requested credential is not cached
    NotCached,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Done => ExitCode::SUCCESS,
            Self::NotCached => ExitCode::from(1),
        }
    }
}

impl Cli {
    /// Load the configuration this invocation points at
    pub fn load_config(&self) -> Result<AppConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        };
        loader.load()
    }
}

/// Run a parsed command, writing its output to `out`
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    let config = cli.load_config()?;
    match &cli.command {
        Command::Config => {
            let rendered = to_toml(&config)?;
            out.write_all(rendered.as_bytes())
                .context("Failed to write configuration")?;
            Ok(Outcome::Done)
        }
        Command::Peek { owner, field } => {
            install_logging(&config.logging)?;
            peek(&config, owner, field, out).await
        }
    }
}

async fn peek<W: Write>(
    config: &AppConfig,
    owner: &str,
    field: &str,
    out: &mut W,
) -> Result<Outcome> {
    let key = CredentialKey::new(
        config.source.namespace.clone(),
        owner,
        CredentialField::parse(field)?,
    )?;
    let cache = CredentialCache::new(SharedStoreFactory::create(&config.store)?);

    match cache.read(&key).await? {
        Some(value) => {
            writeln!(out, "{key} = {}", value.preview()).context("Failed to write output")?;
            Ok(Outcome::Done)
        }
        None => {
            writeln!(out, "{key}: not cached").context("Failed to write output")?;
            Ok(Outcome::NotCached)
        }
    }
}
