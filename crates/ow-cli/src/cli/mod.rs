//! CLI for the ow Nextcloud client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ow_core::config;
use ow_core::diagnostics::Diagnostics;
use ow_core::ops::LockAction;
use ow_core::webdav::{CurlTransport, DavClient};
use std::path::PathBuf;

use commands::{run_dir_album, run_internal_link, run_lock};

/// Top-level CLI for ow.
#[derive(Debug, Parser)]
#[command(name = "ow")]
#[command(about = "ow: Nextcloud command-line client", long_about = None)]
pub struct Cli {
    /// Enable debug messages on stderr.
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the internal link of a synced file or folder.
    #[command(visible_alias = "i")]
    InternalLink {
        /// Local path inside the sync folder.
        path: PathBuf,
    },

    /// Lock a synced file (requires the Temporary files lock app).
    #[command(visible_alias = "l")]
    Lock {
        /// Local path inside the sync folder.
        path: PathBuf,
    },

    /// Unlock a file locked with `lock`.
    #[command(visible_alias = "u")]
    Unlock {
        /// Local path inside the sync folder.
        path: PathBuf,
    },

    /// Create a Photos album from a synced folder and copy its images and videos into it.
    #[command(visible_alias = "d")]
    DirAlbum {
        /// Local folder inside the sync folder; a leading `YYYY-MM-DD ` is dropped from the album name.
        path: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn run(self) -> Result<()> {
        tracing::debug!("action is {:?}", self.command);
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let credentials = cfg.credentials();
        let transport = CurlTransport::new();
        let client = DavClient::new(&transport, &credentials);

        match self.command {
            CliCommand::InternalLink { path } => run_internal_link(&cfg, &client, &path)?,
            CliCommand::Lock { path } => run_lock(&cfg, &client, &path, LockAction::Lock)?,
            CliCommand::Unlock { path } => run_lock(&cfg, &client, &path, LockAction::Unlock)?,
            CliCommand::DirAlbum { path } => {
                let diagnostics = Diagnostics::new(self.debug);
                run_dir_album(&cfg, &client, &diagnostics, &path)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
