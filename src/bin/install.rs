//! `binwrap-install` — install-time companion of the `binwrap` wrapper.
//!
//! Meant to run from a package's post-install hook:
//!   binwrap-install install      → fetch the binary for this host
//!   binwrap-install resolve      → show what would be fetched
//!   binwrap-install uninstall    → remove the fetched binary

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use binwrap::commands;
use binwrap::core::config::InstallTarget;
use binwrap::utils::logging;

#[derive(Parser)]
#[clap(name = "binwrap-install")]
#[clap(about = "Fetch the prebuilt binary a binwrap wrapper proxies to")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Install directory (default: the directory containing this executable)
    #[clap(long, global = true)]
    dir: Option<PathBuf>,
    /// Manifest to read (default: package.json or binwrap.toml next to the
    /// install directory or one level up)
    #[clap(long, global = true)]
    manifest: Option<PathBuf>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and unpack the binary for this host
    Install {
        /// Download even if the binary is already present
        #[clap(long)]
        force: bool,
    },
    /// Print the resolved binary name and download URL without downloading
    Resolve {
        /// Print as JSON
        #[clap(long)]
        json: bool,
    },
    /// Remove the installed binary
    Uninstall,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let result = install_target(cli.dir).and_then(|target| {
        let manifest = cli.manifest.as_deref();
        match cli.command {
            Commands::Install { force } => {
                commands::install::install_binary(&target, manifest, force)
            }
            Commands::Resolve { json } => {
                commands::resolve::show_resolution(&target, manifest, json)
            }
            Commands::Uninstall => commands::uninstall::uninstall_binary(&target, manifest),
        }
    })
    .map_err(|e| anyhow::anyhow!(e));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn install_target(dir: Option<PathBuf>) -> binwrap::error::Result<InstallTarget> {
    match dir {
        Some(dir) => {
            let dir = if dir.is_absolute() {
                dir
            } else {
                std::env::current_dir()?.join(dir)
            };
            Ok(InstallTarget::new(dir))
        }
        None => InstallTarget::from_current_exe(),
    }
}
