//! The install-time and run-time pipelines, composed from the core pieces.
//!
//! Nothing here exits the process; every failure comes back as a
//! [`BinwrapError`] for the binary's `main` to report.

use crate::core::config::InstallTarget;
use crate::core::download::Downloader;
use crate::core::launcher::{Launcher, ProcessResult};
use crate::core::manifest::PackageManifest;
use crate::core::platform::{HostPlatform, PlatformMetadata, Resolver};
use crate::error::{BinwrapError, Result};
use crate::utils::fs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Whether [`ensure_installed`] had to download anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Downloaded,
    AlreadyInstalled,
}

/// Validate the manifest and resolve it for `host`. Never touches the
/// network.
pub fn resolve_metadata(
    target: &InstallTarget,
    manifest_path: Option<&Path>,
    host: &HostPlatform,
) -> Result<PlatformMetadata> {
    let manifest_path = match manifest_path {
        Some(path) => path.to_path_buf(),
        None => target.find_manifest()?,
    };

    let manifest = PackageManifest::load(&manifest_path)?;
    Resolver::default().resolve(&manifest, host)
}

/// Download and unpack the binary unless it is already present.
pub fn ensure_installed(
    target: &InstallTarget,
    metadata: &PlatformMetadata,
    force: bool,
) -> Result<InstallOutcome> {
    if !force && target.is_installed(metadata.name()) {
        tracing::debug!(name = metadata.name(), "binary already installed");
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    Downloader::new()?.fetch_and_extract(metadata.url(), target.dir())?;
    verify_installed(target, metadata)?;

    Ok(InstallOutcome::Downloaded)
}

/// Check the archive actually delivered the resolved binary.
pub fn verify_installed(target: &InstallTarget, metadata: &PlatformMetadata) -> Result<PathBuf> {
    let path = target.binary_path(metadata.name());
    if !path.is_file() {
        return Err(BinwrapError::BinaryNotFound { path });
    }

    if !fs::is_executable(&path) {
        tracing::warn!(binary = %path.display(), "extracted binary is not executable");
    }

    Ok(path)
}

/// Run path: `Resolving → (Fetching) → Launching`. Returns the child's exit
/// status; every earlier failure skips the launch.
pub fn run<I>(target: &InstallTarget, host: &HostPlatform, args: I) -> Result<ProcessResult>
where
    I: IntoIterator<Item = OsString>,
{
    let metadata = resolve_metadata(target, None, host)?;
    ensure_installed(target, &metadata, false)?;

    let working_dir = std::env::current_dir()?;
    Launcher::new(target.dir(), working_dir).launch(metadata.name(), args)
}
