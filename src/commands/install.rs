use crate::core::bootstrap::{self, InstallOutcome};
use crate::core::config::InstallTarget;
use crate::core::platform::HostPlatform;
use crate::error::Result;
use std::path::Path;

pub fn install_binary(target: &InstallTarget, manifest: Option<&Path>, force: bool) -> Result<()> {
    let host = HostPlatform::detect();
    let metadata = bootstrap::resolve_metadata(target, manifest, &host)?;

    println!("Installing {} for {host}", metadata.name());

    match bootstrap::ensure_installed(target, &metadata, force)? {
        InstallOutcome::AlreadyInstalled => {
            println!(
                "{} is already installed in {} (use --force to reinstall)",
                metadata.name(),
                target.dir().display()
            );
        }
        InstallOutcome::Downloaded => {
            println!("Downloaded {}", metadata.url());
            println!(
                "✅ Installed {}",
                target.binary_path(metadata.name()).display()
            );
        }
    }

    Ok(())
}
