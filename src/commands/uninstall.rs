use crate::core::bootstrap;
use crate::core::config::InstallTarget;
use crate::core::platform::HostPlatform;
use crate::error::Result;
use crate::utils::fs;
use std::path::Path;

/// Remove the resolved binary from the install directory. Other files the
/// archive may have contained are left alone.
pub fn uninstall_binary(target: &InstallTarget, manifest: Option<&Path>) -> Result<()> {
    let metadata = bootstrap::resolve_metadata(target, manifest, &HostPlatform::detect())?;
    let path = target.binary_path(metadata.name());

    if fs::remove_file(&path)? {
        println!("✅ Removed {}", path.display());
    } else {
        println!("{} is not installed", path.display());
    }

    Ok(())
}
