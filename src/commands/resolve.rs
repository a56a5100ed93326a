use crate::core::bootstrap;
use crate::core::config::InstallTarget;
use crate::core::platform::HostPlatform;
use crate::error::Result;
use std::path::Path;

/// Print what `install` would fetch, without touching the network.
pub fn show_resolution(target: &InstallTarget, manifest: Option<&Path>, json: bool) -> Result<()> {
    let host = HostPlatform::detect();
    let metadata = bootstrap::resolve_metadata(target, manifest, &host)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        println!("Host:   {host}");
        println!("Binary: {}", target.binary_path(metadata.name()).display());
        println!("URL:    {}", metadata.url());
    }

    Ok(())
}
