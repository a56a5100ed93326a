//! Host platform detection and download URL resolution.

use crate::core::manifest::PackageManifest;
use crate::error::{BinwrapError, Result};
use serde::Serialize;
use std::fmt;

/// Canonical OS token that triggers the `.exe` suffix.
pub const WINDOWS_TOKEN: &str = "windows";

/// Immutable lookup table from a host-reported identifier to the token used
/// in download URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalMap {
    entries: &'static [(&'static str, &'static str)],
}

impl CanonicalMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, raw: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == raw)
            .map(|(_, canonical)| *canonical)
    }

    pub fn raw_tokens(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }
}

pub const ARCH_MAPPING: CanonicalMap = CanonicalMap::new(&[
    ("ia32", "386"),
    ("x64", "amd64"),
    ("arm", "arm"),
    ("arm64", "arm64"),
]);

pub const PLATFORM_MAPPING: CanonicalMap = CanonicalMap::new(&[
    ("darwin", "darwin"),
    ("linux", "linux"),
    ("win32", WINDOWS_TOKEN),
    ("freebsd", "freebsd"),
]);

/// Raw architecture and OS identifiers of a host.
///
/// The vocabulary is the one the mapping tables are keyed by (`x64`,
/// `ia32`, `win32`, ...), not Rust's target names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    pub arch: String,
    pub os: String,
}

impl HostPlatform {
    pub fn new(arch: &str, os: &str) -> Self {
        Self {
            arch: arch.to_string(),
            os: os.to_string(),
        }
    }

    /// Detect the platform this binary was compiled for.
    pub fn detect() -> Self {
        Self::new(
            Self::raw_arch(std::env::consts::ARCH),
            Self::raw_os(std::env::consts::OS),
        )
    }

    fn raw_arch(target_arch: &str) -> &str {
        match target_arch {
            "x86" => "ia32",
            "x86_64" => "x64",
            "aarch64" => "arm64",
            other => other,
        }
    }

    fn raw_os(target_os: &str) -> &str {
        match target_os {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

/// Resolved binary name and download URL for one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformMetadata {
    name: String,
    url: String,
}

impl PlatformMetadata {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    arch_map: &'a CanonicalMap,
    platform_map: &'a CanonicalMap,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(&ARCH_MAPPING, &PLATFORM_MAPPING)
    }
}

impl<'a> Resolver<'a> {
    pub fn new(arch_map: &'a CanonicalMap, platform_map: &'a CanonicalMap) -> Self {
        Self {
            arch_map,
            platform_map,
        }
    }

    pub fn resolve(
        &self,
        manifest: &PackageManifest,
        host: &HostPlatform,
    ) -> Result<PlatformMetadata> {
        let arch = self.arch_map.get(&host.arch).ok_or_else(|| {
            BinwrapError::UnsupportedArchitecture {
                arch: host.arch.clone(),
            }
        })?;
        let platform = self.platform_map.get(&host.os).ok_or_else(|| {
            BinwrapError::UnsupportedPlatform {
                platform: host.os.clone(),
            }
        })?;

        let name = binary_name(&manifest.binary().name, platform);
        let version = strip_version_prefix(manifest.version());
        let url = render_url_template(&manifest.binary().url, arch, platform, version, &name);

        tracing::debug!(%host, arch, platform, version, %name, %url, "resolved download");

        Ok(PlatformMetadata { name, url })
    }
}

/// Strip exactly one leading `v`: "v1.2.3" -> "1.2.3", "vv1.2.3" -> "v1.2.3".
pub fn strip_version_prefix(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

fn binary_name(name: &str, platform: &str) -> String {
    if platform == WINDOWS_TOKEN {
        format!("{name}.exe")
    } else {
        name.to_string()
    }
}

/// Replace every occurrence of the four placeholders.
pub fn render_url_template(
    template: &str,
    arch: &str,
    platform: &str,
    version: &str,
    bin_name: &str,
) -> String {
    template
        .replace("{{arch}}", arch)
        .replace("{{platform}}", platform)
        .replace("{{version}}", version)
        .replace("{{bin_name}}", bin_name)
}
