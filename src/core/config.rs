use crate::error::{BinwrapError, Result};
use crate::utils::fs;
use std::path::{Path, PathBuf};

/// Manifest file names, in lookup order.
pub const MANIFEST_FILES: [&str; 2] = ["package.json", "binwrap.toml"];

/// Directory the binary is extracted into and launched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    dir: PathBuf,
}

impl InstallTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory containing the running executable.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe()?;
        Self::from_wrapper_path(&exe)
    }

    /// The directory containing `wrapper`. Relative paths are anchored at
    /// the current directory so the result stays valid after a `chdir`.
    pub fn from_wrapper_path(wrapper: &Path) -> Result<Self> {
        let wrapper = if wrapper.is_absolute() {
            wrapper.to_path_buf()
        } else {
            std::env::current_dir()?.join(wrapper)
        };

        let dir = wrapper.parent().ok_or_else(|| {
            BinwrapError::install_directory(format!("{} has no parent", wrapper.display()))
        })?;

        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn binary_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// A binary that exists but is not executable (for example left behind
    /// by an interrupted extraction) does not count as installed.
    pub fn is_installed(&self, name: &str) -> bool {
        fs::is_executable(&self.binary_path(name))
    }

    /// Find the manifest next to the wrapper, then one level up.
    pub fn find_manifest(&self) -> Result<PathBuf> {
        let candidates = std::iter::once(self.dir.as_path()).chain(self.dir.parent());

        for dir in candidates {
            for file in MANIFEST_FILES {
                let path = dir.join(file);
                if path.is_file() {
                    tracing::debug!(manifest = %path.display(), "found manifest");
                    return Ok(path);
                }
            }
        }

        Err(BinwrapError::ManifestNotFound {
            dir: self.dir.clone(),
        })
    }
}
