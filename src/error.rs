use crate::core::manifest::ManifestError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BinwrapError>;

#[derive(Error, Debug)]
pub enum BinwrapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {file}: {source}")]
    InvalidManifest {
        file: String,
        #[source]
        source: ManifestError,
    },

    #[error("No package.json or binwrap.toml found in {dir} or its parent")]
    ManifestNotFound { dir: PathBuf },

    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Installation is not supported for this architecture: {arch}")]
    UnsupportedArchitecture { arch: String },

    #[error("Installation is not supported for this platform: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("Download failed: {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to initialize HTTP client: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    #[error("Download failed: {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Extraction into {path} failed: {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Binary not found: {path}")]
    BinaryNotFound { path: PathBuf },

    #[error("Failed to launch {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine install directory: {message}")]
    InstallDirectory { message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

impl BinwrapError {
    pub fn manifest_parse<S: Into<String>>(path: impl Into<PathBuf>, message: S) -> Self {
        BinwrapError::ManifestParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Validation failure, labelled with the manifest's file name
    /// (`Invalid package.json: ...`).
    pub fn invalid_manifest(path: &Path, source: ManifestError) -> Self {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "manifest".to_string());
        BinwrapError::InvalidManifest { file, source }
    }

    pub fn install_directory<S: Into<String>>(message: S) -> Self {
        BinwrapError::InstallDirectory {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_messages_name_the_raw_token() {
        let err = BinwrapError::UnsupportedArchitecture {
            arch: "mips".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Installation is not supported for this architecture: mips"
        );

        let err = BinwrapError::UnsupportedPlatform {
            platform: "aix".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Installation is not supported for this platform: aix"
        );
    }

    #[test]
    fn test_invalid_manifest_names_the_file() {
        let err = BinwrapError::invalid_manifest(
            Path::new("/opt/pkg/package.json"),
            ManifestError::MissingVersion,
        );
        assert_eq!(
            err.to_string(),
            "Invalid package.json: 'version' property must be specified"
        );

        let err = BinwrapError::invalid_manifest(
            Path::new("binwrap.toml"),
            ManifestError::MissingUrl,
        );
        assert_eq!(err.to_string(), "Invalid binwrap.toml: 'url' property is required");
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BinwrapError = io_err.into();
        assert!(matches!(err, BinwrapError::Io(_)));
    }
}
