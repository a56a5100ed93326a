use crate::error::{BinwrapError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Manifest contents as read from disk, before validation.
///
/// Fields are kept loosely typed so that a manifest with the wrong shape
/// still deserializes and the validator can report which field is wrong.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawManifest {
    #[serde(default)]
    pub version: Option<Value>,
    #[serde(default)]
    pub binary: Option<Value>,
}

/// A manifest that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    version: String,
    binary: BinarySpec,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySpec {
    pub name: String,
    /// Download URL template, may contain `{{arch}}`, `{{platform}}`,
    /// `{{version}}` and `{{bin_name}}`.
    pub url: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    #[error("'version' property must be specified")]
    MissingVersion,

    #[error("'version' property must be a string")]
    InvalidVersion,

    #[error("'binary' property must be defined and be an object")]
    InvalidBinary,

    #[error("'name' property is necessary")]
    MissingName,

    #[error("'name' property must be a string")]
    InvalidName,

    #[error("'url' property is required")]
    MissingUrl,

    #[error("'url' property must be a string")]
    InvalidUrl,
}

/// Presence state of a single manifest field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Field<T> {
    Missing,
    Invalid,
    Valid(T),
}

impl Field<String> {
    /// `null` and the empty string both count as missing.
    fn string(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Field::Missing,
            Some(Value::String(s)) if s.is_empty() => Field::Missing,
            Some(Value::String(s)) => Field::Valid(s.clone()),
            Some(_) => Field::Invalid,
        }
    }
}

impl RawManifest {
    /// Load a manifest, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let parsed = if is_toml {
            Self::parse_toml(&content)
        } else {
            Self::parse_json(&content)
        };

        parsed.map_err(|message| BinwrapError::manifest_parse(path, message))
    }

    pub fn parse_json(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Check the required fields in order, stopping at the first failure.
    pub fn validate(&self) -> std::result::Result<PackageManifest, ManifestError> {
        let version = match Field::string(self.version.as_ref()) {
            Field::Missing => return Err(ManifestError::MissingVersion),
            Field::Invalid => return Err(ManifestError::InvalidVersion),
            Field::Valid(version) => version,
        };

        let binary = match &self.binary {
            Some(Value::Object(binary)) => binary,
            _ => return Err(ManifestError::InvalidBinary),
        };

        let name = match Field::string(binary.get("name")) {
            Field::Missing => return Err(ManifestError::MissingName),
            Field::Invalid => return Err(ManifestError::InvalidName),
            Field::Valid(name) => name,
        };

        let url = match Field::string(binary.get("url")) {
            Field::Missing => return Err(ManifestError::MissingUrl),
            Field::Invalid => return Err(ManifestError::InvalidUrl),
            Field::Valid(url) => url,
        };

        Ok(PackageManifest {
            version,
            binary: BinarySpec { name, url },
        })
    }
}

impl PackageManifest {
    pub fn new(version: &str, name: &str, url: &str) -> Self {
        Self {
            version: version.to_string(),
            binary: BinarySpec {
                name: name.to_string(),
                url: url.to_string(),
            },
        }
    }

    /// Load and validate in one step.
    pub fn load(path: &Path) -> Result<Self> {
        RawManifest::load(path)?
            .validate()
            .map_err(|source| BinwrapError::invalid_manifest(path, source))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn binary(&self) -> &BinarySpec {
        &self.binary
    }
}
