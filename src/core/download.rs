use crate::error::{BinwrapError, Result};
use crate::utils::fs;
use flate2::read::GzDecoder;
use std::io::{self, Cursor, Read};
use std::path::Path;
use tar::Archive;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        let client = build_client(concat!("binwrap/", env!("CARGO_PKG_VERSION")))?;
        Ok(Self { client })
    }

    /// Download `url` and unpack it into `target_dir`.
    ///
    /// The body is streamed straight into the extractor; nothing is buffered
    /// on disk. On failure the directory may be left partially populated.
    pub fn fetch_and_extract(&self, url: &str, target_dir: &Path) -> Result<()> {
        tracing::info!(%url, target = %target_dir.display(), "downloading");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| BinwrapError::Download {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BinwrapError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        extract_archive(response, target_dir)?;

        tracing::info!(target = %target_dir.display(), "extraction completed");
        Ok(())
    }
}

fn build_client(user_agent: &str) -> Result<reqwest::blocking::Client> {
    // No timeout: a slow mirror must not fail the install.
    reqwest::blocking::Client::builder()
        .user_agent(user_agent)
        .timeout(None)
        .build()
        .map_err(|source| BinwrapError::HttpClient { source })
}

/// Unpack a tar stream into `target_dir`, gunzipping it first when the
/// stream starts with the gzip magic bytes.
pub fn extract_archive<R: Read>(mut reader: R, target_dir: &Path) -> Result<()> {
    fs::ensure_dir_exists(target_dir)?;

    let into_extraction_error = |source| BinwrapError::Extraction {
        path: target_dir.to_path_buf(),
        source,
    };

    let mut magic = [0u8; 2];
    let read = read_prefix(&mut reader, &mut magic).map_err(into_extraction_error)?;
    let stream = Cursor::new(magic[..read].to_vec()).chain(reader);

    if read == GZIP_MAGIC.len() && magic == GZIP_MAGIC {
        tracing::debug!("gzip stream detected");
        unpack(GzDecoder::new(stream), target_dir).map_err(into_extraction_error)
    } else {
        tracing::debug!("treating stream as plain tar");
        unpack(stream, target_dir).map_err(into_extraction_error)
    }
}

fn unpack<R: Read>(reader: R, target_dir: &Path) -> io::Result<()> {
    let mut archive = Archive::new(reader);
    archive.set_preserve_permissions(true);
    archive.set_overwrite(true);
    archive.unpack(target_dir)
}

/// Fill `buf` from `reader` unless the stream ends first; returns the number
/// of bytes read. A single `read` may legally return fewer bytes than asked.
fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
