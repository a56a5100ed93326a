//! binwrap library
//!
//! Post-install bootstrapper for packages that ship a thin wrapper around a
//! prebuilt binary: resolve the download URL for the host platform, fetch
//! and unpack the archive next to the wrapper, then proxy every invocation
//! to the real binary.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
