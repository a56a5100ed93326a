pub mod bootstrap;
pub mod config;
pub mod download;
pub mod launcher;
pub mod manifest;
pub mod platform;
