//! shiplog adapters - project manifest handling
//!
//! Reads and patches the version field of a TOML manifest (`[package]` for
//! Cargo-style manifests, `[project]` for pyproject-style ones) without
//! disturbing the rest of the file.

mod manifest;

pub use manifest::Manifest;
