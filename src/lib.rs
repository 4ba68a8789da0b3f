//! embedfiles - Embed files into a generated Rust module
//!
//! Expands glob patterns, streams every matched file into byte literals and
//! renders a self-contained module exposing a small read-only file system
//! over the embedded data.
//!
//! ```no_run
//! use embedfiles::config::{Config, Output};
//!
//! let config = Config::new("web", "Assets").with_output(Output::from_arg("src/assets.rs"));
//! embedfiles::generate(&config, &["static/*.html", "static/*.css"]).unwrap();
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod encoder;
pub mod error;
pub mod expand;
pub mod generate;
pub mod manifest;
pub mod render;

pub use error::{EXIT_FAILURE_CODE, EmbedError};
pub use generate::{Summary, generate};
pub use manifest::{FileEntry, Manifest};
