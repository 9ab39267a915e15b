//! moulberry-utils - small general-purpose utilities
//!
//! - [`probability`] - weighted random sets with sampling, popping and
//!   weighted-random-order iteration
//! - [`geometry`] - look vectors, closest points between lines, ray/box hits
//! - [`text`] - word capitalisation
//! - [`functional`] - callback traits for three-argument and fallible closures
//!
//! The [`config`] and [`output`] modules back the `mutils` command-line tool.

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
pub mod error;
pub mod functional;
pub mod geometry;
pub mod output;
pub mod paths;
pub mod probability;
pub mod text;

pub use error::{Error, Result};
