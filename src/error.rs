//! # Error Handling
//!
//! This module defines the centralized error type for the `autoloader`
//! generator. It uses the `thiserror` library to create an `Error` enum that
//! covers every failure mode of a generation pass.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum representing all possible errors. Each variant
//!   carries enough context (usually the offending path) to act on it.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! Every error is fatal to the pass that raised it. A missing configuration
//! fragment is not an error and never produces one of these variants.

use thiserror::Error;

/// Main error type for generator operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration fragment contained malformed JSON, or a section that
    /// must be an object was something else.
    #[error("Configuration parsing error in {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// The `autoloader.yaml` settings file could not be used.
    #[error("Settings error: {message}")]
    Settings { message: String },

    /// The source tree walk failed (permission denied, vanished entry, ...).
    #[error("Source tree walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A read or write against the host filesystem failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A path could not be interpreted relative to the source root.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The merged configuration could not be serialized.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
