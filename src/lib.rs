//! # Autoloader Library
//!
//! Pre-build code generation for applications that register their view and
//! model classes through a generated package manifest. Before every
//! compilation the generator produces two modules inside the project's
//! source tree:
//!
//! - `src/config/Config.js`: the runtime configuration, merged from JSON
//!   fragments for the selected environment.
//! - `src/Packages.js`: imports for every exported class under `src/view`
//!   and `src/model`, plus a key → class association list.
//!
//! ## Quick Example
//!
//! ```no_run
//! use autoloader::generator::Generator;
//! use autoloader::settings::GeneratorSettings;
//!
//! let mut generator = Generator::new(".", "local", GeneratorSettings::default());
//! let report = generator.before_compile()?;
//! println!("{} module(s) written", report.writes());
//! # Ok::<(), autoloader::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Config assembly (`config`)**: loads the fragments and merges them with
//!   a fixed precedence.
//! - **Discovery (`scan`)**: walks the source tree and finds exported classes
//!   by a line-anchored textual convention.
//! - **Classification (`classify`)**: maps a class's location to a registry
//!   key and import name, or excludes it.
//! - **Manifest (`manifest`)**: collects registrations and renders the module.
//! - **Generator (`generator`)**: owns the per-pipeline "last emitted" cache
//!   and skips writes that would not change anything.
//!
//! Writes go through `write`, which replaces files atomically.

pub mod classify;
pub mod config;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod scan;
pub mod settings;
pub mod write;

#[cfg(test)]
mod classify_proptest;
