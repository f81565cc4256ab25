//! Default values for the generator's project layout.
//!
//! This module provides the conventional locations the generator reads from
//! and writes to, so that settings, commands and tests agree on one layout.

/// Environment selected when none is supplied.
pub const DEFAULT_ENVIRONMENT: &str = "local";

/// Name of the optional settings file looked up in the project root.
pub const SETTINGS_FILE: &str = "autoloader.yaml";

/// Source tree directory, relative to the project root.
pub const SOURCE_DIR: &str = "src";

/// Directory holding the JSON fragments, relative to the source root.
pub const CONFIG_DIR: &str = "config";

pub const CONFIG_FRAGMENT: &str = "config.json";
pub const STAGE_FRAGMENT: &str = "stage.json";
pub const ROUTING_FRAGMENT: &str = "routing.json";

/// Generated configuration module, relative to the config directory.
pub const CONFIG_MODULE: &str = "Config.js";

/// Generated manifest module, relative to the source root.
pub const MANIFEST_MODULE: &str = "Packages.js";

/// Extension (without the dot) of the files scanned for exported classes.
pub const SOURCE_EXTENSION: &str = "js";

/// Prefix of every import specifier written into the manifest.
pub const IMPORT_ROOT: &str = "/src";

/// Line ending placed between generated statements.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
