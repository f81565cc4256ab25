//! # Config Assembler
//!
//! Builds the runtime configuration module from up to three JSON fragments
//! found in the project's config directory:
//!
//! - `config.json`: environment-keyed blocks plus an optional `all` block
//! - `stage.json`: flat overrides for the `stage` section
//! - `routing.json`: flat overrides for the `routing` section
//!
//! ## Merge Order
//!
//! The accumulator starts as `{ "stage": {}, "routing": {} }`. Every merge is
//! shallow: a key from the incoming object replaces the accumulator's key of
//! the same name, nested objects are not combined.
//!
//! 1. The block named after the environment, if any.
//! 2. The `all` block, if any. It is applied *after* the environment block,
//!    so on a key collision `all` wins. Existing projects depend on this, so
//!    it is kept as is.
//! 3. `stage.json` into `stage`.
//! 4. `routing.json` into `routing`.
//!
//! A missing fragment contributes nothing, and so does a block whose value is
//! falsy (`null`, `false`, `0`, `""`). A fragment that is not valid JSON, or a
//! section that must be an object but holds any other non-object value,
//! fails the whole assembly.

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::defaults::LINE_ENDING;
use crate::error::{Error, Result};
use crate::settings::GeneratorSettings;

/// A JSON object with string keys
pub type JsonObject = Map<String, Value>;

/// Key of the block applied for every environment
pub const ALL_ENVIRONMENTS_KEY: &str = "all";
pub const STAGE_KEY: &str = "stage";
pub const ROUTING_KEY: &str = "routing";

/// Locations of the three fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentPaths {
    pub config: PathBuf,
    pub stage: PathBuf,
    pub routing: PathBuf,
}

impl FragmentPaths {
    pub fn new(source_root: &Path, settings: &GeneratorSettings) -> Self {
        let dir = settings.config_dir(source_root);
        Self {
            config: dir.join(&settings.config_fragment),
            stage: dir.join(&settings.stage_fragment),
            routing: dir.join(&settings.routing_fragment),
        }
    }
}

/// One parsed fragment file
#[derive(Debug, Clone)]
pub struct Fragment {
    pub path: PathBuf,
    pub value: Value,
}

impl Fragment {
    /// The fragment's top level as an object.
    ///
    /// A falsy value counts as an empty object; anything else that is not an
    /// object is malformed input.
    pub fn as_object(&self) -> Result<Option<&JsonObject>> {
        expect_object(&self.path, "top level", &self.value)
    }

    /// A named sub-object of the top level, if present and not falsy.
    pub fn section(&self, key: &str) -> Result<Option<&JsonObject>> {
        match self.as_object()?.and_then(|object| object.get(key)) {
            Some(value) => expect_object(&self.path, key, value),
            None => Ok(None),
        }
    }
}

fn expect_object<'a>(path: &Path, what: &str, value: &'a Value) -> Result<Option<&'a JsonObject>> {
    match value {
        Value::Object(object) => Ok(Some(object)),
        other if is_falsy(other) => Ok(None),
        other => Err(Error::ConfigParse {
            path: path.display().to_string(),
            message: format!("`{}` must be a JSON object, found {}", what, json_kind(other)),
        }),
    }
}

/// `null`, `false`, zero and the empty string.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read and parse a fragment. A missing file yields `None`.
pub fn load_fragment(path: &Path) -> Result<Option<Fragment>> {
    if !path.exists() {
        log::debug!("No fragment at {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read fragment '{}': {}", path.display(), e),
    })?;
    let value = serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(Fragment {
        path: path.to_path_buf(),
        value,
    }))
}

/// Shallow merge: every key of `source` replaces the same key in `target`.
pub fn merge_shallow(target: &mut JsonObject, source: &JsonObject) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

/// Merge already-loaded fragments for `environment`.
pub fn merge_fragments(
    environment: &str,
    config: Option<&Fragment>,
    stage: Option<&Fragment>,
    routing: Option<&Fragment>,
) -> Result<JsonObject> {
    let mut merged = JsonObject::new();
    merged.insert(STAGE_KEY.to_string(), Value::Object(JsonObject::new()));
    merged.insert(ROUTING_KEY.to_string(), Value::Object(JsonObject::new()));

    if let Some(fragment) = config {
        if let Some(block) = fragment.section(environment)? {
            merge_shallow(&mut merged, block);
        }
        // `all` after the environment block: generic keys win on collision.
        if let Some(block) = fragment.section(ALL_ENVIRONMENTS_KEY)? {
            merge_shallow(&mut merged, block);
        }
    }

    let origin = config.map(|f| f.path.as_path()).unwrap_or_else(|| Path::new(""));
    merge_section(&mut merged, STAGE_KEY, origin, stage)?;
    merge_section(&mut merged, ROUTING_KEY, origin, routing)?;

    Ok(merged)
}

/// Merge an override fragment into `merged[key]`, which must stay an object.
fn merge_section(
    merged: &mut JsonObject,
    key: &str,
    origin: &Path,
    overrides: Option<&Fragment>,
) -> Result<()> {
    let section = merged
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(JsonObject::new()));
    if is_falsy(section) {
        *section = Value::Object(JsonObject::new());
    }
    let kind = json_kind(section);
    let target = section.as_object_mut().ok_or_else(|| Error::ConfigParse {
        path: origin.display().to_string(),
        message: format!("`{}` must be a JSON object, found {}", key, kind),
    })?;

    if let Some(fragment) = overrides {
        if let Some(object) = fragment.as_object()? {
            merge_shallow(target, object);
        }
    }
    Ok(())
}

/// Assemble the configuration for `environment` using the default layout.
pub fn assemble(source_root: &Path, environment: &str) -> Result<JsonObject> {
    assemble_with(
        &FragmentPaths::new(source_root, &GeneratorSettings::default()),
        environment,
    )
}

/// Assemble the configuration for `environment` from explicit fragment paths.
pub fn assemble_with(paths: &FragmentPaths, environment: &str) -> Result<JsonObject> {
    let config = load_fragment(&paths.config)?;
    let stage = load_fragment(&paths.stage)?;
    let routing = load_fragment(&paths.routing)?;
    merge_fragments(environment, config.as_ref(), stage.as_ref(), routing.as_ref())
}

/// Serialize the merged configuration as JSON with four-space indentation.
pub fn to_pretty_json(config: &JsonObject) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    config
        .serialize(&mut serializer)
        .map_err(|e| Error::Serialization {
            message: e.to_string(),
        })?;
    String::from_utf8(buffer).map_err(|e| Error::Serialization {
        message: e.to_string(),
    })
}

/// Render the generated configuration module.
pub fn render_module(config: &JsonObject) -> Result<String> {
    Ok(format!(
        "const config = {};{}export {{ config }};",
        to_pretty_json(config)?,
        LINE_ENDING
    ))
}
