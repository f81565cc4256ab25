//! # Manifest Builder
//!
//! Scans the source tree for exported classes and renders the package
//! manifest module: one import per registered class, followed by an
//! association list from registry key to class reference.
//!
//! ```text
//! import { Widget } from "/src/view/Widget";
//! import { Box as shape_Box } from "/src/model/shape/Box";
//! const packages=[
//! ["Widget", Widget],
//! ["shape.Box", shape_Box]
//! ];
//! export { packages };
//! ```
//!
//! Entries appear in discovery order. Consumers look entries up by key, so the
//! order only matters for producing identical output from an identical tree.
//! An empty manifest renders `const packages=[];`.

use rayon::prelude::*;
use serde_json::Value;
use std::fmt;
use std::path::Path;

use crate::classify::{Classification, RelativeSource};
use crate::defaults::LINE_ENDING;
use crate::error::Result;
use crate::scan::{self, DiscoveredSymbol};
use crate::settings::GeneratorSettings;

/// One `import { .. } from ".."` line of the manifest module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub class_name: String,
    /// Local name when it differs from the exported name
    pub alias: Option<String>,
    pub specifier: String,
}

impl ImportStatement {
    /// The name this import binds in the manifest module
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.class_name)
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(
                f,
                "import {{ {} as {} }} from \"{}\";",
                self.class_name, alias, self.specifier
            ),
            None => write!(
                f,
                "import {{ {} }} from \"{}\";",
                self.class_name, self.specifier
            ),
        }
    }
}

/// Registry key paired with the local name of the imported class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub key: String,
    pub reference: String,
}

/// The ordered imports and association list of a manifest module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    imports: Vec<ImportStatement>,
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn imports(&self) -> &[ImportStatement] {
        &self.imports
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the reference registered under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.reference.as_str())
    }

    /// Whether an import already binds `local_name`.
    pub fn binds(&self, local_name: &str) -> bool {
        self.imports
            .iter()
            .any(|import| import.local_name() == local_name)
    }

    /// Classify `symbol` and append it when it is a view or a model.
    ///
    /// Returns whether the symbol was registered.
    pub fn register(
        &mut self,
        symbol: &DiscoveredSymbol,
        source_root: &Path,
        import_root: &str,
    ) -> Result<bool> {
        let location = RelativeSource::new(&symbol.path, source_root)?;
        let (key, alias) = match location.classify(&symbol.class_name) {
            Classification::View { name } => (name, None),
            Classification::Model { key, alias } => (key, Some(alias)),
            Classification::Excluded => {
                log::debug!(
                    "{} in {} is outside view/model, not registered",
                    symbol.class_name,
                    symbol.path.display()
                );
                return Ok(false);
            }
        };

        let import = ImportStatement {
            class_name: symbol.class_name.clone(),
            alias,
            specifier: location.import_specifier(import_root),
        };
        if self.binds(import.local_name()) {
            log::warn!(
                "`{}` from {} is already imported; the manifest module will not load",
                import.local_name(),
                symbol.path.display()
            );
        }
        if self.get(&key).is_some() {
            log::warn!(
                "Key \"{}\" from {} is registered twice; lookups resolve to the first",
                key,
                symbol.path.display()
            );
        }
        self.entries.push(ManifestEntry {
            key,
            reference: import.local_name().to_string(),
        });
        self.imports.push(import);
        Ok(true)
    }

    /// The association list literal, `[]` when there are no entries.
    pub fn render_entries(&self) -> String {
        if self.entries.is_empty() {
            return "[]".to_string();
        }

        let rows: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("[{}, {}]", Value::from(entry.key.as_str()), entry.reference))
            .collect();
        let separator = format!(",{}", LINE_ENDING);
        format!(
            "[{eol}{}{eol}]",
            rows.join(separator.as_str()),
            eol = LINE_ENDING
        )
    }

    /// Render the complete manifest module.
    pub fn render(&self) -> String {
        let mut module = String::new();
        for import in &self.imports {
            module.push_str(&import.to_string());
            module.push_str(LINE_ENDING);
        }
        module.push_str("const packages=");
        module.push_str(&self.render_entries());
        module.push(';');
        module.push_str(LINE_ENDING);
        module.push_str("export { packages };");
        module
    }
}

/// Build the manifest for `source_root` using the default layout.
pub fn build(source_root: &Path) -> Result<Manifest> {
    build_with(source_root, &GeneratorSettings::default())
}

/// Build the manifest for `source_root`.
///
/// Files are read in parallel; registration follows discovery order.
pub fn build_with(source_root: &Path, settings: &GeneratorSettings) -> Result<Manifest> {
    let files = scan::discover_source_files(source_root, &settings.source_extension)?;

    let per_file: Vec<Vec<DiscoveredSymbol>> = files
        .par_iter()
        .map(|path| scan::scan_file(path))
        .collect::<Result<_>>()?;

    let mut manifest = Manifest::new();
    for symbol in per_file.iter().flatten() {
        manifest.register(symbol, source_root, &settings.import_root)?;
    }

    log::debug!(
        "Manifest for {} has {} entries",
        source_root.display(),
        manifest.len()
    );
    Ok(manifest)
}
