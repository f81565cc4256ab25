//! Classification of discovered classes by location
//!
//! The first directory below the source root decides whether a class is
//! registered and under which key:
//!
//! | Location                    | Outcome                                  |
//! |-----------------------------|------------------------------------------|
//! | `view/**/Name.js`           | `View`: key and import name `Name`        |
//! | `model/shape/Box.js`        | `Model`: key `shape.Box`, alias `shape_Box` |
//! | anywhere else               | `Excluded`                               |
//!
//! Model keys and aliases come from the path rather than the class name so
//! that two `Box` classes in different model directories can be imported
//! side by side. Both are joined from the same segment list, which keeps
//! them in step: same segments, different separator.
//!
//! Import specifiers are the import root joined with every segment, extension
//! removed, for views and models alike: `model/shape/Box.js` is imported from
//! `/src/model/shape/Box`. The bundler resolves the extension.

use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Directory whose classes are registered under their own name
pub const VIEW_DIR: &str = "view";

/// Directory whose classes are registered under a path-derived key
pub const MODEL_DIR: &str = "model";

pub const KEY_SEPARATOR: &str = ".";
pub const ALIAS_SEPARATOR: &str = "_";

/// Registration decision for one discovered class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    View { name: String },
    Model { key: String, alias: String },
    Excluded,
}

/// A source file's location relative to the source root, extension removed.
///
/// `view/top/TopView.js` becomes the segments `["view", "top", "TopView"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeSource {
    segments: Vec<String>,
}

impl RelativeSource {
    /// Build from a file path under `source_root`.
    pub fn new(file: &Path, source_root: &Path) -> Result<Self> {
        let relative = file.strip_prefix(source_root).map_err(|_| Error::Path {
            message: format!(
                "'{}' is not under source root '{}'",
                file.display(),
                source_root.display()
            ),
        })?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let part = part.to_str().ok_or_else(|| Error::Path {
                        message: format!("Non UTF-8 path: {}", file.display()),
                    })?;
                    segments.push(part.to_string());
                }
                Component::CurDir => {}
                _ => {
                    return Err(Error::Path {
                        message: format!("Unexpected component in '{}'", relative.display()),
                    })
                }
            }
        }

        let file_name = segments.pop().ok_or_else(|| Error::Path {
            message: format!("'{}' names the source root itself", file.display()),
        })?;
        segments.push(strip_extension(&file_name).to_string());

        Ok(Self { segments })
    }

    /// Build directly from segments; the last one is the file stem.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The top-level directory, or `None` for a file directly in the root.
    pub fn top_directory(&self) -> Option<&str> {
        if self.segments.len() > 1 {
            self.segments.first().map(String::as_str)
        } else {
            None
        }
    }

    /// Import specifier for this file, e.g. `/src/view/top/TopView`.
    pub fn import_specifier(&self, import_root: &str) -> String {
        format!(
            "{}/{}",
            import_root.trim_end_matches('/'),
            self.segments.join("/")
        )
    }

    /// Classify a class declared in this file.
    pub fn classify(&self, class_name: &str) -> Classification {
        match self.top_directory() {
            Some(VIEW_DIR) => Classification::View {
                name: class_name.to_string(),
            },
            Some(MODEL_DIR) => {
                let remainder = &self.segments[1..];
                Classification::Model {
                    key: remainder.join(KEY_SEPARATOR),
                    alias: remainder.join(ALIAS_SEPARATOR),
                }
            }
            _ => Classification::Excluded,
        }
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Classify `class_name` declared in `file` under `source_root`.
pub fn classify(file: &Path, source_root: &Path, class_name: &str) -> Result<Classification> {
    Ok(RelativeSource::new(file, source_root)?.classify(class_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/project/src")
    }

    #[test]
    fn test_view_uses_class_name() {
        let outcome = classify(&root().join("view/Widget.js"), &root(), "Widget").unwrap();
        assert_eq!(
            outcome,
            Classification::View {
                name: "Widget".to_string()
            }
        );
    }

    #[test]
    fn test_nested_view_still_uses_class_name() {
        let outcome = classify(&root().join("view/top/TopView.js"), &root(), "TopView").unwrap();
        assert_eq!(
            outcome,
            Classification::View {
                name: "TopView".to_string()
            }
        );
    }

    #[test]
    fn test_model_uses_path_key_and_alias() {
        let outcome = classify(&root().join("model/shape/Box.js"), &root(), "Box").unwrap();
        assert_eq!(
            outcome,
            Classification::Model {
                key: "shape.Box".to_string(),
                alias: "shape_Box".to_string()
            }
        );
    }

    #[test]
    fn test_model_directly_under_model_dir() {
        let outcome = classify(&root().join("model/Api.js"), &root(), "Api").unwrap();
        assert_eq!(
            outcome,
            Classification::Model {
                key: "Api".to_string(),
                alias: "Api".to_string()
            }
        );
    }

    #[test]
    fn test_model_key_ignores_class_name() {
        let outcome = classify(&root().join("model/api/Home.js"), &root(), "HomeRepository").unwrap();
        assert_eq!(
            outcome,
            Classification::Model {
                key: "api.Home".to_string(),
                alias: "api_Home".to_string()
            }
        );
    }

    #[test]
    fn test_other_directories_are_excluded() {
        let outcome = classify(&root().join("util/Helper.js"), &root(), "Helper").unwrap();
        assert_eq!(outcome, Classification::Excluded);
    }

    #[test]
    fn test_only_first_segment_counts() {
        let outcome = classify(&root().join("util/view/Helper.js"), &root(), "Helper").unwrap();
        assert_eq!(outcome, Classification::Excluded);
    }

    #[test]
    fn test_file_named_like_role_dir_is_excluded() {
        let outcome = classify(&root().join("view.js"), &root(), "View").unwrap();
        assert_eq!(outcome, Classification::Excluded);
    }

    #[test]
    fn test_file_outside_root_is_an_error() {
        let err = classify(Path::new("/elsewhere/view/A.js"), &root(), "A").unwrap_err();
        assert!(matches!(err, Error::Path { .. }));
    }

    #[test]
    fn test_import_specifier() {
        let source = RelativeSource::new(&root().join("model/shape/Box.js"), &root()).unwrap();
        assert_eq!(source.import_specifier("/src"), "/src/model/shape/Box");
        assert_eq!(source.import_specifier("/src/"), "/src/model/shape/Box");
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        let source = RelativeSource::new(&root().join("model/Box.test.js"), &root()).unwrap();
        assert_eq!(source.segments(), ["model", "Box.test"]);
    }
}
