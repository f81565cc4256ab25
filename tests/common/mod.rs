//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_file("src/view/Top.js", sources::TOP_VIEW);
//! fixture.command().arg("generate").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::sources;
    pub use super::TestFixture;
}

/// Source and fragment snippets shared across tests.
#[allow(dead_code)]
pub mod sources {
    pub const TOP_VIEW: &str = "import { View } from \"@next2d/framework\";\n\nexport class TopView extends View\n{\n}\n";

    pub const BOX_MODEL: &str = "export class Box\n{\n}\n";

    pub const HELPER: &str = "export class Helper\n{\n}\n";

    pub const CONFIG: &str = r#"{
    "local": { "endpoint": "http://localhost:8080", "mode": "local" },
    "prd": { "endpoint": "https://example.com", "mode": "prd" },
    "all": { "mode": "shared", "spa": true }
}"#;

    pub const STAGE: &str = r#"{ "width": 240, "height": 240, "fps": 60 }"#;

    pub const ROUTING: &str = r#"{ "top": { "requests": [] } }"#;
}

/// A temporary project directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new fixture with an empty `src` directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("src")
            .create_dir_all()
            .expect("Failed to create src directory");
        Self { temp_dir }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add all three config fragments.
    pub fn with_fragments(self) -> Self {
        self.with_file("src/config/config.json", sources::CONFIG)
            .with_file("src/config/stage.json", sources::STAGE)
            .with_file("src/config/routing.json", sources::ROUTING)
    }

    /// Get the path to the project root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path().join("src/Packages.js")
    }

    pub fn config_module_path(&self) -> PathBuf {
        self.path().join("src/config/Config.js")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A command for the autoloader binary running in the project root.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("autoloader");
        cmd.current_dir(self.path());
        cmd.env_remove("AUTOLOADER_ENV");
        cmd.env_remove("AUTOLOADER_SETTINGS");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
