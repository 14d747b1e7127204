//! [`TestProject`] builder for gobuild test scenarios.

use std::fs;
use std::path::Path;

use gobuild_fs::NormalizedPath;
use tempfile::TempDir;

/// A temporary Go project directory.
///
/// # Example
///
/// ```rust,no_run
/// use gobuild_test_utils::TestProject;
///
/// let project = TestProject::new()
///     .with_go_mod("example.com/app")
///     .with_main_package("cmd/server");
/// assert!(project.root().join("go.mod").exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root as a [`NormalizedPath`], ready to hand to the resolver.
    pub fn working_dir(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write `content` to `path` (relative to root), creating parents.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|_| panic!("Could not write file: {}", full_path.display()));
    }

    /// Add a `go.mod` declaring `module`.
    pub fn with_go_mod(self, module: &str) -> Self {
        self.write("go.mod", &format!("module {module}\n\ngo 1.22\n"));
        self
    }

    /// Add a `buildpack.yml` with the given body.
    pub fn with_buildpack_yml(self, content: &str) -> Self {
        self.write("buildpack.yml", content);
        self
    }

    /// Add a `main` package in `dir` (relative to root, `.` for the root).
    pub fn with_main_package(self, dir: &str) -> Self {
        let file = if dir == "." {
            "main.go".to_string()
        } else {
            format!("{dir}/main.go")
        };
        self.write(&file, "package main\n\nfunc main() {}\n");
        self
    }

    /// Add an empty directory.
    pub fn with_dir(self, dir: &str) -> Self {
        fs::create_dir_all(self.root().join(dir)).unwrap();
        self
    }
}
