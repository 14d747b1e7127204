//! Build target management
//!
//! Targets are package directories relative to the project root, written
//! in `./dir` form (`.` for the root itself).

use std::fs;
use std::sync::LazyLock;

use gobuild_fs::NormalizedPath;
use regex::Regex;

use crate::error::{Error, Result};

/// Matches the package clause of a `main` package.
static MAIN_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*package\s+main\s*(?://.*)?$").unwrap());

/// Directory names the Go tool ignores when matching packages.
const IGNORED_DIRS: &[&str] = &["vendor", "testdata"];

/// Validates explicit targets and discovers default ones.
pub trait TargetManager: Send + Sync {
    /// Canonicalize and validate a non-empty list of explicit targets.
    fn clean_and_validate(
        &self,
        targets: Vec<String>,
        working_dir: &NormalizedPath,
    ) -> Result<Vec<String>>;

    /// Discover targets when none were given.
    fn generate_defaults(&self, working_dir: &NormalizedPath) -> Result<Vec<String>>;
}

/// [`TargetManager`] backed by the project directory on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTargetManager;

impl FsTargetManager {
    pub fn new() -> Self {
        Self
    }
}

impl TargetManager for FsTargetManager {
    /// Targets may be glob patterns and may end in the `/...` package
    /// wildcard; each must match at least one directory.
    fn clean_and_validate(
        &self,
        targets: Vec<String>,
        working_dir: &NormalizedPath,
    ) -> Result<Vec<String>> {
        let mut cleaned = Vec::with_capacity(targets.len());

        for target in targets {
            let path = NormalizedPath::new(&target);
            if path.is_absolute() {
                return Err(Error::InvalidTarget {
                    target,
                    reason: "is an absolute path, targets must be relative to the source directory"
                        .to_string(),
                });
            }
            if path.escapes_root() {
                return Err(Error::InvalidTarget {
                    target,
                    reason: "is outside the source directory".to_string(),
                });
            }

            let relative = path.clean();
            let directory = match relative.as_str() {
                "..." => ".",
                other => other.strip_suffix("/...").unwrap_or(other),
            };

            if !matches_directory(working_dir, directory)? {
                return Err(Error::InvalidTarget {
                    target,
                    reason: "does not exist".to_string(),
                });
            }

            cleaned.push(dotted(relative.as_str()));
        }

        Ok(cleaned)
    }

    /// Every directory holding a `main` package, sorted. Falls back to the
    /// project root when none is found so the result is never empty.
    fn generate_defaults(&self, working_dir: &NormalizedPath) -> Result<Vec<String>> {
        let mut found = Vec::new();
        collect_main_packages(working_dir, ".", &mut found)?;
        found.sort();

        if found.is_empty() {
            tracing::debug!(root = %working_dir, "No main packages found, defaulting to root");
            found.push(".".to_string());
        }

        Ok(found)
    }
}

/// Whether `pattern` (relative to `root`) names at least one directory.
fn matches_directory(root: &NormalizedPath, pattern: &str) -> Result<bool> {
    if pattern == "." {
        return Ok(root.is_dir());
    }

    let escaped_root = glob::Pattern::escape(root.as_str());
    let full = NormalizedPath::new(&escaped_root).join(pattern);

    let entries = glob::glob(full.as_str()).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.msg.to_string(),
    })?;

    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::io(path, e.into_error())
        })?;
        if path.is_dir() {
            return Ok(true);
        }
    }
    Ok(false)
}

fn collect_main_packages(
    root: &NormalizedPath,
    relative: &str,
    found: &mut Vec<String>,
) -> Result<()> {
    let dir = if relative == "." {
        root.clone()
    } else {
        root.join(relative)
    };
    let native = dir.to_native();
    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

    let mut is_main = false;
    let mut children = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            if !is_ignored_dir(&name) {
                children.push(name);
            }
        } else if file_type.is_file() && !is_main && is_go_source(&name) {
            let content = fs::read_to_string(entry.path())
                .map_err(|e| Error::io(entry.path(), e))?;
            is_main = MAIN_PACKAGE.is_match(&content);
        }
    }

    if is_main {
        found.push(dotted(relative));
    }

    for child in children {
        let child_relative = if relative == "." {
            child
        } else {
            format!("{}/{}", relative, child)
        };
        collect_main_packages(root, &child_relative, found)?;
    }
    Ok(())
}

fn is_ignored_dir(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_') || IGNORED_DIRS.contains(&name)
}

fn is_go_source(name: &str) -> bool {
    name.ends_with(".go") && !name.ends_with("_test.go")
}

/// `.` stays `.`; anything else gains a `./` prefix.
fn dotted(relative: &str) -> String {
    if relative == "." {
        relative.to_string()
    } else {
        format!("./{}", relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(temp: &TempDir, relative: &str, content: &str) {
        let path = temp.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn root(temp: &TempDir) -> NormalizedPath {
        NormalizedPath::new(temp.path())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_main_package_pattern() {
        assert!(MAIN_PACKAGE.is_match("// +build linux\n\npackage main\n"));
        assert!(MAIN_PACKAGE.is_match("package main // import \"x\"\n"));
        assert!(!MAIN_PACKAGE.is_match("package mainly\n"));
        assert!(!MAIN_PACKAGE.is_match("package lib\n"));
    }

    #[test]
    fn test_clean_and_validate_prefixes_targets() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("cmd/server")).unwrap();

        let cleaned = FsTargetManager::new()
            .clean_and_validate(strings(&["cmd/server/", "./cmd/../cmd/server", "."]), &root(&temp))
            .unwrap();

        assert_eq!(cleaned, strings(&["./cmd/server", "./cmd/server", "."]));
    }

    #[test]
    fn test_clean_and_validate_accepts_globs_and_wildcards() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("cmd/a")).unwrap();
        fs::create_dir_all(temp.path().join("cmd/b")).unwrap();

        let cleaned = FsTargetManager::new()
            .clean_and_validate(strings(&["./cmd/*", "./cmd/...", "./..."]), &root(&temp))
            .unwrap();

        assert_eq!(cleaned, strings(&["./cmd/*", "./cmd/...", "./..."]));
    }

    #[test]
    fn test_clean_and_validate_rejects_missing() {
        let temp = TempDir::new().unwrap();
        let err = FsTargetManager::new()
            .clean_and_validate(strings(&["./cmd/missing"]), &root(&temp))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("./cmd/missing"));
    }

    #[test]
    fn test_clean_and_validate_rejects_files() {
        let temp = TempDir::new().unwrap();
        write(&temp, "main.go", "package main\n");

        let err = FsTargetManager::new()
            .clean_and_validate(strings(&["main.go"]), &root(&temp))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTarget { .. }));
    }

    #[test]
    fn test_clean_and_validate_rejects_absolute_and_escaping() {
        let temp = TempDir::new().unwrap();
        let manager = FsTargetManager::new();

        let err = manager
            .clean_and_validate(strings(&["/usr/src"]), &root(&temp))
            .unwrap_err();
        assert!(err.to_string().contains("absolute"));

        let err = manager
            .clean_and_validate(strings(&["../sibling"]), &root(&temp))
            .unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_generate_defaults_finds_main_packages() {
        let temp = TempDir::new().unwrap();
        write(&temp, "go.mod", "module example.com/app\n");
        write(&temp, "cmd/server/main.go", "package main\n\nfunc main() {}\n");
        write(&temp, "cmd/worker/worker.go", "package main\n");
        write(&temp, "internal/lib/lib.go", "package lib\n");
        write(&temp, "vendor/dep/main.go", "package main\n");
        write(&temp, ".hidden/main.go", "package main\n");
        write(&temp, "tools/gen_test.go", "package main\n");

        let targets = FsTargetManager::new().generate_defaults(&root(&temp)).unwrap();

        assert_eq!(targets, strings(&["./cmd/server", "./cmd/worker"]));
    }

    #[test]
    fn test_generate_defaults_root_package() {
        let temp = TempDir::new().unwrap();
        write(&temp, "main.go", "package main\n");
        write(&temp, "cmd/tool/main.go", "package main\n");

        let targets = FsTargetManager::new().generate_defaults(&root(&temp)).unwrap();

        assert_eq!(targets, strings(&[".", "./cmd/tool"]));
    }

    #[test]
    fn test_generate_defaults_falls_back_to_root() {
        let temp = TempDir::new().unwrap();
        write(&temp, "lib.go", "package lib\n");

        let targets = FsTargetManager::new().generate_defaults(&root(&temp)).unwrap();

        assert_eq!(targets, strings(&["."]));
    }

    #[test]
    fn test_generate_defaults_missing_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let missing = root(&temp).join("nope");

        let err = FsTargetManager::new().generate_defaults(&missing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
