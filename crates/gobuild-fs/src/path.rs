//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Build targets and project roots are compared and reported in this form;
/// conversion to the platform-native representation happens only at I/O
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() {
            segment_normalized
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Whether the path is rooted (`/x`, `C:/x`, or a UNC share).
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        self.inner.starts_with('/')
            || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
    }

    /// Lexically clean the path.
    ///
    /// Collapses repeated separators, drops `.` components and resolves
    /// `..` against preceding components. A relative path that would climb
    /// above its starting point keeps its leading `..` components. The empty
    /// path cleans to `.`.
    pub fn clean(&self) -> Self {
        let rooted = self.inner.starts_with('/');
        let mut parts: Vec<&str> = Vec::new();

        for component in self.inner.split('/') {
            match component {
                "" | "." => {}
                ".." => match parts.last() {
                    Some(&last) if last != ".." => {
                        parts.pop();
                    }
                    _ if rooted => {}
                    _ => parts.push(".."),
                },
                other => parts.push(other),
            }
        }

        let joined = parts.join("/");
        let inner = match (rooted, joined.is_empty()) {
            (true, _) => format!("/{}", joined),
            (false, true) => ".".to_string(),
            (false, false) => joined,
        };
        Self { inner }
    }

    /// Whether a cleaned relative path climbs above its starting point.
    pub fn escapes_root(&self) -> bool {
        let cleaned = self.clean();
        cleaned.inner == ".." || cleaned.inner.starts_with("../")
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", ".")]
    #[case(".", ".")]
    #[case("./cmd/app", "cmd/app")]
    #[case("cmd//app/", "cmd/app")]
    #[case("cmd/../app", "app")]
    #[case("../outside", "../outside")]
    #[case("a/../../b", "../b")]
    #[case("/abs/./x/../y", "/abs/y")]
    #[case("/..", "/")]
    fn test_clean(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NormalizedPath::new(input).clean().as_str(), expected);
    }

    #[test]
    fn test_backslashes_normalized() {
        let path = NormalizedPath::new("cmd\\server");
        assert_eq!(path.as_str(), "cmd/server");
    }

    #[test]
    fn test_escapes_root() {
        assert!(NormalizedPath::new("..").escapes_root());
        assert!(NormalizedPath::new("a/../../b").escapes_root());
        assert!(!NormalizedPath::new("a/../b").escapes_root());
        assert!(!NormalizedPath::new("..foo").escapes_root());
    }

    #[test]
    fn test_is_absolute() {
        assert!(NormalizedPath::new("/srv/app").is_absolute());
        assert!(NormalizedPath::new("C:\\work").is_absolute());
        assert!(!NormalizedPath::new("./cmd").is_absolute());
        assert!(!NormalizedPath::new("cmd").is_absolute());
    }

    #[test]
    fn test_is_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("go.mod"), "").unwrap();
        let root = NormalizedPath::new(temp.path());

        assert!(root.is_dir());
        assert!(!root.join("go.mod").is_dir());
        assert!(!root.join("missing").is_dir());
    }

    #[test]
    fn test_join() {
        let root = NormalizedPath::new("/work/");
        assert_eq!(root.join("go.mod").as_str(), "/work/go.mod");
        assert_eq!(NormalizedPath::new("").join("x").as_str(), "x");
    }
}
