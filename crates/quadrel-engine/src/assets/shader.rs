use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolved shader resource root.
///
/// The root is resolved exactly once at startup and then handed to whatever
/// loads stage sources. Lookups are `root/relative_id` with no fallback
/// location and no retry.
#[derive(Debug, Clone)]
pub struct ShaderRoot {
    root: PathBuf,
}

impl ShaderRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the root as the process current working directory joined
    /// with `subdir`.
    pub fn from_cwd(subdir: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            root: std::env::current_dir()?.join(subdir),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Reads the full source text for `relative_id`.
    ///
    /// The contents are returned exactly as stored, with no preprocessing
    /// and no include resolution. Each call reopens the file; nothing is
    /// cached across calls. A file that cannot be opened or read fails
    /// immediately with [`SourceNotFound`] carrying the attempted path.
    pub fn load_source(&self, relative_id: impl AsRef<Path>) -> Result<String, SourceNotFound> {
        let path = self.root.join(relative_id);
        fs::read_to_string(&path).map_err(|source| SourceNotFound { path, source })
    }
}

/// A stage source that could not be read from the resource root.
#[derive(Debug)]
pub struct SourceNotFound {
    /// The path the loader attempted to open.
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for SourceNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shader source {} cannot be read: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for SourceNotFound {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    /// Fresh per-test directory under the OS temp dir.
    fn scratch_root() -> PathBuf {
        let n = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "quadrel-shader-tests-{}-{n}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    // ── load_source ───────────────────────────────────────────────────────

    #[test]
    fn load_returns_exact_contents() {
        let dir = scratch_root();
        let body = "@vertex\nfn vs_main() {}\n\n// trailing comment, no newline";
        fs::write(dir.join("stage.wgsl"), body).unwrap();

        let root = ShaderRoot::new(&dir);
        let loaded = root.load_source("stage.wgsl").unwrap();
        assert_eq!(loaded, body);
    }

    #[test]
    fn load_preserves_non_ascii_text() {
        let dir = scratch_root();
        let body = "// ünïcode → comment\nfn fs_main() {}\n";
        fs::write(dir.join("frag.wgsl"), body).unwrap();

        let root = ShaderRoot::new(&dir);
        assert_eq!(root.load_source("frag.wgsl").unwrap(), body);
    }

    #[test]
    fn load_reopens_the_file_on_every_call() {
        let dir = scratch_root();
        let root = ShaderRoot::new(&dir);

        fs::write(dir.join("live.wgsl"), "first").unwrap();
        assert_eq!(root.load_source("live.wgsl").unwrap(), "first");

        // No caching: a rewritten file is observed by the next call.
        fs::write(dir.join("live.wgsl"), "second").unwrap();
        assert_eq!(root.load_source("live.wgsl").unwrap(), "second");
    }

    #[test]
    fn relative_id_may_be_nested() {
        let dir = scratch_root();
        fs::create_dir_all(dir.join("panel")).unwrap();
        fs::write(dir.join("panel/vs.wgsl"), "x").unwrap();

        let root = ShaderRoot::new(&dir);
        assert_eq!(root.load_source("panel/vs.wgsl").unwrap(), "x");
    }

    // ── missing files ─────────────────────────────────────────────────────

    #[test]
    fn missing_file_fails_with_attempted_path() {
        let dir = scratch_root();
        let root = ShaderRoot::new(&dir);

        let err = root.load_source("nope.wgsl").unwrap_err();
        assert_eq!(err.path, dir.join("nope.wgsl"));
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn error_display_names_the_path() {
        let dir = scratch_root();
        let err = ShaderRoot::new(&dir).load_source("nope.wgsl").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("nope.wgsl"), "message was: {msg}");
    }

    // ── root resolution ───────────────────────────────────────────────────

    #[test]
    fn from_cwd_joins_the_subdir() {
        let root = ShaderRoot::from_cwd("assets/shaders").unwrap();
        assert!(root.path().ends_with("assets/shaders"));
        assert!(root.path().is_absolute());
    }
}
