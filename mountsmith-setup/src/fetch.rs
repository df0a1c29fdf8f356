//! Clean-slate dependency fetch.
//!
//! Every run replaces the library checkout wholesale: probe, delete, clone.
//! There is no incremental-update path — full replacement trades run time
//! for strict reproducibility.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use mountsmith_core::paths::LIBRARY_GIT_URL;

use crate::error::{io_err, SetupError};

/// Fetches a third-party library into a target directory via `git clone`.
///
/// The git program and remote URL are injectable so tests can substitute a
/// fake script and local fixtures; production callers use [`LibraryFetcher::new`].
#[derive(Debug, Clone)]
pub struct LibraryFetcher {
    git: PathBuf,
    url: String,
}

impl LibraryFetcher {
    /// Fetcher for the Belfry OpenSCAD Library using `git` from PATH.
    pub fn new() -> Self {
        Self::with_git(PathBuf::from("git"))
    }

    /// Fetcher using an explicit git binary.
    pub fn with_git(git: PathBuf) -> Self {
        LibraryFetcher {
            git,
            url: LIBRARY_GIT_URL.to_string(),
        }
    }

    /// Override the remote URL (tests clone from a local fixture).
    pub fn with_remote(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Guarantee `dest` holds a fresh copy of the library.
    ///
    /// Deletes any existing checkout first (failure is fatal — a stale or
    /// partially-deleted checkout must never be silently reused), then
    /// clones unconditionally.
    pub fn fetch(&self, dest: &Path) -> Result<(), SetupError> {
        if dest.exists() {
            tracing::info!(path = %dest.display(), "removing previous library checkout");
            std::fs::remove_dir_all(dest).map_err(|e| SetupError::CleanupFailed {
                path: dest.to_path_buf(),
                source: e,
            })?;
        }

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }

        tracing::info!(url = %self.url, dest = %dest.display(), "cloning library");
        let output = Command::new(&self.git)
            .arg("clone")
            .arg(&self.url)
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| io_err(&self.git, e))?;

        if !output.status.success() {
            return Err(SetupError::FetchFailed {
                url: self.url.clone(),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Default for LibraryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).expect("set perms");
    }

    /// Fake git that records its args and creates the clone destination.
    fn fake_git(dir: &Path) -> PathBuf {
        let script_path = dir.join("fake-git");
        let args_path = dir.join("args.log");
        let script = format!(
            r#"#!/bin/sh
set -eu
echo "$@" > "{args_file}"
# last argument is the destination
for dest; do :; done
mkdir -p "$dest"
echo "checkout" > "$dest/LibFile.scad"
"#,
            args_file = args_path.display()
        );
        fs::write(&script_path, script).expect("write script");
        make_executable(&script_path);
        script_path
    }

    fn failing_git(dir: &Path) -> PathBuf {
        let script_path = dir.join("fake-git");
        fs::write(
            &script_path,
            "#!/bin/sh\necho \"fatal: repository not found\" >&2\nexit 128\n",
        )
        .expect("write script");
        make_executable(&script_path);
        script_path
    }

    #[test]
    fn fetch_clones_into_missing_dest() {
        let dir = TempDir::new().expect("tempdir");
        let dest = dir.path().join("openscad").join("BOSL");
        let fetcher = LibraryFetcher::with_git(fake_git(dir.path()));

        fetcher.fetch(&dest).expect("fetch");

        assert!(dest.join("LibFile.scad").exists());
        let args = fs::read_to_string(dir.path().join("args.log")).expect("read args");
        assert!(args.starts_with("clone "), "unexpected args: {args}");
        assert!(args.contains("BOSL.git"), "default remote missing: {args}");
    }

    #[test]
    fn fetch_replaces_stale_checkout() {
        let dir = TempDir::new().expect("tempdir");
        let dest = dir.path().join("BOSL");
        fs::create_dir_all(dest.join("nested")).expect("stale dirs");
        fs::write(dest.join("nested").join("stale.scad"), "old").expect("stale file");

        let fetcher = LibraryFetcher::with_git(fake_git(dir.path()));
        fetcher.fetch(&dest).expect("fetch");

        assert!(!dest.join("nested").exists(), "stale content must be gone");
        assert!(dest.join("LibFile.scad").exists());
    }

    #[test]
    fn clone_failure_surfaces_stderr() {
        let dir = TempDir::new().expect("tempdir");
        let dest = dir.path().join("BOSL");
        let fetcher = LibraryFetcher::with_git(failing_git(dir.path()))
            .with_remote("https://example.invalid/missing.git");

        let err = fetcher.fetch(&dest).expect_err("clone should fail");
        match err {
            SetupError::FetchFailed {
                url,
                exit_code,
                stderr,
            } => {
                assert_eq!(url, "https://example.invalid/missing.git");
                assert_eq!(exit_code, Some(128));
                assert!(stderr.contains("repository not found"), "stderr: {stderr}");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn missing_git_binary_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let dest = dir.path().join("BOSL");
        let fetcher = LibraryFetcher::with_git(dir.path().join("no-such-git"));

        let err = fetcher.fetch(&dest).expect_err("spawn should fail");
        assert!(matches!(err, SetupError::Io { .. }));
    }
}
