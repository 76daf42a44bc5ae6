//! Manifest resolution for `everycase-locator`.
//!
//! `resolve_manifest_path` walks a [`ResolutionStep`] policy and returns the
//! first `custom-elements.json` it can find. The default policy tries an
//! explicit path, then the `customElements` field of the nearest
//! `package.json`, then a search of the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;

use everycase_core::{Manifest, ResolutionStep};

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "custom-elements.json";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Errors from manifest resolution and loading.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("couldn't resolve custom-elements.json from '{cwd}'")]
    Unresolved { cwd: PathBuf },

    #[error("there was an error reading {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(rename = "customElements")]
    custom_elements: Option<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Resolve the manifest path by trying each step of `order` in turn.
///
/// Returns `LocateError::Unresolved` if no step yields a path.
pub fn resolve_manifest_path(
    explicit: Option<&Path>,
    cwd: &Path,
    order: &[ResolutionStep],
) -> Result<PathBuf, LocateError> {
    for step in order {
        let found = match step {
            ResolutionStep::ExplicitPath => explicit.and_then(|p| from_explicit_path(p, cwd)),
            ResolutionStep::PackageJson => from_package_json(cwd),
            ResolutionStep::Search => search_manifest(cwd),
        };
        if let Some(path) = found {
            tracing::debug!(step = ?step, path = %path.display(), "resolved manifest");
            return Ok(path);
        }
        tracing::debug!(step = ?step, "manifest not resolved by step");
    }

    tracing::warn!(cwd = %cwd.display(), "couldn't resolve custom-elements.json");
    Err(LocateError::Unresolved { cwd: cwd.to_path_buf() })
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest, LocateError> {
    let content = fs::read_to_string(path).map_err(|e| LocateError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| LocateError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve, read and parse in one call.
pub fn resolve_and_load(
    explicit: Option<&Path>,
    cwd: &Path,
    order: &[ResolutionStep],
) -> Result<Manifest, LocateError> {
    let path = resolve_manifest_path(explicit, cwd, order)?;
    load_manifest(&path)
}

// ---------------------------------------------------------------------------
// Resolution steps
// ---------------------------------------------------------------------------

fn from_explicit_path(path: &Path, cwd: &Path) -> Option<PathBuf> {
    let full = cwd.join(path);
    if full.is_file() {
        return Some(full);
    }
    tracing::warn!(path = %full.display(), "explicit manifest path does not exist");
    None
}

/// Nearest `package.json` (from `cwd` upward) with a non-empty
/// `customElements` field, resolved against that file's directory.
fn from_package_json(cwd: &Path) -> Option<PathBuf> {
    for dir in cwd.ancestors() {
        let file = dir.join("package.json");
        if !file.is_file() {
            continue;
        }
        let package = match read_package_json(&file) {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(path = %file.display(), error = %err, "skipping unreadable package.json");
                continue;
            }
        };
        match package.custom_elements.filter(|s| !s.is_empty()) {
            Some(reference) => return Some(dir.join(reference)),
            None => continue,
        }
    }
    None
}

fn read_package_json(file: &Path) -> Result<PackageJson, LocateError> {
    let content = fs::read_to_string(file).map_err(|e| LocateError::Unreadable {
        path: file.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| LocateError::Malformed {
        path: file.to_path_buf(),
        source: e,
    })
}

/// Shallowest `custom-elements.json` under `root`; hidden directories are
/// skipped and siblings are visited in file-name order.
///
/// Levels are scanned one at a time, so the walk never goes deeper than the
/// first level holding a match.
fn search_manifest(root: &Path) -> Option<PathBuf> {
    for depth in 1.. {
        let mut level_reached = false;
        let level = WalkDir::new(root)
            .max_depth(depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.depth() == depth);
        for entry in level {
            level_reached = true;
            if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE_NAME {
                return Some(entry.into_path());
            }
        }
        if !level_reached {
            break;
        }
    }
    None
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn package_json_without_field_is_skipped() {
        let root = TempDir::new().expect("tempdir");
        fs::write(root.path().join("package.json"), r#"{"name": "x"}"#).expect("write");
        assert!(from_package_json(root.path()).is_none());
    }

    #[test]
    fn search_stops_at_first_level_with_a_match() {
        let root = TempDir::new().expect("tempdir");
        let deep = root.path().join("a/b/c");
        fs::create_dir_all(&deep).expect("mkdir");
        fs::write(deep.join(MANIFEST_FILE_NAME), "{}").expect("write");
        fs::create_dir_all(root.path().join("m")).expect("mkdir");
        fs::write(root.path().join("m").join(MANIFEST_FILE_NAME), "{}").expect("write");

        assert_eq!(
            search_manifest(root.path()),
            Some(root.path().join("m").join(MANIFEST_FILE_NAME))
        );
        assert_eq!(search_manifest(&deep), Some(deep.join(MANIFEST_FILE_NAME)));
    }

    #[test]
    fn search_of_empty_tree_ends() {
        let root = TempDir::new().expect("tempdir");
        fs::create_dir_all(root.path().join("x/y")).expect("mkdir");
        assert!(search_manifest(root.path()).is_none());
    }

    #[test]
    fn hidden_directories_are_not_searched() {
        let root = TempDir::new().expect("tempdir");
        let hidden = root.path().join(".cache");
        fs::create_dir_all(&hidden).expect("mkdir");
        fs::write(hidden.join(MANIFEST_FILE_NAME), "{}").expect("write");
        assert!(search_manifest(root.path()).is_none());
    }
}
