//! Path Resolver
//!
//! Given a bare command name, walks `PATH` directories in order and returns
//! the absolute path of the first regular, executable file matching that
//! name. Never descends into subdirectories and never treats the name
//! itself as a path; every external invocation goes through name lookup.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;

/// Returns `true` if `path` is a regular file with at least one execute bit
/// set.
fn is_executable_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Resolve `name` against `config.path_dirs`, in order. Directories that are
/// missing or unreadable are silently skipped; the first match wins and
/// scanning stops there.
pub fn resolve(config: &SessionConfig, name: &str) -> Option<PathBuf> {
    for dir in &config.path_dirs {
        if dir.is_empty() {
            continue;
        }
        let candidate = Path::new(dir).join(name);
        if is_executable_file(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Every regular executable file visible across `config.path_dirs`, used by
/// the line editor's completion. Directories that don't exist or can't be
/// read are skipped silently.
pub fn all_executables(config: &SessionConfig) -> Vec<String> {
    let mut names = Vec::new();
    for dir in &config.path_dirs {
        if dir.is_empty() {
            continue;
        }
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            if is_executable_file(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}
