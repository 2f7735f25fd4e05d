//! Session Configuration
//!
//! Immutable, startup-resolved session state: `PATH` as an ordered list of
//! directories, `HOME`, and the fixed set of builtin names. Resolved once in
//! `main` and threaded through the driver and builtin engine by reference;
//! nothing reads `std::env` again after this point.

use std::env;

/// The fixed set of builtin command names. Builtins shadow same-named
/// executables found on `PATH`.
pub const BUILTIN_NAMES: &[&str] = &["exit", "echo", "type", "pwd", "cd"];

/// Returns `true` if `name` is a builtin.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Immutable session configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Ordered `PATH` directories, colon-split; empty entries are kept as
    /// literal empty strings (they never match during resolution).
    pub path_dirs: Vec<String>,
    /// `HOME`, defaulting to `"/"` when unset.
    pub home: String,
}

impl SessionConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        let path = env::var("PATH").unwrap_or_default();
        let home = env::var("HOME").unwrap_or_else(|_| "/".to_string());
        Self {
            path_dirs: path.split(':').map(str::to_string).collect(),
            home,
        }
    }
}

impl Default for SessionConfig {
    /// A config with no `PATH` and `HOME` at `"/"`, useful for tests.
    fn default() -> Self {
        Self {
            path_dirs: Vec::new(),
            home: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_matches_spec() {
        for name in ["exit", "echo", "type", "pwd", "cd"] {
            assert!(is_builtin(name));
        }
        assert!(!is_builtin("ls"));
    }

    #[test]
    fn default_config_has_root_home() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.home, "/");
        assert!(cfg.path_dirs.is_empty());
    }
}
