//! cd - Change the current working directory

use std::path::PathBuf;

use super::BuiltinOutcome;
use crate::config::SessionConfig;

/// `cd [dir]`: zero arguments or `~` navigates to `HOME`; a leading `~`
/// expands to `HOME`; anything else resolves relative to the current
/// working directory. Only the first argument is honored (an Open Question
/// in spec.md, resolved here by ignoring the rest).
pub fn handle_cd(args: &[String], config: &SessionConfig) -> BuiltinOutcome {
    let arg = args.first().map(String::as_str).unwrap_or("~");

    let target: PathBuf = if arg == "~" {
        PathBuf::from(&config.home)
    } else if let Some(rest) = arg.strip_prefix('~') {
        PathBuf::from(format!("{}{}", config.home, rest))
    } else {
        PathBuf::from(arg)
    };

    if target.is_dir() {
        match std::env::set_current_dir(&target) {
            Ok(()) => BuiltinOutcome::default(),
            Err(_) => BuiltinOutcome::err(format!("cd: {}: No such file or directory\n", arg)),
        }
    } else {
        BuiltinOutcome::err(format!("cd: {}: No such file or directory\n", arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|t| t.to_string()).collect()
    }

    // `cd` mutates the process-wide working directory, so these tests must
    // not interleave with each other or with anything else that reads it.
    #[test]
    #[serial]
    fn no_args_goes_home() {
        let home = tempdir().unwrap();
        let config = SessionConfig {
            path_dirs: vec![],
            home: home.path().to_string_lossy().into_owned(),
        };
        let out = handle_cd(&[], &config);
        assert!(out.stderr.is_empty());
        assert_eq!(std::env::current_dir().unwrap(), home.path().canonicalize().unwrap());
    }

    #[test]
    #[serial]
    fn tilde_expands_to_home() {
        let home = tempdir().unwrap();
        let sub = home.path().join("project");
        std::fs::create_dir(&sub).unwrap();
        let config = SessionConfig {
            path_dirs: vec![],
            home: home.path().to_string_lossy().into_owned(),
        };
        let out = handle_cd(&args(&["~/project"]), &config);
        assert!(out.stderr.is_empty());
        assert_eq!(std::env::current_dir().unwrap(), sub.canonicalize().unwrap());
    }

    #[test]
    #[serial]
    fn missing_directory_reports_error() {
        let config = SessionConfig::default();
        let out = handle_cd(&args(&["/nope-surely-not-there"]), &config);
        assert_eq!(out.stderr, "cd: /nope-surely-not-there: No such file or directory\n");
    }

    #[test]
    #[serial]
    fn extra_arguments_are_ignored() {
        let home = tempdir().unwrap();
        let config = SessionConfig {
            path_dirs: vec![],
            home: home.path().to_string_lossy().into_owned(),
        };
        let out = handle_cd(&args(&["~", "extra", "args"]), &config);
        assert!(out.stderr.is_empty());
    }
}
