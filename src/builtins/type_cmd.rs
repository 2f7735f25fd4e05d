//! type - Report whether a name is a builtin, an executable on PATH, or unknown

use super::BuiltinOutcome;
use crate::config::{is_builtin, SessionConfig};
use crate::path_resolver;

/// `type name...`: for each trailing argument, report whether it names a
/// builtin, an executable resolved via `PATH`, or neither.
pub fn handle_type(args: &[String], config: &SessionConfig) -> BuiltinOutcome {
    let mut stdout = String::new();
    for name in args {
        if is_builtin(name) {
            stdout.push_str(&format!("{} is a shell builtin\n", name));
        } else if let Some(path) = path_resolver::resolve(config, name) {
            stdout.push_str(&format!("{} is {}\n", name, path.display()));
        } else {
            stdout.push_str(&format!("{}: not found\n", name));
        }
    }
    BuiltinOutcome::out(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn reports_builtin() {
        let config = SessionConfig::default();
        let out = handle_type(&args(&["echo"]), &config);
        assert_eq!(out.stdout, "echo is a shell builtin\n");
    }

    #[test]
    fn reports_not_found() {
        let config = SessionConfig::default();
        let out = handle_type(&args(&["nonesuch"]), &config);
        assert_eq!(out.stdout, "nonesuch: not found\n");
    }

    #[test]
    fn reports_multiple_names_in_order() {
        let config = SessionConfig::default();
        let out = handle_type(&args(&["cd", "echo"]), &config);
        assert_eq!(out.stdout, "cd is a shell builtin\necho is a shell builtin\n");
    }
}
