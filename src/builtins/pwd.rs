//! pwd - Print the current working directory

use super::BuiltinOutcome;

/// Write the absolute current working directory followed by a newline.
pub fn handle_pwd() -> BuiltinOutcome {
    match std::env::current_dir() {
        Ok(cwd) => BuiltinOutcome::out(format!("{}\n", cwd.display())),
        Err(e) => BuiltinOutcome::err(format!("pwd: {}\n", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_the_current_directory() {
        let out = handle_pwd();
        let expected = std::env::current_dir().unwrap();
        assert_eq!(out.stdout, format!("{}\n", expected.display()));
        assert!(out.stderr.is_empty());
    }
}
