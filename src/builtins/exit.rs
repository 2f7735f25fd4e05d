//! exit - Terminate the session

use super::BuiltinOutcome;

/// `exit [0]`: the session terminates only when the argument vector is
/// exactly `["0"]`; any other invocation (including bare `exit`) is a no-op
/// that returns to the prompt, per spec.md §4.5.
pub fn handle_exit(args: &[String]) -> BuiltinOutcome {
    let should_exit = args.len() == 1 && args[0] == "0";
    BuiltinOutcome { should_exit, ..Default::default() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn exit_zero_terminates() {
        assert!(handle_exit(&args(&["0"])).should_exit);
    }

    #[test]
    fn bare_exit_does_not_terminate() {
        assert!(!handle_exit(&args(&[])).should_exit);
    }

    #[test]
    fn exit_with_other_code_does_not_terminate() {
        assert!(!handle_exit(&args(&["1"])).should_exit);
    }

    #[test]
    fn exit_with_extra_args_does_not_terminate() {
        assert!(!handle_exit(&args(&["0", "extra"])).should_exit);
    }
}
