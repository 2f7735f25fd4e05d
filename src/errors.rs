//! Shell Errors
//!
//! One error type per component boundary, following the teacher's
//! per-module error style. Every variant here terminates in a single
//! diagnostic line written by the driver; none of them is allowed to
//! unwind past it; `exit 0` and EOF are the only clean terminations.

use thiserror::Error;

/// Failure tokenizing a raw input line: an unterminated quote or a trailing
/// backslash. Rendered exactly as `Error: <detail>` per spec.md §6.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error: {0}")]
pub struct ParseError(pub String);

impl ParseError {
    pub fn unterminated_quote(quote: char) -> Self {
        ParseError(format!("unterminated {} quote", describe_quote(quote)))
    }
}

fn describe_quote(quote: char) -> &'static str {
    match quote {
        '\'' => "single",
        '"' => "double",
        _ => "unknown",
    }
}

/// Malformed redirection directive: an operator with no filename after it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Syntax error: no filename after '{operator}'")]
pub struct SyntaxError {
    pub operator: String,
}

/// Failure opening a redirection target or spawning/waiting on a child
/// process. Rendered exactly as `Error executing command: <detail>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error executing command: {0}")]
pub struct SpawnError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_message_matches_spec() {
        let e = SyntaxError { operator: ">".to_string() };
        assert_eq!(e.to_string(), "Syntax error: no filename after '>'");
    }

    #[test]
    fn spawn_error_message_matches_spec() {
        let e = SpawnError("boom".to_string());
        assert_eq!(e.to_string(), "Error executing command: boom");
    }

    #[test]
    fn parse_error_message_matches_spec() {
        let e = ParseError::unterminated_quote('\'');
        assert_eq!(e.to_string(), "Error: unterminated single quote");
    }
}
