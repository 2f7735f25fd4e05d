//! Redirection Planner
//!
//! Scans a token sequence, extracts redirection directives, and yields a
//! stripped argument vector plus a Redirection Plan. Recognized operators:
//! `>`, `1>`, `>>`, `1>>`, `2>`, `2>>`. A later directive for the same
//! stream overwrites an earlier one.

use crate::errors::SyntaxError;

/// Whether a redirection target is opened in truncate or append mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    Truncate,
    Append,
}

/// A decoded stdout/stderr file-binding target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub path: String,
    pub mode: RedirectMode,
}

/// The decoded stdout/stderr file-binding intent for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectionPlan {
    pub stdout_target: Option<RedirectTarget>,
    pub stderr_target: Option<RedirectTarget>,
}

impl RedirectionPlan {
    /// `true` when neither stream is redirected.
    pub fn is_empty(&self) -> bool {
        self.stdout_target.is_none() && self.stderr_target.is_none()
    }
}

fn classify(token: &str) -> Option<(bool, RedirectMode)> {
    // Returns (targets_stdout, mode) for recognized operator tokens.
    match token {
        ">" | "1>" => Some((true, RedirectMode::Truncate)),
        ">>" | "1>>" => Some((true, RedirectMode::Append)),
        "2>" => Some((false, RedirectMode::Truncate)),
        "2>>" => Some((false, RedirectMode::Append)),
        _ => None,
    }
}

/// Split `tokens` into a stripped argument vector and a Redirection Plan.
///
/// Redirection directives may appear anywhere after the command name; they
/// are removed in place without affecting the relative order of the
/// surviving tokens.
pub fn plan(tokens: &[String]) -> Result<(Vec<String>, RedirectionPlan), SyntaxError> {
    let mut argv = Vec::with_capacity(tokens.len());
    let mut plan = RedirectionPlan::default();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if let Some((is_stdout, mode)) = classify(token) {
            let filename = tokens.get(i + 1).ok_or_else(|| SyntaxError {
                operator: token.clone(),
            })?;
            let target = RedirectTarget {
                path: filename.clone(),
                mode,
            };
            if is_stdout {
                plan.stdout_target = Some(target);
            } else {
                plan.stderr_target = Some(target);
            }
            i += 2;
        } else {
            argv.push(token.clone());
            i += 1;
        }
    }

    Ok((argv, plan))
}
