//! Line Editor
//!
//! Reads one logical input line from the terminal with in-line editing, an
//! in-memory history buffer, and tab completion. Candidates are builtin
//! names plus every executable file visible on `PATH`, each rendered with a
//! trailing space. First TAB with a changed candidate set rings the bell; a
//! second consecutive TAB with the same set lists the matches and redraws
//! the prompt and buffer.

use rustyline::completion::{Completer, Pair};
use rustyline::config::{BellStyle, CompletionType, Config};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Result as RlResult};

use crate::config::{SessionConfig, BUILTIN_NAMES};
use crate::path_resolver;

/// The literal prompt written before every read, per spec.md §6.
pub const PROMPT: &str = "$ ";

struct ShellHelper {
    candidates: Vec<String>,
}

impl ShellHelper {
    fn new(config: &SessionConfig) -> Self {
        let mut candidates: Vec<String> = BUILTIN_NAMES.iter().map(|s| s.to_string()).collect();
        candidates.extend(path_resolver::all_executables(config));
        candidates.sort();
        candidates.dedup();
        Self { candidates }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> RlResult<(usize, Vec<Pair>)> {
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let prefix = &line[start..pos];

        let matches: Vec<Pair> = self
            .candidates
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair { display: format!("{} ", name), replacement: format!("{} ", name) })
            .collect();

        Ok((start, matches))
    }
}

impl Helper for ShellHelper {}
impl Hinter for ShellHelper {
    type Hint = String;
}
impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}

/// Acquires one input line at a time from the terminal.
pub struct LineEditor {
    editor: Editor<ShellHelper>,
}

impl LineEditor {
    pub fn new(config: &SessionConfig) -> Self {
        let rl_config = Config::builder()
            .completion_type(CompletionType::List)
            .bell_style(BellStyle::Audible)
            .build();
        let mut editor =
            Editor::<ShellHelper>::with_config(rl_config).expect("failed to initialize line editor");
        editor.set_helper(Some(ShellHelper::new(config)));
        Self { editor }
    }

    /// Read one line, trimmed of surrounding whitespace. `Ok(None)` signals
    /// end-of-input (EOF or interrupt); the driver treats both the same way.
    /// Non-empty lines are appended to the in-memory history buffer so the
    /// up/down arrows recall them within the session.
    pub fn read_line(&mut self) -> RlResult<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
