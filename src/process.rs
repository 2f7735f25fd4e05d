//! Process Launcher
//!
//! Spawns an external executable under a Redirection Plan and waits for it
//! to finish. The child is executed at the resolved absolute path but sees
//! the original, as-typed `argv[0]`.

use std::fs::OpenOptions;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::SpawnError;
use crate::redirection::{RedirectMode, RedirectionPlan};

fn open_target(path: &str, mode: RedirectMode) -> Result<std::fs::File, SpawnError> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true);
    match mode {
        RedirectMode::Truncate => opts.truncate(true),
        RedirectMode::Append => opts.append(true),
    };
    opts.open(path).map_err(|e| SpawnError(format!("{}: {}", path, e)))
}

fn stdio_for(target: Option<&crate::redirection::RedirectTarget>) -> Result<Stdio, SpawnError> {
    match target {
        Some(t) => Ok(Stdio::from(open_target(&t.path, t.mode)?)),
        None => Ok(Stdio::inherit()),
    }
}

/// Spawn `resolved_path` with `argv` (where `argv[0]` is the name as typed,
/// not the resolved path) under `plan`, and wait synchronously for it to
/// finish. The child's exit status is discarded (spec.md §1).
pub fn launch(resolved_path: &Path, argv: &[String], plan: &RedirectionPlan) -> Result<(), SpawnError> {
    let argv0 = argv.first().map(String::as_str).unwrap_or_default();
    let stdout = stdio_for(plan.stdout_target.as_ref())?;
    let stderr = stdio_for(plan.stderr_target.as_ref())?;

    let mut child = Command::new(resolved_path)
        .arg0(argv0)
        .args(&argv[1..])
        .stdout(stdout)
        .stderr(stderr)
        .spawn()
        .map_err(|e| SpawnError(e.to_string()))?;

    child.wait().map_err(|e| SpawnError(e.to_string()))?;
    Ok(())
}
