//! echo - Write arguments to stdout

use super::BuiltinOutcome;

/// `echo [-n] [args...]`: join the (non-flag) arguments with single spaces
/// and write them, followed by a newline unless `-n` is given.
pub fn handle_echo(args: &[String]) -> BuiltinOutcome {
    let (no_newline, rest) = match args.first() {
        Some(first) if first == "-n" => (true, &args[1..]),
        _ => (false, args),
    };

    let mut output = rest.join(" ");
    if !no_newline {
        output.push('\n');
    }
    BuiltinOutcome::out(output)
}
