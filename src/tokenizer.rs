//! Tokenizer
//!
//! Converts a raw input line into an ordered sequence of words, honoring
//! single-quote, double-quote, and backslash rules. Quoted and unquoted runs
//! that sit next to each other concatenate into a single token, e.g.
//! `a"b"c` → `abc`.

use crate::errors::ParseError;

/// A post-quoting word produced by the tokenizer.
pub type Token = String;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Split `line` into tokens per the quoting rules in spec.md §4.2.
///
/// Consecutive whitespace outside quotes is a single separator; zero-length
/// tokens never arise unless the caller passes an already-empty line (which
/// simply yields no tokens).
pub fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut have_current = false;
    let mut quote = Quote::None;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match quote {
            Quote::None => match ch {
                '\'' => {
                    quote = Quote::Single;
                    have_current = true;
                }
                '"' => {
                    quote = Quote::Double;
                    have_current = true;
                }
                '\\' => match chars.next() {
                    Some(escaped) => {
                        current.push(escaped);
                        have_current = true;
                    }
                    None => return Err(ParseError("trailing backslash".to_string())),
                },
                c if c.is_whitespace() => {
                    if have_current {
                        tokens.push(std::mem::take(&mut current));
                        have_current = false;
                    }
                }
                c => {
                    current.push(c);
                    have_current = true;
                }
            },
            Quote::Single => match ch {
                '\'' => quote = Quote::None,
                c => current.push(c),
            },
            Quote::Double => match ch {
                '"' => quote = Quote::None,
                '\\' => match chars.peek() {
                    Some(&next) if matches!(next, '\\' | '$' | '"' | '\n') => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                },
                c => current.push(c),
            },
        }
    }

    match quote {
        Quote::Single => return Err(ParseError::unterminated_quote('\'')),
        Quote::Double => return Err(ParseError::unterminated_quote('"')),
        Quote::None => {}
    }

    if have_current {
        tokens.push(current);
    }

    Ok(tokens)
}
