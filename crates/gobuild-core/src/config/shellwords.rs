//! Shell-style word splitting for flag strings
//!
//! Supports the subset of POSIX shell syntax that appears in build flags:
//! whitespace separation, single and double quotes, backslash escapes and
//! `$VAR` / `${VAR}` expansion. Operators such as `|` or `;` have no special
//! meaning and are kept as ordinary characters.
//!
//! Word boundaries come only from the input text: an expanded value is never
//! split again, so `$FLAGS` holding `-a -b` is a single word.

use std::iter::Peekable;
use std::str::Chars;

use crate::env::EnvLookup;

/// Tokenization failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),

    #[error("trailing backslash")]
    TrailingBackslash,

    #[error("unterminated ${{ expansion")]
    UnterminatedExpansion,
}

/// Split `input` into words, expanding variables through `env`.
///
/// Unset variables expand to nothing. A word made only of unquoted
/// expansions that came out empty is dropped, while an explicitly quoted
/// empty string (`""` or `''`) is kept as an empty word.
pub fn split(input: &str, env: &dyn EnvLookup) -> Result<Vec<String>, SyntaxError> {
    let mut words = Vec::new();
    let mut word = Word::default();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' | '\n' | '\r' => word.finish(&mut words),
            '\\' => {
                let escaped = chars.next().ok_or(SyntaxError::TrailingBackslash)?;
                word.push(escaped);
            }
            '\'' => {
                word.quoted = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => word.push(ch),
                        None => return Err(SyntaxError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                word.quoted = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\' | '$' | '`')) => word.push(ch),
                            Some(ch) => {
                                word.push('\\');
                                word.push(ch);
                            }
                            None => return Err(SyntaxError::UnterminatedQuote('"')),
                        },
                        Some('$') => expand(&mut chars, env, &mut word)?,
                        Some(ch) => word.push(ch),
                        None => return Err(SyntaxError::UnterminatedQuote('"')),
                    }
                }
            }
            '$' => {
                word.started = true;
                expand(&mut chars, env, &mut word)?;
            }
            other => word.push(other),
        }
    }

    word.finish(&mut words);
    Ok(words)
}

#[derive(Default)]
struct Word {
    text: String,
    started: bool,
    quoted: bool,
}

impl Word {
    fn push(&mut self, ch: char) {
        self.started = true;
        self.text.push(ch);
    }

    fn push_str(&mut self, s: &str) {
        self.started = true;
        self.text.push_str(s);
    }

    fn finish(&mut self, words: &mut Vec<String>) {
        if self.started && (self.quoted || !self.text.is_empty()) {
            words.push(std::mem::take(&mut self.text));
        }
        *self = Word::default();
    }
}

/// Expand a variable reference; the leading `$` is already consumed.
fn expand(
    chars: &mut Peekable<Chars<'_>>,
    env: &dyn EnvLookup,
    word: &mut Word,
) -> Result<(), SyntaxError> {
    let mut name = String::new();

    if chars.peek() == Some(&'{') {
        chars.next();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(ch) => name.push(ch),
                None => return Err(SyntaxError::UnterminatedExpansion),
            }
        }
    } else {
        while let Some(&ch) = chars.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                chars.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            word.push('$');
            return Ok(());
        }
    }

    if let Some(value) = env.lookup(&name) {
        word.push_str(&value);
    }
    Ok(())
}
