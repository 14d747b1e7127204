//! Flag merging
//!
//! Flags are layered with the following precedence (highest first):
//! - `BP_GO_BUILD_LDFLAGS`: a single `-ldflags` argument that replaces the
//!   first existing `-ldflags` flag in place, or is appended
//! - `BP_GO_BUILD_FLAGS`: a complete replacement of the flag list
//! - the base list supplied by the project file

use crate::env::EnvLookup;
use crate::error::{Error, Result};

use super::shellwords;

/// Replaces the whole flag list
pub const BUILD_FLAGS_ENV: &str = "BP_GO_BUILD_FLAGS";

/// Replaces only the linker flags
pub const LDFLAGS_ENV: &str = "BP_GO_BUILD_LDFLAGS";

/// Prefix identifying a linker-flag token
pub const LDFLAGS_PREFIX: &str = "-ldflags";

/// Merge `base` with the flag overrides found in `env`.
///
/// `base` is never modified; a fresh list is returned.
///
/// # Errors
///
/// - [`Error::ShellSyntax`] when an override is not valid shell syntax
/// - [`Error::AmbiguousLdflags`] when the ldflags override does not
///   tokenize to exactly one argument
pub fn merge_flags(base: &[String], env: &dyn EnvLookup) -> Result<Vec<String>> {
    let flags = match env.lookup(BUILD_FLAGS_ENV) {
        Some(raw) => tokenize(BUILD_FLAGS_ENV, &raw, env)?,
        None => base.to_vec(),
    };

    let Some(raw) = env.lookup(LDFLAGS_ENV) else {
        return Ok(flags);
    };

    let wrapped = format!("{LDFLAGS_PREFIX}=\"{raw}\"");
    let mut parsed = tokenize(LDFLAGS_ENV, &wrapped, env)?;
    let ldflags = match parsed.pop() {
        Some(token) if parsed.is_empty() => token,
        _ => {
            return Err(Error::AmbiguousLdflags {
                variable: LDFLAGS_ENV.to_string(),
                value: raw,
            });
        }
    };

    Ok(replace_or_append(flags, ldflags))
}

/// Put `ldflags` where the first `-ldflags` token sits, or at the end.
///
/// Any later `-ldflags` tokens are dropped so the result holds exactly one.
fn replace_or_append(flags: Vec<String>, ldflags: String) -> Vec<String> {
    let mut merged = Vec::with_capacity(flags.len() + 1);
    let mut pending = Some(ldflags);

    for flag in flags {
        if flag.starts_with(LDFLAGS_PREFIX) {
            if let Some(replacement) = pending.take() {
                merged.push(replacement);
            }
            continue;
        }
        merged.push(flag);
    }

    merged.extend(pending);
    merged
}

fn tokenize(source_name: &str, raw: &str, env: &dyn EnvLookup) -> Result<Vec<String>> {
    shellwords::split(raw, env).map_err(|e| Error::ShellSyntax {
        source_name: source_name.to_string(),
        value: raw.to_string(),
        message: e.to_string(),
    })
}
