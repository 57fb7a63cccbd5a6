// src/flatten/classify.rs

use crate::states::{StateDirectory, StateEntry};

/// Decide whether `line` is a data row, and if so, which state it
/// belongs to and which value tokens follow.
///
/// Commas are stripped unconditionally before matching: they are
/// thousands separators inside the numerals, and no state name contains
/// one. The longest state name that prefixes the stripped line wins and
/// must be followed by a single space; the remainder is split on single
/// spaces into the value tokens. Anything else (headers, titles, page
/// numbers, blank lines) yields `None`.
pub fn classify<'a>(
    line: &str,
    directory: &'a StateDirectory,
) -> Option<(&'a StateEntry, Vec<String>)> {
    let stripped = line.replace(',', "");
    let entry = directory.longest_prefix_match(&stripped)?;
    let remainder = stripped[entry.name.len()..].strip_prefix(' ')?;
    let tokens = remainder.split(' ').map(str::to_string).collect();
    Some((entry, tokens))
}
