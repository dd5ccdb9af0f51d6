//! The check file mini-language.
//!
//! Each line of `<fixture>.check` is one directive:
//!
//! - `! text` the output must not contain `text`
//! - `+N text` the output contains `text` exactly `N` times (`N` is one digit)
//! - `* text` the output contains `text` at least once
//! - `print` write the output to stdout
//!
//! Anything else is ignored. Payloads are cut at fixed character offsets, so the character after the
//! prefix is skipped whatever it is, and the payload itself may contain any prefix character.

use std::iter;

/// Characters before the payload of `!` and `*` lines
const PAYLOAD_OFFSET: usize = 2;
/// Characters before the payload of `+N` lines, the count is the second character
const COUNT_PAYLOAD_OFFSET: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    Forbidden(&'a str),
    CountExact { expected: usize, payload: &'a str },
    Contains(&'a str),
    Print,
    Ignored,
}

impl<'a> Directive<'a> {
    /// Classifies one line. `None` means the line starts like a directive
    /// but is too short to split or has a non-digit count.
    pub fn classify(line: &'a str) -> Option<Directive<'a>> {
        if line.starts_with('!') {
            return skip_chars(line, PAYLOAD_OFFSET).map(Directive::Forbidden);
        }
        if line.starts_with('+') {
            let expected = line.chars().nth(1)?.to_digit(10)?;
            let payload = skip_chars(line, COUNT_PAYLOAD_OFFSET)?;
            return Some(Directive::CountExact {
                expected: expected as usize,
                payload,
            });
        }
        if line.starts_with('*') {
            return skip_chars(line, PAYLOAD_OFFSET).map(Directive::Contains);
        }
        if line.trim() == "print" {
            return Some(Directive::Print);
        }
        Some(Directive::Ignored)
    }
}

/// The rest of `line` after its first `n` characters, `None` if it has fewer
fn skip_chars(line: &str, n: usize) -> Option<&str> {
    line.char_indices().map(|(index, _)| index).chain(iter::once(line.len())).nth(n).map(|index| &line[index..])
}

/// Non-overlapping, leftmost-first occurrences of `needle`. Every search resumes after the end
/// of the previous match. An empty needle occurs zero times.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut found = 0;
    let mut rest = haystack;
    while let Some(index) = rest.find(needle) {
        found += 1;
        rest = &rest[index + needle.len()..];
    }
    found
}
