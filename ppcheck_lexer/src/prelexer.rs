use std::{ops::Range, str::Chars};

use peekmore::{PeekMore, PeekMoreIterator};

/// Which translation-phase rewrites the prelexer performs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrelexerOptions {
    pub digraphs: bool,
    pub trigraphs: bool,
}

#[derive(Debug)]
pub struct PrelexerIter<'src> {
    chars: PeekMoreIterator<Chars<'src>>,
    options: PrelexerOptions,
    /// The end of the previous character
    current_pos: usize,
}
impl<'src> PrelexerIter<'src> {
    pub fn new(source: &'src str, options: PrelexerOptions) -> PrelexerIter<'src> {
        PrelexerIter {
            chars: source.chars().peekmore(),
            options,
            current_pos: 0,
        }
    }
    pub(crate) fn trigraph_replacement(c: Option<&char>) -> Option<char> {
        match c {
            Some('=') => Some('#'),
            Some('/') => Some('\\'),
            Some('\'') => Some('^'),
            Some('(') => Some('['),
            Some(')') => Some(']'),
            Some('!') => Some('|'),
            Some('<') => Some('{'),
            Some('>') => Some('}'),
            Some('-') => Some('~'),
            Some(_) | None => None,
        }
    }
    fn digraph_replacement(first: char, second: Option<&char>) -> Option<char> {
        match (first, second) {
            ('<', Some(':')) => Some('['),
            (':', Some('>')) => Some(']'),
            ('<', Some('%')) => Some('{'),
            ('%', Some('>')) => Some('}'),
            ('%', Some(':')) => Some('#'),
            _ => None,
        }
    }
}
impl<'src> Iterator for PrelexerIter<'src> {
    type Item = (Range<usize>, char);

    /// Get the next character, including a Range<usize> of bytes into the original string.
    /// If the character is a backslash `\`, and next character is a newline `\n`, they are skipped
    /// If trigraphs are enabled and the next two characters are ??, and the one after those is a valid trigraph character, all 3 are skipped and a replacement character is returned
    /// If digraphs are enabled, both characters of a digraph are skipped and the replacement character is returned
    fn next(&mut self) -> Option<Self::Item> {
        let start = self.current_pos;

        let mut current_character = self.chars.next()?;
        let mut length = current_character.len_utf8();

        if current_character == '?' && self.chars.peek() == Some(&'?') {
            if let Some(replacement) = Self::trigraph_replacement(self.chars.peek_nth(1)).filter(|_| self.options.trigraphs) {
                length += self.chars.next()?.len_utf8(); // Second ?
                length += self.chars.next()?.len_utf8(); // Actual trigraph character
                current_character = replacement;
            }
        } else if self.options.digraphs {
            if let Some(replacement) = Self::digraph_replacement(current_character, self.chars.peek()) {
                length += self.chars.next()?.len_utf8();
                current_character = replacement;
            }
        }

        if current_character == '\\' && self.chars.peek() == Some(&'\n') {
            length += self.chars.next()?.len_utf8();

            self.current_pos = start + length;
            self.next()
        } else {
            self.current_pos = start + length;

            Some((start..self.current_pos, current_character))
        }
    }
}

/// Byte ranges of every trigraph in `source`, whether or not it would be replaced
pub fn find_trigraphs(source: &str) -> Vec<Range<usize>> {
    let mut found = vec![];
    let mut chars = source.char_indices().peekmore();
    while let Some((start, c)) = chars.next() {
        if c != '?' || chars.peek().map(|t| t.1) != Some('?') {
            continue;
        }
        if PrelexerIter::trigraph_replacement(chars.peek_nth(1).map(|t| &t.1)).is_some() {
            chars.next(); // Second ?
            chars.next(); // Actual trigraph character
            found.push(start..start + 3);
        }
    }
    found
}
