use std::{ops::Range, str::FromStr};

use peekmore::{PeekMore, PeekMoreIterator};
use ppcheck_common::{
    spanned::Location,
    token::{Punctuator, Token, TokenKind},
};
use ppcheck_errors::{
    Diagnostic, Report,
    errors::{UnterminatedComment, UnterminatedLiteral},
};

use crate::prelexer::{PrelexerIter, PrelexerOptions};

macro_rules! identifier {
    () => {
        nondigit!() | digit!()
    };
}
macro_rules! nondigit {
    () => {
        '_' | 'A'..='Z' | 'a'..='z'
    };
}
macro_rules! digit {
    () => {
        '0'..='9'
    };
}
macro_rules! horizontal_whitespace {
    () => {
        ' ' | '\t' | '\r' | '\x0b' | '\x0c'
    };
}

pub type LexResult<T> = Result<T, Report>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    pub prelexer: PrelexerOptions,
    pub keep_comments: bool,
}

/// Splits one file into tokens. Concatenating the texts spells the file back
/// after line splicing and trigraph/digraph replacement, with comments turned into a single space
/// unless they are kept.
#[derive(Debug)]
pub struct Lexer<'src> {
    chars: PeekMoreIterator<PrelexerIter<'src>>,
    file_id: usize,
    options: LexerOptions,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match self.chars.next()? {
            (range, c @ nondigit!()) => Ok(self.lex_identifier(range, c)),
            (range, '.') if matches!(self.peek_char(), Some(digit!())) => Ok(self.lex_number(range, '.')),
            (range, c @ digit!()) => Ok(self.lex_number(range, c)),
            (range, quote @ ('"' | '\'')) => self.lex_literal(range, quote),
            (range, '\n') => Ok(Token::new(TokenKind::Newline, "\n", self.location(range))),
            (range, c @ horizontal_whitespace!()) => Ok(self.lex_whitespace(range, c)),
            (range, '/') if self.peek_char() == Some('/') => Ok(self.lex_line_comment(range)),
            (range, '/') if self.peek_char() == Some('*') => self.lex_block_comment(range),
            (range, c) => Ok(self.lex_punctuator(range, c)),
        };
        Some(token)
    }
}
impl<'src> Lexer<'src> {
    pub fn new(file_id: usize, source: &'src str, options: LexerOptions) -> Lexer<'src> {
        Lexer {
            chars: PrelexerIter::new(source, options.prelexer).peekmore(),
            file_id,
            options,
        }
    }
    fn location(&self, range: Range<usize>) -> Location {
        Location::new(self.file_id, range)
    }
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|t| t.1)
    }
    /// Consumes the next character if `f` accepts it
    fn next_if<F: FnOnce(char) -> bool>(&mut self, f: F) -> Option<(Range<usize>, char)> {
        match self.chars.peek() {
            Some((_, c)) if f(*c) => self.chars.next(),
            _ => None,
        }
    }
    fn lex_identifier(&mut self, first_range: Range<usize>, first: char) -> Token {
        let mut text = String::from(first);
        let mut end = first_range.end;
        while let Some((range, c)) = self.next_if(|c| matches!(c, identifier!())) {
            end = range.end;
            text.push(c);
        }
        Token::new(TokenKind::Identifier, text, self.location(first_range.start..end))
    }
    fn lex_number(&mut self, first_range: Range<usize>, first: char) -> Token {
        let mut text = String::from(first);
        let mut end = first_range.end;

        while let Some((range, c)) = self.next_if(|c| c == '.' || matches!(c, identifier!())) {
            end = range.end;
            text.push(c);
            // An exponent may carry a sign, anywhere else + and - end the number
            if matches!(c, 'e' | 'E' | 'p' | 'P') {
                if let Some((range, sign)) = self.next_if(|c| matches!(c, '+' | '-')) {
                    end = range.end;
                    text.push(sign);
                }
            }
        }

        Token::new(TokenKind::PPNumber, text, self.location(first_range.start..end))
    }
    fn lex_literal(&mut self, opening: Range<usize>, quote: char) -> LexResult<Token> {
        let mut text = String::from(quote);
        let mut end = opening.end;
        loop {
            match self.next_if(|c| c != '\n') {
                Some((range, c)) if c == quote => {
                    text.push(c);
                    end = range.end;
                    break;
                }
                Some((range, '\\')) => {
                    text.push('\\');
                    end = range.end;
                    // The escaped character never closes the literal
                    if let Some((range, escaped)) = self.next_if(|c| c != '\n') {
                        text.push(escaped);
                        end = range.end;
                    }
                }
                Some((range, c)) => {
                    text.push(c);
                    end = range.end;
                }
                None => {
                    return Err(UnterminatedLiteral {
                        opening: self.location(opening),
                        end_of_line: self.location(end..end),
                        quote,
                    }
                    .into_codespan_report());
                }
            }
        }
        let kind = if quote == '"' { TokenKind::StringLiteral } else { TokenKind::CharLiteral };
        Ok(Token::new(kind, text, self.location(opening.start..end)))
    }
    fn lex_whitespace(&mut self, first_range: Range<usize>, first: char) -> Token {
        let mut text = String::from(first);
        let mut end = first_range.end;
        while let Some((range, c)) = self.next_if(|c| matches!(c, horizontal_whitespace!())) {
            end = range.end;
            text.push(c);
        }
        Token::new(TokenKind::Whitespace, text, self.location(first_range.start..end))
    }
    fn comment_token(&self, text: String, range: Range<usize>) -> Token {
        if self.options.keep_comments {
            Token::new(TokenKind::Comment, text, self.location(range))
        } else {
            Token::new(TokenKind::Whitespace, " ", self.location(range))
        }
    }
    fn lex_line_comment(&mut self, first_range: Range<usize>) -> Token {
        let mut text = String::from("/");
        let mut end = first_range.end;
        while let Some((range, c)) = self.next_if(|c| c != '\n') {
            end = range.end;
            text.push(c);
        }
        self.comment_token(text, first_range.start..end)
    }
    fn lex_block_comment(&mut self, first_range: Range<usize>) -> LexResult<Token> {
        let mut text = String::from("/");
        // Eat the *
        if let Some((_, c)) = self.chars.next() {
            text.push(c);
        }
        loop {
            match self.chars.next() {
                Some((_, '*')) if self.peek_char() == Some('/') => {
                    text.push_str("*/");
                    let end = self.chars.next().map_or(first_range.end, |(slash, _)| slash.end);
                    return Ok(self.comment_token(text, first_range.start..end));
                }
                Some((_, c)) => text.push(c),
                None => {
                    return Err(UnterminatedComment {
                        opening: self.location(first_range.start..first_range.end + 1),
                    }
                    .into_codespan_report());
                }
            }
        }
    }
    /// Maximal munch over the punctuator table, anything that isn't a punctuator becomes [`TokenKind::Other`]
    fn lex_punctuator(&mut self, first_range: Range<usize>, first: char) -> Token {
        let mut spelling = String::from(first);
        let mut longest = Punctuator::from_str(&spelling).ok().map(|p| (0, p));
        for n in 0..Punctuator::MAX_LEN - 1 {
            match self.chars.peek_nth(n) {
                Some((_, c)) => spelling.push(*c),
                None => break,
            }
            if let Ok(punctuator) = Punctuator::from_str(&spelling) {
                longest = Some((n + 1, punctuator));
            }
        }

        let Some((extra, punctuator)) = longest else {
            return Token::new(TokenKind::Other, first.to_string(), self.location(first_range));
        };
        let mut end = first_range.end;
        for _ in 0..extra {
            if let Some((range, _)) = self.chars.next() {
                end = range.end;
            }
        }
        Token::new(TokenKind::Punctuator(punctuator), punctuator.as_str(), self.location(first_range.start..end))
    }
}
