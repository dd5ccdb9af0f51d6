use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::spanned::Location;

/// What a token is, not what it spells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum TokenKind {
    Identifier,
    PPNumber,
    StringLiteral,
    CharLiteral,
    Punctuator(Punctuator),
    /// A run of spaces and tabs
    Whitespace,
    Newline,
    /// Only produced when comments are kept, otherwise comments turn into [`TokenKind::Whitespace`]
    Comment,
    /// `#line` annotation inserted by a transformer
    LineMarker,
    /// Any character that can't start another token
    Other,
    /// End of the token stream
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal text as it should appear in the output
    pub text: String,
    pub location: Location,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, text: S, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
    pub fn eof(location: Location) -> Self {
        Self::new(TokenKind::Eof, "", location)
    }
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.kind == TokenKind::Punctuator(punctuator)
    }
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
    pub fn as_identifier(&self) -> Option<&str> {
        if self.kind == TokenKind::Identifier { Some(&self.text) } else { None }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumString, IntoStaticStr, Display)]
pub enum Punctuator {
    // Brackets and Parentheses
    #[strum(serialize = "[")]
    LeftBracket,
    #[strum(serialize = "]")]
    RightBracket,
    #[strum(serialize = "(")]
    LeftParen,
    #[strum(serialize = ")")]
    RightParen,
    #[strum(serialize = "{")]
    LeftBrace,
    #[strum(serialize = "}")]
    RightBrace,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "->")]
    Arrow,

    // Unary and Increment/Decrement Operators
    #[strum(serialize = "++")]
    PlusPlus,
    #[strum(serialize = "--")]
    MinusMinus,
    #[strum(serialize = "&")]
    Ampersand,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "~")]
    Tilde,
    #[strum(serialize = "!")]
    Bang,

    // Arithmetic and Bitwise Operators
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "<<")]
    LeftLeft,
    #[strum(serialize = ">>")]
    RightRight,
    #[strum(serialize = "<")]
    Left,
    #[strum(serialize = ">")]
    Right,
    #[strum(serialize = "<=")]
    LeftEqual,
    #[strum(serialize = ">=")]
    RightEqual,
    #[strum(serialize = "==")]
    EqualEqual,
    #[strum(serialize = "!=")]
    BangEqual,
    #[strum(serialize = "^")]
    Caret,
    #[strum(serialize = "|")]
    Pipe,
    #[strum(serialize = "&&")]
    AndAnd,
    #[strum(serialize = "||")]
    PipePipe,

    // Ternary and Colon Operators
    #[strum(serialize = "?")]
    Question,
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = "...")]
    Ellipsis,

    // Assignment Operators
    #[strum(serialize = "=")]
    Equal,
    #[strum(serialize = "*=")]
    AsteriskEqual,
    #[strum(serialize = "/=")]
    SlashEqual,
    #[strum(serialize = "%=")]
    PercentEqual,
    #[strum(serialize = "+=")]
    PlusEqual,
    #[strum(serialize = "-=")]
    MinusEqual,
    #[strum(serialize = "<<=")]
    LeftLeftEqual,
    #[strum(serialize = ">>=")]
    RightRightEqual,
    #[strum(serialize = "&=")]
    AmpersandEqual,
    #[strum(serialize = "^=")]
    CaretEqual,
    #[strum(serialize = "|=")]
    PipeEqual,

    // Miscellaneous
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = "#")]
    Hash,
    #[strum(serialize = "##")]
    HashHash,
}

impl Punctuator {
    /// Longest spelling of any punctuator, used to bound maximal munch
    pub const MAX_LEN: usize = 3;

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
