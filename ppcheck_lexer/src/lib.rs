pub mod lexer;
pub mod prelexer;

pub use lexer::{LexResult, Lexer, LexerOptions};
pub use prelexer::{PrelexerIter, PrelexerOptions, find_trigraphs};

#[cfg(test)]
mod tests;
