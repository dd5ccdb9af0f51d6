use std::io::Write;

use ppcheck_common::token::TokenKind;
use ppcheck_transformer::TokenSource;

use crate::error::CheckError;

/// Pulls tokens until the source is exhausted and returns their concatenated text.
///
/// The stream ends at either an `Ok(None)` or an [`TokenKind::Eof`] token, whichever comes first.
/// With `echo` every token is also written there as soon as it arrives.
pub fn collect<S: TokenSource + ?Sized>(source: &mut S, mut echo: Option<&mut dyn Write>) -> Result<String, CheckError> {
    let mut output = String::new();
    let mut tokens = 0usize;
    while let Some(token) = source.next_token()? {
        if token.kind == TokenKind::Eof {
            break;
        }
        if let Some(echo) = echo.as_mut() {
            echo.write_all(token.text.as_bytes()).map_err(CheckError::Channel)?;
        }
        output.push_str(&token.text);
        tokens += 1;
    }
    if let Some(echo) = echo.as_mut() {
        echo.flush().map_err(CheckError::Channel)?;
    }
    log::debug!("collected {} tokens, {} bytes of output", tokens, output.len());
    Ok(output)
}
