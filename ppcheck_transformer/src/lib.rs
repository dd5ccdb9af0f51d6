use std::path::PathBuf;

use ppcheck_common::{
    ctx::Context,
    flags::{Feature, Warning},
    token::Token,
};
use ppcheck_errors::{RenderDiagnostic, Report};
use thiserror::Error;

mod include;
mod listener;
mod passthrough;
mod prepend;
mod source;

pub use include::{HeaderNameKind, IncludePath};
pub use listener::{Listener, LogListener};
pub use passthrough::{MAX_INCLUDE_DEPTH, Passthrough};
pub use source::Source;

#[derive(Debug, Error)]
pub enum TransformerError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    /// A lexing or structural error, `rendered` shows it against the offending source
    #[error("{rendered}")]
    Diagnostic { report: Box<Report>, rendered: String },
}

impl TransformerError {
    pub fn diagnostic(ctx: &Context, report: Report) -> Self {
        TransformerError::Diagnostic {
            rendered: ctx.render_diagnostic(&report, false),
            report: Box::new(report),
        }
    }
}

/// Pull interface over a token stream. `Ok(None)` means the stream is exhausted,
/// a stream may also end with a [`ppcheck_common::token::TokenKind::Eof`] token first.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Option<Token>, TransformerError>;
}

/// A configurable token source, set up before its first input is added
pub trait Transformer: TokenSource {
    fn add_feature(&mut self, feature: Feature);
    fn add_warning(&mut self, warning: Warning);
    fn set_listener(&mut self, listener: Box<dyn Listener>);
    fn add_macro(&mut self, name: &str, definition: &str);
    fn system_include_path(&mut self) -> &mut IncludePath;
    fn add_input(&mut self, source: Source);
    /// Human readable dump of the macro table
    fn debug_macros(&self) -> String;
}
