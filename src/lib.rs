//! Golden-output checks for preprocessors.
//!
//! A fixture is run through a [`Transformer`], the text of every token is concatenated, and the
//! result is checked against the directives in `<fixture>.check` (see [`directive`]).

pub mod collect;
pub mod config;
pub mod directive;
pub mod error;
pub mod harness;
pub mod interpret;

pub use collect::collect;
pub use config::HarnessConfig;
pub use directive::{Directive, count_occurrences};
pub use error::{AssertionFailure, CheckError, FailureKind};
pub use harness::Harness;
pub use interpret::Interpreter;
pub use ppcheck_common::{
    flags::{Feature, Warning},
    token::{Token, TokenKind},
};
pub use ppcheck_transformer::{IncludePath, Listener, LogListener, Passthrough, Source, TokenSource, Transformer, TransformerError};
