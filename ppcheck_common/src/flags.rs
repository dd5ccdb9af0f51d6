use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Optional behaviour a transformer can be asked to enable before it sees any input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    /// `<:` `:>` `<%` `%>` `%:` `%:%:`
    Digraphs,
    /// `??=` and friends
    Trigraphs,
    /// Emit `#line` markers whenever the current file changes
    LineMarkers,
    /// Keep comments in the output instead of replacing them with a space
    KeepComments,
}

/// Diagnostics a transformer can be asked to report to its listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Warning {
    /// `#import` directive, which is an Objective-C extension
    Import,
    /// A trigraph was seen while trigraphs are disabled
    Trigraphs,
}
