use codespan_reporting::files::{Files, SimpleFiles};
pub use string_interner;
use string_interner::{backend::StringBackend, symbol::SymbolU32};

/// Everything a transformer run keeps around between tokens.
/// Source files are kept so diagnostics can be rendered against them, names are interned
#[derive(Debug)]
pub struct Context {
    pub files: SimpleFiles<String, String>,
    pub strings: string_interner::StringInterner<StringBackend>,
}
impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
impl Context {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            strings: string_interner::StringInterner::new(),
        }
    }
    pub fn add_file<N: Into<String>, S: Into<String>>(&mut self, name: N, source: S) -> usize {
        self.files.add(name.into(), source.into())
    }
    /// 1-based line number of a byte offset, `None` if the file or offset is unknown
    pub fn line_number(&self, file_id: usize, byte_index: usize) -> Option<usize> {
        self.files.line_number(file_id, self.files.line_index(file_id, byte_index).ok()?).ok()
    }
    /// Resolve an interned string
    pub fn res(&self, sym: SymbolU32) -> &str {
        self.strings.resolve(sym).unwrap_or_default()
    }
    /// Interns a string
    pub fn int<S: AsRef<str>>(&mut self, s: S) -> SymbolU32 {
        self.strings.get_or_intern(s)
    }
}
pub trait HasContext {
    fn ctx(&self) -> &Context;
}

impl HasContext for Context {
    fn ctx(&self) -> &Context {
        self
    }
}
