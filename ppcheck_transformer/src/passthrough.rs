use std::{
    collections::{HashMap, HashSet, VecDeque},
    path::PathBuf,
};

use ppcheck_common::{
    ctx::Context,
    ctx::string_interner::symbol::SymbolU32,
    flags::{Feature, Warning},
    spanned::Location,
    token::{Punctuator, Token, TokenKind},
};
use ppcheck_errors::{
    Diagnostic, Report,
    errors::{IgnoredTrigraph, ImportDirective, IncludeTooDeep, MalformedInclude, MissingInclude},
};
use ppcheck_lexer::{Lexer, LexerOptions, PrelexerOptions, find_trigraphs};

use crate::{
    HeaderNameKind, IncludePath, Listener, Source, TokenSource, Transformer, TransformerError,
    prepend::PrependingPeekableIterator,
};

type PPResult<T> = Result<T, TransformerError>;

/// Files open at once, counting the input itself
pub const MAX_INCLUDE_DEPTH: usize = 200;

/// One file currently being read, the innermost include is last
#[derive(Debug)]
struct Frame {
    file_id: usize,
    name: String,
    dir: Option<PathBuf>,
    tokens: PrependingPeekableIterator<std::vec::IntoIter<Token>>,
    at_line_start: bool,
}

/// A transformer that only lexes.
///
/// Tokens come out exactly as the lexer produces them, apart from `#include` and `#import`
/// lines, which are replaced by the tokens of the file they name. Macros are recorded for
/// [`Transformer::debug_macros`] but never expanded, and every other directive is passed through untouched.
pub struct Passthrough {
    ctx: Context,
    features: HashSet<Feature>,
    warnings: HashSet<Warning>,
    listener: Option<Box<dyn Listener>>,
    macros: HashMap<SymbolU32, String>,
    include_path: IncludePath,
    inputs: VecDeque<Source>,
    frames: Vec<Frame>,
    /// Files pulled in so far, `#import` skips these
    included: HashSet<PathBuf>,
    /// Line markers waiting to be handed out before the next real token
    pending: VecDeque<Token>,
    last_file: usize,
    last_was_newline: bool,
    eof_sent: bool,
}

impl Default for Passthrough {
    fn default() -> Self {
        Self::new()
    }
}

impl Passthrough {
    pub fn new() -> Self {
        Self {
            ctx: Context::new(),
            features: HashSet::new(),
            warnings: HashSet::new(),
            listener: None,
            macros: HashMap::new(),
            include_path: IncludePath::default(),
            inputs: VecDeque::new(),
            frames: vec![],
            included: HashSet::new(),
            pending: VecDeque::new(),
            last_file: 0,
            last_was_newline: true,
            eof_sent: false,
        }
    }
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
    fn lexer_options(&self) -> LexerOptions {
        LexerOptions {
            prelexer: PrelexerOptions {
                digraphs: self.has_feature(Feature::Digraphs),
                trigraphs: self.has_feature(Feature::Trigraphs),
            },
            keep_comments: self.has_feature(Feature::KeepComments),
        }
    }
    fn warn(&mut self, report: Report) {
        match self.listener.as_mut() {
            Some(listener) => listener.handle_warning(&self.ctx, &report),
            None => log::warn!("{}", report.message),
        }
    }
    /// Tells the listener about an error and turns it into one the caller can propagate
    fn fail(&mut self, report: Report) -> TransformerError {
        if let Some(listener) = self.listener.as_mut() {
            listener.handle_error(&self.ctx, &report);
        }
        TransformerError::diagnostic(&self.ctx, report)
    }
    fn queue_line_marker(&mut self, line: usize, name: &str, location: Location) {
        if !self.has_feature(Feature::LineMarkers) {
            return;
        }
        let separator = if self.last_was_newline { "" } else { "\n" };
        let text = format!("{separator}#line {line} \"{name}\"\n");
        self.pending.push_back(Token::new(TokenKind::LineMarker, text, location));
    }
    /// Lexes a whole file and makes it the innermost frame
    fn open(&mut self, source: Source) -> PPResult<()> {
        let text = source.read()?;
        let name = source.name();
        let file_id = self.ctx.add_file(name.clone(), text.clone());

        if self.warnings.contains(&Warning::Trigraphs) && !self.has_feature(Feature::Trigraphs) {
            for range in find_trigraphs(&text) {
                self.warn(IgnoredTrigraph(Location::new(file_id, range)).into_codespan_report());
            }
        }
        let tokens = match Lexer::new(file_id, &text, self.lexer_options()).collect::<Result<Vec<_>, _>>() {
            Ok(tokens) => tokens,
            Err(report) => return Err(self.fail(report)),
        };
        log::debug!("opened {} ({} tokens)", name, tokens.len());

        self.last_file = file_id;
        self.queue_line_marker(1, &name, Location::new(file_id, 0..0));
        self.frames.push(Frame {
            file_id,
            dir: source.directory().map(|dir| dir.to_path_buf()),
            name,
            tokens: PrependingPeekableIterator::new(tokens.into_iter()),
            at_line_start: true,
        });
        Ok(())
    }
    /// Called after an included file ran out, points the output back at the includer
    fn resume(&mut self) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        let file_id = frame.file_id;
        let name = frame.name.clone();
        let Some(start) = frame.tokens.peek().map(|token| token.location.range.start) else {
            return;
        };
        self.last_file = file_id;
        if let Some(line) = self.ctx.line_number(file_id, start) {
            self.queue_line_marker(line, &name, Location::new(file_id, start..start));
        }
    }
    /// Handles a directive starting at `hash`. Returns whether it was consumed,
    /// if not every token looked at has been put back.
    fn directive(&mut self, hash: &Token) -> PPResult<bool> {
        let Some(frame) = self.frames.last_mut() else {
            return Ok(false);
        };
        let mut lookahead = vec![];
        let mut name = None;
        while let Some(token) = frame.tokens.next() {
            lookahead.push(token.clone());
            if !token.is_whitespace() {
                name = Some(token);
                break;
            }
        }
        let is_import = match name.as_ref().and_then(Token::as_identifier) {
            Some("include") => false,
            Some("import") => true,
            _ => {
                frame.tokens.prepend_extend(lookahead);
                return Ok(false);
            }
        };

        let mut line = vec![];
        while let Some(token) = frame.tokens.next() {
            if token.kind == TokenKind::Newline {
                break;
            }
            if !token.is_whitespace() {
                line.push(token);
            }
        }
        frame.at_line_start = true;
        let current_dir = frame.dir.clone();
        let end = line.last().or(name.as_ref()).map(|token| token.location.clone()).unwrap_or_else(|| hash.location.clone());
        let location = hash.location.until(&end);

        if is_import && self.warnings.contains(&Warning::Import) {
            self.warn(ImportDirective(location.clone()).into_codespan_report());
        }
        let Some((header_name, kind)) = header_name(&line) else {
            return Err(self.fail(MalformedInclude(location).into_codespan_report()));
        };
        let Some(path) = self.include_path.locate(&header_name, kind, current_dir.as_deref()) else {
            let searched = current_dir.iter().filter(|_| kind == HeaderNameKind::Quoted).chain(self.include_path.dirs()).map(|dir| dir.display().to_string()).collect();
            return Err(self.fail(
                MissingInclude {
                    location,
                    name: header_name,
                    searched,
                }
                .into_codespan_report(),
            ));
        };
        if self.frames.len() >= MAX_INCLUDE_DEPTH {
            return Err(self.fail(IncludeTooDeep { location, limit: MAX_INCLUDE_DEPTH }.into_codespan_report()));
        }
        let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if is_import && self.included.contains(&key) {
            log::debug!("{} already imported", path.display());
            return Ok(true);
        }
        self.included.insert(key);
        log::debug!("including {}", path.display());
        self.open(Source::File(path))?;
        Ok(true)
    }
}

/// `<a/b.h>` or `"a/b.h"` from the tokens following `include`
fn header_name(line: &[Token]) -> Option<(String, HeaderNameKind)> {
    match line {
        [literal] if literal.kind == TokenKind::StringLiteral => {
            let name = literal.text.strip_prefix('"')?.strip_suffix('"')?;
            Some((name.to_string(), HeaderNameKind::Quoted))
        }
        [open, inner @ .., close] if open.is_punctuator(Punctuator::Left) && close.is_punctuator(Punctuator::Right) && !inner.is_empty() => {
            Some((inner.iter().map(|token| token.text.as_str()).collect(), HeaderNameKind::Angled))
        }
        _ => None,
    }
}

impl TokenSource for Passthrough {
    fn next_token(&mut self) -> PPResult<Option<Token>> {
        loop {
            if let Some(marker) = self.pending.pop_front() {
                self.last_was_newline = true;
                return Ok(Some(marker));
            }
            let Some(frame) = self.frames.last_mut() else {
                match self.inputs.pop_front() {
                    Some(source) => {
                        self.open(source)?;
                        continue;
                    }
                    None if self.eof_sent => return Ok(None),
                    None => {
                        self.eof_sent = true;
                        return Ok(Some(Token::eof(Location::new(self.last_file, 0..0))));
                    }
                }
            };
            let Some(token) = frame.tokens.next() else {
                self.frames.pop();
                self.resume();
                continue;
            };

            let at_line_start = frame.at_line_start;
            frame.at_line_start = match token.kind {
                TokenKind::Newline => true,
                TokenKind::Whitespace | TokenKind::Comment => at_line_start,
                _ => false,
            };
            if at_line_start && token.is_punctuator(Punctuator::Hash) && self.directive(&token)? {
                continue;
            }
            self.last_was_newline = token.kind == TokenKind::Newline;
            return Ok(Some(token));
        }
    }
}

impl Transformer for Passthrough {
    fn add_feature(&mut self, feature: Feature) {
        self.features.insert(feature);
    }
    fn add_warning(&mut self, warning: Warning) {
        self.warnings.insert(warning);
    }
    fn set_listener(&mut self, listener: Box<dyn Listener>) {
        self.listener = Some(listener);
    }
    fn add_macro(&mut self, name: &str, definition: &str) {
        let symbol = self.ctx.int(name);
        self.macros.insert(symbol, definition.to_string());
    }
    fn system_include_path(&mut self) -> &mut IncludePath {
        &mut self.include_path
    }
    fn add_input(&mut self, source: Source) {
        self.inputs.push_back(source);
    }
    fn debug_macros(&self) -> String {
        let mut macros = self.macros.iter().map(|(symbol, definition)| (self.ctx.res(*symbol), definition)).collect::<Vec<_>>();
        macros.sort();
        let mut dump = String::new();
        for (name, definition) in macros {
            dump.push_str(&format!("#define {} {}\n", name, definition));
        }
        dump
    }
}
