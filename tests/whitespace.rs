use std::{collections::VecDeque, fs, path::Path};

use ppcheck::{CheckError, FailureKind, Feature, Harness, HarnessConfig, IncludePath, Listener, Source, Token, TokenKind, TokenSource, Transformer, TransformerError, Warning};
use ppcheck_common::spanned::Location;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Splits its input into runs of whitespace and runs of everything else,
/// and ends the stream with `Ok(None)` only.
#[derive(Default)]
struct WordSplitter {
    inputs: VecDeque<Source>,
    tokens: VecDeque<Token>,
    macros: Vec<(String, String)>,
    include_path: IncludePath,
}

impl WordSplitter {
    fn split(&mut self, text: &str) {
        let mut start = 0;
        let mut chars = text.char_indices().peekable();
        while let Some((_, c)) = chars.next() {
            let space = c.is_whitespace();
            let end = loop {
                match chars.peek() {
                    Some((_, next)) if next.is_whitespace() == space => {
                        chars.next();
                    }
                    Some((index, _)) => break *index,
                    None => break text.len(),
                }
            };
            let kind = if space { TokenKind::Whitespace } else { TokenKind::Identifier };
            self.tokens.push_back(Token::new(kind, &text[start..end], Location::new(0, start..end)));
            start = end;
        }
    }
}

impl TokenSource for WordSplitter {
    fn next_token(&mut self) -> Result<Option<Token>, TransformerError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Some(token));
            }
            let Some(source) = self.inputs.pop_front() else {
                return Ok(None);
            };
            let text = source.read()?;
            self.split(&text);
        }
    }
}

impl Transformer for WordSplitter {
    fn add_feature(&mut self, _: Feature) {}
    fn add_warning(&mut self, _: Warning) {}
    fn set_listener(&mut self, _: Box<dyn Listener>) {}
    fn add_macro(&mut self, name: &str, definition: &str) {
        self.macros.push((name.to_string(), definition.to_string()));
    }
    fn system_include_path(&mut self) -> &mut IncludePath {
        &mut self.include_path
    }
    fn add_input(&mut self, source: Source) {
        self.inputs.push_back(source);
    }
    fn debug_macros(&self) -> String {
        self.macros.iter().map(|(name, definition)| format!("#define {name} {definition}\n")).collect()
    }
}

fn fixture(dir: &Path, name: &str, text: &str, check: &str) {
    fs::write(dir.join(name), text).unwrap();
    fs::write(dir.join(format!("{name}.check")), check).unwrap();
}

fn harness(dir: &TempDir) -> Harness<WordSplitter> {
    let _ = env_logger::builder().is_test(true).try_init();
    Harness::with_transformer(HarnessConfig::with_fixture_dir(dir.path()), WordSplitter::default).with_channels(std::io::sink(), std::io::sink())
}

#[test]
fn exact_count_passes() {
    let dir = TempDir::new().unwrap();
    fixture(dir.path(), "words.c", "a a a", "+3 a\n* a a\n! b\n");
    harness(&dir).test_file("words.c");
}

#[test]
fn wrong_count_reports_both_counts() {
    let dir = TempDir::new().unwrap();
    fixture(dir.path(), "words.c", "a a a", "+2 a\n");
    let err = harness(&dir).verify("words.c", false).unwrap_err();
    assert_eq!(
        err.as_assertion().map(|failure| &failure.kind),
        Some(&FailureKind::CountMismatch {
            payload: "a".to_string(),
            expected: 2,
            found: 3
        })
    );
    assert_eq!(err.to_string(), "a found 3 times, but expected 2 times");
}

#[test]
fn print_lines_never_fail() {
    let dir = TempDir::new().unwrap();
    fixture(dir.path(), "words.c", "a a a", "print\nprint\n");
    assert!(harness(&dir).verify("words.c", false).is_ok());
}

#[test]
fn output_is_the_concatenated_tokens() {
    let dir = TempDir::new().unwrap();
    let mut harness = harness(&dir);
    assert_eq!(harness.parse_code_fragment("one  two\tthree\n").unwrap(), "one  two\tthree\n");
}

#[test]
fn missing_check_file_is_not_an_assertion() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lonely.c"), "a").unwrap();
    let err = harness(&dir).verify("lonely.c", false).unwrap_err();
    assert!(matches!(err, CheckError::Io { .. }));
}
