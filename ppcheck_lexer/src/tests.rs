use ppcheck_common::token::{Punctuator, Token, TokenKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{Lexer, LexerOptions, PrelexerIter, PrelexerOptions, find_trigraphs};

const ALL: PrelexerOptions = PrelexerOptions { digraphs: true, trigraphs: true };

fn lex(source: &str, options: LexerOptions) -> Vec<Token> {
    Lexer::new(0, source, options).collect::<Result<Vec<_>, _>>().unwrap()
}
fn texts(source: &str) -> Vec<String> {
    lex(source, LexerOptions::default()).into_iter().filter(|token| !token.is_whitespace()).map(|token| token.text).collect()
}
fn spell(source: &str, options: LexerOptions) -> String {
    lex(source, options).into_iter().map(|token| token.text).collect()
}

#[test]
fn test_trigraphs() {
    let input = "??=";
    let mut iter = PrelexerIter::new(input, ALL);
    assert_eq!(iter.next(), Some((0..3, '#')));

    let input = "Hello??(World";
    let mut iter = PrelexerIter::new(input, ALL);
    assert_eq!(iter.next(), Some((0..1, 'H')));
    assert_eq!(iter.next(), Some((1..2, 'e')));
    assert_eq!(iter.next(), Some((2..3, 'l')));
    assert_eq!(iter.next(), Some((3..4, 'l')));
    assert_eq!(iter.next(), Some((4..5, 'o')));
    assert_eq!(iter.next(), Some((5..8, '[')));
    assert_eq!(iter.next(), Some((8..9, 'W')));
}

#[test]
fn test_trigraph_edge_cases() {
    let input = "??-??/??'";
    let mut iter = PrelexerIter::new(input, ALL);
    assert_eq!(iter.next(), Some((0..3, '~')));
    assert_eq!(iter.next(), Some((3..6, '\\')));
    assert_eq!(iter.next(), Some((6..9, '^')));
}

#[test]
fn test_trigraphs_disabled() {
    let input = "??=";
    let iter = PrelexerIter::new(input, PrelexerOptions::default());
    assert_eq!(iter.map(|t| t.1).collect::<String>(), "??=");
    assert_eq!(find_trigraphs("a ??= b ?? c ??)"), vec![2..5, 13..16]);
}

#[test]
fn test_newlines() {
    let input = "test\\\nX";
    let mut iter = PrelexerIter::new(input, ALL);
    assert_eq!(iter.next(), Some((0..1, 't')));
    assert_eq!(iter.next(), Some((1..2, 'e')));
    assert_eq!(iter.next(), Some((2..3, 's')));
    assert_eq!(iter.next(), Some((3..4, 't')));
    assert_eq!(iter.next(), Some((6..7, 'X')));
}

#[test]
fn test_newline_edge_cases() {
    let input = "\\\n\\\nA";
    let mut iter = PrelexerIter::new(input, ALL);
    assert_eq!(iter.next(), Some((4..5, 'A')));
}

#[test]
fn test_escaped_newline_with_trigraph() {
    let input = "Hello\\\n??=world";
    let mut iter = PrelexerIter::new(input, ALL);
    for _ in 0..5 {
        iter.next();
    }
    assert_eq!(iter.next(), Some((7..10, '#')));
    assert_eq!(iter.next(), Some((10..11, 'w')));
}

#[test]
fn test_digraphs() {
    let options = LexerOptions {
        prelexer: PrelexerOptions { digraphs: true, trigraphs: false },
        keep_comments: false,
    };
    assert_eq!(spell("a<:1:> <%%> %:%:", options), "a[1] {} ##");
    assert_eq!(spell("a<:1:>", LexerOptions::default()), "a<:1:>");
    let hashhash = lex("%:%:", options);
    assert_eq!(hashhash.len(), 1);
    assert!(hashhash[0].is_punctuator(Punctuator::HashHash));
}

#[rstest]
#[case("123 45.6 7.89e+10", &["123", "45.6", "7.89e+10"])]
#[case("5.15e+5testee+5 0.1.2.3e-4abc123e+10", &["5.15e+5testee+5", "0.1.2.3e-4abc123e+10"])]
#[case(".123 .456e-7", &[".123", ".456e-7"])]
#[case("123e 123E 123p 123P", &["123e", "123E", "123p", "123P"])]
#[case("123e- 0x1.2p4 1+2", &["123e-", "0x1.2p4", "1", "+", "2"])]
fn test_lex_numbers(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(texts(source), expected);
}

#[rstest]
#[case("a+++b", &["a", "++", "+", "b"])]
#[case("x<<=y>>=z", &["x", "<<=", "y", ">>=", "z"])]
#[case("f(...)", &["f", "(", "...", ")"])]
#[case("a..b", &["a", ".", ".", "b"])]
#[case("#define X @", &["#", "define", "X", "@"])]
fn test_lex_punctuators(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(texts(source), expected);
}

#[test]
fn test_literals() {
    let tokens = lex(r#""a \"b\" c" 'x' '\''"#, LexerOptions::default());
    let literals = tokens.iter().filter(|token| !token.is_whitespace()).map(|token| (token.kind, token.text.as_str())).collect::<Vec<_>>();
    assert_eq!(
        literals,
        vec![
            (TokenKind::StringLiteral, r#""a \"b\" c""#),
            (TokenKind::CharLiteral, "'x'"),
            (TokenKind::CharLiteral, r"'\''"),
        ]
    );
}

#[test]
fn test_unterminated_literal() {
    let result = Lexer::new(0, "\"abc\nint", LexerOptions::default()).next().unwrap();
    assert_eq!(result.unwrap_err().message, "Unterminated string literal");
}

#[test]
fn test_comments() {
    assert_eq!(spell("a/* b */c // d\ne", LexerOptions::default()), "a c  \ne");
    let keep = LexerOptions { keep_comments: true, ..Default::default() };
    assert_eq!(spell("a/* b */c // d\ne", keep), "a/* b */c // d\ne");

    let result = Lexer::new(0, "a /* b", LexerOptions::default()).nth(2).unwrap();
    assert_eq!(result.unwrap_err().message, "Unterminated comment");
}

#[test]
fn test_block_comment_location_covers_closing_slash() {
    let tokens = lex("a/* b */c", LexerOptions { keep_comments: true, ..Default::default() });
    assert_eq!(tokens[1].kind, TokenKind::Comment);
    assert_eq!(tokens[1].location.range, 1..8);
    assert_eq!(tokens[2].location.range, 8..9);
}

#[test]
fn test_spelling_round_trips_plain_source() {
    let source = "int main(void) {\n\treturn a->b[0] != 'c';\n}\n";
    assert_eq!(spell(source, LexerOptions::default()), source);
}
