use popu::modifier::Modifier;
use popu::scanner::{Scanner, Token};
use popu::Error;

fn tokens(mut scanner: Scanner<'_>) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    while let Some((token, _)) = scanner.scan_next().unwrap() {
        out.push(token);
    }
    out
}

fn var(name: &str) -> Token<'_> {
    Token::Variable { name, modifier: None }
}

#[test]
fn test_mixed_tokens() {
    let found = tokens(Scanner::new("a $B ${c:-d} $"));
    assert_eq!(
        found,
        vec![
            Token::Literal("a "),
            var("B"),
            Token::Literal(" "),
            Token::Variable {
                name: "c",
                modifier: Some(Modifier::Default("d")),
            },
            Token::Literal(" "),
            Token::Literal("$"),
        ]
    );
}

#[test]
fn test_token_ranges() {
    let mut scanner = Scanner::new("ab$CD-${e}");
    assert_eq!(scanner.scan_next().unwrap(), Some((Token::Literal("ab"), 0..2)));
    assert_eq!(scanner.scan_next().unwrap(), Some((var("CD"), 2..5)));
    assert_eq!(scanner.scan_next().unwrap(), Some((Token::Literal("-"), 5..6)));
    assert_eq!(scanner.scan_next().unwrap(), Some((var("e"), 6..10)));
    assert_eq!(scanner.scan_next().unwrap(), None);
}

#[test]
fn test_modifier_split_on_first_colon() {
    let found = tokens(Scanner::new("${url:-http://x:80}"));
    assert_eq!(
        found,
        vec![Token::Variable {
            name: "url",
            modifier: Some(Modifier::Default("http://x:80")),
        }]
    );
}

#[test]
fn test_all_operators() {
    assert_eq!(Modifier::parse("+a"), Some(Modifier::Alternate("a")));
    assert_eq!(Modifier::parse("-a"), Some(Modifier::Default("a")));
    assert_eq!(Modifier::parse("#"), Some(Modifier::Length));
    assert_eq!(Modifier::parse("=a"), Some(Modifier::Assign("a")));
    assert_eq!(Modifier::parse("?"), Some(Modifier::Required("")));
    assert_eq!(Modifier::parse("x"), None);
    assert_eq!(Modifier::parse(""), None);
}

#[test]
fn test_empty_braces_are_literal() {
    assert_eq!(tokens(Scanner::new("${}")), vec![Token::Literal("${}")]);
}

#[test]
fn test_unterminated_brace_reports_position() {
    let mut scanner = Scanner::new("ab ${x");
    assert_eq!(scanner.scan_next().unwrap(), Some((Token::Literal("ab "), 0..3)));
    assert_eq!(scanner.scan_next(), Err(Error::UnterminatedToken { position: 0 }));
}

#[test]
fn test_unterminated_brace_position_after_variable() {
    let mut scanner = Scanner::new("${a} ${X");
    assert_eq!(scanner.scan_next().unwrap(), Some((var("a"), 0..4)));
    assert_eq!(scanner.scan_next().unwrap(), Some((Token::Literal(" "), 4..5)));
    assert_eq!(scanner.scan_next(), Err(Error::UnterminatedToken { position: 4 }));
}

#[test]
fn test_unterminated_empty_rest_recovered() {
    let found = tokens(Scanner::new("a ${").with_ignore_errors(true));
    assert_eq!(found, vec![Token::Literal("a "), Token::Literal("${}")]);
}

#[test]
fn test_unterminated_brace_recovered() {
    let mut scanner = Scanner::new("ab ${x:-y").with_ignore_errors(true);
    scanner.scan_next().unwrap();
    assert_eq!(
        scanner.scan_next().unwrap(),
        Some((
            Token::Variable {
                name: "x",
                modifier: Some(Modifier::Default("y")),
            },
            3..9
        ))
    );
    assert_eq!(scanner.scan_next().unwrap(), None);
}

#[test]
fn test_special_vars() {
    let special = ['?', '$'];
    let found = tokens(Scanner::new("$?x $$").with_special_vars(&special));
    assert_eq!(found, vec![var("?"), Token::Literal("x "), var("$")]);

    let found = tokens(Scanner::new("$?"));
    assert_eq!(found, vec![Token::Literal("$"), Token::Literal("?")]);
}

#[test]
fn test_unbraced_names_are_ascii() {
    let found = tokens(Scanner::new("€$é $ab€"));
    assert_eq!(
        found,
        vec![
            Token::Literal("€"),
            Token::Literal("$"),
            Token::Literal("é "),
            var("ab"),
            Token::Literal("€"),
        ]
    );
}

#[test]
fn test_braced_names_accept_anything() {
    let found = tokens(Scanner::new("${🚀.x-y}"));
    assert_eq!(found, vec![var("🚀.x-y")]);
}

fn placeholders(mut scanner: Scanner<'_>) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut out = Vec::new();
    while let Some(item) = scanner.scan_placeholder() {
        out.push(item);
    }
    out
}

#[test]
fn test_placeholder_scan() {
    let found = placeholders(Scanner::new("a ${b.c} %{d-e}$f"));
    assert_eq!(
        found,
        vec![
            (Token::Literal("a "), 0..2),
            (var("b.c"), 2..8),
            (Token::Literal(" "), 8..9),
            (var("d-e"), 9..15),
            (Token::Literal("$f"), 15..17),
        ]
    );
}

#[test]
fn test_placeholder_scan_skips_modifiers_and_unterminated() {
    let found = placeholders(Scanner::new("${a:-b} ${} ${c"));
    assert_eq!(found, vec![(Token::Literal("${a:-b} ${} ${c"), 0..15)]);
}
