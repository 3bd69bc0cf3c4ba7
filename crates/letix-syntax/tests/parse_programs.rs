//! End-to-end front-end tests: source text through lexer and parser.

use letix_syntax::{Expr, SyntaxError, parse};

#[test]
fn parses_the_readme_shapes() {
    let cases = [
        ("let x <- 1 in x + 2 end", "let x <- 1 in (x + 2) end"),
        (
            "let x <- true in if x then 1 else 2 end",
            "let x <- true in if x then 1 else 2 end",
        ),
        (
            "if 1 < 2 then true else false",
            "if (1 < 2) then true else false",
        ),
        ("let x <- 1 in true end", "let x <- 1 in true end"),
    ];

    for (source, rendered) in cases {
        assert_eq!(parse(source).unwrap().to_string(), rendered, "source: {source}");
    }
}

#[test]
fn parses_nested_if_in_condition_position() {
    let source = "let x <- if 2 < 3 then true else false in \
                  if if x < 20 then false else true then true else false end";
    let expr = parse(source).unwrap();
    let Expr::Let { body, .. } = expr else {
        panic!("expected a let expression");
    };
    let Expr::IfThenElse { cond, .. } = *body else {
        panic!("expected an if body");
    };
    assert!(matches!(*cond, Expr::IfThenElse { .. }));
}

#[test]
fn comments_are_invisible_to_the_parser() {
    let source = "1 + -- the rest of this line is ignored\n\
                  (* and this\n block too *) 2";
    assert_eq!(parse(source).unwrap().to_string(), "(1 + 2)");
}

#[test]
fn lexer_errors_surface_as_syntax_errors() {
    assert!(matches!(parse("1 ? 2"), Err(SyntaxError::Lexer(_))));
}

#[test]
fn parser_errors_surface_as_syntax_errors() {
    assert!(matches!(parse("let <- 1 in 2 end"), Err(SyntaxError::Parser(_))));
    assert!(matches!(parse("(1 + 2"), Err(SyntaxError::Parser(_))));
}

#[test]
fn shadowing_parses_as_nested_lets() {
    let expr = parse("let x <- 1 in let x <- true in x end end").unwrap();
    assert_eq!(
        expr.to_string(),
        "let x <- 1 in let x <- true in x end end"
    );
}
