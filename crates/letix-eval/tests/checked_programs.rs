//! Check-then-run tests: programs that pass inference must evaluate
//! without type mismatches.

use letix_eval::{EvalError, Value, eval, undefined_names};
use letix_syntax::parse;
use letix_typecheck::infer;

fn check_and_run(source: &str) -> Value {
    let expr = parse(source).unwrap();
    assert!(undefined_names(&expr).is_empty(), "free names in: {source}");
    infer(&expr).unwrap();
    eval(&expr).unwrap()
}

#[test]
fn checked_programs_run_clean() {
    let cases = [
        ("let x <- 1 in x + 2 end", Value::Int(3)),
        ("let x <- true in if x then 1 else 2 end", Value::Int(1)),
        ("if 1 < 2 then true else false", Value::Bool(true)),
        ("let x <- 1 in true end", Value::Bool(true)),
        (
            "let a <- 2 * 3 + 4 in \
             let b <- not (a < 10) in \
             if b or a = 10 then a / 2 else a - 1 end end",
            Value::Int(5),
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(check_and_run(source), expected, "source: {source}");
    }
}

#[test]
fn ill_typed_programs_never_reach_the_evaluator() {
    let source = "let x <- if 2 < 3 then true else false in \
                  if if x < 20 then false else true then true else false end";
    let expr = parse(source).unwrap();
    assert_eq!(infer(&expr).unwrap_err().to_string(), "Type error");
}

#[test]
fn well_typed_programs_can_still_fault_at_run_time() {
    let expr = parse("let d <- 0 in 10 / d end").unwrap();
    infer(&expr).unwrap();
    assert_eq!(eval(&expr).unwrap_err(), EvalError::DivisionByZero);
}
