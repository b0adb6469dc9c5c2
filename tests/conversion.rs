use rpnstack::{
    ExprError, StepAction, StepEvent, Trace, build_infix, convert,
    engine::converter::{ConverterState, ShuntingYard},
};

fn assert_postfix(infix: &str, expected: &[&str]) {
    match convert(infix, None) {
        Ok(postfix) => assert_eq!(postfix.texts(), expected, "converting {infix:?}"),
        Err(e) => panic!("Converting {infix:?} failed: {e}"),
    }
}

fn assert_conversion_error(infix: &str) -> ExprError {
    match convert(infix, None) {
        Ok(postfix) => panic!("Converting {infix:?} succeeded with {postfix} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_postfix("A+B*C", &["A", "B", "C", "*", "+"]);
    assert_postfix("(A+B)*C", &["A", "B", "+", "C", "*"]);
    assert_postfix("A*B+C", &["A", "B", "*", "C", "+"]);
    assert_postfix("A-B-C", &["A", "B", "-", "C", "-"]);
    assert_postfix("A/B*C", &["A", "B", "/", "C", "*"]);
    assert_postfix("((A))", &["A"]);
    assert_postfix("A*(B+C*D)-E", &["A", "B", "C", "D", "*", "+", "*", "E", "-"]);
}

#[test]
fn exponent_is_right_associative() {
    assert_postfix("2^3^2", &["2", "3", "2", "^", "^"]);
    assert_postfix("(2^3)^2", &["2", "3", "^", "2", "^"]);
    assert_postfix("A*B^C", &["A", "B", "C", "^", "*"]);
    assert_postfix("A^B*C", &["A", "B", "^", "C", "*"]);
}

#[test]
fn operands_are_multi_character() {
    assert_postfix("rate * 12.5 + x2", &["rate", "12.5", "*", "x2", "+"]);
    assert_postfix("  a\t+\nb ", &["a", "b", "+"]);
}

#[test]
fn vertical_tab_separates_tokens() {
    assert_postfix("A\u{0B}+\u{0B}B", &["A", "B", "+"]);
    assert_postfix("\u{0B}x\u{0C}*\u{0B}(y - 1)\u{0B}", &["x", "y", "1", "-", "*"]);
}

#[test]
fn empty_input_is_an_empty_sequence() {
    let postfix = convert("   ", None).unwrap();
    assert!(postfix.is_empty());
    assert_eq!(postfix.to_string(), "");
}

#[test]
fn output_has_no_trailing_space() {
    let postfix = convert("A + B", None).unwrap();
    assert_eq!(postfix.to_string(), "A B +");
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(assert_conversion_error("(A+B"),
               ExprError::MismatchedParentheses { position: 0 });
    assert_eq!(assert_conversion_error("A+B)"),
               ExprError::MismatchedParentheses { position: 3 });
    assert_eq!(assert_conversion_error("(A+(B*C)"),
               ExprError::MismatchedParentheses { position: 0 });
    assert!(matches!(assert_conversion_error(")("),
                     ExprError::MismatchedParentheses { position: 0 }));
}

#[test]
fn unknown_tokens_are_reported_and_skipped() {
    let mut trace = Trace::new();
    let result = convert("A % B + .", Some(&mut trace));

    assert_eq!(result, Err(ExprError::UnknownToken { token: '%', position: 2 }));

    let skipped: Vec<_> = trace.events
                               .iter()
                               .filter(|e| e.action == StepAction::SkippedUnknown)
                               .map(|e| e.token.as_str())
                               .collect();
    assert_eq!(skipped, ["%", "."]);

    // Scanning went on past the unknown characters.
    let last = trace.events.last().unwrap();
    assert_eq!(last.output, ["A", "B", "+"]);
}

#[test]
fn earlier_unknown_token_wins_over_mismatch() {
    assert_eq!(assert_conversion_error("A $ B)"),
               ExprError::UnknownToken { token: '$', position: 2 });
}

#[test]
fn leading_dot_is_not_an_infix_operand() {
    assert_eq!(assert_conversion_error(".5+1"),
               ExprError::UnknownToken { token: '.', position: 0 });
}

#[test]
fn step_events_follow_each_token() {
    let mut trace = Trace::new();
    convert("(A+B)*C", Some(&mut trace)).unwrap();

    let summary: Vec<(&str, &StepAction)> =
        trace.events.iter().map(|e| (e.token.as_str(), &e.action)).collect();
    assert_eq!(summary.len(), 8);
    assert_eq!(summary[0], ("(", &StepAction::PushedLeftParen));
    assert_eq!(summary[1], ("A", &StepAction::ReadOperand));
    assert_eq!(summary[4], (")", &StepAction::ClosedParen { popped: 1 }));
    assert_eq!(summary[7], ("*", &StepAction::FlushedOperator));

    let third = &trace.events[2];
    assert_eq!(third.stack, ["(", "+"]);
    assert_eq!(third.output, ["A"]);

    let steps: Vec<usize> = trace.events.iter().map(|e| e.step).collect();
    assert_eq!(steps, (1..=8).collect::<Vec<_>>());
}

#[test]
fn closure_observers_work() {
    let mut tokens = Vec::new();
    let mut observer = |event: &StepEvent| tokens.push(event.token.clone());
    convert("A*B", Some(&mut observer)).unwrap();
    assert_eq!(tokens, ["A", "*", "B", "*"]);
}

#[test]
fn pull_based_conversion() {
    let mut converter = ShuntingYard::new("A+B");
    assert_eq!(converter.state(), ConverterState::Scanning);

    let first = converter.next().unwrap().unwrap();
    assert_eq!(first.token, "A");
    assert_eq!(first.output, ["A"]);

    let rest: Vec<_> = converter.by_ref().collect::<Result<_, _>>().unwrap();
    assert_eq!(rest.len(), 3);
    assert_eq!(converter.state(), ConverterState::Done);
    assert_eq!(converter.finish().unwrap().texts(), ["A", "B", "+"]);
}

#[test]
fn pull_based_conversion_stops_on_mismatch() {
    let mut converter = ShuntingYard::new("A)B");
    assert!(converter.next().unwrap().is_ok());
    assert_eq!(converter.next().unwrap(),
               Err(ExprError::MismatchedParentheses { position: 1 }));
    assert_eq!(converter.state(), ConverterState::Failed);
    assert!(converter.next().is_none());
}

#[test]
fn conversion_is_repeatable() {
    let first = convert("x^2 + 3*x*(y - 1)", None).unwrap();
    let second = convert("x^2 + 3*x*(y - 1)", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn postfix_to_infix() {
    assert_eq!(build_infix("A B +").unwrap(), "(A + B)");
    assert_eq!(build_infix("A B C * +").unwrap(), "(A + (B * C))");
    assert_eq!(build_infix("A B - C -").unwrap(), "((A - B) - C)");
    assert_eq!(build_infix("2 3 2 ^ ^").unwrap(), "(2 ^ (3 ^ 2))");
    assert_eq!(build_infix(".5 x /").unwrap(), "(.5 / x)");
    assert_eq!(build_infix("AB+").unwrap_err(),
               ExprError::InsufficientOperands { operator: '+',
                                                 position: Some(2) });
}

#[test]
fn postfix_to_infix_errors() {
    assert!(matches!(build_infix("A +"),
                     Err(ExprError::InsufficientOperands { operator: '+', .. })));
    assert_eq!(build_infix("A B"), Err(ExprError::InvalidExpression { remaining: 2 }));
    assert_eq!(build_infix(""), Err(ExprError::InvalidExpression { remaining: 0 }));
    assert!(matches!(build_infix("A B %"),
                     Err(ExprError::UnknownOperator { symbol: '%', .. })));
    assert!(matches!(build_infix("A ( B +"),
                     Err(ExprError::UnknownOperator { symbol: '(', .. })));
}

#[test]
fn postfix_to_infix_reports_steps() {
    let mut trace = Trace::new();
    rpnstack::engine::builder::build_infix_with("A B + C *", Some(&mut trace)).unwrap();

    assert_eq!(trace.events.len(), 5);
    assert_eq!(trace.events[2].stack, ["(A + B)"]);
    assert_eq!(trace.events[4].stack, ["((A + B) * C)"]);
}

#[test]
fn infix_survives_a_round_trip_through_postfix() {
    let postfix = convert("A*(B+C)^D", None).unwrap();
    assert_eq!(build_infix(&postfix.to_string()).unwrap(), "(A * ((B + C) ^ D))");
}
