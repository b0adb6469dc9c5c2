//! # rpnstack
//!
//! rpnstack is a stack-based expression engine written in Rust.
//! It converts infix expressions to postfix and back, evaluates numeric
//! postfix expressions, and applies operators to an interactive stack whose
//! entries may be numbers or symbolic sub-expressions. Every algorithm can
//! report a snapshot after each token so a front end can show it step by
//! step.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// The algorithmic core.
///
/// This module holds the tokenizer, the stack, the shunting-yard converter,
/// the postfix to infix builder, the numeric evaluator and the interactive
/// operator applier. Each operation owns its working stack, so no state is
/// shared between calls.
///
/// # Responsibilities
/// - Classifies raw text into operands, operators and parentheses.
/// - Resolves precedence, associativity and parenthesis matching.
/// - Distinguishes numeric from symbolic operands.
/// - Emits step events for visualisation without depending on how they are
///   shown.
pub mod engine;
/// Provides the error types of the engine.
///
/// Every failure is detected where it happens and ends the current
/// operation; only division by zero on the interactive stack leaves the
/// stack as it was so the session can continue.
pub mod error;
/// Numeric classification and formatting helpers.
pub mod util;

pub use engine::{
    applier::apply_binary_op,
    converter::{PostfixSequence, convert},
    stack::{Stack, TokenStack},
    step::{StepAction, StepEvent, StepObserver, Trace},
    token::{Operator, Token},
};
pub use error::{ExprError, ExprResult, StackError};

/// Evaluates a numeric postfix expression to a single value.
///
/// # Errors
/// Returns an error if an operand is not a number, an operator is unknown
/// or lacks operands, a division by zero occurs, or the expression does not
/// reduce to exactly one value.
///
/// # Examples
/// ```
/// use rpnstack::{ExprError, evaluate};
///
/// assert_eq!(evaluate("9 3 /").unwrap(), 3.0);
/// assert!(matches!(evaluate("1 0 /"), Err(ExprError::DivisionByZero { .. })));
/// ```
pub fn evaluate(postfix: &str) -> ExprResult<f64> {
    engine::evaluator::evaluate_with(postfix, None)
}

/// Rebuilds a fully parenthesized infix expression from postfix.
///
/// # Errors
/// Returns an error if an operator lacks operands or is unknown, or if the
/// expression does not reduce to exactly one entry.
///
/// # Examples
/// ```
/// use rpnstack::build_infix;
///
/// assert_eq!(build_infix("A B +").unwrap(), "(A + B)");
/// ```
pub fn build_infix(postfix: &str) -> ExprResult<String> {
    engine::builder::build_infix_with(postfix, None)
}

/// Converts an infix expression and evaluates the result.
///
/// # Errors
/// Returns any conversion or evaluation error.
///
/// # Examples
/// ```
/// use rpnstack::calculate;
///
/// assert_eq!(calculate("(1 + 2) * 4 ^ 2").unwrap(), 48.0);
/// ```
pub fn calculate(infix: &str) -> ExprResult<f64> {
    let postfix = convert(infix, None)?;
    evaluate(&postfix.to_string())
}
