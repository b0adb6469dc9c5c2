use crate::{
    engine::{
        lexer::Tokenizer,
        stack::Stack,
        step::{StepAction, StepEvent, StepObserver, notify},
        token::Token,
    },
    error::{ExprError, ExprResult},
    util::num::parse_decimal,
};

/// Evaluates a numeric postfix expression.
///
/// Every operand must be a decimal number. Each operator pops the top value
/// as its right operand and the value below as its left operand and pushes
/// the result. Values stay `f64` on the stack, so nothing is lost to
/// formatting between steps.
///
/// # Parameters
/// - `postfix`: Space separated postfix tokens.
/// - `observer`: Optional step observer, notified after every token.
///
/// # Errors
/// - [`ExprError::NonNumericOperand`] for an operand that is not a decimal,
///   such as `A` or `1.2.3`.
/// - [`ExprError::UnknownOperator`] for a symbol outside `+ - * / ^`.
/// - [`ExprError::InsufficientOperands`] when an operator finds fewer than
///   two values.
/// - [`ExprError::DivisionByZero`] when dividing by exactly zero.
/// - [`ExprError::InvalidExpression`] when the final stack does not hold
///   exactly one value.
///
/// # Example
/// ```
/// use rpnstack::engine::evaluator::evaluate_with;
///
/// assert_eq!(evaluate_with("2 3 2 ^ ^", None).unwrap(), 512.0);
/// ```
pub fn evaluate_with(postfix: &str, mut observer: Option<&mut dyn StepObserver>) -> ExprResult<f64> {
    log::debug!("Evaluating '{postfix}'");

    let mut stack: Stack<f64> = Stack::new();
    let mut step = 0;

    for item in Tokenizer::postfix(postfix) {
        let (token, position) = item?;

        let (text, action) = match token {
            Token::Operand(text) => {
                let value =
                    parse_decimal(&text).ok_or_else(|| ExprError::NonNumericOperand { operand: text.clone(),
                                                                                       position })?;
                stack.push(value);
                (text, StepAction::PushedOperand)
            },
            Token::Operator(operator) => {
                let (left, right) =
                    stack.pop_pair()
                         .map_err(|_| ExprError::InsufficientOperands { operator: operator.symbol(),
                                                                         position: Some(position) })?;
                stack.push(operator.apply(left, right, Some(position))?);
                (operator.to_string(), StepAction::Computed { operator })
            },
            Token::LeftParen => {
                return Err(ExprError::UnknownOperator { symbol:   '(',
                                                        position: Some(position), });
            },
            Token::RightParen => {
                return Err(ExprError::UnknownOperator { symbol:   ')',
                                                        position: Some(position), });
            },
        };

        step += 1;
        notify(&mut observer,
               &StepEvent { step,
                            token: text,
                            action,
                            stack: stack.snapshot(),
                            output: Vec::new() });
    }

    if stack.size() != 1 {
        log::debug!("Postfix '{postfix}' left {} values", stack.size());
        return Err(ExprError::InvalidExpression { remaining: stack.size() });
    }

    let value = stack.pop()?;
    log::debug!("Evaluated '{postfix}' to {value}");
    Ok(value)
}
