use crate::{
    engine::{
        lexer::Tokenizer,
        stack::TokenStack,
        step::{StepAction, StepEvent, StepObserver, notify},
        token::Token,
    },
    error::{ExprError, ExprResult},
};

/// Rebuilds a fully parenthesized infix expression from postfix.
///
/// Operands are pushed as they are read. Each operator pops the top entry as
/// its right operand and the entry below as its left operand, then pushes
/// `"(left op right)"`. Exactly one entry must remain at the end.
///
/// # Parameters
/// - `postfix`: Space separated postfix tokens.
/// - `observer`: Optional step observer, notified after every token.
///
/// # Errors
/// - [`ExprError::InsufficientOperands`] when an operator finds fewer than
///   two entries.
/// - [`ExprError::UnknownOperator`] for a symbol outside `+ - * / ^`.
/// - [`ExprError::InvalidExpression`] when the final stack does not hold
///   exactly one entry.
///
/// # Example
/// ```
/// use rpnstack::engine::builder::build_infix_with;
///
/// assert_eq!(build_infix_with("A B C * +", None).unwrap(), "(A + (B * C))");
/// ```
pub fn build_infix_with(postfix: &str, mut observer: Option<&mut dyn StepObserver>) -> ExprResult<String> {
    log::debug!("Building infix from '{postfix}'");

    let mut stack = TokenStack::new();
    let mut step = 0;

    for item in Tokenizer::postfix(postfix) {
        let (token, position) = item?;

        let (text, action) = match token {
            Token::Operand(text) => {
                stack.push(text.clone());
                (text, StepAction::PushedOperand)
            },
            Token::Operator(operator) => {
                let (left, right) =
                    stack.pop_pair()
                         .map_err(|_| ExprError::InsufficientOperands { operator: operator.symbol(),
                                                                         position: Some(position) })?;
                stack.push(format!("({left} {operator} {right})"));
                (operator.to_string(), StepAction::Combined { operator })
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
        log::debug!("Postfix '{postfix}' left {} entries", stack.size());
        return Err(ExprError::InvalidExpression { remaining: stack.size() });
    }

    Ok(stack.pop()?)
}
