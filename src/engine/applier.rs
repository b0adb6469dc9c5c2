use crate::{
    engine::{stack::TokenStack, token::Operator},
    error::{ExprError, ExprResult},
    util::num::{format_fixed, parse_signed_decimal},
};

/// Applies `+`, `-`, `*` or `/` to the two topmost entries of an interactive
/// stack.
///
/// The top entry `a` is the right operand and the entry below it, `b`, the
/// left one. When both read as numbers (see
/// [`parse_signed_decimal`]) the result of `b op a` is pushed with two
/// decimals. Otherwise the symbolic expression `(b op a)` is pushed as is.
///
/// # Errors
/// - [`ExprError::UnknownOperator`] for any other operator; the stack is not
///   touched.
/// - [`ExprError::InsufficientOperands`] when fewer than two entries exist;
///   the stack is not touched.
/// - [`ExprError::DivisionByZero`] when both entries are numeric and `a` is
///   zero. `b` and `a` are pushed back in their original order.
///
/// # Example
/// ```
/// use rpnstack::engine::{applier::apply_binary_op, stack::TokenStack};
///
/// let mut stack: TokenStack = ["3", "4", "X"].into_iter().map(String::from).collect();
/// apply_binary_op(&mut stack, '*').unwrap();
/// assert_eq!(stack.peek().unwrap(), "(4*X)");
/// apply_binary_op(&mut stack, '+').unwrap();
/// assert_eq!(stack.peek().unwrap(), "(3+(4*X))");
/// ```
pub fn apply_binary_op(stack: &mut TokenStack, operator: char) -> ExprResult<()> {
    let op = Operator::from_symbol(operator).filter(|op| *op != Operator::Pow)
                                            .ok_or(ExprError::UnknownOperator { symbol:   operator,
                                                                                position: None, })?;

    let (b, a) = stack.pop_pair()
                      .map_err(|_| ExprError::InsufficientOperands { operator,
                                                                     position: None })?;

    match (parse_signed_decimal(&b), parse_signed_decimal(&a)) {
        (Some(left), Some(right)) => match op.apply(left, right, None) {
            Ok(value) => {
                let result = format_fixed(value);
                log::debug!("{b} {op} {a} = {result}");
                stack.push(result);
            },
            Err(error) => {
                log::debug!("{b} {op} {a} failed, restoring operands: {error}");
                stack.push(b);
                stack.push(a);
                return Err(error);
            },
        },
        _ => {
            let result = format!("({b}{op}{a})");
            log::debug!("Symbolic result {result}");
            stack.push(result);
        },
    }

    Ok(())
}
