/// Stack access errors.
///
/// Raised by the LIFO container itself when an entry is requested from an
/// empty stack.
pub mod stack_error;
/// Expression errors.
///
/// Contains every error that tokenizing, converting, rebuilding, evaluating
/// or applying an operator to the interactive stack can raise. Each variant
/// carries enough context (offending token, byte position) for a front end
/// to render a helpful message.
pub mod expr_error;

pub use expr_error::{ExprError, ExprResult};
pub use stack_error::StackError;
