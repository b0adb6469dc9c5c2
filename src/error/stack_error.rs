#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that a [`Stack`](crate::engine::stack::Stack) can
/// raise.
pub enum StackError {
    /// Tried to pop or peek an empty stack.
    Underflow,
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underflow => write!(f, "Stack underflow: the stack is empty."),
        }
    }
}

impl std::error::Error for StackError {}
