use crate::error::StackError;

/// Result type used by the expression engine.
pub type ExprResult<T> = Result<T, ExprError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while processing an expression or
/// manipulating the interactive stack.
///
/// Positions are byte offsets into the source string. Errors raised by the
/// interactive stack have no source, so their position is `None`.
pub enum ExprError {
    /// Popped or peeked an empty stack.
    StackUnderflow,
    /// Found a character that is neither an operand, an operator nor a
    /// parenthesis.
    UnknownToken {
        /// The character encountered.
        token:    char,
        /// Where the character was found.
        position: usize,
    },
    /// A `)` had no matching `(`, or a `(` was never closed.
    MismatchedParentheses {
        /// Where the offending parenthesis was found. An unclosed `(` is
        /// reported at its own position.
        position: usize,
    },
    /// An operator found fewer than two operands on the stack.
    InsufficientOperands {
        /// The operator that was being applied.
        operator: char,
        /// Where the operator was found.
        position: Option<usize>,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Where the `/` was found.
        position: Option<usize>,
    },
    /// An operator symbol outside the supported set was requested.
    UnknownOperator {
        /// The symbol encountered.
        symbol:   char,
        /// Where the symbol was found.
        position: Option<usize>,
    },
    /// An operand could not be read as a decimal number.
    NonNumericOperand {
        /// The offending operand text.
        operand:  String,
        /// Where the operand starts.
        position: usize,
    },
    /// The final stack did not hold exactly one entry.
    InvalidExpression {
        /// Number of entries left on the stack.
        remaining: usize,
    },
    /// An empty token was pushed onto the interactive stack.
    EmptyToken,
    /// A token with characters other than letters, digits and `.` was pushed
    /// onto the interactive stack.
    InvalidToken {
        /// The rejected token.
        token: String,
    },
}

impl From<StackError> for ExprError {
    fn from(value: StackError) -> Self {
        match value {
            StackError::Underflow => Self::StackUnderflow,
        }
    }
}

/// Writes the `Error at position N:` prefix, or a bare `Error:` when the
/// error did not come from a source string.
fn write_prefix(f: &mut std::fmt::Formatter<'_>, position: Option<usize>) -> std::fmt::Result {
    match position {
        Some(position) => write!(f, "Error at position {position}:"),
        None => write!(f, "Error:"),
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "Error: Stack is empty."),
            Self::UnknownToken { token, position } => {
                write!(f, "Error at position {position}: Unknown token '{token}'.")
            },
            Self::MismatchedParentheses { position } => {
                write!(f, "Error at position {position}: Mismatched parentheses.")
            },
            Self::InsufficientOperands { operator, position } => {
                write_prefix(f, *position)?;
                write!(f, " Insufficient operands for operator '{operator}'.")
            },
            Self::DivisionByZero { position } => {
                write_prefix(f, *position)?;
                write!(f, " Division by zero.")
            },
            Self::UnknownOperator { symbol, position } => {
                write_prefix(f, *position)?;
                write!(f, " Unknown operator '{symbol}'.")
            },
            Self::NonNumericOperand { operand, position } => write!(f,
                                                                    "Error at position {position}: Operand '{operand}' is not a number."),
            Self::InvalidExpression { remaining } => write!(f,
                                                            "Error: Invalid expression, {remaining} entries left on the stack instead of 1."),
            Self::EmptyToken => write!(f, "Error: Empty input, nothing pushed."),
            Self::InvalidToken { token } => write!(f,
                                                   "Error: Invalid token '{token}'. Use letters, digits and '.' only."),
        }
    }
}

impl std::error::Error for ExprError {}
