use crate::error::ExprError;

/// A binary arithmetic operator.
///
/// Every operator is a single character in both notations. Precedence and
/// associativity drive the shunting-yard conversion; [`Operator::apply`]
/// drives numeric evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Maps an operator character to its operator.
    ///
    /// # Example
    /// ```
    /// use rpnstack::engine::token::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength: `^` is 3, `*` and `/` are 2, `+` and `-` are 1.
    /// Parentheses sit below every operator at 0.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Only exponentiation groups to the right: `2^3^2` is `2^(3^2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Applies the operator to two numbers, `left` being the operand that was
    /// pushed first.
    ///
    /// Division fails when the divisor is exactly zero; every other
    /// operation follows IEEE-754 semantics.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use rpnstack::{engine::token::Operator, error::ExprError};
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 9.0, None), Ok(512.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0, Some(4)),
    ///            Err(ExprError::DivisionByZero { position: Some(4) }));
    /// ```
    pub fn apply(self, left: f64, right: f64, position: Option<usize>) -> Result<f64, ExprError> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(ExprError::DivisionByZero { position });
                   }
                   left / right
               },
               Self::Pow => left.powf(right),
           })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified lexical unit of an expression.
///
/// Tokens are immutable once produced. Operand text is a run of letters,
/// digits and `.`; it is not validated as a number until something needs its
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A variable name, a number or a previously built sub-expression.
    Operand(String),
    /// One of `+ - * / ^`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Precedence used on the operator stack; parentheses rank 0.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            _ => 0,
        }
    }

    /// Whether this token is either parenthesis.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}
