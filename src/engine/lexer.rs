use logos::Logos;

use crate::{
    engine::token::{Operator, Token},
    error::ExprError,
};

/// Lexemes of an infix expression.
///
/// An operand must start with a letter or digit; a stray `.` at the start of
/// a run is an unknown character, just like any other symbol outside the
/// grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
enum InfixLexeme {
    /// Identifiers and numbers such as `A`, `rate2` or `3.14`.
    #[regex(r"[A-Za-z0-9][A-Za-z0-9.]*", |lex| lex.slice().to_string())]
    Operand(String),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `+`, `-`, `*`, `/` or `^`.
    #[regex(r"[+\-*/^]", infix_operator)]
    Operator(Operator),
    /// Any other single character.
    #[regex(r"[^A-Za-z0-9 \t\r\n\x0B\f()+\-*/^]", infix_char)]
    Unknown(char),
}

/// Lexemes of a postfix expression.
///
/// Operands may start with `.` (as in `.5`). Every other non-blank character
/// is a one-character operator symbol; whether it is a supported operator is
/// decided by the [`Tokenizer`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
enum PostfixLexeme {
    /// Identifiers, numbers and anything else built from letters, digits and
    /// `.`.
    #[regex(r"[A-Za-z0-9.]+", |lex| lex.slice().to_string())]
    Operand(String),
    /// A single operator character.
    #[regex(r"[^A-Za-z0-9. \t\r\n\x0B\f]", postfix_char)]
    Symbol(char),
}

fn infix_operator(lex: &logos::Lexer<InfixLexeme>) -> Option<Operator> {
    lex.slice().chars().next().and_then(Operator::from_symbol)
}

fn infix_char(lex: &logos::Lexer<InfixLexeme>) -> Option<char> {
    lex.slice().chars().next()
}

fn postfix_char(lex: &logos::Lexer<PostfixLexeme>) -> Option<char> {
    lex.slice().chars().next()
}

/// Which notation a [`Tokenizer`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Operators between operands, with parentheses.
    Infix,
    /// Operators after their operands, no parentheses.
    Postfix,
}

enum Source<'src> {
    Infix(logos::Lexer<'src, InfixLexeme>),
    Postfix(logos::Lexer<'src, PostfixLexeme>),
}

/// Splits an expression string into classified tokens, left to right.
///
/// Each item is a token paired with the byte offset where it starts, or the
/// error found at that point. The tokenizer is lazy and cannot be restarted;
/// tokenizing again means building a new one over the original string.
///
/// In infix notation an unknown character yields
/// [`ExprError::UnknownToken`]; in postfix notation a symbol that is not one
/// of `+ - * / ^` (parentheses included) yields
/// [`ExprError::UnknownOperator`]. Either way the tokenizer can keep going
/// past the error.
///
/// # Example
/// ```
/// use rpnstack::engine::{
///     lexer::Tokenizer,
///     token::{Operator, Token},
/// };
///
/// let tokens: Vec<_> = Tokenizer::infix("x1 * (2.5)").map(Result::unwrap).collect();
/// assert_eq!(tokens,
///            vec![(Token::Operand("x1".into()), 0),
///                 (Token::Operator(Operator::Mul), 3),
///                 (Token::LeftParen, 5),
///                 (Token::Operand("2.5".into()), 6),
///                 (Token::RightParen, 9)]);
/// ```
pub struct Tokenizer<'src> {
    source: Source<'src>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer for `source` in the given notation.
    #[must_use]
    pub fn new(source: &'src str, notation: Notation) -> Self {
        let source = match notation {
            Notation::Infix => Source::Infix(InfixLexeme::lexer(source)),
            Notation::Postfix => Source::Postfix(PostfixLexeme::lexer(source)),
        };
        Self { source }
    }

    /// Shorthand for [`Tokenizer::new`] with [`Notation::Infix`].
    #[must_use]
    pub fn infix(source: &'src str) -> Self {
        Self::new(source, Notation::Infix)
    }

    /// Shorthand for [`Tokenizer::new`] with [`Notation::Postfix`].
    #[must_use]
    pub fn postfix(source: &'src str) -> Self {
        Self::new(source, Notation::Postfix)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<(Token, usize), ExprError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            Source::Infix(lexer) => {
                let lexeme = lexer.next()?;
                let position = lexer.span().start;

                Some(match lexeme {
                         Ok(InfixLexeme::Operand(text)) => Ok((Token::Operand(text), position)),
                         Ok(InfixLexeme::LeftParen) => Ok((Token::LeftParen, position)),
                         Ok(InfixLexeme::RightParen) => Ok((Token::RightParen, position)),
                         Ok(InfixLexeme::Operator(op)) => Ok((Token::Operator(op), position)),
                         Ok(InfixLexeme::Unknown(token)) => {
                             Err(ExprError::UnknownToken { token, position })
                         },
                         Err(()) => {
                             let token = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                             Err(ExprError::UnknownToken { token, position })
                         },
                     })
            },
            Source::Postfix(lexer) => {
                let lexeme = lexer.next()?;
                let position = lexer.span().start;

                Some(match lexeme {
                         Ok(PostfixLexeme::Operand(text)) => Ok((Token::Operand(text), position)),
                         Ok(PostfixLexeme::Symbol(symbol)) => {
                             Operator::from_symbol(symbol).map(|op| (Token::Operator(op), position))
                                                          .ok_or(ExprError::UnknownOperator { symbol,
                                                                                              position: Some(position) })
                         },
                         Err(()) => {
                             let symbol = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                             Err(ExprError::UnknownOperator { symbol,
                                                              position: Some(position) })
                         },
                     })
            },
        }
    }
}
