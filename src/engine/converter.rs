use crate::{
    engine::{
        lexer::Tokenizer,
        stack::Stack,
        step::{StepAction, StepEvent, StepObserver, notify},
        token::{Operator, Token},
    },
    error::{ExprError, ExprResult},
};

/// Postfix tokens in evaluation order.
///
/// Renders as the tokens joined by single spaces, with no trailing space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostfixSequence {
    tokens: Vec<Token>,
}

impl PostfixSequence {
    /// The tokens as text, e.g. `["A", "B", "+"]`.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }

    /// Whether there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for PostfixSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Where the converter is in its run.
///
/// Between two steps a converter is always `Scanning`, `FlushingRemaining`,
/// `Failed` or `Done`; the two `FlushingFor*` states only last while a
/// single `)` or operator is being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterState {
    /// Reading the next input token.
    Scanning,
    /// Popping operators to the output until the matching `(`.
    FlushingForParen,
    /// Popping operators that bind at least as tightly as the incoming one.
    FlushingForPrecedence,
    /// Input is exhausted; popping what is left on the operator stack.
    FlushingRemaining,
    /// A mismatched parenthesis stopped the conversion.
    Failed,
    /// Every token was processed.
    Done,
}

/// Pops operators off `operators` while the top binds at least as tightly as
/// `incoming`. Right-associative operators only yield to strictly stronger
/// ones.
fn should_pop(top: &Token, incoming: Operator) -> bool {
    match top {
        Token::Operator(top) => {
            top.precedence() > incoming.precedence()
            || (top.precedence() == incoming.precedence() && !incoming.is_right_associative())
        },
        _ => false,
    }
}

/// A step-by-step shunting-yard converter.
///
/// Iterating yields one [`StepEvent`] per processed token, followed by one
/// per operator flushed at the end of input. Unknown characters are
/// reported as a [`StepAction::SkippedUnknown`] step and scanning goes on;
/// a mismatched parenthesis yields an `Err` and ends the iteration. Call
/// [`ShuntingYard::finish`] for the result.
///
/// # Example
/// ```
/// use rpnstack::engine::converter::ShuntingYard;
///
/// let mut converter = ShuntingYard::new("A+B*C");
/// let steps = converter.by_ref().count();
/// assert_eq!(steps, 7);
/// assert_eq!(converter.finish().unwrap().to_string(), "A B C * +");
/// ```
pub struct ShuntingYard<'src> {
    tokens:    Tokenizer<'src>,
    operators: Stack<(Token, usize)>,
    output:    Vec<Token>,
    state:     ConverterState,
    step:      usize,
    unknown:   Option<ExprError>,
    failure:   Option<ExprError>,
}

impl<'src> ShuntingYard<'src> {
    /// Creates a converter over an infix expression.
    #[must_use]
    pub fn new(infix: &'src str) -> Self {
        Self { tokens:    Tokenizer::infix(infix),
               operators: Stack::new(),
               output:    Vec::new(),
               state:     ConverterState::Scanning,
               step:      0,
               unknown:   None,
               failure:   None, }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> ConverterState {
        self.state
    }

    /// Runs the conversion to the end and returns the postfix sequence.
    ///
    /// The first error found wins: an unknown character seen before a
    /// mismatched parenthesis is the error reported.
    pub fn finish(mut self) -> ExprResult<PostfixSequence> {
        while self.next().is_some() {}

        if let Some(error) = self.unknown.or(self.failure) {
            return Err(error);
        }
        Ok(PostfixSequence { tokens: self.output })
    }

    fn transition(&mut self, state: ConverterState) {
        log::trace!("Converter state {:?} -> {state:?}", self.state);
        self.state = state;
    }

    fn fail(&mut self, error: ExprError) -> ExprError {
        log::debug!("Conversion failed: {error}");
        self.transition(ConverterState::Failed);
        self.failure = Some(error.clone());
        error
    }

    fn event(&mut self, token: String, action: StepAction) -> StepEvent {
        self.step += 1;
        StepEvent { step: self.step,
                    token,
                    action,
                    stack: self.operators.iter().map(|(token, _)| token.to_string()).collect(),
                    output: self.output.iter().map(ToString::to_string).collect() }
    }

    fn scan(&mut self) -> Option<ExprResult<StepEvent>> {
        let Some(item) = self.tokens.next() else {
            self.transition(ConverterState::FlushingRemaining);
            return self.flush_remaining();
        };

        match item {
            Err(error) => {
                log::debug!("Skipping: {error}");
                let token = match &error {
                    ExprError::UnknownToken { token, .. } => token.to_string(),
                    _ => String::new(),
                };
                self.unknown.get_or_insert(error);
                Some(Ok(self.event(token, StepAction::SkippedUnknown)))
            },
            Ok((Token::Operand(text), _)) => {
                self.output.push(Token::Operand(text.clone()));
                Some(Ok(self.event(text, StepAction::ReadOperand)))
            },
            Ok((Token::LeftParen, position)) => {
                self.operators.push((Token::LeftParen, position));
                Some(Ok(self.event("(".to_string(), StepAction::PushedLeftParen)))
            },
            Ok((Token::RightParen, position)) => {
                self.transition(ConverterState::FlushingForParen);
                let mut popped = 0;
                loop {
                    match self.operators.pop() {
                        Ok((Token::LeftParen, _)) => break,
                        Ok((token, _)) => {
                            self.output.push(token);
                            popped += 1;
                        },
                        Err(_) => {
                            return Some(Err(self.fail(ExprError::MismatchedParentheses { position })));
                        },
                    }
                }
                self.transition(ConverterState::Scanning);
                Some(Ok(self.event(")".to_string(), StepAction::ClosedParen { popped })))
            },
            Ok((Token::Operator(operator), position)) => {
                self.transition(ConverterState::FlushingForPrecedence);
                let mut popped = 0;
                while let Ok((top, _)) = self.operators.peek()
                      && should_pop(top, operator)
                {
                    if let Ok((token, _)) = self.operators.pop() {
                        self.output.push(token);
                        popped += 1;
                    }
                }
                self.operators.push((Token::Operator(operator), position));
                self.transition(ConverterState::Scanning);
                Some(Ok(self.event(operator.to_string(),
                                   StepAction::PushedOperator { operator, popped })))
            },
        }
    }

    fn flush_remaining(&mut self) -> Option<ExprResult<StepEvent>> {
        match self.operators.pop() {
            Err(_) => {
                self.transition(ConverterState::Done);
                None
            },
            Ok((token, position)) if token.is_paren() => {
                Some(Err(self.fail(ExprError::MismatchedParentheses { position })))
            },
            Ok((token, _)) => {
                self.output.push(token.clone());
                Some(Ok(self.event(token.to_string(), StepAction::FlushedOperator)))
            },
        }
    }
}

impl Iterator for ShuntingYard<'_> {
    type Item = ExprResult<StepEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            ConverterState::Scanning
            | ConverterState::FlushingForParen
            | ConverterState::FlushingForPrecedence => self.scan(),
            ConverterState::FlushingRemaining => self.flush_remaining(),
            ConverterState::Failed | ConverterState::Done => None,
        }
    }
}

/// Converts an infix expression to postfix with the shunting-yard
/// algorithm.
///
/// The observer, if any, receives one event per processed token. Conversion
/// keeps no state between calls, so converting the same string twice gives
/// the same sequence.
///
/// # Errors
/// - [`ExprError::MismatchedParentheses`] when a `)` has no `(` or a `(` is
///   never closed.
/// - [`ExprError::UnknownToken`] when the input contains a character outside
///   the grammar. Scanning continues past it so the observer sees the rest
///   of the input, but no sequence is returned.
///
/// # Example
/// ```
/// use rpnstack::engine::converter::convert;
///
/// let postfix = convert("(A+B)*C", None).unwrap();
/// assert_eq!(postfix.texts(), ["A", "B", "+", "C", "*"]);
/// ```
pub fn convert(infix: &str, mut observer: Option<&mut dyn StepObserver>) -> ExprResult<PostfixSequence> {
    log::debug!("Converting '{infix}' to postfix");

    let mut converter = ShuntingYard::new(infix);
    for event in converter.by_ref().flatten() {
        notify(&mut observer, &event);
    }

    let postfix = converter.finish()?;
    log::debug!("Converted '{infix}' to '{postfix}'");
    Ok(postfix)
}
