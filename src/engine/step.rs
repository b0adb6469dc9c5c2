use crate::engine::token::Operator;

/// What happened while processing one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// An operand was appended to the postfix output.
    ReadOperand,
    /// A `(` was pushed onto the operator stack.
    PushedLeftParen,
    /// A `)` popped operators to the output and discarded its `(`.
    ClosedParen {
        /// Number of operators moved to the output.
        popped: usize,
    },
    /// An operator was pushed after popping stronger operators.
    PushedOperator {
        /// The operator pushed.
        operator: Operator,
        /// Number of operators moved to the output first.
        popped:   usize,
    },
    /// An unknown character was reported and skipped.
    SkippedUnknown,
    /// An operator left on the stack at end of input was moved to the
    /// output.
    FlushedOperator,
    /// An operand was pushed onto the value stack.
    PushedOperand,
    /// An operator combined the two topmost entries into one expression.
    Combined {
        /// The operator applied.
        operator: Operator,
    },
    /// An operator combined the two topmost values into a number.
    Computed {
        /// The operator applied.
        operator: Operator,
    },
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadOperand => write!(f, "Read operand"),
            Self::PushedLeftParen => write!(f, "Push '(' onto operator stack"),
            Self::ClosedParen { popped } => {
                write!(f, "Pop {popped} operator(s) until '(' found and discard it")
            },
            Self::PushedOperator { operator, popped } => write!(f,
                                                                "Pop {popped} operator(s), push operator '{operator}' onto stack"),
            Self::SkippedUnknown => write!(f, "Skip unknown token"),
            Self::FlushedOperator => write!(f, "Pop remaining operator"),
            Self::PushedOperand => write!(f, "Push operand"),
            Self::Combined { operator } => write!(f, "Combine top two entries with '{operator}'"),
            Self::Computed { operator } => write!(f, "Compute top two values with '{operator}'"),
        }
    }
}

/// A snapshot of algorithm state taken after one token was processed.
///
/// Observers receive it by reference and must not rely on it outliving the
/// callback; clone it to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent {
    /// 1-based step counter.
    pub step:   usize,
    /// Text of the token that was processed.
    pub token:  String,
    /// What was done with it.
    pub action: StepAction,
    /// The working stack, bottom to top.
    pub stack:  Vec<String>,
    /// Postfix output accumulated so far. Empty for operations that do not
    /// produce a token sequence.
    pub output: Vec<String>,
}

impl std::fmt::Display for StepEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Step {}: {} '{}' | stack: [{}]",
               self.step,
               self.action,
               self.token,
               self.stack.join(" "))?;
        if !self.output.is_empty() {
            write!(f, " | output: {}", self.output.join(" "))?;
        }
        Ok(())
    }
}

/// Receives step events synchronously as an operation runs.
///
/// The engine never waits on an observer; pausing, batching or discarding
/// events is the observer's business.
pub trait StepObserver {
    /// Called once after each processed token.
    fn on_step(&mut self, event: &StepEvent);
}

impl<F: FnMut(&StepEvent)> StepObserver for F {
    fn on_step(&mut self, event: &StepEvent) {
        self(event);
    }
}

/// An observer that records every event it sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    /// Events in the order they were emitted.
    pub events: Vec<StepEvent>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl StepObserver for Trace {
    fn on_step(&mut self, event: &StepEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards an event to the observer, if there is one.
pub(crate) fn notify(observer: &mut Option<&mut dyn StepObserver>, event: &StepEvent) {
    log::trace!("{event}");
    if let Some(observer) = observer {
        observer.on_step(event);
    }
}
