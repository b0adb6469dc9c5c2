use crate::{
    engine::{applier::apply_binary_op, stack::TokenStack},
    error::{ExprError, ExprResult},
};

/// One command of a stack machine script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push a token.
    Push(String),
    /// Pop the top token.
    Pop,
    /// Apply an operator to the two topmost tokens.
    Apply(char),
}

impl Command {
    /// Reads one script word: `pop`, a single `+ - * /`, or a token to push.
    #[must_use]
    pub fn parse(word: &str) -> Self {
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(operator @ ('+' | '-' | '*' | '/')), None) => Self::Apply(operator),
            _ if word == "pop" => Self::Pop,
            _ => Self::Push(word.to_string()),
        }
    }
}

/// An interactive session stack.
///
/// Unlike the stacks used inside a conversion or evaluation, this one lives
/// across calls until the session is dropped. It is mutated only through
/// [`StackMachine::push_token`], [`StackMachine::pop_token`] and
/// [`StackMachine::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackMachine {
    stack: TokenStack,
}

impl StackMachine {
    /// Creates a session with an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: TokenStack::new() }
    }

    /// The underlying stack.
    #[must_use]
    pub const fn stack(&self) -> &TokenStack {
        &self.stack
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.size()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pushes a number or name typed by the user.
    ///
    /// # Errors
    /// - [`ExprError::EmptyToken`] for empty input.
    /// - [`ExprError::InvalidToken`] when the text holds anything but ASCII
    ///   letters, digits and `.`.
    pub fn push_token(&mut self, text: &str) -> ExprResult<()> {
        if text.is_empty() {
            return Err(ExprError::EmptyToken);
        }
        if !text.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
            return Err(ExprError::InvalidToken { token: text.to_string() });
        }

        log::debug!("Push {text}");
        self.stack.push(text.to_string());
        Ok(())
    }

    /// Pops and returns the top entry.
    ///
    /// # Errors
    /// [`ExprError::StackUnderflow`] when the stack is empty.
    pub fn pop_token(&mut self) -> ExprResult<String> {
        let token = self.stack.pop()?;
        log::debug!("Pop {token}");
        Ok(token)
    }

    /// Applies an operator to the two topmost entries; see
    /// [`apply_binary_op`].
    pub fn apply(&mut self, operator: char) -> ExprResult<()> {
        apply_binary_op(&mut self.stack, operator)
    }

    /// Runs one command.
    pub fn execute(&mut self, command: &Command) -> ExprResult<()> {
        match command {
            Command::Push(text) => self.push_token(text),
            Command::Pop => self.pop_token().map(|_| ()),
            Command::Apply(operator) => self.apply(*operator),
        }
    }

    /// Runs whitespace separated commands in order, stopping at the first
    /// failure. Commands that ran before the failure keep their effect.
    ///
    /// # Example
    /// ```
    /// use rpnstack::engine::machine::StackMachine;
    ///
    /// let mut machine = StackMachine::new();
    /// machine.run_script("3 4 + X *").unwrap();
    /// assert_eq!(machine.stack().peek().unwrap(), "(7.00*X)");
    /// ```
    pub fn run_script(&mut self, script: &str) -> ExprResult<()> {
        for word in script.split_whitespace() {
            self.execute(&Command::parse(word))?;
        }
        Ok(())
    }

    /// Lists the entries top first, each with its depth. The top entry has
    /// depth [`StackMachine::len`], the bottom entry depth 1.
    #[must_use]
    pub fn entries(&self) -> Vec<(usize, &str)> {
        self.stack
            .iter()
            .enumerate()
            .rev()
            .map(|(i, token)| (i + 1, token.as_str()))
            .collect()
    }
}

impl std::fmt::Display for StackMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.len();
        for (depth, token) in self.entries() {
            if depth == len {
                writeln!(f, "#{depth}: {token}  <- Top")?;
            } else {
                writeln!(f, "#{depth}: {token}")?;
            }
        }
        Ok(())
    }
}
