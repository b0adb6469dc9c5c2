use crate::error::StackError;

/// Result type used by stack accessors.
pub type StackResult<T> = Result<T, StackError>;

/// A LIFO container backed by a vector.
///
/// The stack owns its entries; [`Stack::pop`] hands ownership back to the
/// caller. There is no depth limit. `pop` and `peek` fail with
/// [`StackError::Underflow`] exactly when the stack is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    entries: Vec<T>,
}

/// The textual stack used for conversion, rebuilding and the interactive
/// session.
pub type TokenStack = Stack<String>;

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Pushes an entry on top.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Removes and returns the top entry.
    ///
    /// # Example
    /// ```
    /// use rpnstack::{engine::stack::TokenStack, error::StackError};
    ///
    /// let mut stack = TokenStack::new();
    /// stack.push("A".to_string());
    /// assert_eq!(stack.pop(), Ok("A".to_string()));
    /// assert_eq!(stack.pop(), Err(StackError::Underflow));
    /// ```
    pub fn pop(&mut self) -> StackResult<T> {
        self.entries.pop().ok_or(StackError::Underflow)
    }

    /// Returns the top entry without removing it.
    pub fn peek(&self) -> StackResult<&T> {
        self.entries.last().ok_or(StackError::Underflow)
    }

    /// Pops the two topmost entries and returns them in push order: the
    /// deeper entry first, the top entry second.
    ///
    /// Nothing is removed unless both entries are present.
    pub fn pop_pair(&mut self) -> StackResult<(T, T)> {
        if self.entries.len() < 2 {
            return Err(StackError::Underflow);
        }
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }

    /// Number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: std::fmt::Display> Stack<T> {
    /// Renders every entry, bottom to top.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Builds a stack by pushing the items in order; the last item ends up on
    /// top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
