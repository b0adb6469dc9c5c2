/// Lexical analysis.
///
/// Turns raw infix or postfix text into classified tokens with their byte
/// positions, using `logos` generated lexers.
pub mod lexer;
/// Token and operator types shared by every algorithm.
///
/// Defines precedence, associativity and numeric application of operators.
pub mod token;
/// The LIFO container behind every algorithm.
pub mod stack;
/// Step notifications for visualising an algorithm as it runs.
///
/// # Responsibilities
/// - Defines the immutable `StepEvent` snapshot and the `StepAction` kinds.
/// - Defines the `StepObserver` seam and a recording `Trace` observer.
pub mod step;
/// Infix to postfix conversion.
///
/// The shunting-yard algorithm, available both as a pull-based step iterator
/// and as a single call with an optional observer.
pub mod converter;
/// Postfix to infix reconstruction.
pub mod builder;
/// Numeric postfix evaluation.
pub mod evaluator;
/// Two-operand operations on the interactive stack, numeric or symbolic.
pub mod applier;
/// The interactive stack session and its script commands.
pub mod machine;
