/// Numeric classification and formatting helpers.
///
/// Operand text is only ever turned into a number through these helpers, so
/// the evaluator and the interactive stack agree on what counts as a number.
pub mod num;
