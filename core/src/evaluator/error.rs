//! Faults raised by the evaluator itself.
//!
//! Failures raised by native primitives or by an override are not wrapped:
//! they use the primitives' own error type and reach the caller unchanged.
//! The evaluator only contributes the faults below, converted into that
//! error type through `From<EvalFault>`.
//!
//! # Categories
//!
//! - **Structural**: the argument list cannot satisfy the tree's placeholders.
//!   Detected before any primitive runs whenever the tree is known up front.
//! - **Resource exceeded**: an opt-in depth limit was hit.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalFault {
    /// The tree references more arguments than were supplied.
    #[error("expression needs {required} argument(s), but {supplied} were supplied")]
    MissingArguments { required: usize, supplied: usize },

    /// A placeholder was reached whose index has no matching argument.
    #[error("placeholder index {index} is out of range for {len} argument(s)")]
    PlaceholderOutOfRange { index: usize, len: usize },

    /// Evaluation recursion went deeper than `EvaluatorOptions::max_depth`.
    #[error("evaluation depth exceeds maximum of {max_depth}")]
    DepthExceeded { max_depth: usize },
}
