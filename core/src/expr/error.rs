//! Structural faults detected while building a tree.

use crate::kind::{Arity, ExprKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The number of child slots does not match the kind's arity.
    #[error("`{kind}` takes {expected} child expression(s), found {found}")]
    Arity {
        kind: ExprKind,
        expected: Arity,
        found: usize,
    },

    /// Leaf and alias kinds have dedicated constructors.
    #[error("`{kind}` is not an operator kind")]
    NotAnOperator { kind: ExprKind },
}
