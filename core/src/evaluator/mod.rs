//! Tree-walking evaluator for expression trees.
//!
//! The evaluator reduces an [`Expr`] and a runtime argument list to a single
//! [`Operand`]. For every node it first asks the override hook
//! ([`Transform`]); if there is no override it applies the built-in rule for
//! the node's kind:
//!
//! - **terminal**: the stored value, borrowed from the tree
//! - **placeholder**: the runtime argument at the stored index, borrowed
//! - **expr_ref**: the referent, evaluated in place
//! - **unary / binary operators**: children first (left to right), then the
//!   kind's native primitive from [`Primitives`]
//! - **comma**: left, discarded, then right
//! - **call**: callee, then each argument in order, then `eval_call`
//!
//! The argument list is threaded through every recursive call unchanged.
//!
//! ## Example
//!
//! ```
//! use sprig_core::{evaluator, BinaryOp, EvalFault, Expr, ExprKind, Operand, Primitives};
//!
//! struct Ints;
//!
//! impl Primitives<i64> for Ints {
//!     type Error = EvalFault;
//!
//!     fn unsupported(&self, _kind: ExprKind) -> EvalFault {
//!         unreachable!("only `+` is used below")
//!     }
//!
//!     fn eval_plus<'a>(
//!         &self,
//!         left: Operand<'a, i64>,
//!         right: Operand<'a, i64>,
//!     ) -> Result<Operand<'a, i64>, EvalFault> {
//!         Ok(Operand::Value(*left.get() + *right.get()))
//!     }
//! }
//!
//! let expr = Expr::binary(BinaryOp::Plus, Expr::terminal(2i64), Expr::placeholder(0));
//! let args = [Operand::Value(3i64)];
//! let result = evaluator::evaluate(&Ints, &expr, &args).unwrap();
//! assert_eq!(*result.get(), 5);
//! ```

mod error;
mod eval;
mod primitives;
mod transform;


pub use error::EvalFault;
pub use eval::Evaluator;
pub use primitives::{Operands, Primitives};
pub use transform::{NoTransform, Transform};

use crate::expr::{Expr, Operand};

/// Options controlling evaluation.
///
/// # Example
///
/// ```
/// use sprig_core::evaluator::EvaluatorOptions;
///
/// let options = EvaluatorOptions {
///     max_depth: Some(500),
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum recursion depth.
    ///
    /// Set to `None` for no limit; callers building very deep trees are then
    /// responsible for their own stack budget.
    ///
    /// Default: None
    pub max_depth: Option<usize>,
}

/// Evaluate `expr` with the built-in semantics and default options.
pub fn evaluate<'a, V, C, P>(
    primitives: &P,
    expr: &'a Expr<'a, V, C>,
    args: &'a [Operand<'a, V, C>],
) -> Result<Operand<'a, V, C>, P::Error>
where
    P: Primitives<V, C> + ?Sized,
{
    Evaluator::new(primitives).evaluate(expr, args)
}

/// Evaluate `expr`, consulting `transform` before each node.
pub fn evaluate_with<'a, V, C, P, T>(
    primitives: &P,
    transform: T,
    expr: &'a Expr<'a, V, C>,
    args: &'a [Operand<'a, V, C>],
) -> Result<Operand<'a, V, C>, P::Error>
where
    P: Primitives<V, C> + ?Sized,
    T: Transform<V, P::Error, C>,
{
    Evaluator::new(primitives)
        .with_transform(transform)
        .evaluate(expr, args)
}
