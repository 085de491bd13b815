//! Override hook consulted before structural evaluation.

use core::cell::RefCell;

use crate::expr::{Expr, Operand};

/// Optional per-node replacement of the default evaluation.
///
/// `try_transform` is asked about every node, with the same arguments the
/// node is evaluated with. Returning `Some` makes its result the node's
/// value verbatim (children are not visited); returning `None` falls back to
/// the built-in semantics for the node's kind.
///
/// # Example
///
/// ```
/// use sprig_core::{BinaryOp, Expr, ExprKind, Operand, Transform};
///
/// /// Every `=` yields zero instead of assigning.
/// struct NoAssign;
///
/// impl<E> Transform<i64, E> for NoAssign {
///     fn try_transform<'a>(
///         &self,
///         expr: &'a Expr<'a, i64>,
///         _args: &'a [Operand<'a, i64>],
///     ) -> Option<Result<Operand<'a, i64>, E>> {
///         (expr.kind() == ExprKind::Assign).then(|| Ok(Operand::Value(0)))
///     }
/// }
/// ```
pub trait Transform<V, E, C = RefCell<V>> {
    fn try_transform<'a>(
        &self,
        expr: &'a Expr<'a, V, C>,
        args: &'a [Operand<'a, V, C>],
    ) -> Option<Result<Operand<'a, V, C>, E>>;
}

/// The absent override: every node takes the built-in path.
///
/// The check inlines to a constant `None`, so evaluating without an override
/// costs nothing per node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTransform;

impl<V, E, C> Transform<V, E, C> for NoTransform {
    #[inline(always)]
    fn try_transform<'a>(
        &self,
        _expr: &'a Expr<'a, V, C>,
        _args: &'a [Operand<'a, V, C>],
    ) -> Option<Result<Operand<'a, V, C>, E>> {
        None
    }
}

impl<V, E, C, T: Transform<V, E, C> + ?Sized> Transform<V, E, C> for &T {
    #[inline]
    fn try_transform<'a>(
        &self,
        expr: &'a Expr<'a, V, C>,
        args: &'a [Operand<'a, V, C>],
    ) -> Option<Result<Operand<'a, V, C>, E>> {
        (**self).try_transform(expr, args)
    }
}
