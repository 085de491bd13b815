//! Expression trees.
//!
//! An [`Expr`] is an immutable tree generic over the host value type `V`.
//! Owned children are boxed; [`ExprRef`] splices in a subtree owned elsewhere
//! without copying it, and the borrow checker keeps the referencing tree from
//! outliving its referent.
//!
//! ```
//! use sprig_core::{BinaryOp, Expr};
//!
//! let sum = Expr::binary(BinaryOp::Plus, Expr::terminal(2), Expr::terminal(3));
//! let twice = Expr::binary(BinaryOp::Multiplies, Expr::by_ref(&sum), Expr::terminal(2));
//! assert_eq!(twice.arity(), 2);
//! ```
//!
//! Trees are generic over the cell type `C` behind assignable values (see
//! [`Slot`]). The leaf constructors build trees with the default `RefCell`;
//! trees over another cell type build their leaves from the variants:
//!
//! ```
//! use sprig_core::{BinaryOp, Expr, Operand, ReadOnly};
//!
//! let expr: Expr<'_, i64, ReadOnly<i64>> = Expr::binary(
//!     BinaryOp::Plus,
//!     Expr::Terminal(Operand::Value(2)),
//!     Expr::Placeholder(0),
//! );
//! fn assert_sync<T: Sync>(_: &T) {}
//! assert_sync(&expr);
//! ```

mod error;
mod operand;
mod slot;
mod visit;

#[cfg(test)]
mod expr_test;

pub use error::BuildError;
pub use operand::{Operand, OperandGuard};
pub use slot::{ReadOnly, Slot};
pub use visit::{ExprVisitor, PlaceholderScan};

use crate::kind::{BinaryOp, ExprKind, UnaryOp};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// How an [`ExprRef`] accesses its referent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constness {
    Const,
    Mut,
}

/// Non-owning alias to an expression owned elsewhere.
pub struct ExprRef<'a, V, C = RefCell<V>> {
    target: &'a Expr<'a, V, C>,
    constness: Constness,
}

impl<'a, V, C> ExprRef<'a, V, C> {
    pub fn new(target: &'a Expr<'a, V, C>, constness: Constness) -> Self {
        Self { target, constness }
    }

    /// The referenced expression.
    pub fn target(&self) -> &'a Expr<'a, V, C> {
        self.target
    }

    pub fn constness(&self) -> Constness {
        self.constness
    }

    pub fn is_const(&self) -> bool {
        self.constness == Constness::Const
    }
}

impl<V, C> Clone for ExprRef<'_, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, C> Copy for ExprRef<'_, V, C> {}

/// An expression tree node.
///
/// `C` is the cell type behind assignable values; see [`Slot`].
pub enum Expr<'a, V, C = RefCell<V>> {
    /// Leaf holding one value.
    Terminal(Operand<'a, V, C>),

    /// Leaf substituted by the runtime argument at this index.
    Placeholder(usize),

    /// Transparent alias to another tree.
    Ref(ExprRef<'a, V, C>),

    Unary {
        op: UnaryOp,
        operand: Box<Expr<'a, V, C>>,
    },

    Binary {
        op: BinaryOp,
        left: Box<Expr<'a, V, C>>,
        right: Box<Expr<'a, V, C>>,
    },

    /// Evaluates `left`, discards it, then yields `right`.
    Comma {
        left: Box<Expr<'a, V, C>>,
        right: Box<Expr<'a, V, C>>,
    },

    Call {
        callee: Box<Expr<'a, V, C>>,
        args: Vec<Expr<'a, V, C>>,
    },
}

impl<'a, V> Expr<'a, V> {
    // ========================================================================
    // Leaves
    // ========================================================================

    /// Terminal owning `value`.
    pub fn terminal(value: V) -> Self {
        Expr::Terminal(Operand::Value(value))
    }

    /// Terminal holding a read-only borrow of `value`.
    pub fn terminal_ref(value: &'a V) -> Self {
        Expr::Terminal(Operand::Ref(value))
    }

    /// Terminal holding an assignable borrow of `cell`.
    pub fn terminal_mut(cell: &'a RefCell<V>) -> Self {
        Expr::Terminal(Operand::Mut(cell))
    }

    pub fn placeholder(index: usize) -> Self {
        Expr::Placeholder(index)
    }
}

impl<'a, V, C> Expr<'a, V, C> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Mutable alias to `target`.
    pub fn by_ref(target: &'a Expr<'a, V, C>) -> Self {
        Expr::Ref(ExprRef::new(target, Constness::Mut))
    }

    /// Const alias to `target`.
    pub fn by_const_ref(target: &'a Expr<'a, V, C>) -> Self {
        Expr::Ref(ExprRef::new(target, Constness::Const))
    }

    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn comma(left: Self, right: Self) -> Self {
        Expr::Comma {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Self, args: impl IntoIterator<Item = Self>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args: args.into_iter().collect(),
        }
    }

    /// Build an operator node from its kind and child slots.
    ///
    /// For `Call`, the first child is the callee. Leaf and alias kinds carry
    /// no sub-expressions and are rejected; use their dedicated constructors.
    pub fn from_kind(kind: ExprKind, children: Vec<Self>) -> Result<Self, BuildError> {
        if matches!(
            kind,
            ExprKind::Terminal | ExprKind::Placeholder | ExprKind::ExprRef
        ) {
            return Err(BuildError::NotAnOperator { kind });
        }

        let found = children.len();
        let arity_error = || BuildError::Arity {
            kind,
            expected: kind.arity(),
            found,
        };
        if !kind.arity().accepts(found) {
            return Err(arity_error());
        }

        let expr = if let Some(op) = kind.as_unary() {
            let [operand]: [Self; 1] = children.try_into().map_err(|_| arity_error())?;
            Self::unary(op, operand)
        } else if let Some(op) = kind.as_binary() {
            let [left, right]: [Self; 2] = children.try_into().map_err(|_| arity_error())?;
            Self::binary(op, left, right)
        } else if kind == ExprKind::Comma {
            let [left, right]: [Self; 2] = children.try_into().map_err(|_| arity_error())?;
            Self::comma(left, right)
        } else {
            let mut children = children.into_iter();
            let callee = children.next().ok_or_else(arity_error)?;
            Self::call(callee, children)
        };
        Ok(expr)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Terminal(_) => ExprKind::Terminal,
            Expr::Placeholder(_) => ExprKind::Placeholder,
            Expr::Ref(_) => ExprKind::ExprRef,
            Expr::Unary { op, .. } => (*op).into(),
            Expr::Binary { op, .. } => (*op).into(),
            Expr::Comma { .. } => ExprKind::Comma,
            Expr::Call { .. } => ExprKind::Call,
        }
    }

    /// Number of slots this node holds.
    pub fn arity(&self) -> usize {
        match self {
            Expr::Terminal(_) | Expr::Placeholder(_) | Expr::Ref(_) | Expr::Unary { .. } => 1,
            Expr::Binary { .. } | Expr::Comma { .. } => 2,
            Expr::Call { args, .. } => 1 + args.len(),
        }
    }

    /// The stored value of a terminal.
    pub fn value(&self) -> Option<&Operand<'a, V, C>> {
        match self {
            Expr::Terminal(value) => Some(value),
            _ => None,
        }
    }

    /// The stored index of a placeholder.
    pub fn placeholder_index(&self) -> Option<usize> {
        match self {
            Expr::Placeholder(index) => Some(*index),
            _ => None,
        }
    }

    /// Owned sub-expressions in slot order. Leaves and aliases have none.
    pub fn children(&self) -> impl Iterator<Item = &Expr<'a, V, C>> {
        let (first, second, rest): (Option<&Self>, Option<&Self>, &[Self]) = match self {
            Expr::Terminal(_) | Expr::Placeholder(_) | Expr::Ref(_) => (None, None, &[]),
            Expr::Unary { operand, .. } => (Some(&**operand), None, &[]),
            Expr::Binary { left, right, .. } | Expr::Comma { left, right } => {
                (Some(&**left), Some(&**right), &[])
            }
            Expr::Call { callee, args } => (Some(&**callee), None, args),
        };
        first.into_iter().chain(second).chain(rest)
    }

    /// Number of runtime arguments the tree needs: the highest placeholder
    /// index plus one, looking through aliases.
    pub fn required_args(&self) -> usize {
        let mut scan = PlaceholderScan::default();
        scan.visit_expr(self);
        scan.required_args()
    }

    /// Follow aliases to the first non-`Ref` node.
    pub fn resolve(&self) -> &Expr<'a, V, C> {
        let mut expr = self;
        while let Expr::Ref(r) = expr {
            expr = r.target();
        }
        expr
    }
}

impl<V, C> From<V> for Expr<'_, V, C> {
    fn from(value: V) -> Self {
        Expr::Terminal(Operand::Value(value))
    }
}

impl<V: fmt::Debug, C: Slot<V>> fmt::Debug for Expr<'_, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Terminal(value) => f.debug_tuple("Terminal").field(value).finish(),
            Expr::Placeholder(index) => f.debug_tuple("Placeholder").field(index).finish(),
            Expr::Ref(r) => f
                .debug_struct("Ref")
                .field("constness", &r.constness)
                .field("target", r.target)
                .finish(),
            Expr::Unary { op, operand } => f
                .debug_struct("Unary")
                .field("op", op)
                .field("operand", operand)
                .finish(),
            Expr::Binary { op, left, right } => f
                .debug_struct("Binary")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
            Expr::Comma { left, right } => f
                .debug_struct("Comma")
                .field("left", left)
                .field("right", right)
                .finish(),
            Expr::Call { callee, args } => f
                .debug_struct("Call")
                .field("callee", callee)
                .field("args", args)
                .finish(),
        }
    }
}
