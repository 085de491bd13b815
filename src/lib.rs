//! Sprig - expression trees with pluggable evaluation
//!
//! # Overview
//!
//! Sprig builds operator trees over a host value type and evaluates them
//! against a runtime argument list. The host decides what each operator
//! means; sprig only walks the tree. Common use cases include:
//!
//! - Deferred arithmetic over user-supplied values
//! - Rule and filter expressions assembled at runtime
//! - Inspecting or rewriting expression shapes before running them
//!
//! # Quick Start
//!
//! ```
//! use sprig::{BinaryOp, EvalFault, Expr, ExprKind, Operand, Primitives};
//!
//! struct Ints;
//!
//! impl Primitives<i64> for Ints {
//!     type Error = EvalFault;
//!
//!     fn unsupported(&self, kind: ExprKind) -> EvalFault {
//!         panic!("`{kind}` is not supported")
//!     }
//!
//!     fn eval_multiplies<'a>(
//!         &self,
//!         left: Operand<'a, i64>,
//!         right: Operand<'a, i64>,
//!     ) -> Result<Operand<'a, i64>, EvalFault> {
//!         Ok(Operand::Value(*left.get() * *right.get()))
//!     }
//! }
//!
//! // placeholder<0> * 4
//! let expr = Expr::binary(BinaryOp::Multiplies, Expr::placeholder(0), Expr::terminal(4i64));
//! let args = [Operand::Value(10)];
//! let result = sprig::evaluate(&Ints, &expr, &args).unwrap();
//! assert_eq!(*result.get(), 40);
//! ```
//!
//! # Overrides
//!
//! An [`Evaluator`] can carry a [`Transform`] that is consulted before every
//! node. Returning `Some` replaces the built-in rule for that node, which is
//! how a host intercepts, say, every call or one particular subtree.
//!
//! # Printing
//!
//! [`Expr::display`] renders a tree one node per line:
//!
//! ```
//! use sprig::{Expr, UnaryOp};
//!
//! let expr: Expr<'_, bool> = Expr::unary(UnaryOp::LogicalNot, Expr::placeholder(0));
//! assert_eq!(expr.display().to_string(), "expr<!>\n    placeholder<0>\n");
//! ```

// Re-export public API from sprig_core
pub use sprig_core::{
    Arity, BinaryOp, BuildError, Constness, EvalFault, Evaluator, EvaluatorOptions, Expr,
    ExprDisplay, ExprKind, ExprRef, ExprVisitor, NoTransform, Operand, OperandGuard, Operands,
    PlaceholderScan, Primitives, Printer, ReadOnly, Slot, Transform, UnaryOp, evaluate,
    evaluate_with, print,
};

// Re-export modules for less common items
pub use sprig_core::{evaluator, expr, kind, printer, values};
pub use sprig_core::values::{Describe, Qualifiers};
