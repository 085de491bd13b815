#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Expression trees with a pluggable evaluator and a structural printer.
//!
//! A tree is built from [`Expr`] nodes over a host value type `V`. The
//! [`evaluator`] reduces it against a runtime argument list, delegating each
//! operator to the host's [`Primitives`]; the [`printer`] renders its shape.
//!
//! ```
//! use sprig_core::{BinaryOp, Expr};
//!
//! let expr: Expr<'_, i32> = Expr::binary(BinaryOp::Plus, Expr::terminal(2), Expr::placeholder(0));
//! assert_eq!(
//!     expr.display().to_string(),
//!     "expr<+>\n    term<i32>[=2]\n    placeholder<0>\n"
//! );
//! ```

extern crate alloc;

pub mod evaluator;
pub mod expr;
pub mod kind;
pub mod printer;
pub mod values;

pub use evaluator::{
    EvalFault, Evaluator, EvaluatorOptions, NoTransform, Operands, Primitives, Transform,
    evaluate, evaluate_with,
};
pub use expr::{
    BuildError, Constness, Expr, ExprRef, ExprVisitor, Operand, OperandGuard, PlaceholderScan,
    ReadOnly, Slot,
};
pub use kind::{Arity, BinaryOp, ExprKind, UnaryOp};
pub use printer::{ExprDisplay, Printer, print};
pub use values::{Describe, Qualifiers};
