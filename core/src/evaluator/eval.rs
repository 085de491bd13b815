//! Core evaluation logic.

use crate::{
    evaluator::{EvalFault, EvaluatorOptions, NoTransform, Operands, Primitives, Transform},
    expr::{Expr, Operand},
};
use tracing::{debug, trace};

/// Recursive evaluator for expression trees.
///
/// Holds the native primitives, the override hook and the options; the tree
/// and the runtime arguments are supplied per call and never mutated.
pub struct Evaluator<'p, P: ?Sized, T = NoTransform> {
    primitives: &'p P,
    transform: T,
    options: EvaluatorOptions,
    depth: usize,
}

impl<'p, P: ?Sized> Evaluator<'p, P> {
    /// Create an evaluator without an override and with default options.
    pub fn new(primitives: &'p P) -> Self {
        Self {
            primitives,
            transform: NoTransform,
            options: EvaluatorOptions::default(),
            depth: 0,
        }
    }
}

impl<'p, P: ?Sized, T> Evaluator<'p, P, T> {
    /// Consult `transform` before evaluating each node.
    pub fn with_transform<U>(self, transform: U) -> Evaluator<'p, P, U> {
        Evaluator {
            primitives: self.primitives,
            transform,
            options: self.options,
            depth: self.depth,
        }
    }

    pub fn with_options(mut self, options: EvaluatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluate `expr` against the runtime argument list `args`.
    ///
    /// Fails with [`EvalFault::MissingArguments`] before running anything if
    /// the tree holds a placeholder with no matching argument.
    pub fn evaluate<'a, V, C>(
        &mut self,
        expr: &'a Expr<'a, V, C>,
        args: &'a [Operand<'a, V, C>],
    ) -> Result<Operand<'a, V, C>, P::Error>
    where
        P: Primitives<V, C>,
        T: Transform<V, P::Error, C>,
    {
        let required = expr.required_args();
        if args.len() < required {
            debug!(required, supplied = args.len(), "Too few arguments for expression");
            return Err(EvalFault::MissingArguments {
                required,
                supplied: args.len(),
            }
            .into());
        }

        self.depth = 0;
        self.eval_expr(expr, args)
    }

    /// Evaluate one node, tracking recursion depth.
    pub(crate) fn eval_expr<'a, V, C>(
        &mut self,
        expr: &'a Expr<'a, V, C>,
        args: &'a [Operand<'a, V, C>],
    ) -> Result<Operand<'a, V, C>, P::Error>
    where
        P: Primitives<V, C>,
        T: Transform<V, P::Error, C>,
    {
        if let Some(max_depth) = self.options.max_depth {
            if self.depth >= max_depth {
                debug!(max_depth, "Evaluation depth exceeded");
                return Err(EvalFault::DepthExceeded { max_depth }.into());
            }
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr, args);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner<'a, V, C>(
        &mut self,
        expr: &'a Expr<'a, V, C>,
        args: &'a [Operand<'a, V, C>],
    ) -> Result<Operand<'a, V, C>, P::Error>
    where
        P: Primitives<V, C>,
        T: Transform<V, P::Error, C>,
    {
        if let Some(result) = self.transform.try_transform(expr, args) {
            debug!(kind = %expr.kind(), depth = self.depth, "Override replaced node");
            return result;
        }

        trace!(kind = %expr.kind(), depth = self.depth, "Evaluating node");

        match expr {
            Expr::Terminal(value) => Ok(value.borrowed()),

            Expr::Placeholder(index) => Ok(eval_placeholder(*index, args)?),

            // Aliases are transparent: evaluate the referent in place.
            Expr::Ref(r) => self.eval_expr(r.target(), args),

            Expr::Unary { op, operand } => {
                let operand = self.eval_expr(operand, args)?;
                op.apply(self.primitives, operand)
            }

            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, args)?;
                let right = self.eval_expr(right, args)?;
                op.apply(self.primitives, left, right)
            }

            Expr::Comma { left, right } => {
                // Left runs to completion first; its value is dropped.
                self.eval_expr(left, args)?;
                self.eval_expr(right, args)
            }

            Expr::Call {
                callee,
                args: call_args,
            } => {
                let callee = self.eval_expr(callee, args)?;
                let evaluated = call_args
                    .iter()
                    .map(|arg| self.eval_expr(arg, args))
                    .collect::<Result<Operands<'a, V, C>, _>>()?;
                self.primitives.eval_call(callee, evaluated)
            }
        }
    }
}

/// Select the runtime argument a placeholder stands for.
fn eval_placeholder<'a, V, C>(
    index: usize,
    args: &'a [Operand<'a, V, C>],
) -> Result<Operand<'a, V, C>, EvalFault> {
    match args.get(index) {
        Some(arg) => Ok(arg.borrowed()),
        None => {
            debug!(index, len = args.len(), "Placeholder index out of range");
            Err(EvalFault::PlaceholderOutOfRange {
                index,
                len: args.len(),
            })
        }
    }
}
