use core::cell::RefCell;

use super::Expr;

/// Read-only traversal over expression trees.
///
/// The default implementation recurses into every child and follows
/// `expr_ref` aliases as if the referent were owned in place.
///
/// # Example
///
/// ```
/// use sprig_core::{BinaryOp, Expr, ExprVisitor};
///
/// struct TerminalCounter {
///     count: usize,
/// }
///
/// impl<'a, V> ExprVisitor<'a, V> for TerminalCounter {
///     fn visit_expr(&mut self, expr: &Expr<'a, V>) {
///         if matches!(expr, Expr::Terminal(_)) {
///             self.count += 1;
///         }
///         self.super_visit_expr(expr);
///     }
/// }
///
/// let expr = Expr::binary(BinaryOp::Plus, Expr::terminal(1), Expr::placeholder(0));
/// let mut counter = TerminalCounter { count: 0 };
/// counter.visit_expr(&expr);
/// assert_eq!(counter.count, 1);
/// ```
pub trait ExprVisitor<'a, V, C = RefCell<V>> {
    /// Visit an expression.
    ///
    /// Override this to customize behavior for all nodes.
    /// Call `super_visit_expr` to recurse into children.
    fn visit_expr(&mut self, expr: &Expr<'a, V, C>) {
        self.super_visit_expr(expr)
    }

    /// Default recursion into children.
    ///
    /// Override `visit_expr` instead of this method.
    fn super_visit_expr(&mut self, expr: &Expr<'a, V, C>) {
        match expr {
            Expr::Terminal(_) | Expr::Placeholder(_) => {}

            Expr::Ref(r) => self.visit_expr(r.target()),

            Expr::Unary { operand, .. } => self.visit_expr(operand),

            Expr::Binary { left, right, .. } | Expr::Comma { left, right } => {
                self.visit_expr(left);
                self.visit_expr(right);
            }

            Expr::Call { callee, args } => {
                self.visit_expr(callee);
                for arg in args {
                    self.visit_expr(arg);
                }
            }
        }
    }
}

/// Finds the highest placeholder index in a tree.
#[derive(Debug, Default)]
pub struct PlaceholderScan {
    max_index: Option<usize>,
}

impl PlaceholderScan {
    /// Highest placeholder index seen, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.max_index
    }

    /// Arguments needed to satisfy every placeholder seen.
    pub fn required_args(&self) -> usize {
        self.max_index.map_or(0, |i| i.saturating_add(1))
    }
}

impl<'a, V, C> ExprVisitor<'a, V, C> for PlaceholderScan {
    fn visit_expr(&mut self, expr: &Expr<'a, V, C>) {
        if let Expr::Placeholder(index) = expr {
            self.max_index = Some(self.max_index.map_or(*index, |m| m.max(*index)));
        }
        self.super_visit_expr(expr);
    }
}
