//! Structural printer for expression trees.
//!
//! Renders one node per line, indented by depth:
//!
//! ```text
//! expr<+>
//!     term<i32>[=2]
//!     placeholder<0>
//! ```
//!
//! `expr_ref` aliases never get a line of their own. The referent is printed
//! at the alias's depth with a trailing ` &` (or ` const &`), so the printed
//! shape always matches the logical tree.


use crate::{
    expr::{Constness, Expr, Operand, Slot},
    values::{Describe, UNPRINTABLE_VALUE},
};
use alloc::string::String;
use core::cell::RefCell;
use core::fmt::{self, Write};

/// Indent unit used by [`print`].
pub const DEFAULT_INDENT: &str = "    ";

/// Tree printer with a configurable indent unit.
#[derive(Debug, Clone, Copy)]
pub struct Printer<'s> {
    indent: &'s str,
}

impl Default for Printer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer<'static> {
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl<'s> Printer<'s> {
    /// Use `indent` for each level of nesting instead of four spaces.
    pub fn with_indent(indent: &'s str) -> Self {
        Self { indent }
    }

    /// Write `expr` to `sink` and hand the sink back.
    pub fn print<'w, W, V, C>(
        &self,
        sink: &'w mut W,
        expr: &Expr<'_, V, C>,
    ) -> Result<&'w mut W, fmt::Error>
    where
        W: Write + ?Sized,
        V: Describe,
        C: Slot<V>,
    {
        self.print_node(sink, expr, 0, None)?;
        Ok(sink)
    }

    /// Render `expr` into a new string.
    pub fn render<V: Describe, C: Slot<V>>(&self, expr: &Expr<'_, V, C>) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.print_node(&mut out, expr, 0, None);
        out
    }

    fn print_node<W, V, C>(
        &self,
        sink: &mut W,
        expr: &Expr<'_, V, C>,
        indent: usize,
        reference: Option<Constness>,
    ) -> fmt::Result
    where
        W: Write + ?Sized,
        V: Describe,
        C: Slot<V>,
    {
        // Aliases print as their referent, annotated, at the same depth.
        if let Expr::Ref(r) = expr {
            return self.print_node(sink, r.target(), indent, Some(r.constness()));
        }

        for _ in 0..indent {
            sink.write_str(self.indent)?;
        }

        match expr {
            Expr::Terminal(value) => {
                sink.write_str("term<")?;
                write_type(sink, value)?;
                sink.write_str(">[=")?;
                write_value(sink, value)?;
                sink.write_str("]")?;
            }
            Expr::Placeholder(index) => {
                write!(sink, "placeholder<{}>", index)?;
            }
            _ => {
                write!(sink, "expr<{}>", expr.kind().op_str())?;
            }
        }

        match reference {
            Some(Constness::Const) => sink.write_str(" const &")?,
            Some(Constness::Mut) => sink.write_str(" &")?,
            None => {}
        }
        sink.write_char('\n')?;

        for child in expr.children() {
            self.print_node(sink, child, indent + 1, None)?;
        }
        Ok(())
    }
}

/// Type of a terminal's stored value, with its qualifiers.
fn write_type<W, V, C>(sink: &mut W, value: &Operand<'_, V, C>) -> fmt::Result
where
    W: Write + ?Sized,
    V: Describe,
    C: Slot<V>,
{
    let mut qualifiers = value.qualifiers();
    match value.try_get() {
        Some(v) => {
            qualifiers |= v.qualifiers();
            sink.write_str(&v.type_name())?;
        }
        None => sink.write_str(core::any::type_name::<V>())?,
    }
    write!(sink, "{}", qualifiers)
}

fn write_value<W, V, C>(sink: &mut W, value: &Operand<'_, V, C>) -> fmt::Result
where
    W: Write + ?Sized,
    V: Describe,
    C: Slot<V>,
{
    let Some(v) = value.try_get() else {
        return sink.write_str(UNPRINTABLE_VALUE);
    };
    match v.display() {
        Some(display) => write!(sink, "{}", display),
        None => sink.write_str(UNPRINTABLE_VALUE),
    }
}

/// Write `expr` to `sink` with the default indent and hand the sink back.
pub fn print<'w, W, V, C>(sink: &'w mut W, expr: &Expr<'_, V, C>) -> Result<&'w mut W, fmt::Error>
where
    W: Write + ?Sized,
    V: Describe,
    C: Slot<V>,
{
    Printer::new().print(sink, expr)
}

/// `Display` adapter returned by [`Expr::display`].
pub struct ExprDisplay<'e, 'a, V, C = RefCell<V>> {
    expr: &'e Expr<'a, V, C>,
}

impl<V: Describe, C: Slot<V>> fmt::Display for ExprDisplay<'_, '_, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::new().print(f, self.expr).map(|_| ())
    }
}

impl<'a, V: Describe, C: Slot<V>> Expr<'a, V, C> {
    /// Printable view of the tree, in the printer's format.
    pub fn display(&self) -> ExprDisplay<'_, 'a, V, C> {
        ExprDisplay { expr: self }
    }
}
