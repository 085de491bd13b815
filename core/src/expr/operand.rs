//! Ownership-aware value wrapper.
//!
//! Terminal payloads, runtime arguments and evaluation results all travel as
//! an [`Operand`]. The variant records how the value is held, so a placeholder
//! can hand an operator the caller's own argument (and `assign` can write to
//! it) instead of a copy.

use super::Slot;
use crate::values::Qualifiers;
use core::cell::RefCell;
use core::fmt;
use core::ops::Deref;

/// A value that is owned, shared-borrowed, or borrowed as an assignable cell.
///
/// `C` is the cell type behind [`Operand::Mut`]; see [`Slot`].
pub enum Operand<'a, V, C = RefCell<V>> {
    /// Owned value.
    Value(V),
    /// Read-only borrow (`const &`).
    Ref(&'a V),
    /// Assignable borrow (`&`).
    Mut(&'a C),
}

/// Read guard returned by [`Operand::get`].
pub enum OperandGuard<'g, V, C: Slot<V> + 'g = RefCell<V>> {
    Plain(&'g V),
    Cell(C::Guard<'g>),
}

impl<'g, V, C: Slot<V> + 'g> Deref for OperandGuard<'g, V, C> {
    type Target = V;

    fn deref(&self) -> &V {
        match self {
            OperandGuard::Plain(v) => v,
            OperandGuard::Cell(guard) => &**guard,
        }
    }
}

impl<'a, V, C> Operand<'a, V, C> {
    /// Reborrow without taking ownership: owned values become `Ref`.
    pub fn borrowed(&self) -> Operand<'_, V, C> {
        match self {
            Operand::Value(v) => Operand::Ref(v),
            Operand::Ref(v) => Operand::Ref(*v),
            Operand::Mut(cell) => Operand::Mut(*cell),
        }
    }

    /// The underlying cell, if this operand is assignable.
    pub fn as_cell(&self) -> Option<&'a C> {
        match self {
            Operand::Mut(cell) => Some(*cell),
            Operand::Value(_) | Operand::Ref(_) => None,
        }
    }

    pub fn is_assignable(&self) -> bool {
        matches!(self, Operand::Mut(_))
    }

    /// Qualifiers implied by the way the value is held.
    pub fn qualifiers(&self) -> Qualifiers {
        match self {
            Operand::Value(_) => Qualifiers::empty(),
            Operand::Ref(_) => Qualifiers::CONST | Qualifiers::LVALUE_REF,
            Operand::Mut(_) => Qualifiers::LVALUE_REF,
        }
    }
}

impl<'a, V, C: Slot<V>> Operand<'a, V, C> {
    /// Read access to the value.
    ///
    /// # Panics
    ///
    /// For a cell held by a writer, does what [`Slot::read`] does (a
    /// `RefCell` panics). Use [`Operand::try_get`] to avoid that.
    pub fn get(&self) -> OperandGuard<'_, V, C> {
        match self {
            Operand::Value(v) => OperandGuard::Plain(v),
            Operand::Ref(v) => OperandGuard::Plain(*v),
            Operand::Mut(cell) => OperandGuard::Cell(cell.read()),
        }
    }

    /// Like [`Operand::get`], but `None` for a cell held by a writer.
    pub fn try_get(&self) -> Option<OperandGuard<'_, V, C>> {
        match self {
            Operand::Value(v) => Some(OperandGuard::Plain(v)),
            Operand::Ref(v) => Some(OperandGuard::Plain(*v)),
            Operand::Mut(cell) => cell.try_read().map(OperandGuard::Cell),
        }
    }

    /// Run `f` with a shared view of the value.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&*self.get())
    }

    /// Store `value` through an assignable operand.
    ///
    /// Returns the value back when the operand is not assignable, or when its
    /// cell is currently borrowed (including by a guard from [`Operand::get`]
    /// on this same operand).
    pub fn assign(&self, value: V) -> Result<(), V> {
        match self {
            Operand::Mut(cell) => cell.try_write(value),
            Operand::Value(_) | Operand::Ref(_) => Err(value),
        }
    }
}

impl<V: Clone, C: Slot<V>> Operand<'_, V, C> {
    /// Clone the value out, whatever the holding.
    ///
    /// # Panics
    ///
    /// As [`Operand::get`].
    pub fn cloned(&self) -> V {
        (*self.get()).clone()
    }

    /// Clone the value out, or `None` for a cell held by a writer.
    pub fn try_cloned(&self) -> Option<V> {
        self.try_get().map(|v| (*v).clone())
    }

    /// Take the value, cloning only when it is borrowed.
    ///
    /// # Panics
    ///
    /// As [`Operand::get`]; owned values never panic.
    pub fn into_owned(self) -> V {
        match self {
            Operand::Value(v) => v,
            Operand::Ref(v) => v.clone(),
            Operand::Mut(cell) => (*cell.read()).clone(),
        }
    }
}

impl<V, C> From<V> for Operand<'_, V, C> {
    fn from(value: V) -> Self {
        Operand::Value(value)
    }
}

impl<V: fmt::Debug, C: Slot<V>> fmt::Debug for Operand<'_, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Operand::Ref(v) => f.debug_tuple("Ref").field(v).finish(),
            Operand::Mut(cell) => match cell.try_read() {
                Some(v) => f.debug_tuple("Mut").field(&*v).finish(),
                None => f.write_str("Mut(<borrowed>)"),
            },
        }
    }
}

/// Compares the held values, ignoring how they are held. A cell held by a
/// writer compares unequal to everything.
impl<V: PartialEq, C: Slot<V>> PartialEq for Operand<'_, V, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.try_get(), other.try_get()) {
            (Some(left), Some(right)) => *left == *right,
            _ => false,
        }
    }
}
