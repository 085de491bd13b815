//! Storage behind assignable operands.
//!
//! [`Operand::Mut`](super::Operand::Mut) borrows a cell of type `C`. The cell
//! type is a parameter of every tree so a host can pick its sharing story:
//! `RefCell` (the default) for single-threaded trees, `RwLock` when one tree
//! is evaluated from several threads, or [`ReadOnly`] for trees that never
//! hold an assignable value at all.

use core::cell::{Ref, RefCell};
use core::convert::Infallible;
use core::marker::PhantomData;
use core::ops::Deref;

/// A cell that assignable operands read through and write into.
pub trait Slot<V> {
    /// Shared view of the stored value.
    type Guard<'g>: Deref<Target = V>
    where
        Self: 'g;

    /// Shared access. Panics or blocks on a conflicting writer, as the cell
    /// type itself does.
    fn read(&self) -> Self::Guard<'_>;

    /// Shared access, or `None` if the cell is held by a writer.
    fn try_read(&self) -> Option<Self::Guard<'_>>;

    /// Replace the stored value, or hand it back if the cell is in use.
    fn try_write(&self, value: V) -> Result<(), V>;
}

impl<V> Slot<V> for RefCell<V> {
    type Guard<'g>
        = Ref<'g, V>
    where
        Self: 'g;

    fn read(&self) -> Self::Guard<'_> {
        self.borrow()
    }

    fn try_read(&self) -> Option<Self::Guard<'_>> {
        self.try_borrow().ok()
    }

    fn try_write(&self, value: V) -> Result<(), V> {
        match self.try_borrow_mut() {
            Ok(mut slot) => {
                *slot = value;
                Ok(())
            }
            Err(_) => Err(value),
        }
    }
}

#[cfg(any(feature = "std", test))]
impl<V> Slot<V> for std::sync::RwLock<V> {
    type Guard<'g>
        = std::sync::RwLockReadGuard<'g, V>
    where
        Self: 'g;

    fn read(&self) -> Self::Guard<'_> {
        // A poisoned lock still holds a complete value.
        std::sync::RwLock::read(self).unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn try_read(&self) -> Option<Self::Guard<'_>> {
        std::sync::RwLock::try_read(self).ok()
    }

    fn try_write(&self, value: V) -> Result<(), V> {
        match std::sync::RwLock::try_write(self) {
            Ok(mut slot) => {
                *slot = value;
                Ok(())
            }
            Err(_) => Err(value),
        }
    }
}

/// Cell type for trees without assignable values.
///
/// It cannot be constructed, so `Operand::Mut` never occurs and the tree is
/// `Send`/`Sync` whenever `V` is.
pub struct ReadOnly<V> {
    never: Infallible,
    _value: PhantomData<V>,
}

impl<V> Slot<V> for ReadOnly<V> {
    type Guard<'g>
        = &'g V
    where
        Self: 'g;

    fn read(&self) -> Self::Guard<'_> {
        match self.never {}
    }

    fn try_read(&self) -> Option<Self::Guard<'_>> {
        match self.never {}
    }

    fn try_write(&self, _value: V) -> Result<(), V> {
        match self.never {}
    }
}
