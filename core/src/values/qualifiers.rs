use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Qualifiers attached to a stored value's type description.
    ///
    /// Terminal storage contributes the reference flags (a shared borrow is a
    /// `const &`, a mutable cell is a plain `&`); a value type can report
    /// further flags of its own through [`Describe::qualifiers`].
    ///
    /// [`Describe::qualifiers`]: super::Describe::qualifiers
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1;
        const VOLATILE = 1 << 1;
        const LVALUE_REF = 1 << 2;
        const RVALUE_REF = 1 << 3;
    }
}

impl fmt::Display for Qualifiers {
    /// Renders the suffix appended after a type name, e.g. ` const &`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Qualifiers::CONST) {
            f.write_str(" const")?;
        }
        if self.contains(Qualifiers::VOLATILE) {
            f.write_str(" volatile")?;
        }
        if self.contains(Qualifiers::LVALUE_REF) {
            f.write_str(" &")?;
        }
        if self.contains(Qualifiers::RVALUE_REF) {
            f.write_str(" &&")?;
        }
        Ok(())
    }
}
