//! Value-side capabilities the engine needs from host types.
//!
//! Trees are generic over the host value type `V`. The evaluator never looks
//! inside a value (native primitives do), but the printer needs a type
//! description and, when available, a textual rendering of terminal values.
//! Both are provided through [`Describe`].

mod describe;
mod qualifiers;

pub use describe::{Describe, UNPRINTABLE_VALUE};
pub use qualifiers::Qualifiers;

#[cfg(test)]
mod describe_test;
