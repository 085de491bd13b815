use super::Qualifiers;
use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// Marker printed in place of a value that has no textual rendering.
pub const UNPRINTABLE_VALUE: &str = "<<unprintable-value>>";

/// Type description and optional rendering of a host value.
///
/// Every method has a default, so an opaque type only needs an empty impl:
///
/// ```
/// use sprig_core::values::Describe;
///
/// struct Handle(u32);
/// impl Describe for Handle {}
///
/// assert!(Handle(7).display().is_none());
/// ```
pub trait Describe {
    /// Human-readable type name, without qualifiers.
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(core::any::type_name::<Self>())
    }

    /// Qualifiers intrinsic to the value's type.
    fn qualifiers(&self) -> Qualifiers {
        Qualifiers::empty()
    }

    /// Textual rendering, if the type has one.
    fn display(&self) -> Option<&dyn fmt::Display> {
        None
    }
}

macro_rules! describe_display {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_name(&self) -> Cow<'static, str> {
                    Cow::Borrowed($name)
                }

                fn display(&self) -> Option<&dyn fmt::Display> {
                    Some(self)
                }
            }
        )*
    };
}

describe_display! {
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    String => "String",
    &str => "&str",
}

impl Describe for () {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("()")
    }
}
