use super::*;
use alloc::borrow::Cow;
use alloc::string::ToString;

#[derive(Debug)]
struct Opaque;

impl Describe for Opaque {}

struct Register(u32);

impl Describe for Register {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("register")
    }

    fn qualifiers(&self) -> Qualifiers {
        Qualifiers::VOLATILE
    }
}

#[test]
fn test_scalar_descriptions() {
    assert_eq!(5i32.type_name(), "i32");
    assert_eq!(5i32.display().map(|d| d.to_string()).as_deref(), Some("5"));
    assert_eq!(true.type_name(), "bool");
    assert_eq!("hi".type_name(), "&str");
    assert_eq!(2.5f64.display().map(|d| d.to_string()).as_deref(), Some("2.5"));
}

#[test]
fn test_default_type_name_uses_rust_path() {
    assert!(Opaque.type_name().ends_with("Opaque"));
    assert!(Opaque.display().is_none());
    assert!(().display().is_none());
}

#[test]
fn test_intrinsic_qualifiers() {
    let reg = Register(3);
    assert_eq!(reg.0, 3);
    assert_eq!(reg.qualifiers(), Qualifiers::VOLATILE);
}

#[test]
fn test_qualifier_suffix_order() {
    assert_eq!(Qualifiers::empty().to_string(), "");
    assert_eq!((Qualifiers::CONST | Qualifiers::LVALUE_REF).to_string(), " const &");
    assert_eq!(Qualifiers::LVALUE_REF.to_string(), " &");
    assert_eq!(
        (Qualifiers::CONST | Qualifiers::VOLATILE | Qualifiers::RVALUE_REF).to_string(),
        " const volatile &&"
    );
}
