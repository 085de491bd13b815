//! Unit tests for tree construction and inspection.

use super::*;
use crate::kind::Arity;
use alloc::vec;

#[test]
fn test_kind_of_each_shape() {
    let value = 1;
    let cell = RefCell::new(2);
    let target: Expr<'_, i32> = Expr::terminal(3);

    assert_eq!(Expr::terminal(0).kind(), ExprKind::Terminal);
    assert_eq!(Expr::terminal_ref(&value).kind(), ExprKind::Terminal);
    assert_eq!(Expr::terminal_mut(&cell).kind(), ExprKind::Terminal);
    assert_eq!(Expr::<i32>::placeholder(0).kind(), ExprKind::Placeholder);
    assert_eq!(Expr::by_ref(&target).kind(), ExprKind::ExprRef);
    assert_eq!(
        Expr::unary(UnaryOp::Negate, Expr::terminal(1)).kind(),
        ExprKind::Negate
    );
    assert_eq!(
        Expr::binary(BinaryOp::PlusAssign, Expr::placeholder(0), Expr::terminal(1)).kind(),
        ExprKind::PlusAssign
    );
    assert_eq!(
        Expr::comma(Expr::terminal(1), Expr::terminal(2)).kind(),
        ExprKind::Comma
    );
    assert_eq!(Expr::call(Expr::terminal(1), []).kind(), ExprKind::Call);
}

#[test]
fn test_arity_matches_slots() {
    let call = Expr::call(
        Expr::terminal(0),
        [Expr::terminal(1), Expr::terminal(2)],
    );
    assert_eq!(call.arity(), 3);
    assert_eq!(call.children().count(), 3);

    let nullary = Expr::call(Expr::terminal(0), []);
    assert_eq!(nullary.arity(), 1);

    let binary = Expr::binary(BinaryOp::Less, Expr::terminal(0), Expr::terminal(1));
    assert_eq!(binary.arity(), 2);
    let children: Vec<_> = binary.children().map(|c| c.value().map(|v| *v.get())).collect();
    assert_eq!(children, vec![Some(0), Some(1)]);

    assert_eq!(Expr::terminal(5).children().count(), 0);
}

#[test]
fn test_accessors() {
    let term = Expr::terminal(42);
    assert_eq!(term.value().map(|v| *v.get()), Some(42));
    assert_eq!(term.placeholder_index(), None);

    let ph: Expr<'_, i32> = Expr::placeholder(3);
    assert_eq!(ph.placeholder_index(), Some(3));
    assert!(ph.value().is_none());
}

#[test]
fn test_from_kind_builds_operators() {
    let expr = Expr::from_kind(
        ExprKind::Minus,
        vec![Expr::terminal(5), Expr::terminal(3)],
    )
    .unwrap();
    assert!(matches!(expr, Expr::Binary { op: BinaryOp::Minus, .. }));

    let expr = Expr::from_kind(ExprKind::LogicalNot, vec![Expr::terminal(true)]).unwrap();
    assert!(matches!(expr, Expr::Unary { op: UnaryOp::LogicalNot, .. }));

    let expr = Expr::from_kind(ExprKind::Comma, vec![Expr::terminal(1), Expr::terminal(2)])
        .unwrap();
    assert_eq!(expr.kind(), ExprKind::Comma);

    let expr = Expr::from_kind(
        ExprKind::Call,
        vec![Expr::terminal(0), Expr::terminal(1), Expr::terminal(2)],
    )
    .unwrap();
    match expr {
        Expr::Call { args, .. } => assert_eq!(args.len(), 2),
        other => panic!("Expected call, got {:?}", other),
    }
}

#[test]
fn test_from_kind_rejects_wrong_arity() {
    let err = Expr::from_kind(ExprKind::Plus, vec![Expr::terminal(1)]).unwrap_err();
    assert_eq!(
        err,
        BuildError::Arity {
            kind: ExprKind::Plus,
            expected: Arity::Fixed(2),
            found: 1,
        }
    );
    assert_eq!(
        err.to_string(),
        "`plus` takes 2 child expression(s), found 1"
    );

    let err = Expr::<i32>::from_kind(ExprKind::Call, vec![]).unwrap_err();
    assert!(matches!(err, BuildError::Arity { found: 0, .. }));

    let err = Expr::from_kind(
        ExprKind::Negate,
        vec![Expr::terminal(1), Expr::terminal(2)],
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Arity { kind: ExprKind::Negate, .. }));
}

#[test]
fn test_from_kind_rejects_leaves() {
    for kind in [ExprKind::Terminal, ExprKind::Placeholder, ExprKind::ExprRef] {
        let err = Expr::from_kind(kind, vec![Expr::terminal(1)]).unwrap_err();
        assert_eq!(err, BuildError::NotAnOperator { kind });
    }
}

#[test]
fn test_required_args() {
    let none = Expr::binary(BinaryOp::Plus, Expr::terminal(1), Expr::terminal(2));
    assert_eq!(none.required_args(), 0);

    let sparse = Expr::binary(
        BinaryOp::Plus,
        Expr::placeholder(0),
        Expr::call(Expr::terminal(0), [Expr::placeholder(3)]),
    );
    assert_eq!(sparse.required_args(), 4);
}

#[test]
fn test_required_args_sees_through_refs() {
    let inner: Expr<'_, i32> = Expr::placeholder(2);
    let outer = Expr::comma(Expr::terminal(0), Expr::by_const_ref(&inner));
    assert_eq!(outer.required_args(), 3);
}

#[test]
fn test_resolve_follows_alias_chain() {
    let leaf = Expr::terminal(7);
    let first = Expr::by_ref(&leaf);
    let second = Expr::by_const_ref(&first);
    assert_eq!(second.resolve().kind(), ExprKind::Terminal);
    match &second {
        Expr::Ref(r) => {
            assert!(r.is_const());
            assert_eq!(r.target().kind(), ExprKind::ExprRef);
        }
        other => panic!("Expected ref, got {:?}", other),
    }
}

#[test]
fn test_operand_holdings() {
    let shared = 5;
    let cell = RefCell::new(6);

    let owned: Operand<'_, i32> = Operand::Value(4);
    let borrowed: Operand<'_, i32> = Operand::Ref(&shared);
    let assignable = Operand::Mut(&cell);

    assert_eq!(owned.cloned(), 4);
    assert_eq!(borrowed.cloned(), 5);
    assert_eq!(assignable.cloned(), 6);

    assert!(!owned.is_assignable());
    assert!(assignable.is_assignable());
    assert!(core::ptr::eq(assignable.as_cell().unwrap(), &cell));
    assert!(borrowed.as_cell().is_none());
    assert_eq!(borrowed.assign(9), Err(9));
    assert_eq!(assignable.assign(9), Ok(()));
    assert_eq!(*cell.borrow(), 9);

    assert!(matches!(owned.borrowed(), Operand::Ref(&4)));
}

#[test]
fn test_operand_try_get_on_busy_cell() {
    let cell = RefCell::new(1);
    let operand = Operand::Mut(&cell);
    let _guard = cell.borrow_mut();
    assert!(operand.try_get().is_none());
}

#[test]
fn test_assign_while_read_guard_held() {
    let cell = RefCell::new(1);
    let operand = Operand::Mut(&cell);

    let guard = operand.get();
    assert_eq!(operand.assign(5), Err(5));
    assert_eq!(*guard, 1);
    drop(guard);

    assert_eq!(operand.assign(5), Ok(()));
    assert_eq!(*cell.borrow(), 5);
}

#[test]
fn test_busy_cell_reads_without_panicking() {
    let cell = RefCell::new(1);
    let operand = Operand::Mut(&cell);
    let same: Operand<'_, i32> = Operand::Value(1);

    let writer = cell.borrow_mut();
    assert_eq!(operand.try_cloned(), None);
    assert_ne!(operand, same);
    assert_eq!(format!("{:?}", operand), "Mut(<borrowed>)");
    assert_eq!(operand.assign(2), Err(2));
    drop(writer);

    assert_eq!(operand.try_cloned(), Some(1));
    assert_eq!(operand, same);
}

#[test]
fn test_read_only_trees_are_sync() {
    fn assert_sync<T: Sync>(_: &T) {}

    let shared = 4;
    let expr: Expr<'_, i32, ReadOnly<i32>> = Expr::binary(
        BinaryOp::Plus,
        Expr::Terminal(Operand::Ref(&shared)),
        Expr::Placeholder(0),
    );
    assert_sync(&expr);
    assert_eq!(expr.required_args(), 1);
    assert_eq!(expr.value(), None);
    assert_eq!(
        expr.children().filter_map(Expr::value).map(|v| *v.get()).collect::<Vec<_>>(),
        vec![4]
    );
}
