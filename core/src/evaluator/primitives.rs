//! Native per-kind primitives.
//!
//! The evaluator does not know what `+` or `=` mean for a host value type.
//! Each operator kind maps to one named method on [`Primitives`]; the host
//! implements the ones its value type supports and reports the rest through
//! [`Primitives::unsupported`].

use crate::evaluator::EvalFault;
use crate::expr::Operand;
use crate::kind::{BinaryOp, ExprKind, UnaryOp};
use core::cell::RefCell;
use smallvec::SmallVec;

/// Evaluated call arguments.
pub type Operands<'a, V, C = RefCell<V>> = SmallVec<[Operand<'a, V, C>; 4]>;

macro_rules! unary_primitives {
    ($($method:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Native `", stringify!($kind), "` primitive.")]
            fn $method<'a>(
                &self,
                _operand: Operand<'a, V, C>,
            ) -> Result<Operand<'a, V, C>, Self::Error> {
                Err(self.unsupported(ExprKind::$kind))
            }
        )*
    };
}

macro_rules! binary_primitives {
    ($($method:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Native `", stringify!($kind), "` primitive.")]
            fn $method<'a>(
                &self,
                _left: Operand<'a, V, C>,
                _right: Operand<'a, V, C>,
            ) -> Result<Operand<'a, V, C>, Self::Error> {
                Err(self.unsupported(ExprKind::$kind))
            }
        )*
    };
}

/// One native operation per operator kind, for host values of type `V`.
///
/// Operands arrive already evaluated. A placeholder operand is a borrow of the
/// caller's argument, so an assigning primitive can write through
/// [`Operand::assign`] when the caller passed an [`Operand::Mut`].
///
/// `C` is the cell type behind assignable operands. Implementations that only
/// read or write through [`Operand`] can stay generic over it with a
/// `C: Slot<V>` bound.
///
/// # Example
///
/// ```
/// use sprig_core::{EvalFault, ExprKind, Operand, Primitives};
///
/// #[derive(Debug)]
/// enum Error {
///     Fault(EvalFault),
///     Unsupported(ExprKind),
/// }
///
/// impl From<EvalFault> for Error {
///     fn from(fault: EvalFault) -> Self {
///         Error::Fault(fault)
///     }
/// }
///
/// struct Ints;
///
/// impl Primitives<i64> for Ints {
///     type Error = Error;
///
///     fn unsupported(&self, kind: ExprKind) -> Error {
///         Error::Unsupported(kind)
///     }
///
///     fn eval_plus<'a>(
///         &self,
///         left: Operand<'a, i64>,
///         right: Operand<'a, i64>,
///     ) -> Result<Operand<'a, i64>, Error> {
///         Ok(Operand::Value(*left.get() + *right.get()))
///     }
/// }
/// ```
pub trait Primitives<V, C = RefCell<V>> {
    /// Error shared by the primitives, the override hook and the evaluator.
    type Error: From<EvalFault>;

    /// Error for a kind this implementation does not provide.
    fn unsupported(&self, kind: ExprKind) -> Self::Error;

    unary_primitives! {
        eval_unary_plus => UnaryPlus,
        eval_negate => Negate,
        eval_dereference => Dereference,
        eval_complement => Complement,
        eval_address_of => AddressOf,
        eval_logical_not => LogicalNot,
        eval_pre_inc => PreInc,
        eval_pre_dec => PreDec,
        eval_post_inc => PostInc,
        eval_post_dec => PostDec,
    }

    binary_primitives! {
        eval_shift_left => ShiftLeft,
        eval_shift_right => ShiftRight,
        eval_multiplies => Multiplies,
        eval_divides => Divides,
        eval_modulus => Modulus,
        eval_plus => Plus,
        eval_minus => Minus,
        eval_less => Less,
        eval_greater => Greater,
        eval_less_equal => LessEqual,
        eval_greater_equal => GreaterEqual,
        eval_equal_to => EqualTo,
        eval_not_equal_to => NotEqualTo,
        eval_logical_or => LogicalOr,
        eval_logical_and => LogicalAnd,
        eval_bitwise_and => BitwiseAnd,
        eval_bitwise_or => BitwiseOr,
        eval_bitwise_xor => BitwiseXor,
        eval_mem_ptr => MemPtr,
        eval_assign => Assign,
        eval_shift_left_assign => ShiftLeftAssign,
        eval_shift_right_assign => ShiftRightAssign,
        eval_multiplies_assign => MultipliesAssign,
        eval_divides_assign => DividesAssign,
        eval_modulus_assign => ModulusAssign,
        eval_plus_assign => PlusAssign,
        eval_minus_assign => MinusAssign,
        eval_bitwise_and_assign => BitwiseAndAssign,
        eval_bitwise_or_assign => BitwiseOrAssign,
        eval_bitwise_xor_assign => BitwiseXorAssign,
    }

    /// Invoke `callee` with the evaluated arguments, in order.
    fn eval_call<'a>(
        &self,
        _callee: Operand<'a, V, C>,
        _args: Operands<'a, V, C>,
    ) -> Result<Operand<'a, V, C>, Self::Error> {
        Err(self.unsupported(ExprKind::Call))
    }
}

impl UnaryOp {
    /// Dispatch to this operator's primitive.
    pub fn apply<'a, V, C, P>(
        self,
        ops: &P,
        operand: Operand<'a, V, C>,
    ) -> Result<Operand<'a, V, C>, P::Error>
    where
        P: Primitives<V, C> + ?Sized,
    {
        match self {
            UnaryOp::UnaryPlus => ops.eval_unary_plus(operand),
            UnaryOp::Negate => ops.eval_negate(operand),
            UnaryOp::Dereference => ops.eval_dereference(operand),
            UnaryOp::Complement => ops.eval_complement(operand),
            UnaryOp::AddressOf => ops.eval_address_of(operand),
            UnaryOp::LogicalNot => ops.eval_logical_not(operand),
            UnaryOp::PreInc => ops.eval_pre_inc(operand),
            UnaryOp::PreDec => ops.eval_pre_dec(operand),
            UnaryOp::PostInc => ops.eval_post_inc(operand),
            UnaryOp::PostDec => ops.eval_post_dec(operand),
        }
    }
}

impl BinaryOp {
    /// Dispatch to this operator's primitive.
    pub fn apply<'a, V, C, P>(
        self,
        ops: &P,
        left: Operand<'a, V, C>,
        right: Operand<'a, V, C>,
    ) -> Result<Operand<'a, V, C>, P::Error>
    where
        P: Primitives<V, C> + ?Sized,
    {
        match self {
            BinaryOp::ShiftLeft => ops.eval_shift_left(left, right),
            BinaryOp::ShiftRight => ops.eval_shift_right(left, right),
            BinaryOp::Multiplies => ops.eval_multiplies(left, right),
            BinaryOp::Divides => ops.eval_divides(left, right),
            BinaryOp::Modulus => ops.eval_modulus(left, right),
            BinaryOp::Plus => ops.eval_plus(left, right),
            BinaryOp::Minus => ops.eval_minus(left, right),
            BinaryOp::Less => ops.eval_less(left, right),
            BinaryOp::Greater => ops.eval_greater(left, right),
            BinaryOp::LessEqual => ops.eval_less_equal(left, right),
            BinaryOp::GreaterEqual => ops.eval_greater_equal(left, right),
            BinaryOp::EqualTo => ops.eval_equal_to(left, right),
            BinaryOp::NotEqualTo => ops.eval_not_equal_to(left, right),
            BinaryOp::LogicalOr => ops.eval_logical_or(left, right),
            BinaryOp::LogicalAnd => ops.eval_logical_and(left, right),
            BinaryOp::BitwiseAnd => ops.eval_bitwise_and(left, right),
            BinaryOp::BitwiseOr => ops.eval_bitwise_or(left, right),
            BinaryOp::BitwiseXor => ops.eval_bitwise_xor(left, right),
            BinaryOp::MemPtr => ops.eval_mem_ptr(left, right),
            BinaryOp::Assign => ops.eval_assign(left, right),
            BinaryOp::ShiftLeftAssign => ops.eval_shift_left_assign(left, right),
            BinaryOp::ShiftRightAssign => ops.eval_shift_right_assign(left, right),
            BinaryOp::MultipliesAssign => ops.eval_multiplies_assign(left, right),
            BinaryOp::DividesAssign => ops.eval_divides_assign(left, right),
            BinaryOp::ModulusAssign => ops.eval_modulus_assign(left, right),
            BinaryOp::PlusAssign => ops.eval_plus_assign(left, right),
            BinaryOp::MinusAssign => ops.eval_minus_assign(left, right),
            BinaryOp::BitwiseAndAssign => ops.eval_bitwise_and_assign(left, right),
            BinaryOp::BitwiseOrAssign => ops.eval_bitwise_or_assign(left, right),
            BinaryOp::BitwiseXorAssign => ops.eval_bitwise_xor_assign(left, right),
        }
    }
}
