//! A small dynamically typed host used by the integration tests.

#![allow(dead_code)]

use sprig_core::{EvalFault, ExprKind, Operand, Operands, Primitives, values::Describe};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

pub type NativeFn = fn(&[Value]) -> Result<Value, Error>;

/// Named native function stored in a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Func {
    pub name: &'static str,
    pub call: NativeFn,
}

impl PartialEq for Func {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(String),
    Func(Func),
}

impl Value {
    pub fn func(name: &'static str, call: NativeFn) -> Self {
        Value::Func(Func { name, call })
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Func(_) => "function",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Func(func) => write!(f, "<fn {}>", func.name),
        }
    }
}

impl Describe for Value {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.type_label())
    }

    fn display(&self) -> Option<&dyn fmt::Display> {
        match self {
            Value::Func(_) => None,
            _ => Some(self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Fault(#[from] EvalFault),

    #[error("`{0}` is not supported")]
    Unsupported(ExprKind),

    #[error("`{op}` cannot combine {left} and {right}")]
    TypeMismatch {
        op: ExprKind,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("target of `{0}` is not assignable")]
    NotAssignable(ExprKind),

    #[error("{0} is not callable")]
    NotCallable(&'static str),

    #[error("{name} expects {expected} argument(s), got {found}")]
    CallArity {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}

fn int(op: ExprKind, value: &Value) -> Result<i64, Error> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(Error::TypeMismatch {
            op,
            left: other.type_label(),
            right: "int",
        }),
    }
}

fn ints(op: ExprKind, left: &Value, right: &Value) -> Result<(i64, i64), Error> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Ok((*l, *r)),
        _ => Err(Error::TypeMismatch {
            op,
            left: left.type_label(),
            right: right.type_label(),
        }),
    }
}

fn boolean(op: ExprKind, value: &Value) -> Result<bool, Error> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(Error::TypeMismatch {
            op,
            left: other.type_label(),
            right: "bool",
        }),
    }
}

/// Integer arithmetic, comparisons, boolean logic, assignment and calls.
#[derive(Debug, Default)]
pub struct Calculator;

impl Calculator {
    fn arith<'a>(
        &self,
        op: ExprKind,
        left: &Operand<'a, Value>,
        right: &Operand<'a, Value>,
        f: impl FnOnce(i64, i64) -> Result<i64, Error>,
    ) -> Result<Operand<'a, Value>, Error> {
        let (l, r) = ints(op, &left.get(), &right.get())?;
        Ok(Operand::Value(Value::Int(f(l, r)?)))
    }

    fn compound<'a>(
        &self,
        op: ExprKind,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
        f: impl FnOnce(i64, i64) -> Result<i64, Error>,
    ) -> Result<Operand<'a, Value>, Error> {
        let (l, r) = ints(op, &left.get(), &right.get())?;
        let result = f(l, r)?;
        left.assign(Value::Int(result))
            .map_err(|_| Error::NotAssignable(op))?;
        Ok(left)
    }
}

impl Primitives<Value> for Calculator {
    type Error = Error;

    fn unsupported(&self, kind: ExprKind) -> Error {
        Error::Unsupported(kind)
    }

    fn eval_negate<'a>(&self, operand: Operand<'a, Value>) -> Result<Operand<'a, Value>, Error> {
        let n = int(ExprKind::Negate, &operand.get())?;
        Ok(Operand::Value(Value::Int(-n)))
    }

    fn eval_logical_not<'a>(
        &self,
        operand: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        let b = boolean(ExprKind::LogicalNot, &operand.get())?;
        Ok(Operand::Value(Value::Bool(!b)))
    }

    fn eval_pre_inc<'a>(&self, operand: Operand<'a, Value>) -> Result<Operand<'a, Value>, Error> {
        let n = int(ExprKind::PreInc, &operand.get())?;
        operand
            .assign(Value::Int(n + 1))
            .map_err(|_| Error::NotAssignable(ExprKind::PreInc))?;
        Ok(operand)
    }

    fn eval_post_inc<'a>(
        &self,
        operand: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        let n = int(ExprKind::PostInc, &operand.get())?;
        operand
            .assign(Value::Int(n + 1))
            .map_err(|_| Error::NotAssignable(ExprKind::PostInc))?;
        Ok(Operand::Value(Value::Int(n)))
    }

    fn eval_plus<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        // Strings concatenate; everything else is integer addition.
        if let (Value::Str(l), Value::Str(r)) = (&*left.get(), &*right.get()) {
            return Ok(Operand::Value(Value::Str(format!("{l}{r}"))));
        }
        self.arith(ExprKind::Plus, &left, &right, |l, r| Ok(l + r))
    }

    fn eval_minus<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        self.arith(ExprKind::Minus, &left, &right, |l, r| Ok(l - r))
    }

    fn eval_multiplies<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        self.arith(ExprKind::Multiplies, &left, &right, |l, r| Ok(l * r))
    }

    fn eval_divides<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        self.arith(ExprKind::Divides, &left, &right, |l, r| {
            l.checked_div(r).ok_or(Error::DivisionByZero)
        })
    }

    fn eval_modulus<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        self.arith(ExprKind::Modulus, &left, &right, |l, r| {
            l.checked_rem(r).ok_or(Error::DivisionByZero)
        })
    }

    fn eval_less<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        let (l, r) = ints(ExprKind::Less, &left.get(), &right.get())?;
        Ok(Operand::Value(Value::Bool(l < r)))
    }

    fn eval_equal_to<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        Ok(Operand::Value(Value::Bool(left == right)))
    }

    fn eval_logical_and<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        let l = boolean(ExprKind::LogicalAnd, &left.get())?;
        let r = boolean(ExprKind::LogicalAnd, &right.get())?;
        Ok(Operand::Value(Value::Bool(l && r)))
    }

    fn eval_assign<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        left.assign(right.into_owned())
            .map_err(|_| Error::NotAssignable(ExprKind::Assign))?;
        Ok(left)
    }

    fn eval_plus_assign<'a>(
        &self,
        left: Operand<'a, Value>,
        right: Operand<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        self.compound(ExprKind::PlusAssign, left, right, |l, r| Ok(l + r))
    }

    fn eval_call<'a>(
        &self,
        callee: Operand<'a, Value>,
        args: Operands<'a, Value>,
    ) -> Result<Operand<'a, Value>, Error> {
        let func = match &*callee.get() {
            Value::Func(func) => *func,
            other => return Err(Error::NotCallable(other.type_label())),
        };
        let args: Vec<Value> = args.iter().map(Operand::cloned).collect();
        (func.call)(&args).map(Operand::Value)
    }
}

/// `add(a, b)` over integers.
pub fn add(args: &[Value]) -> Result<Value, Error> {
    match args {
        [a, b] => {
            let (a, b) = ints(ExprKind::Call, a, b)?;
            Ok(Value::Int(a + b))
        }
        _ => Err(Error::CallArity {
            name: "add",
            expected: 2,
            found: args.len(),
        }),
    }
}

/// `max(...)` over one or more integers.
pub fn max(args: &[Value]) -> Result<Value, Error> {
    let mut best: Option<i64> = None;
    for arg in args {
        let n = int(ExprKind::Call, arg)?;
        best = Some(best.map_or(n, |b| b.max(n)));
    }
    best.map(Value::Int).ok_or(Error::CallArity {
        name: "max",
        expected: 1,
        found: 0,
    })
}
