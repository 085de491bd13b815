//! Node kind taxonomy.
//!
//! Every expression node carries exactly one [`ExprKind`]. The set is closed:
//! leaves (`Terminal`, `Placeholder`), the transparent `ExprRef` alias, the
//! unary and binary operators, `Comma` and `Call`. Operator kinds are further
//! split into [`UnaryOp`] and [`BinaryOp`] so that node variants can only be
//! built with an operator of the right arity.

use core::fmt;

/// Closed enumeration of expression node shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    // Leaves and aliases
    Terminal,
    Placeholder,
    ExprRef,

    // Unary operators
    UnaryPlus,
    Negate,
    Dereference,
    Complement,
    AddressOf,
    LogicalNot,
    PreInc,
    PreDec,
    PostInc,
    PostDec,

    // Binary operators
    ShiftLeft,
    ShiftRight,
    Multiplies,
    Divides,
    Modulus,
    Plus,
    Minus,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    EqualTo,
    NotEqualTo,
    LogicalOr,
    LogicalAnd,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    MemPtr,
    Assign,
    ShiftLeftAssign,
    ShiftRightAssign,
    MultipliesAssign,
    DividesAssign,
    ModulusAssign,
    PlusAssign,
    MinusAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,

    // Sequencing and calls
    Comma,
    Call,
}

/// Number of child slots a kind implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many slots.
    Fixed(usize),
    /// At least this many slots (the callee, for `Call`).
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` slots satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl ExprKind {
    /// All kinds, in declaration order.
    pub const ALL: [ExprKind; 45] = [
        ExprKind::Terminal,
        ExprKind::Placeholder,
        ExprKind::ExprRef,
        ExprKind::UnaryPlus,
        ExprKind::Negate,
        ExprKind::Dereference,
        ExprKind::Complement,
        ExprKind::AddressOf,
        ExprKind::LogicalNot,
        ExprKind::PreInc,
        ExprKind::PreDec,
        ExprKind::PostInc,
        ExprKind::PostDec,
        ExprKind::ShiftLeft,
        ExprKind::ShiftRight,
        ExprKind::Multiplies,
        ExprKind::Divides,
        ExprKind::Modulus,
        ExprKind::Plus,
        ExprKind::Minus,
        ExprKind::Less,
        ExprKind::Greater,
        ExprKind::LessEqual,
        ExprKind::GreaterEqual,
        ExprKind::EqualTo,
        ExprKind::NotEqualTo,
        ExprKind::LogicalOr,
        ExprKind::LogicalAnd,
        ExprKind::BitwiseAnd,
        ExprKind::BitwiseOr,
        ExprKind::BitwiseXor,
        ExprKind::MemPtr,
        ExprKind::Assign,
        ExprKind::ShiftLeftAssign,
        ExprKind::ShiftRightAssign,
        ExprKind::MultipliesAssign,
        ExprKind::DividesAssign,
        ExprKind::ModulusAssign,
        ExprKind::PlusAssign,
        ExprKind::MinusAssign,
        ExprKind::BitwiseAndAssign,
        ExprKind::BitwiseOrAssign,
        ExprKind::BitwiseXorAssign,
        ExprKind::Comma,
        ExprKind::Call,
    ];

    /// Snake-case name of the kind, e.g. `shift_left_assign`.
    pub fn name(self) -> &'static str {
        match self.classify() {
            Class::Terminal => "terminal",
            Class::Placeholder => "placeholder",
            Class::ExprRef => "expr_ref",
            Class::Comma => "comma",
            Class::Call => "call",
            Class::Unary(op) => op.name(),
            Class::Binary(op) => op.name(),
        }
    }

    /// Human-readable operator token used by the printer, e.g. `<<=`.
    pub fn op_str(self) -> &'static str {
        match self.classify() {
            Class::Terminal => "term",
            Class::Placeholder => "placeholder",
            Class::ExprRef => "expr_ref",
            Class::Comma => ",",
            Class::Call => "()",
            Class::Unary(op) => op.op_str(),
            Class::Binary(op) => op.op_str(),
        }
    }

    /// Number of slots a node of this kind holds.
    pub fn arity(self) -> Arity {
        match self.classify() {
            Class::Terminal | Class::Placeholder | Class::ExprRef | Class::Unary(_) => {
                Arity::Fixed(1)
            }
            Class::Comma | Class::Binary(_) => Arity::Fixed(2),
            Class::Call => Arity::AtLeast(1),
        }
    }

    /// Leaves hold a value or an index rather than sub-expressions.
    pub fn is_leaf(self) -> bool {
        matches!(self, ExprKind::Terminal | ExprKind::Placeholder)
    }

    pub fn is_unary(self) -> bool {
        self.as_unary().is_some()
    }

    pub fn is_binary(self) -> bool {
        self.as_binary().is_some()
    }

    /// The unary operator for this kind, if it is one.
    pub fn as_unary(self) -> Option<UnaryOp> {
        match self.classify() {
            Class::Unary(op) => Some(op),
            _ => None,
        }
    }

    /// The binary operator for this kind, if it is one. `Comma` is not.
    pub fn as_binary(self) -> Option<BinaryOp> {
        match self.classify() {
            Class::Binary(op) => Some(op),
            _ => None,
        }
    }

    fn classify(self) -> Class {
        match self {
            ExprKind::Terminal => Class::Terminal,
            ExprKind::Placeholder => Class::Placeholder,
            ExprKind::ExprRef => Class::ExprRef,
            ExprKind::Comma => Class::Comma,
            ExprKind::Call => Class::Call,
            ExprKind::UnaryPlus => Class::Unary(UnaryOp::UnaryPlus),
            ExprKind::Negate => Class::Unary(UnaryOp::Negate),
            ExprKind::Dereference => Class::Unary(UnaryOp::Dereference),
            ExprKind::Complement => Class::Unary(UnaryOp::Complement),
            ExprKind::AddressOf => Class::Unary(UnaryOp::AddressOf),
            ExprKind::LogicalNot => Class::Unary(UnaryOp::LogicalNot),
            ExprKind::PreInc => Class::Unary(UnaryOp::PreInc),
            ExprKind::PreDec => Class::Unary(UnaryOp::PreDec),
            ExprKind::PostInc => Class::Unary(UnaryOp::PostInc),
            ExprKind::PostDec => Class::Unary(UnaryOp::PostDec),
            ExprKind::ShiftLeft => Class::Binary(BinaryOp::ShiftLeft),
            ExprKind::ShiftRight => Class::Binary(BinaryOp::ShiftRight),
            ExprKind::Multiplies => Class::Binary(BinaryOp::Multiplies),
            ExprKind::Divides => Class::Binary(BinaryOp::Divides),
            ExprKind::Modulus => Class::Binary(BinaryOp::Modulus),
            ExprKind::Plus => Class::Binary(BinaryOp::Plus),
            ExprKind::Minus => Class::Binary(BinaryOp::Minus),
            ExprKind::Less => Class::Binary(BinaryOp::Less),
            ExprKind::Greater => Class::Binary(BinaryOp::Greater),
            ExprKind::LessEqual => Class::Binary(BinaryOp::LessEqual),
            ExprKind::GreaterEqual => Class::Binary(BinaryOp::GreaterEqual),
            ExprKind::EqualTo => Class::Binary(BinaryOp::EqualTo),
            ExprKind::NotEqualTo => Class::Binary(BinaryOp::NotEqualTo),
            ExprKind::LogicalOr => Class::Binary(BinaryOp::LogicalOr),
            ExprKind::LogicalAnd => Class::Binary(BinaryOp::LogicalAnd),
            ExprKind::BitwiseAnd => Class::Binary(BinaryOp::BitwiseAnd),
            ExprKind::BitwiseOr => Class::Binary(BinaryOp::BitwiseOr),
            ExprKind::BitwiseXor => Class::Binary(BinaryOp::BitwiseXor),
            ExprKind::MemPtr => Class::Binary(BinaryOp::MemPtr),
            ExprKind::Assign => Class::Binary(BinaryOp::Assign),
            ExprKind::ShiftLeftAssign => Class::Binary(BinaryOp::ShiftLeftAssign),
            ExprKind::ShiftRightAssign => Class::Binary(BinaryOp::ShiftRightAssign),
            ExprKind::MultipliesAssign => Class::Binary(BinaryOp::MultipliesAssign),
            ExprKind::DividesAssign => Class::Binary(BinaryOp::DividesAssign),
            ExprKind::ModulusAssign => Class::Binary(BinaryOp::ModulusAssign),
            ExprKind::PlusAssign => Class::Binary(BinaryOp::PlusAssign),
            ExprKind::MinusAssign => Class::Binary(BinaryOp::MinusAssign),
            ExprKind::BitwiseAndAssign => Class::Binary(BinaryOp::BitwiseAndAssign),
            ExprKind::BitwiseOrAssign => Class::Binary(BinaryOp::BitwiseOrAssign),
            ExprKind::BitwiseXorAssign => Class::Binary(BinaryOp::BitwiseXorAssign),
        }
    }
}

/// `ExprKind` split by shape, so kind-level queries stay exhaustive.
enum Class {
    Terminal,
    Placeholder,
    ExprRef,
    Comma,
    Call,
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operators taking one sub-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    UnaryPlus,
    Negate,
    Dereference,
    Complement,
    AddressOf,
    LogicalNot,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 10] = [
        UnaryOp::UnaryPlus,
        UnaryOp::Negate,
        UnaryOp::Dereference,
        UnaryOp::Complement,
        UnaryOp::AddressOf,
        UnaryOp::LogicalNot,
        UnaryOp::PreInc,
        UnaryOp::PreDec,
        UnaryOp::PostInc,
        UnaryOp::PostDec,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::UnaryPlus => "unary_plus",
            UnaryOp::Negate => "negate",
            UnaryOp::Dereference => "dereference",
            UnaryOp::Complement => "complement",
            UnaryOp::AddressOf => "address_of",
            UnaryOp::LogicalNot => "logical_not",
            UnaryOp::PreInc => "pre_inc",
            UnaryOp::PreDec => "pre_dec",
            UnaryOp::PostInc => "post_inc",
            UnaryOp::PostDec => "post_dec",
        }
    }

    pub fn op_str(self) -> &'static str {
        match self {
            UnaryOp::UnaryPlus => "+",
            UnaryOp::Negate => "-",
            UnaryOp::Dereference => "*",
            UnaryOp::Complement => "~",
            UnaryOp::AddressOf => "&",
            UnaryOp::LogicalNot => "!",
            UnaryOp::PreInc => "++",
            UnaryOp::PreDec => "--",
            UnaryOp::PostInc => "++(int)",
            UnaryOp::PostDec => "--(int)",
        }
    }
}

impl From<UnaryOp> for ExprKind {
    fn from(op: UnaryOp) -> Self {
        match op {
            UnaryOp::UnaryPlus => ExprKind::UnaryPlus,
            UnaryOp::Negate => ExprKind::Negate,
            UnaryOp::Dereference => ExprKind::Dereference,
            UnaryOp::Complement => ExprKind::Complement,
            UnaryOp::AddressOf => ExprKind::AddressOf,
            UnaryOp::LogicalNot => ExprKind::LogicalNot,
            UnaryOp::PreInc => ExprKind::PreInc,
            UnaryOp::PreDec => ExprKind::PreDec,
            UnaryOp::PostInc => ExprKind::PostInc,
            UnaryOp::PostDec => ExprKind::PostDec,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op_str())
    }
}

/// Operators taking two sub-expressions, each backed by a native primitive.
///
/// Indexing (`[]`) is deliberately not part of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    ShiftLeft,
    ShiftRight,
    Multiplies,
    Divides,
    Modulus,
    Plus,
    Minus,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    EqualTo,
    NotEqualTo,
    LogicalOr,
    LogicalAnd,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    MemPtr,
    Assign,
    ShiftLeftAssign,
    ShiftRightAssign,
    MultipliesAssign,
    DividesAssign,
    ModulusAssign,
    PlusAssign,
    MinusAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 30] = [
        BinaryOp::ShiftLeft,
        BinaryOp::ShiftRight,
        BinaryOp::Multiplies,
        BinaryOp::Divides,
        BinaryOp::Modulus,
        BinaryOp::Plus,
        BinaryOp::Minus,
        BinaryOp::Less,
        BinaryOp::Greater,
        BinaryOp::LessEqual,
        BinaryOp::GreaterEqual,
        BinaryOp::EqualTo,
        BinaryOp::NotEqualTo,
        BinaryOp::LogicalOr,
        BinaryOp::LogicalAnd,
        BinaryOp::BitwiseAnd,
        BinaryOp::BitwiseOr,
        BinaryOp::BitwiseXor,
        BinaryOp::MemPtr,
        BinaryOp::Assign,
        BinaryOp::ShiftLeftAssign,
        BinaryOp::ShiftRightAssign,
        BinaryOp::MultipliesAssign,
        BinaryOp::DividesAssign,
        BinaryOp::ModulusAssign,
        BinaryOp::PlusAssign,
        BinaryOp::MinusAssign,
        BinaryOp::BitwiseAndAssign,
        BinaryOp::BitwiseOrAssign,
        BinaryOp::BitwiseXorAssign,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::ShiftLeft => "shift_left",
            BinaryOp::ShiftRight => "shift_right",
            BinaryOp::Multiplies => "multiplies",
            BinaryOp::Divides => "divides",
            BinaryOp::Modulus => "modulus",
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::Less => "less",
            BinaryOp::Greater => "greater",
            BinaryOp::LessEqual => "less_equal",
            BinaryOp::GreaterEqual => "greater_equal",
            BinaryOp::EqualTo => "equal_to",
            BinaryOp::NotEqualTo => "not_equal_to",
            BinaryOp::LogicalOr => "logical_or",
            BinaryOp::LogicalAnd => "logical_and",
            BinaryOp::BitwiseAnd => "bitwise_and",
            BinaryOp::BitwiseOr => "bitwise_or",
            BinaryOp::BitwiseXor => "bitwise_xor",
            BinaryOp::MemPtr => "mem_ptr",
            BinaryOp::Assign => "assign",
            BinaryOp::ShiftLeftAssign => "shift_left_assign",
            BinaryOp::ShiftRightAssign => "shift_right_assign",
            BinaryOp::MultipliesAssign => "multiplies_assign",
            BinaryOp::DividesAssign => "divides_assign",
            BinaryOp::ModulusAssign => "modulus_assign",
            BinaryOp::PlusAssign => "plus_assign",
            BinaryOp::MinusAssign => "minus_assign",
            BinaryOp::BitwiseAndAssign => "bitwise_and_assign",
            BinaryOp::BitwiseOrAssign => "bitwise_or_assign",
            BinaryOp::BitwiseXorAssign => "bitwise_xor_assign",
        }
    }

    pub fn op_str(self) -> &'static str {
        match self {
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::Multiplies => "*",
            BinaryOp::Divides => "/",
            BinaryOp::Modulus => "%",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::EqualTo => "==",
            BinaryOp::NotEqualTo => "!=",
            BinaryOp::LogicalOr => "||",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::BitwiseOr => "|",
            BinaryOp::BitwiseXor => "^",
            BinaryOp::MemPtr => "->*",
            BinaryOp::Assign => "=",
            BinaryOp::ShiftLeftAssign => "<<=",
            BinaryOp::ShiftRightAssign => ">>=",
            BinaryOp::MultipliesAssign => "*=",
            BinaryOp::DividesAssign => "/=",
            BinaryOp::ModulusAssign => "%=",
            BinaryOp::PlusAssign => "+=",
            BinaryOp::MinusAssign => "-=",
            BinaryOp::BitwiseAndAssign => "&=",
            BinaryOp::BitwiseOrAssign => "|=",
            BinaryOp::BitwiseXorAssign => "^=",
        }
    }
}

impl From<BinaryOp> for ExprKind {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::ShiftLeft => ExprKind::ShiftLeft,
            BinaryOp::ShiftRight => ExprKind::ShiftRight,
            BinaryOp::Multiplies => ExprKind::Multiplies,
            BinaryOp::Divides => ExprKind::Divides,
            BinaryOp::Modulus => ExprKind::Modulus,
            BinaryOp::Plus => ExprKind::Plus,
            BinaryOp::Minus => ExprKind::Minus,
            BinaryOp::Less => ExprKind::Less,
            BinaryOp::Greater => ExprKind::Greater,
            BinaryOp::LessEqual => ExprKind::LessEqual,
            BinaryOp::GreaterEqual => ExprKind::GreaterEqual,
            BinaryOp::EqualTo => ExprKind::EqualTo,
            BinaryOp::NotEqualTo => ExprKind::NotEqualTo,
            BinaryOp::LogicalOr => ExprKind::LogicalOr,
            BinaryOp::LogicalAnd => ExprKind::LogicalAnd,
            BinaryOp::BitwiseAnd => ExprKind::BitwiseAnd,
            BinaryOp::BitwiseOr => ExprKind::BitwiseOr,
            BinaryOp::BitwiseXor => ExprKind::BitwiseXor,
            BinaryOp::MemPtr => ExprKind::MemPtr,
            BinaryOp::Assign => ExprKind::Assign,
            BinaryOp::ShiftLeftAssign => ExprKind::ShiftLeftAssign,
            BinaryOp::ShiftRightAssign => ExprKind::ShiftRightAssign,
            BinaryOp::MultipliesAssign => ExprKind::MultipliesAssign,
            BinaryOp::DividesAssign => ExprKind::DividesAssign,
            BinaryOp::ModulusAssign => ExprKind::ModulusAssign,
            BinaryOp::PlusAssign => ExprKind::PlusAssign,
            BinaryOp::MinusAssign => ExprKind::MinusAssign,
            BinaryOp::BitwiseAndAssign => ExprKind::BitwiseAndAssign,
            BinaryOp::BitwiseOrAssign => ExprKind::BitwiseOrAssign,
            BinaryOp::BitwiseXorAssign => ExprKind::BitwiseXorAssign,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op_str())
    }
}
