/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all expression forms, from literals and identifiers to
/// operators, conditionals, loops, function literals, calls and indexing.
/// Each variant models a distinct syntactic construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A string literal.
    Str(String),
    /// A boolean literal: `true` or `false`.
    Boolean(bool),
    /// Reference to a name, such as `x` or `len`.
    Identifier(String),
    /// Array literal expression, such as `[1, 2, 3]`.
    Array {
        /// Elements of the array, in source order.
        elements: Vec<Self>,
    },
    /// Hash literal expression, such as `{"a": 1, "b": 2}`.
    Hash {
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Self, Self)>,
    },
    /// A prefix operation, such as `-x` or `!ready`.
    Prefix {
        /// The prefix operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An infix operation, such as `a + b` or `a << 2`.
    Infix {
        /// The operator.
        operator: InfixOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// An assignment, plain or compound: `x = e`, `x += e`, ...
    /// The left side of an assignment is always an identifier.
    Assign {
        /// The assignment operator.
        operator: AssignOperator,
        /// The name being assigned to.
        name:     String,
        /// The value expression.
        value:    Box<Self>,
    },
    /// Conditional expression: `if (cond) { ... } else { ... }`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated when the condition is falsy.
        alternative: Option<BlockStatement>,
    },
    /// Loop expression: `while (cond) { ... }`.
    While {
        /// The condition expression, re-evaluated before each iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      BlockStatement,
    },
    /// Loop expression: `for (init; cond; incr) { ... }`.
    For {
        /// Initializer, evaluated once in the loop's own scope.
        init:      Box<Self>,
        /// The condition expression, re-evaluated before each iteration.
        condition: Box<Self>,
        /// Increment expression, evaluated after each iteration.
        increment: Box<Self>,
        /// The loop body.
        body:      BlockStatement,
    },
    /// Function literal: `func (a, b) { ... }`.
    Function {
        /// Parameter names, in order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
    },
    /// Call expression: `callee(arg1, arg2)`.
    Call {
        /// Expression producing the callee.
        function:  Box<Self>,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
    },
    /// Index expression: `target[index]`.
    Index {
        /// Expression producing the indexed value.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
}

/// Represents a top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression(Expr),
    /// `return <expr>`; unwinds to the enclosing function call.
    Return(Expr),
    /// `break`; unwinds to the enclosing loop.
    Break,
}

/// A braced sequence of statements, as used by conditionals, loops and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

/// A complete parsed program: the root of the AST.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`); inverts truthiness.
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    Shl,
    /// Right shift (`>>`)
    Shr,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents an assignment operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignOperator {
    /// Plain assignment (`=`)
    Assign,
    /// Add and assign (`+=`)
    AddAssign,
    /// Subtract and assign (`-=`)
    SubAssign,
    /// Multiply and assign (`*=`)
    MulAssign,
    /// Divide and assign (`/=`)
    DivAssign,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InfixOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Pow, Shl, Shr, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Shl => "<<",
            Shr => ">>",
            And => "&&",
            Or => "||",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        };
        write!(f, "{operator}")
    }
}
