use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::BlockStatement,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        value::hash_key::{HashKey, HashPair},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce, plus the two sentinel
/// variants (`Return`, `Break`) the evaluator threads through blocks for
/// non-local control flow. Sentinels never surface to user code.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The absence of a value. Produced by assignments, conditionals with no
    /// taken branch, loops broken out of, and several builtins.
    Null,
    /// A string of bytes. Indexing is bytewise.
    Str(String),
    /// An ordered sequence of values. Shared by reference: every binding and
    /// container slot holding this array observes in-place mutation through
    /// `append` and `remove`.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A mapping from hashable keys to values. Shared by reference like
    /// arrays. Iteration order is not guaranteed.
    Hash(Rc<RefCell<HashMap<HashKey, HashPair>>>),
    /// A user-defined function: parameters and a body. No environment is
    /// captured; calls run in a fresh scope.
    Function(Rc<FunctionValue>),
    /// A host-implemented builtin function.
    Builtin(&'static BuiltinDef),
    /// Sentinel wrapping the value of a `return` statement while it unwinds
    /// to the enclosing call.
    Return(Box<Self>),
    /// Sentinel produced by a `break` statement while it unwinds to the
    /// enclosing loop.
    Break,
}

/// A user-defined function value: parameter names plus the body to run.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionValue {
    /// Parameter names, bound positionally at call time.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
}

/// Type alias for builtin function handlers.
///
/// A builtin receives the caller's environment and the evaluated argument
/// slice, and produces a value or a runtime error.
pub type BuiltinFn = fn(&Env, &[Value]) -> Result<Value, RuntimeError>;

/// Metadata for one builtin function: its name, its handler, and the
/// documentation line `help()` prints.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name programs call the builtin by.
    pub name: &'static str,
    /// The host function implementing it.
    pub func: BuiltinFn,
    /// One-line documentation shown by `help()`.
    pub doc:  &'static str,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Returns the uppercase type tag used in error messages.
    ///
    /// # Example
    /// ```
    /// use doge::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
            Self::Break => "BREAK",
        }
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is numeric, i.e. [`Integer`] or [`Float`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Float`]: Value::Float
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Converts a numeric value to `f64` for mixed-type arithmetic.
    ///
    /// Non-numeric values convert to `0.0`; callers dispatch on
    /// [`is_numeric`] first.
    ///
    /// [`is_numeric`]: Value::is_numeric
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Float(r) => *r,
            _ => 0.0,
        }
    }

    /// Derives the hash key of this value, if it is hashable.
    ///
    /// Only integers, booleans and strings are hashable.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        HashKey::from_value(self)
    }
}

/// Equality between runtime values.
///
/// Scalars compare structurally. Arrays, hashes, functions and builtins
/// compare by identity: two containers are equal only when they are the same
/// shared object. This preserves the pointer-comparison semantics the
/// cross-type `==`/`!=` operators rely on.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Return(a), Self::Return(b)) => a == b,
            (Self::Break, Self::Break) => true,
            _ => false,
        }
    }
}

/// The human-printable inspect form: what `print` and the shell emit.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.borrow().values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "func(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{ ... }}")
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Break => write!(f, "break"),
        }
    }
}
