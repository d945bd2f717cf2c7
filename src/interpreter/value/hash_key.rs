use crate::interpreter::value::core::Value;

/// A hashable projection of a runtime value.
///
/// Only integers, booleans and strings can key a hash. The enum tag keeps
/// keys of different types from ever colliding, and the host `HashMap`
/// supplies a stable hash of the payload, so equal values always produce
/// equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// Key derived from an `Integer` value.
    Integer(i64),
    /// Key derived from a `Boolean` value.
    Boolean(bool),
    /// Key derived from a `String` value.
    Str(String),
}

impl HashKey {
    /// Derives a key from a runtime value, if the value is hashable.
    ///
    /// # Parameters
    /// - `value`: The candidate key value.
    ///
    /// # Returns
    /// `Some(HashKey)` for integers, booleans and strings; `None` otherwise.
    ///
    /// # Example
    /// ```
    /// use doge::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// assert_eq!(HashKey::from_value(&Value::Integer(3)),
    ///            Some(HashKey::Integer(3)));
    /// assert_eq!(HashKey::from_value(&Value::Null), None);
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(Self::Integer(*n)),
            Value::Boolean(b) => Some(Self::Boolean(*b)),
            Value::Str(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

/// A key/value entry stored in a hash.
///
/// The original key value is retained alongside the mapped value so the
/// printable form can show the key as written.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as a runtime value.
    pub key:   Value,
    /// The mapped value.
    pub value: Value,
}
