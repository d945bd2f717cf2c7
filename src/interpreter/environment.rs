use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an environment frame.
///
/// Environments are reference-counted and interior-mutable because builtins,
/// loops and nested scopes all need to read and write the same frames.
pub type Env = Rc<RefCell<Environment>>;

/// A lexically nested name→value mapping.
///
/// Lookup walks the chain of outer frames; writes normally land in the
/// current frame. A *partially enclosed* frame instead forwards writes to its
/// outer frame, which is how assignments inside `if`/`while` bodies become
/// visible outside. `for` loops use a regular enclosed frame, so their
/// bindings stay private.
///
/// # Example
/// ```
/// use doge::interpreter::{environment::Environment, value::core::Value};
///
/// let root = Environment::root();
/// root.borrow_mut().set("x", Value::Integer(1));
///
/// let partial = Environment::partially_enclosed(root.clone());
/// partial.borrow_mut().set("y", Value::Integer(2));
///
/// // The write went through to the root frame.
/// assert_eq!(root.borrow().get("y"), Some(Value::Integer(2)));
///
/// let enclosed = Environment::enclosed(root.clone());
/// enclosed.borrow_mut().set("z", Value::Integer(3));
///
/// // The enclosed frame kept its binding private.
/// assert_eq!(root.borrow().get("z"), None);
/// assert_eq!(enclosed.borrow().get("x"), Some(Value::Integer(1)));
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store:            HashMap<String, Value>,
    outer:            Option<Env>,
    assigns_to_outer: bool,
}

impl Environment {
    /// Creates a root environment with no outer frame.
    #[must_use]
    pub fn root() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a frame enclosed in `outer`. Reads fall through to the outer
    /// chain; writes create bindings in this frame, shadowing outer ones.
    #[must_use]
    pub fn enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Self { store:            HashMap::new(),
                                    outer:            Some(outer),
                                    assigns_to_outer: false, }))
    }

    /// Creates a partially enclosed frame. Reads fall through to the outer
    /// chain; writes are forwarded to the outer frame so they persist beyond
    /// this frame's lifetime.
    #[must_use]
    pub fn partially_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Self { store:            HashMap::new(),
                                    outer:            Some(outer),
                                    assigns_to_outer: true, }))
    }

    /// Looks a name up in this frame, then outward along the chain.
    ///
    /// # Parameters
    /// - `name`: The name to resolve.
    ///
    /// # Returns
    /// A clone of the bound value, or `None` when the name is unbound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name to a value.
    ///
    /// Regular frames write into their own store, creating or overwriting the
    /// binding. Partially enclosed frames forward the write outward.
    pub fn set(&mut self, name: &str, value: Value) {
        if self.assigns_to_outer && let Some(outer) = &self.outer {
            outer.borrow_mut().set(name, value);
            return;
        }
        self.store.insert(name.to_string(), value);
    }
}
