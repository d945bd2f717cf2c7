use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtins::{collection, convert, import, io},
            core::EvalResult,
        },
        value::core::{BuiltinDef, Value},
    },
};

/// Defines the builtin functions by generating the static lookup table.
///
/// Each entry provides a name, a function pointer, and the documentation
/// line `help()` prints for it.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                func: $func:expr,
                doc: $doc:literal $(,)?
            }
        ),* $(,)?
    ) => {
        /// Static table of every builtin, in `help()` listing order.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func, doc: $doc },
            )*
        ];
    };
}

builtin_functions! {
    "len"    => { func: collection::len, doc: "This function returns the length of an array, string or hash!" },
    "append" => { func: collection::append, doc: "This function appends an object to a given array!" },
    "remove" => { func: collection::remove, doc: "This function removes an object from an array!" },
    "print"  => { func: io::print, doc: "This function prints every object that is given to it, multiple arguments will be separated by a space!" },
    "sum"    => { func: collection::sum, doc: "This function returns the sum of an array!" },
    "min"    => { func: collection::min, doc: "This function returns the smallest value of an array!" },
    "max"    => { func: collection::max, doc: "This function returns the max value of an array!" },
    "int"    => { func: convert::int, doc: "This function converts a string or float to an int!" },
    "float"  => { func: convert::float, doc: "This function converts a string or int to a float!" },
    "map"    => { func: collection::map, doc: "This function calls a function for every entry in an array and adds the result to a new one!" },
    "import" => { func: import::import, doc: "This function imports other doge files!" },
    "help"   => { func: io::help, doc: "Print this menu!" },
}

/// Looks a builtin up by name.
///
/// # Returns
/// The table entry, or `None` when no builtin has that name.
///
/// # Example
/// ```
/// use doge::interpreter::evaluator::builtins::core::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Checks that a builtin received exactly `want` arguments.
///
/// # Returns
/// An error carrying the original `wrong number of arguments` message text
/// when the count differs.
pub(crate) const fn check_count(args: &[Value], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want })
    }
}
