use std::fs;

use doge::{
    error::ExecError,
    interpreter::{environment::Environment, value::core::Value},
    run_source,
};
use walkdir::WalkDir;

fn run(source: &str) -> Result<Value, ExecError> {
    let env = Environment::root();
    run_source(source, &env)
}

fn eval_ok(source: &str) -> Value {
    run(source).unwrap_or_else(|e| panic!("script failed: {e}\nsource: {source}"))
}

fn assert_int(source: &str, expected: i64) {
    assert_eq!(eval_ok(source), Value::Integer(expected), "source: {source}");
}

fn assert_float(source: &str, expected: f64) {
    assert_eq!(eval_ok(source), Value::Float(expected), "source: {source}");
}

fn assert_bool(source: &str, expected: bool) {
    assert_eq!(eval_ok(source), Value::Boolean(expected), "source: {source}");
}

fn assert_str(source: &str, expected: &str) {
    assert_eq!(eval_ok(source), Value::from(expected), "source: {source}");
}

fn assert_null(source: &str) {
    assert_eq!(eval_ok(source), Value::Null, "source: {source}");
}

fn assert_runtime_error(source: &str, message: &str) {
    match run(source) {
        Err(ExecError::Runtime(error)) => {
            assert_eq!(error.to_string(), message, "source: {source}");
        },
        other => panic!("expected runtime error {message:?}, got {other:?}\nsource: {source}"),
    }
}

fn assert_parse_error(source: &str, message: &str) {
    match run(source) {
        Err(ExecError::Parse(errors)) => {
            assert!(errors.iter().any(|e| e.to_string() == message),
                    "expected parse error {message:?} in {errors:?}\nsource: {source}");
        },
        other => panic!("expected parse errors, got {other:?}\nsource: {source}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_int("5", 5);
    assert_int("2 * (5 + 10)", 30);
    assert_int("5 + 5 + 5 + 5 - 10", 10);
    assert_int("50 / 2 * 2 + 10", 60);
    assert_int("7 / 2", 3);
    assert_int("-7 / 2", -3);
    assert_int("7 % 3", 1);
    assert_int("2 ** 10", 1024);
    assert_int("2 ** -1", 0);
    assert_int("3 ^ 5", 6);
    assert_int("6 & 3", 2);
    assert_int("6 | 3", 7);
    assert_int("1 << 5", 32);
    assert_int("-32 >> 2", -8);
    assert_int("1 << 100", 0);
    assert_int("-1 >> 100", -1);
}

#[test]
fn integer_prefix_operators() {
    assert_int("-5", -5);
    assert_int("-(-5)", 5);
    assert_int("--5", 5);
}

#[test]
fn operator_precedence_quirks() {
    // Bitwise and/or/shifts sit at additive precedence.
    assert_int("1 | 2 * 3", 7);
    assert_int("4 & 1 + 2", 2);
    assert_int("4 & (1 + 2)", 0);
    assert_int("1 << 2 + 1", 5);
    // Xor and modulo sit at multiplicative precedence.
    assert_int("1 + 2 ^ 3", 2);
    assert_int("10 % 3 * 2", 2);
    // `**` binds tighter than unary minus and is left-associative.
    assert_int("2 ** 3 ** 2", 64);
    assert_int("-2 ** 2", -4);
    // `<=`/`>=` share equality precedence, below `<`/`>`.
    assert_bool("1 < 2 == true", true);
    assert_bool("2 >= 1 == true", true);
    assert_bool("5 < 4 != 3 < 4", true);
}

#[test]
fn float_arithmetic() {
    assert_float("2.5 + 1.5", 4.0);
    assert_float("5.0 / 2.0", 2.5);
    assert_float("2.0 ** 3.0", 8.0);
    assert_float(".5 + .5", 1.0);
    assert_float("2. * 2.", 4.0);
    assert_int("7.5 % 2.0", 1);
    assert_bool("1.5 < 2.0", true);
    assert_bool("1.0 == 1.0", true);
}

#[test]
fn mixed_numeric_arithmetic() {
    assert_float("1 + 2.5", 3.5);
    assert_float("2.5 * 2", 5.0);
    assert_int("7.5 % 2", 1);
    assert_bool("1 == 1.0", true);
    assert_bool("2 > 1.5", true);
}

#[test]
fn hex_octal_binary_literals() {
    assert_int("0x2a", 42);
    assert_int("0xFF + 1", 256);
    assert_int("0o17", 15);
    assert_int("0b101", 5);
}

#[test]
fn booleans_and_logic() {
    assert_bool("true", true);
    assert_bool("!true", false);
    assert_bool("!!true", true);
    assert_bool("!false", true);
    assert_bool("!0", false);
    assert_bool("!5", false);
    assert_bool("true && true", true);
    assert_bool("true && false", false);
    assert_bool("false || true", true);
    assert_bool("false || false", false);
    assert_bool("1 && 1", true);
    assert_bool("0 && 1", false);
    assert_bool("1.5 && 2.5", true);
    assert_bool("true == true", true);
    assert_bool("false == false", true);
    assert_bool("true != false", true);
}

#[test]
fn truthiness() {
    // Only null and false are falsy; zero, empty strings and empty
    // containers all take the consequence branch.
    assert_int("if (0) { 1 } else { 2 }", 1);
    assert_int("if (\"\") { 1 } else { 2 }", 1);
    assert_int("if ([]) { 1 } else { 2 }", 1);
    assert_int("if ({}) { 1 } else { 2 }", 1);
    assert_int("if (false) { 1 } else { 2 }", 2);
}

#[test]
fn conditionals() {
    assert_int("if (1 < 2) { 10 } else { 20 }", 10);
    assert_int("if (1 > 2) { 10 } else { 20 }", 20);
    assert_null("if (1 > 2) { 10 }");
    assert_int("if (true) { if (true) { 1 } } else { 2 }", 1);
}

#[test]
fn strings() {
    assert_str("\"Hello\" + \" \" + \"World!\"", "Hello World!");
    assert_bool("\"a\" == \"a\"", true);
    assert_bool("\"a\" != \"b\"", true);
    assert_int("len(\"Hello\")", 5);
    // Strings measure in bytes, not characters.
    assert_int("len(\"h\u{e9}llo\")", 6);
}

#[test]
fn string_indexing() {
    assert_str("\"abc\"[0]", "a");
    assert_str("\"abc\"[2]", "c");
    assert_str("\"abc\"[-1]", "c");
    assert_str("\"abc\"[-3]", "a");
    assert_runtime_error("\"abc\"[3]", "Index out of range!");
    assert_runtime_error("\"abc\"[-4]", "Index out of range!");
    assert_runtime_error("\"abc\"[1.5]", "Index for string can only be integer!");
}

#[test]
fn assignment() {
    assert_int("x = 5; x * 2", 10);
    assert_null("x = 5");
    assert_int("x = 1; x = x + 1; x", 2);
}

#[test]
fn compound_assignment() {
    assert_int("x = 2; x += 3; x", 5);
    assert_int("x = 7; x -= 2; x", 5);
    assert_int("x = 4; x *= 2; x", 8);
    assert_int("x = 9; x /= 3; x", 3);
    assert_float("x = 1.5; x += 0.5; x", 2.0);
    assert_str("s = \"wow \"; s += \"much\"; s", "wow much");
}

#[test]
fn compound_assignment_errors() {
    assert_runtime_error("y += 1", "cannot assign to uninitialized identifier!");
    assert_runtime_error("x = 1; x += 1.5", "cannot use += with types: INTEGER and FLOAT");
    assert_runtime_error("s = \"a\"; s -= \"b\"", "Unknown assign operator -=");
    assert_runtime_error("a = [1]; a += [2]", "cannot use += with types: ARRAY and ARRAY");
    assert_runtime_error("x = 1; x /= 0", "division by zero");
}

#[test]
fn while_loops_leak_assignments() {
    assert_int("i = 0; s = 0; while (i < 5) { s = s + i; i = i + 1 }; s", 10);
    assert_int("i = 0; while (i < 3) { i = i + 1 }; i", 3);
    // New bindings made inside the loop body leak outward too.
    assert_int("i = 0; while (i < 1) { fresh = 7; i = i + 1 }; fresh", 7);
}

#[test]
fn while_loop_result_value() {
    assert_int("i = 0; while (i < 3) { i = i + 1; i * 10 }", 30);
    assert_null("while (false) { 1 }");
}

#[test]
fn if_leaks_assignments() {
    assert_int("if (true) { z = 1 }; z", 1);
    assert_int("x = 1; if (true) { x = 2 }; x", 2);
}

#[test]
fn for_loops_are_hermetic() {
    // The init binding is scoped to the loop.
    assert_runtime_error("for (j = 0; j < 3; j = j + 1) { j }; j", "identifier not found: j");
    // The loop variable shadows rather than overwrites.
    assert_int("x = 1; for (x = 0; x < 3; x = x + 1) { x }; x", 1);
    // Assignments in the body stay inside the loop scope.
    assert_int("s = 0; for (i = 0; i < 3; i = i + 1) { s = 99 }; s", 0);
}

#[test]
fn for_loops_observe_mutation() {
    // In-place mutation is visible outside even though assignment is not.
    assert_int("a = []; for (i = 0; i < 4; i = i + 1) { append(a, i) }; len(a)", 4);
}

#[test]
fn break_statement() {
    assert_int("i = 0; while (true) { i = i + 1; if (i == 3) { break } }; i", 3);
    assert_null("while (true) { break }");
    assert_null("for (i = 0; i < 10; i = i + 1) { break }");
    // Outside any loop the sentinel escapes to the program result.
    assert_eq!(run("break"), Ok(Value::Break));
}

#[test]
fn return_statement() {
    assert_int("return 10; 5", 10);
    assert_int("f = func () { return 5; 10 }; f()", 5);
    assert_int("f = func (x) { if (x > 0) { return 1 }; return 2 }; f(5)", 1);
    assert_int("f = func (x) { if (x > 0) { return 1 }; return 2 }; f(-5)", 2);
}

#[test]
fn functions_and_calls() {
    assert_int("func (x, y) { x + y }(3, 4)", 7);
    assert_int("identity = func (x) { x }; identity(5)", 5);
    assert_int("add = func (a, b) { a + b }; add(add(1, 2), 3)", 6);
    // Surplus arguments are dropped; missing parameters stay unbound.
    assert_int("func (x) { x }(1, 2)", 1);
    assert_runtime_error("func (x, y) { y }(1)", "identifier not found: y");
}

#[test]
fn functions_do_not_capture() {
    // No closures: the defining environment is not attached.
    assert_runtime_error("adder = func (x) { func (y) { x + y } }; adder(2)(3)",
                         "identifier not found: x");
    assert_runtime_error("g = 5; func () { g }()", "identifier not found: g");
}

#[test]
fn call_errors() {
    assert_runtime_error("5(1)", "not a function: INTEGER");
    assert_runtime_error("\"f\"()", "not a function: STRING");
}

#[test]
fn arrays() {
    assert_int("[1, 2, 3][0]", 1);
    assert_int("[1, 2, 3][2]", 3);
    assert_int("len([1, 2, 3])", 3);
    assert_int("len([])", 0);
    assert_int("a = [1, 2, 3]; append(a, 4); len(a)", 4);
    assert_int("a = [1, 2, 3]; append(a, 4); a[-1]", 4);
}

#[test]
fn array_negative_index_law() {
    for k in 1..=3 {
        assert_bool(&format!("a = [1, 2, 3]; a[-{k}] == a[{}]", 3 - k), true);
    }
}

#[test]
fn array_index_errors() {
    assert_runtime_error("[1][5]", "index out of bounds");
    assert_runtime_error("[1][-2]", "index out of bounds");
    assert_runtime_error("[1][true]", "index operator not supported: ARRAY");
}

#[test]
fn arrays_share_their_backing_store() {
    assert_int("a = [1, 2]; b = a; append(a, 3); len(b)", 3);
    assert_int("a = [1, 2]; b = [a]; append(a, 3); len(b[0])", 3);
}

#[test]
fn remove_builtin() {
    assert_int("a = [1, 2, 3]; remove(a, 1)", 2);
    assert_int("a = [1, 2, 3]; remove(a, 1); len(a)", 2);
    assert_int("a = [1, 2, 3]; remove(a, 0); a[0]", 2);
    assert_runtime_error("a = [1]; remove(a, 5)", "Index out of bounds!");
    assert_runtime_error("a = [1]; remove(a, -1)", "Index out of bounds!");
    assert_runtime_error("remove(1, 0)", "argument to `remove` must be ARRAY, got INTEGER");
}

#[test]
fn hashes() {
    assert_int("{\"k\": 1}[\"k\"]", 1);
    assert_bool("{1: \"a\", 2: \"b\"}[2] == \"b\"", true);
    assert_str("{1: \"a\"}[1]", "a");
    assert_int("{true: 1, false: 0}[true]", 1);
    assert_null("{\"k\": 1}[\"m\"]");
    assert_int("len({\"a\": 1, \"b\": 2})", 2);
    assert_int("h = {\"count\": 3}; h[\"count\"]", 3);
}

#[test]
fn hash_key_errors() {
    assert_runtime_error("{[1]: 2}", "unusable as hash key: ARRAY");
    assert_runtime_error("{\"k\": 1}[[1]]", "unusable as hash key: ARRAY");
}

#[test]
fn missing_hash_key_cascades_as_null() {
    assert_runtime_error("{\"k\": 1}[\"k\"] + {\"k\": 1}[\"m\"]",
                         "type mismatch: INTEGER + NULL");
}

#[test]
fn len_builtin() {
    assert_int("len(\"\")", 0);
    assert_int("len(\"four\")", 4);
    assert_runtime_error("len(1)", "argument to `len` not supported, got=INTEGER");
    assert_runtime_error("len(\"a\", \"b\")", "wrong number of arguments. got=2, want=1");
}

#[test]
fn numeric_aggregate_builtins() {
    assert_int("sum([1, 2, 3])", 6);
    assert_float("sum([1, 2.5])", 3.5);
    assert_int("sum([1, \"x\", 2])", 3);
    assert_int("min([3, 1, 2])", 1);
    assert_int("max([-5, -2])", -2);
    assert_float("min([1, 2.5])", 1.0);
    assert_float("max([1, 2.5])", 2.5);
    assert_runtime_error("min([])", "argument to `min` must contain at least one number");
    assert_runtime_error("sum(1)", "argument to `sum` must be array. got=INTEGER");
}

#[test]
fn conversion_builtins() {
    assert_int("int(3.9)", 3);
    assert_int("int(-3.9)", -3);
    assert_int("int(\"42\")", 42);
    assert_float("float(2)", 2.0);
    assert_float("float(\"2.5\")", 2.5);
    assert_runtime_error("int(\"7.5\")", "couldn't parse string as integer");
    assert_runtime_error("float(\"wow\")", "couldn't parse string as float");
    assert_runtime_error("int(true)", "argument to int must be string or float. got=BOOLEAN");
}

#[test]
fn map_builtin() {
    assert_int("map([1, 2, 3], func (x) { x * 2 })[2]", 6);
    assert_int("len(map([], func (x) { x }))", 0);
    // Builtins are first-class and usable as the mapper.
    assert_int("map([\"a\", \"bb\"], len)[1]", 2);
    assert_runtime_error("map([1], func (x) { x + missing })", "identifier not found: missing");
    assert_runtime_error("map(1, len)", "argument to `map` must be ARRAY, got INTEGER");
    assert_runtime_error("map([1], 2)", "second argument to `map` must be FUNCTION, got=INTEGER");
}

#[test]
fn print_builtin() {
    assert_null("print(1, \"two\", [3])");
    assert_runtime_error("print()", "print needs at least one argument. got=0");
}

#[test]
fn builtins_are_values() {
    assert!(matches!(eval_ok("len"), Value::Builtin(_)));
    assert_null("help()");
}

#[test]
fn import_loads_into_caller_environment() {
    let env = Environment::root();
    env.borrow_mut().set("__name__", Value::from("__main__"));

    run_source("import(\"tests/fixtures/greeting\")", &env).unwrap();

    assert_eq!(env.borrow().get("greeting"), Some(Value::from("doge")));
    // The imported file observed the import-time binding...
    assert_eq!(env.borrow().get("seen_name"), Some(Value::from("__import__")));
    // ...and the name was restored afterwards.
    assert_eq!(env.borrow().get("__name__"), Some(Value::from("__main__")));
}

#[test]
fn import_errors() {
    assert!(run("import(\"no_such_module_anywhere\")").is_err());
    assert_runtime_error("import(42)", "argument to import must be string. got=INTEGER");
}

#[test]
fn runtime_type_errors() {
    assert_runtime_error("5 + true", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("5 + true; 5", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("-true", "unknown operator: -BOOLEAN");
    assert_runtime_error("true + false", "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("\"a\" - \"b\"", "unknown operator: STRING - STRING");
    assert_runtime_error("foobar", "identifier not found: foobar");
}

#[test]
fn cross_type_equality_is_identity() {
    assert_bool("1 == \"1\"", false);
    assert_bool("1 != \"1\"", true);
    assert_bool("true == 1", false);
    // Two array literals are distinct objects.
    assert_bool("[1] == [1]", false);
    assert_bool("a = [1]; b = a; a == b", true);
}

#[test]
fn arithmetic_guard_errors() {
    assert_runtime_error("1 / 0", "division by zero");
    assert_runtime_error("1 % 0", "division by zero");
    assert_runtime_error("1 << -1", "negative shift amount: -1");
    assert_runtime_error("1 >> -2", "negative shift amount: -2");
}

#[test]
fn errors_stop_element_evaluation() {
    assert_runtime_error("[1, missing, 3]", "identifier not found: missing");
    assert_runtime_error("{\"k\": missing}", "identifier not found: missing");
    assert_runtime_error("len(missing)", "identifier not found: missing");
}

#[test]
fn parse_errors() {
    assert_parse_error("@", "no prefix parse function for ILLEGAL found");
    assert_parse_error("1 +", "no prefix parse function for EOF found");
    assert_parse_error("if (1 { 2 }", "expected next token to be ), got { instead");
    assert_parse_error("func (1) { 2 }", "expected next token to be IDENT, got INT instead");
    assert_parse_error("99999999999999999999",
                       "could not parse \"99999999999999999999\" as integer");
}

#[test]
fn parse_errors_are_batched() {
    match run("@ ~") {
        Err(ExecError::Parse(errors)) => assert!(errors.len() >= 2, "errors: {errors:?}"),
        other => panic!("expected parse errors, got {other:?}"),
    }
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "doge")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        count += 1;

        let env = Environment::root();
        env.borrow_mut().set("__name__", Value::from("__main__"));

        if let Err(e) = run_source(&source, &env) {
            panic!("demo {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "no demo scripts found in demos/");
}
