//! JavaScript execution helpers for testing rewritten programs.
//!
//! The execution suites run a program before and after the rewrite under
//! an embedded ECMAScript engine (boa) and compare completion values. A
//! miniature curry runtime stands in for the helper kernel the upstream
//! compiler ships, and a set of no-op shims satisfies the abstract-global
//! stub calls the transform injects.

use boa_engine::{Context, Source};

/// Miniature curry kernel in the upstream compiler's shape: `F` tags a
/// wrapper with its arity `a` and stored implementation `f`, `F<n>` builds
/// the curried wrapper, and `A<n>` applies either in one step (arity
/// matches) or one argument at a time.
pub const CURRY_RUNTIME: &str = r#"
function F(arity, fun, wrapper) {
    wrapper.a = arity;
    wrapper.f = fun;
    return wrapper;
}
function F1(fun) {
    return F(1, fun, function (a) {
        return fun(a);
    });
}
function F2(fun) {
    return F(2, fun, function (a) {
        return function (b) {
            return fun(a, b);
        };
    });
}
function F3(fun) {
    return F(3, fun, function (a) {
        return function (b) {
            return function (c) {
                return fun(a, b, c);
            };
        };
    });
}
function F4(fun) {
    return F(4, fun, function (a) {
        return function (b) {
            return function (c) {
                return function (d) {
                    return fun(a, b, c, d);
                };
            };
        };
    });
}
function A1(fun, a) {
    return fun.a === 1 ? fun.f(a) : fun(a);
}
function A2(fun, a, b) {
    return fun.a === 2 ? fun.f(a, b) : fun(a)(b);
}
function A3(fun, a, b, c) {
    return fun.a === 3 ? fun.f(a, b, c) : A2(fun, a, b)(c);
}
function A4(fun, a, b, c, d) {
    return fun.a === 4 ? fun.f(a, b, c, d) : A3(fun, a, b, c)(d);
}
"#;

/// No-op stand-ins for the heap analyzer's intrinsics, so programs that
/// carry the injected stub block still evaluate.
pub const ANALYZER_SHIMS: &str = r#"
var global = globalThis;
function __assumeDataProperty(target, name, value) {}
function __abstract(shape) {
    return shape;
}
function __abstractOrUndefined(type) {
    return undefined;
}
"#;

/// Executor for running JavaScript fixtures in tests.
pub struct JsExecutor {
    context: Context,
}

impl JsExecutor {
    pub fn new() -> Self {
        Self {
            context: Context::default(),
        }
    }

    /// Evaluates a script and renders its completion value.
    ///
    /// # Errors
    ///
    /// Returns the engine's error message if evaluation throws.
    pub fn eval(&mut self, code: &str) -> Result<String, String> {
        let value = self
            .context
            .eval(Source::from_bytes(code))
            .map_err(|e| format!("JS execution failed: {e}"))?;
        Ok(value.display().to_string())
    }

    /// Checks that the code evaluates without throwing (ignores the value).
    pub fn eval_ok(&mut self, code: &str) -> bool {
        self.eval(code).is_ok()
    }
}

impl Default for JsExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates `program` with the curry kernel prepended, as the original
/// (unrewritten) compiler output would run.
pub fn eval_with_runtime(program: &str) -> Result<String, String> {
    JsExecutor::new().eval(&format!("{CURRY_RUNTIME}\n{program}"))
}

/// Evaluates already-rewritten `program` text: analyzer shims first (for
/// the injected stub block), then the curry kernel, then the program.
pub fn eval_transformed(program: &str) -> Result<String, String> {
    JsExecutor::new().eval(&format!("{ANALYZER_SHIMS}\n{CURRY_RUNTIME}\n{program}"))
}
