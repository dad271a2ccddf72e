//! Saturated-call rewriting for curry-encoded JavaScript.
//!
//! Functional-language compilers that target JavaScript commonly encode
//! currying through a family of fixed helpers: `F2(impl)` builds a
//! two-argument curried function value carrying its implementation on an
//! `f` property, and `A2(fn, a, b)` applies such a value to two arguments
//! in one step, falling back to one-at-a-time application when the arity
//! does not line up. Every `A<n>` call pays a dispatch the generated code
//! rarely needs.
//!
//! This crate removes that dispatch where saturation is provable from the
//! program text alone. It scans one program for `var name = F<n>(..)`
//! declarations and simple re-bindings of them, then rewrites every
//! `A<n>(name, ..)` call whose helper digit and argument count both agree
//! with the declared arity into the direct form `name.f(..)`. It also
//! injects a fixed block of abstract-global stubs expected by the
//! whole-program heap analyzer the output is fed to.
//!
//! Parsing, traversal, and printing belong to the syntax engine (swc); the
//! crate's own contribution is the arity fact base and the rewrite
//! decisions. Each invocation is self-contained: no state survives from
//! one program to the next.
//!
//! ```
//! let source = r#"
//!     var add = F2(function (a, b) { return a + b; });
//!     var three = A2(add, 1, 2);
//! "#;
//! let output = currypack_core::transform(source).unwrap();
//! assert!(output.contains("add.f(1, 2)"));
//! assert!(!output.contains("A2("));
//! ```

pub mod analysis;
pub mod engine;
pub mod errors;
pub mod passes;

pub use analysis::{AliasPropagator, ArityCollector, ArityTable};
pub use engine::AstEngine;
pub use errors::TransformError;
pub use passes::{EnvStubInjectionPass, UncurryCallsPass};

use tracing::debug;

/// Run the whole rewrite pipeline over one program's source text.
///
/// Parses with the engine, builds the arity fact base to completion
/// (direct constructions first, then re-bindings), injects the environment
/// stub block, rewrites saturated helper calls, and prints the mutated
/// tree. Fails only on input the engine rejects; every unmatched rewrite
/// pattern is skipped silently.
pub fn transform(source: &str) -> Result<String, TransformError> {
    let engine = AstEngine::new();
    let mut program = engine.parse_program(source)?;

    let table = ArityTable::build(&program);
    EnvStubInjectionPass::new(&engine).apply(&mut program)?;
    let rewritten = UncurryCallsPass::new(&table).apply(&mut program);
    debug!(
        declarations = table.len(),
        rewritten, "transform pipeline finished"
    );

    engine.print(&program)
}
