//! Transform helpers for integration tests.
//!
//! Output comparisons in the test suites never predict the printer's
//! formatting by hand. Expected strings come out of the same engine that
//! printed the actual output, so equality checks are exact without pinning
//! serialization details.

use currypack_core::{AstEngine, EnvStubInjectionPass};

/// Run the whole pipeline, panicking with the error on malformed fixtures.
pub fn transform_ok(source: &str) -> String {
    currypack_core::transform(source)
        .unwrap_or_else(|err| panic!("transform failed: {err}\nsource:\n{source}"))
}

/// Reprint `source` through the engine without applying any pass.
pub fn reprint(source: &str) -> String {
    let engine = AstEngine::new();
    let program = engine.parse_program(source).expect("fixture must parse");
    engine.print(&program).expect("printing a parsed tree")
}

/// Reprint `source` with only the environment stub block applied.
///
/// Serves as the expected output for programs the call rewriter must leave
/// alone.
pub fn stub_injected_only(source: &str) -> String {
    let engine = AstEngine::new();
    let mut program = engine.parse_program(source).expect("fixture must parse");
    EnvStubInjectionPass::new(&engine)
        .apply(&mut program)
        .expect("stub block must parse");
    engine.print(&program).expect("printing a parsed tree")
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
