//! Test utilities and fixtures for currypack.

pub mod js_executor;
pub mod transform;

pub use js_executor::{eval_transformed, eval_with_runtime, JsExecutor, ANALYZER_SHIMS, CURRY_RUNTIME};
pub use transform::{occurrences, reprint, stub_injected_only, transform_ok};
