//! Tree-mutating rewrite passes. Run only after the arity table is final.

mod env_stubs;
pub use env_stubs::{EnvStubInjectionPass, ENV_STUBS};

mod uncurry;
pub use uncurry::UncurryCallsPass;
