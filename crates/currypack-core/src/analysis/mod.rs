//! Whole-program fact collection.
//!
//! Both scans here run to completion before any tree mutation starts; the
//! rewrite passes consume the finished [`ArityTable`] read-only.

mod arity;
pub use arity::ArityTable;
pub(crate) use arity::helper_arity;

mod collect;
pub use collect::ArityCollector;

mod alias;
pub use alias::AliasPropagator;
