//! Name-to-arity fact base for curried declarations.

use rustc_hash::FxHashMap;
use swc_ecma_ast::Program;
use swc_ecma_visit::VisitWith;
use tracing::debug;

use crate::analysis::alias::AliasPropagator;
use crate::analysis::collect::ArityCollector;

/// Map from bound identifier names to their declared curried arity.
///
/// Built by two sequential whole-program scans ([`ArityCollector`], then
/// [`AliasPropagator`]) and consumed read-only by the call-site rewriter.
/// Recording a name twice keeps the later write; entries are never removed
/// within one invocation.
#[derive(Debug, Default, Clone)]
pub struct ArityTable {
    arities: FxHashMap<String, usize>,
}

impl ArityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the finalized table for a program: collect direct `F<n>`
    /// constructions, then propagate arities through simple re-bindings.
    /// Both scans run to completion here, so every rewriting decision made
    /// afterwards sees the whole table.
    pub fn build(program: &Program) -> Self {
        let mut table = ArityTable::new();
        program.visit_with(&mut ArityCollector::new(&mut table));
        program.visit_with(&mut AliasPropagator::new(&mut table));
        debug!(entries = table.len(), "arity table finalized");
        table
    }

    /// Record a declared arity. The last write for a name wins.
    pub fn record(&mut self, name: &str, arity: usize) {
        self.arities.insert(name.to_string(), arity);
    }

    /// Declared arity of `name`, if any declaration or re-binding was seen.
    pub fn arity_of(&self, name: &str) -> Option<usize> {
        self.arities.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.arities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }
}

/// Arity encoded by a helper name: the fixed prefix letter followed by
/// exactly one decimal digit (`F3`, `A7`). Longer names such as `F10` never
/// match, mirroring the helper family the upstream compiler emits.
pub(crate) fn helper_arity(name: &str, prefix: u8) -> Option<usize> {
    match name.as_bytes() {
        [p, d] if *p == prefix && d.is_ascii_digit() => Some(usize::from(d - b'0')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut table = ArityTable::new();
        table.record("add", 2);
        assert_eq!(table.arity_of("add"), Some(2));
        assert_eq!(table.arity_of("sub"), None);
        assert!(table.contains("add"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = ArityTable::new();
        table.record("f", 2);
        table.record("f", 3);
        assert_eq!(table.arity_of("f"), Some(3));
    }

    #[test]
    fn test_helper_names_are_one_letter_one_digit() {
        assert_eq!(helper_arity("F2", b'F'), Some(2));
        assert_eq!(helper_arity("F0", b'F'), Some(0));
        assert_eq!(helper_arity("F9", b'F'), Some(9));
        assert_eq!(helper_arity("A5", b'A'), Some(5));
        assert_eq!(helper_arity("F10", b'F'), None);
        assert_eq!(helper_arity("F", b'F'), None);
        assert_eq!(helper_arity("f2", b'F'), None);
        assert_eq!(helper_arity("A2", b'F'), None);
        assert_eq!(helper_arity("Fx", b'F'), None);
        assert_eq!(helper_arity("", b'F'), None);
    }

    #[test]
    fn test_multibyte_names_never_match() {
        // Two chars but three bytes; the byte-level match must not panic.
        assert_eq!(helper_arity("F²", b'F'), None);
    }
}
