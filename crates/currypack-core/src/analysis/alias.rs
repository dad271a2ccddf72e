//! Re-binding scan.
//!
//! `var alias = known;` copies the arity recorded for `known` onto `alias`.
//! Runs as the second table-building pass, strictly after the direct
//! construction scan has covered the whole program.
//!
//! This is a single linear pass over declarators, not a fixed-point
//! iteration. A re-binding from a name the collector recorded resolves
//! regardless of where the two declarations sit relative to each other.
//! Chains of re-bindings resolve only in declaration order: in
//! `var z = x; var x = y;` the first declarator is processed while `x` is
//! still absent from the table, so `z` stays unknown even though `x`
//! becomes known later in the same pass. Preserved behavior of the
//! upstream transform, not an oversight.

use swc_ecma_ast::{Expr, Pat, VarDeclarator};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::trace;

use crate::analysis::arity::ArityTable;

/// Read-only visitor copying arities through simple re-bindings.
pub struct AliasPropagator<'t> {
    table: &'t mut ArityTable,
}

impl<'t> AliasPropagator<'t> {
    pub fn new(table: &'t mut ArityTable) -> Self {
        Self { table }
    }

    fn propagate_rebinding(&mut self, decl: &VarDeclarator) {
        let Pat::Ident(binding) = &decl.name else {
            return;
        };
        let Some(init) = &decl.init else {
            return;
        };
        let Expr::Ident(source) = &**init else {
            return;
        };
        let Some(arity) = self.table.arity_of(&source.sym) else {
            return;
        };
        trace!(
            alias = %binding.id.sym,
            source = %source.sym,
            arity,
            "propagated arity through re-binding"
        );
        self.table.record(&binding.id.sym, arity);
    }
}

impl Visit for AliasPropagator<'_> {
    fn visit_var_declarator(&mut self, decl: &VarDeclarator) {
        self.propagate_rebinding(decl);
        decl.visit_children_with(self);
    }
}
