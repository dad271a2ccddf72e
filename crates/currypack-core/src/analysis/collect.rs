//! Direct-construction scan.
//!
//! Records `name → n` for every declarator of the shape
//! `var name = F<n>(...)`, anywhere in the tree. This is the first of the
//! two table-building passes and never mutates the program.

use swc_ecma_ast::{Callee, Expr, Pat, VarDeclarator};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::trace;

use crate::analysis::arity::{helper_arity, ArityTable};

/// Read-only visitor feeding the [`ArityTable`] from direct `F<n>` calls.
///
/// Only simple identifier bindings with a call initializer whose callee is
/// a bare `F<digit>` identifier qualify. Destructuring patterns, missing
/// initializers, and every other initializer shape are skipped without
/// effect.
pub struct ArityCollector<'t> {
    table: &'t mut ArityTable,
}

impl<'t> ArityCollector<'t> {
    pub fn new(table: &'t mut ArityTable) -> Self {
        Self { table }
    }

    fn record_construction(&mut self, decl: &VarDeclarator) {
        let Pat::Ident(binding) = &decl.name else {
            return;
        };
        let Some(init) = &decl.init else {
            return;
        };
        let Expr::Call(call) = &**init else {
            return;
        };
        let Callee::Expr(callee) = &call.callee else {
            return;
        };
        let Expr::Ident(helper) = &**callee else {
            return;
        };
        let Some(arity) = helper_arity(&helper.sym, b'F') else {
            return;
        };
        trace!(name = %binding.id.sym, arity, "recorded curried construction");
        self.table.record(&binding.id.sym, arity);
    }
}

impl Visit for ArityCollector<'_> {
    fn visit_var_declarator(&mut self, decl: &VarDeclarator) {
        // Record before descending so declarators are seen in source order
        // and a redeclared name keeps its last occurrence.
        self.record_construction(decl);
        decl.visit_children_with(self);
    }
}
