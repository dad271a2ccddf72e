//! Saturated-application rewriting.
//!
//! The upstream compiler encodes an n-argument call of a curried function
//! value as `A<n>(fn, a1, .., an)`. When `fn` was declared in this program
//! with curried arity n, the generic helper dispatch is unnecessary: the
//! wrapper's stored implementation can be invoked directly.
//!
//! # Examples
//!
//! ```js
//! // Before:
//! var add = F2(function (a, b) { return a + b; });
//! var three = A2(add, 1, 2);
//!
//! // After:
//! var add = F2(function (a, b) { return a + b; });
//! var three = add.f(1, 2);
//! ```
//!
//! Every guard must hold or the call stays exactly as written: unknown
//! target names, helper digits that disagree with the declared arity,
//! argument counts that disagree with it, calls with at most one argument,
//! and targets that are anything but a bare identifier all remain on the
//! generic helper path. Skipping is silent; partial application keeps its
//! runtime semantics by staying generic.

use swc_common::DUMMY_SP;
use swc_ecma_ast::{CallExpr, Callee, Expr, IdentName, MemberExpr, MemberProp, Program};
use swc_ecma_visit::{VisitMut, VisitMutWith};
use tracing::{debug, trace};

use crate::analysis::{helper_arity, ArityTable};

/// Rewrites fully saturated `A<n>` helper calls into `target.f(..)` calls.
///
/// Consumes a finalized [`ArityTable`] read-only. Argument expressions are
/// kept untouched and in order; only the callee changes and the leading
/// target argument moves into it.
pub struct UncurryCallsPass<'t> {
    table: &'t ArityTable,
    rewritten: usize,
}

impl<'t> UncurryCallsPass<'t> {
    pub fn new(table: &'t ArityTable) -> Self {
        Self {
            table,
            rewritten: 0,
        }
    }

    /// Rewrite every qualifying call in the program. Returns the number of
    /// call sites rewritten.
    pub fn apply(mut self, program: &mut Program) -> usize {
        program.visit_mut_with(&mut self);
        debug!(rewritten = self.rewritten, "saturated helper calls rewritten");
        self.rewritten
    }

    fn qualifies(&self, call: &CallExpr) -> bool {
        let Callee::Expr(callee) = &call.callee else {
            return false;
        };
        let Expr::Ident(helper) = &**callee else {
            return false;
        };
        let Some(digit) = helper_arity(&helper.sym, b'A') else {
            return false;
        };
        if call.args.len() <= 1 {
            return false;
        }
        let target = &call.args[0];
        if target.spread.is_some() {
            return false;
        }
        let Expr::Ident(target_ident) = &*target.expr else {
            return false;
        };
        let Some(declared) = self.table.arity_of(&target_ident.sym) else {
            return false;
        };
        // Both arity signals must agree with the declaration: the helper's
        // digit and the number of supplied arguments.
        declared == call.args.len() - 1 && declared == digit
    }

    fn rewrite(&mut self, call: &mut CallExpr) {
        let target = call.args.remove(0);
        if let Expr::Ident(target_ident) = &*target.expr {
            trace!(
                target = %target_ident.sym,
                arity = call.args.len(),
                "rewrote saturated call"
            );
        }
        call.callee = Callee::Expr(Box::new(Expr::Member(MemberExpr {
            span: DUMMY_SP,
            obj: target.expr,
            prop: MemberProp::Ident(IdentName {
                span: DUMMY_SP,
                sym: "f".into(),
            }),
        })));
        self.rewritten += 1;
    }
}

impl VisitMut for UncurryCallsPass<'_> {
    fn visit_mut_call_expr(&mut self, call: &mut CallExpr) {
        // Children first: a helper call in argument position is decided on
        // its own merits before the enclosing call is examined.
        call.visit_mut_children_with(self);
        if self.qualifies(call) {
            self.rewrite(call);
        }
    }
}
