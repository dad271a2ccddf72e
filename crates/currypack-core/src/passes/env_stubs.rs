//! Abstract-global stub injection.
//!
//! The rewritten program is consumed by a whole-program heap analyzer that
//! refuses to reason about browser globals it cannot see. This pass
//! prepends a fixed block of declarative assertions covering the
//! animation-frame scheduling functions and the vendor-prefixed
//! document-visibility properties, marking those globals as present but
//! opaque.
//!
//! The block lands immediately before the first top-level declaration
//! statement; leading expression statements stay ahead of it. Programs with
//! no top-level declaration are left untouched. Nothing guards against
//! inserting twice: running the transform again prepends the block again.

use swc_ecma_ast::{ModuleItem, Program, Stmt};
use tracing::debug;

use crate::engine::AstEngine;
use crate::errors::TransformError;

/// Source of the injected block, kept verbatim in the form the downstream
/// analyzer expects.
pub const ENV_STUBS: &str = r#"__assumeDataProperty(global, "requestAnimationFrame", __abstractOrUndefined("function"));
__assumeDataProperty(global, "cancelAnimationFrame", __abstractOrUndefined("function"));
__assumeDataProperty(global, "document", __abstract({
    hidden: __abstractOrUndefined("boolean"),
    mozHidden: __abstractOrUndefined("boolean"),
    msHidden: __abstractOrUndefined("boolean"),
    webkitHidden: __abstractOrUndefined("boolean"),
}));"#;

/// Splices the stub block into the top-level statement list.
pub struct EnvStubInjectionPass<'e> {
    engine: &'e AstEngine,
}

impl<'e> EnvStubInjectionPass<'e> {
    pub fn new(engine: &'e AstEngine) -> Self {
        Self { engine }
    }

    /// Insert the stub block before the first top-level declaration.
    pub fn apply(&self, program: &mut Program) -> Result<(), TransformError> {
        let stubs = self.engine.parse_stmts(ENV_STUBS)?;
        let inserted = stubs.len();
        match program {
            Program::Script(script) => {
                let Some(at) = position_of_first_decl(&script.body) else {
                    debug!("no top-level declaration, stub block not inserted");
                    return Ok(());
                };
                let tail = script.body.split_off(at);
                script.body.extend(stubs);
                script.body.extend(tail);
                debug!(at, inserted, "environment stubs inserted");
            }
            Program::Module(module) => {
                let at = module.body.iter().position(
                    |item| matches!(item, ModuleItem::Stmt(Stmt::Decl(_))),
                );
                let Some(at) = at else {
                    debug!("no top-level declaration, stub block not inserted");
                    return Ok(());
                };
                let tail = module.body.split_off(at);
                module.body.extend(stubs.into_iter().map(ModuleItem::Stmt));
                module.body.extend(tail);
                debug!(at, inserted, "environment stubs inserted");
            }
        }
        Ok(())
    }
}

fn position_of_first_decl(body: &[Stmt]) -> Option<usize> {
    body.iter().position(|stmt| matches!(stmt, Stmt::Decl(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_ecma_ast::Decl;

    fn inject(source: &str) -> Program {
        let engine = AstEngine::new();
        let mut program = engine.parse_program(source).unwrap();
        EnvStubInjectionPass::new(&engine)
            .apply(&mut program)
            .unwrap();
        program
    }

    fn script_body(program: &Program) -> &[Stmt] {
        match program {
            Program::Script(script) => &script.body,
            Program::Module(_) => panic!("expected a script"),
        }
    }

    #[test]
    fn test_stubs_precede_first_declaration() {
        let program = inject("talk(); var x = 1;");
        let body = script_body(&program);
        // talk(); then three stub statements, then the declaration.
        assert_eq!(body.len(), 5);
        assert!(matches!(body[0], Stmt::Expr(_)));
        assert!(matches!(body[1], Stmt::Expr(_)));
        assert!(matches!(body[4], Stmt::Decl(Decl::Var(_))));
    }

    #[test]
    fn test_function_declarations_anchor() {
        let program = inject("function init() {} run();");
        let body = script_body(&program);
        assert_eq!(body.len(), 5);
        assert!(matches!(body[3], Stmt::Decl(Decl::Fn(_))));
    }

    #[test]
    fn test_declaration_free_programs_untouched() {
        let program = inject("talk(); run(1 + 2);");
        assert_eq!(script_body(&program).len(), 2);
    }

    #[test]
    fn test_nested_declarations_do_not_anchor() {
        let program = inject("(function () { var hidden = 1; })();");
        assert_eq!(script_body(&program).len(), 1);
    }

    #[test]
    fn test_module_items_anchor_on_plain_declarations() {
        let engine = AstEngine::new();
        let mut program = engine
            .parse_program("import fw from \"fw\"; boot(fw); var state = 0;")
            .unwrap();
        EnvStubInjectionPass::new(&engine)
            .apply(&mut program)
            .unwrap();
        let Program::Module(module) = &program else {
            panic!("expected a module");
        };
        // import, boot();, three stubs, declaration.
        assert_eq!(module.body.len(), 6);
        assert!(matches!(
            module.body[2],
            ModuleItem::Stmt(Stmt::Expr(_))
        ));
        assert!(matches!(
            module.body[5],
            ModuleItem::Stmt(Stmt::Decl(Decl::Var(_)))
        ));
    }
}
