//! Adapter over the external ECMAScript syntax engine.
//!
//! Parsing, the tree types, traversal machinery, and printing all belong to
//! swc; this module is the only place that drives the parser and the code
//! generator directly. Everything else in the crate works on the engine's
//! tree and treats source text as opaque at the edges.

use swc_common::sync::Lrc;
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::{EsVersion, ModuleItem, Program, Stmt};
use swc_ecma_codegen::text_writer::JsWriter;
use swc_ecma_codegen::{Config, Emitter, Node};
use swc_ecma_parser::lexer::Lexer;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

use crate::errors::TransformError;

/// Thin wrapper around the engine's parse and print entry points.
///
/// Holds the source map shared between parsing and printing so positions
/// stay consistent within one transform invocation. Nothing is cached
/// across invocations.
pub struct AstEngine {
    cm: Lrc<SourceMap>,
}

impl AstEngine {
    pub fn new() -> Self {
        Self {
            cm: Default::default(),
        }
    }

    /// Parse one program; the parser decides between script and module.
    ///
    /// Recovered syntax errors abort just like hard failures: the rewrite
    /// only runs over programs the engine accepted cleanly.
    pub fn parse_program(&self, source: &str) -> Result<Program, TransformError> {
        let file = self
            .cm
            .new_source_file(FileName::Anon.into(), source.to_string());
        let lexer = Lexer::new(
            Syntax::Es(EsSyntax::default()),
            EsVersion::Es2022,
            StringInput::from(&*file),
            None,
        );
        let mut parser = Parser::new_from(lexer);
        let program = parser
            .parse_program()
            .map_err(|err| self.parse_error(err))?;
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(self.parse_error(err));
        }
        Ok(program)
    }

    /// Parse a fixed block of statements (the environment stub source).
    pub fn parse_stmts(&self, source: &str) -> Result<Vec<Stmt>, TransformError> {
        match self.parse_program(source)? {
            Program::Script(script) => Ok(script.body),
            Program::Module(module) => Ok(module
                .body
                .into_iter()
                .filter_map(|item| match item {
                    ModuleItem::Stmt(stmt) => Some(stmt),
                    ModuleItem::ModuleDecl(_) => None,
                })
                .collect()),
        }
    }

    /// Print a program back to source text. Formatting is the engine's.
    pub fn print(&self, program: &Program) -> Result<String, TransformError> {
        let mut buf = Vec::new();
        {
            let mut emitter = Emitter {
                cfg: Config::default(),
                cm: self.cm.clone(),
                comments: None,
                wr: JsWriter::new(self.cm.clone(), "\n", &mut buf, None),
            };
            program
                .emit_with(&mut emitter)
                .map_err(|err| TransformError::Serialize(err.to_string()))?;
        }
        String::from_utf8(buf)
            .map_err(|_| TransformError::Serialize("printer produced invalid UTF-8".into()))
    }

    fn parse_error(&self, err: swc_ecma_parser::error::Error) -> TransformError {
        let loc = self.cm.lookup_char_pos(err.span().lo);
        TransformError::Parse(format!(
            "{} at {}:{}",
            err.kind().msg(),
            loc.line,
            loc.col_display + 1
        ))
    }
}

impl Default for AstEngine {
    fn default() -> Self {
        Self::new()
    }
}
