//! Syntax-tree capability used by the structural rules.
//!
//! Rules never touch parser types directly. They ask a [`SyntaxTree`] for the
//! shapes they care about (functions, exception handlers, doc comments), so a
//! different [`SourceParser`] can back the same rule logic.

use crate::error::{ReviewError, Result};
use crate::utils::LineIndex;
use rustpython_ast::{self as ast, Constant, ExceptHandler, Expr, Stmt};
use rustpython_parser::{parse, Mode};
use std::path::Path;

/// Turns source text into a queryable [`SyntaxTree`].
pub trait SourceParser: Send + Sync {
    fn parse(&self, source: &str, path: &Path) -> Result<SyntaxTree>;
}

/// Python parser backed by `rustpython-parser`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonParser;

impl SourceParser for PythonParser {
    fn parse(&self, source: &str, path: &Path) -> Result<SyntaxTree> {
        let parsed = parse(source, Mode::Module, &path.to_string_lossy()).map_err(|e| {
            ReviewError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        match parsed {
            ast::Mod::Module(module) => Ok(SyntaxTree {
                body: module.body,
                line_index: LineIndex::new(source),
            }),
            _ => Err(ReviewError::Parse {
                path: path.to_path_buf(),
                message: "source did not parse as a module".to_string(),
            }),
        }
    }
}

/// A function or method definition, reduced to what the rules inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    pub line: usize,
    /// Every declared parameter, including `self`, `*args` and `**kwargs`.
    pub param_count: usize,
    pub annotated_params: usize,
    pub has_return_annotation: bool,
    pub has_docstring: bool,
}

impl FunctionInfo {
    /// Leading underscore: private helpers and dunder methods alike.
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// One `except` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerInfo {
    pub line: usize,
    /// `true` when the clause names no exception type.
    pub is_bare: bool,
}

/// A parsed module plus the line index needed to report locations.
pub struct SyntaxTree {
    body: Vec<Stmt>,
    line_index: LineIndex,
}

impl SyntaxTree {
    /// Whether the module opens with a non-empty string literal.
    pub fn has_module_docstring(&self) -> bool {
        docstring(&self.body).is_some()
    }

    /// Every function and method definition, in source order (pre-order).
    pub fn functions(&self) -> Vec<FunctionInfo> {
        let mut out = Vec::new();
        walk_stmts(&self.body, &mut |stmt| {
            let info = match stmt {
                Stmt::FunctionDef(node) => Some(self.function_info(
                    node.name.as_str(),
                    &node.args,
                    node.returns.is_some(),
                    &node.body,
                    node.range.start(),
                )),
                Stmt::AsyncFunctionDef(node) => Some(self.function_info(
                    node.name.as_str(),
                    &node.args,
                    node.returns.is_some(),
                    &node.body,
                    node.range.start(),
                )),
                _ => None,
            };
            out.extend(info);
        });
        out
    }

    /// Every `except` clause, in source order.
    pub fn except_handlers(&self) -> Vec<HandlerInfo> {
        let mut out = Vec::new();
        walk_stmts(&self.body, &mut |stmt| {
            let handlers = match stmt {
                Stmt::Try(node) => &node.handlers,
                Stmt::TryStar(node) => &node.handlers,
                _ => return,
            };
            for handler in handlers {
                match handler {
                    ExceptHandler::ExceptHandler(h) => out.push(HandlerInfo {
                        line: self.line_index.line_number(h.range.start()),
                        is_bare: h.type_.is_none(),
                    }),
                }
            }
        });
        out
    }

    fn function_info(
        &self,
        name: &str,
        args: &ast::Arguments,
        has_return_annotation: bool,
        body: &[Stmt],
        start: ast::TextSize,
    ) -> FunctionInfo {
        let mut params: Vec<&ast::Arg> = args
            .posonlyargs
            .iter()
            .chain(&args.args)
            .chain(&args.kwonlyargs)
            .map(|a| &a.def)
            .collect();
        params.extend(args.vararg.as_deref());
        params.extend(args.kwarg.as_deref());

        FunctionInfo {
            name: name.to_string(),
            line: self.line_index.line_number(start),
            param_count: params.len(),
            annotated_params: params.iter().filter(|p| p.annotation.is_some()).count(),
            has_return_annotation,
            has_docstring: docstring(body).is_some(),
        }
    }
}

/// Returns the docstring of a body, if its first statement is a non-blank
/// string literal.
fn docstring(body: &[Stmt]) -> Option<&str> {
    let Some(Stmt::Expr(expr)) = body.first() else {
        return None;
    };
    match &*expr.value {
        Expr::Constant(c) => match &c.value {
            Constant::Str(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        },
        _ => None,
    }
}

fn walk_handlers<'a, F>(handlers: &'a [ExceptHandler], f: &mut F)
where
    F: FnMut(&'a Stmt),
{
    for handler in handlers {
        match handler {
            ExceptHandler::ExceptHandler(h) => walk_stmts(&h.body, f),
        }
    }
}

/// Pre-order traversal over every statement, descending into all nested
/// blocks (function and class bodies, branches, loops, handlers, match arms).
fn walk_stmts<'a, F>(stmts: &'a [Stmt], f: &mut F)
where
    F: FnMut(&'a Stmt),
{
    for stmt in stmts {
        f(stmt);
        match stmt {
            Stmt::FunctionDef(node) => walk_stmts(&node.body, f),
            Stmt::AsyncFunctionDef(node) => walk_stmts(&node.body, f),
            Stmt::ClassDef(node) => walk_stmts(&node.body, f),
            Stmt::If(node) => {
                walk_stmts(&node.body, f);
                walk_stmts(&node.orelse, f);
            }
            Stmt::For(node) => {
                walk_stmts(&node.body, f);
                walk_stmts(&node.orelse, f);
            }
            Stmt::AsyncFor(node) => {
                walk_stmts(&node.body, f);
                walk_stmts(&node.orelse, f);
            }
            Stmt::While(node) => {
                walk_stmts(&node.body, f);
                walk_stmts(&node.orelse, f);
            }
            Stmt::With(node) => walk_stmts(&node.body, f),
            Stmt::AsyncWith(node) => walk_stmts(&node.body, f),
            Stmt::Try(node) => {
                walk_stmts(&node.body, f);
                walk_handlers(&node.handlers, f);
                walk_stmts(&node.orelse, f);
                walk_stmts(&node.finalbody, f);
            }
            Stmt::TryStar(node) => {
                walk_stmts(&node.body, f);
                walk_handlers(&node.handlers, f);
                walk_stmts(&node.orelse, f);
                walk_stmts(&node.finalbody, f);
            }
            Stmt::Match(node) => {
                for case in &node.cases {
                    walk_stmts(&case.body, f);
                }
            }
            _ => {}
        }
    }
}
