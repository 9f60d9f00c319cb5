// SPDX-License-Identifier: Unlicense
use crate::{ast, codegen, dialect::Dialect, eval, lexer, parser};
use anyhow::{Context, Result};

pub fn parse_source(source: &str, dialect: Dialect) -> Result<(ast::Arena, ast::Id)> {
    let tokens = lexer::tokenize(source);
    parser::parse(&tokens, dialect).context("failed to parse")
}

pub fn evaluate_source(source: &str, dialect: Dialect) -> Result<i64> {
    let (arena, root) = parse_source(source, dialect)?;
    eval::evaluate(&arena, root).context("failed to evaluate")
}

pub fn render_source(source: &str, dialect: Dialect) -> Result<String> {
    let (arena, root) = parse_source(source, dialect)?;
    codegen::render(&arena, root).context("failed to render")
}
