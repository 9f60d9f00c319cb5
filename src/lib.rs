// SPDX-License-Identifier: Unlicense
//! Prefix arithmetic front end: `tokenize` → `parse` → `evaluate` or `render`.
pub mod ast;
pub mod codegen;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;

pub use dialect::Dialect;
pub use error::{EvalError, ParseError};
