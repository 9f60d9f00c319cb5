// SPDX-License-Identifier: Unlicense
//! Renders a tree as a fully parenthesized infix expression, e.g.
//! `mul 3 sub 2 sum 1 3 4` becomes `(3 * (2 - (1 + 3 + 4)))`.
use crate::ast;
use anyhow::{anyhow, Result};

pub struct CodeGen<'a> {
    arena: &'a ast::Arena,
}

impl<'a> CodeGen<'a> {
    pub fn new(arena: &'a ast::Arena) -> Self {
        Self { arena }
    }

    fn generate_impl(&self, id: ast::Id, out: &mut String) -> Result<()> {
        let kind = &self
            .arena
            .get(id)
            .ok_or(anyhow!("failed to get ast node from arena"))?
            .kind;

        match kind {
            &ast::NodeKind::Number(n) => out.push_str(&n.to_string()),
            ast::NodeKind::Operation(op, args) => {
                if args.is_empty() {
                    anyhow::bail!("operator `{}` has no operands to render", op.keyword())
                }
                let separator = format!(" {} ", op.symbol());
                out.push('(');
                for (i, &arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(&separator);
                    }
                    self.generate_impl(arg, out)?;
                }
                out.push(')');
            }
        }
        Ok(())
    }

    pub fn generate(&self, root: ast::Id) -> Result<String> {
        let mut out = String::new();
        self.generate_impl(root, &mut out)?;
        Ok(out)
    }
}

pub fn render(arena: &ast::Arena, root: ast::Id) -> Result<String> {
    CodeGen::new(arena).generate(root)
}
