// SPDX-License-Identifier: Unlicense
use crate::dialect::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Sub,
    Div,
    Mul,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Sum, Operator::Sub, Operator::Div, Operator::Mul];

    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Sum => "sum",
            Operator::Sub => "sub",
            Operator::Div => "div",
            Operator::Mul => "mul",
        }
    }

    /// Infix spelling, shared by the symbolic dialect and the code generator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Sum => "+",
            Operator::Sub => "-",
            Operator::Div => "/",
            Operator::Mul => "*",
        }
    }

    pub fn from_token(token: &str, dialect: Dialect) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| {
            (dialect.accepts_word() && op.keyword() == token)
                || (dialect.accepts_symbol() && op.symbol() == token)
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Number(i64),
    Operation(Operator, Vec<Id>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
}

pub type Id = id_arena::Id<Node>;
pub type Arena = id_arena::Arena<Node>;

/// Call-form dump of a tree, e.g. `mul(3, sub(2, sum(1, 3, 4)))`.
/// Ids missing from the arena are written as `?`.
pub fn describe(arena: &Arena, id: Id) -> String {
    match arena.get(id).map(|n| &n.kind) {
        Some(&NodeKind::Number(n)) => n.to_string(),
        Some(NodeKind::Operation(op, args)) => {
            let args = args
                .iter()
                .map(|&a| describe(arena, a))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({})", op.keyword(), args)
        }
        None => "?".into(),
    }
}
