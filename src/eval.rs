// SPDX-License-Identifier: Unlicense
use crate::{
    ast::{self, Operator},
    error::EvalError,
};

pub struct Evaluator<'a> {
    arena: &'a ast::Arena,
}

impl<'a> Evaluator<'a> {
    pub fn new(arena: &'a ast::Arena) -> Self {
        Self { arena }
    }

    /// `sum` and `mul` fold from their identity; `sub` and `div` fold left
    /// to right starting at the first operand.
    fn reduce(operator: Operator, values: &[i64]) -> Result<i64, EvalError> {
        let overflow = EvalError::Overflow { operator };
        match operator {
            Operator::Sum => values
                .iter()
                .try_fold(0i64, |acc, &v| acc.checked_add(v))
                .ok_or(overflow),
            Operator::Mul => values
                .iter()
                .try_fold(1i64, |acc, &v| acc.checked_mul(v))
                .ok_or(overflow),
            Operator::Sub => {
                let (first, rest) = values
                    .split_first()
                    .ok_or(EvalError::EmptyOperation { operator })?;
                rest.iter()
                    .try_fold(*first, |acc, &v| acc.checked_sub(v))
                    .ok_or(overflow)
            }
            Operator::Div => {
                let (first, rest) = values
                    .split_first()
                    .ok_or(EvalError::EmptyOperation { operator })?;
                rest.iter().try_fold(*first, |acc, &v| {
                    if v == 0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    acc.checked_div(v).ok_or(EvalError::Overflow { operator })
                })
            }
        }
    }

    pub fn evaluate_impl(&self, id: ast::Id) -> Result<i64, EvalError> {
        let kind = &self.arena.get(id).ok_or(EvalError::DanglingNode)?.kind;
        match kind {
            &ast::NodeKind::Number(n) => Ok(n),
            ast::NodeKind::Operation(op, args) => {
                let values = args
                    .iter()
                    .map(|&a| self.evaluate_impl(a))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::reduce(*op, &values)
            }
        }
    }
}

pub fn evaluate(arena: &ast::Arena, root: ast::Id) -> Result<i64, EvalError> {
    Evaluator::new(arena).evaluate_impl(root)
}
