// SPDX-License-Identifier: Unlicense
//! Recursive-descent parser for prefix expressions.
//!
//! ```text
//! number   := digit+
//! operator := "sum" | "sub" | "div" | "mul"    (word dialect)
//!           | "+" | "-" | "/" | "*"            (symbolic dialect)
//! expr     := number | operator expr+
//! ```
//!
//! An operator takes every expression that follows it until the tokens run
//! out, so `mul 3 sub 2 sum 1 3 4` is `mul(3, sub(2, sum(1, 3, 4)))`.

use crate::{
    ast::{self, NodeKind, Operator},
    dialect::Dialect,
    error::ParseError,
    lexer::Token,
};

/// Read position over a token slice. It only ever moves forward.
#[derive(Debug, Clone)]
pub struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    position: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    /// Consumes the current token, returning it with its index.
    pub fn advance(&mut self) -> Option<(usize, Token<'a>)> {
        let token = self.peek()?;
        let position = self.position;
        self.position += 1;
        Some((position, token))
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

struct Parser<'t, 'a> {
    cursor: Cursor<'t, 'a>,
    arena: ast::Arena,
    dialect: Dialect,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], dialect: Dialect) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            arena: ast::Arena::new(),
            dialect,
        }
    }

    fn new_node(&mut self, kind: NodeKind) -> ast::Id {
        self.arena.alloc(ast::Node { kind })
    }

    fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            position: self.cursor.position(),
        }
    }

    fn parse_expr(&mut self) -> Result<ast::Id, ParseError> {
        match self.cursor.peek() {
            None => Err(self.end_of_input()),
            Some(token) if is_number(token) => self.parse_num(),
            Some(_) => self.parse_op(),
        }
    }

    fn parse_num(&mut self) -> Result<ast::Id, ParseError> {
        let (position, token) = self.cursor.advance().ok_or_else(|| self.end_of_input())?;
        let value = token
            .parse::<i64>()
            .map_err(|_| ParseError::MalformedNumber {
                token: token.to_string(),
                position,
            })?;
        Ok(self.new_node(NodeKind::Number(value)))
    }

    fn parse_op(&mut self) -> Result<ast::Id, ParseError> {
        let (position, token) = self.cursor.advance().ok_or_else(|| self.end_of_input())?;
        let operator =
            Operator::from_token(token, self.dialect).ok_or_else(|| ParseError::UnknownToken {
                token: token.to_string(),
                position,
                dialect: self.dialect,
            })?;

        let mut operands = Vec::new();
        while !self.cursor.is_exhausted() {
            operands.push(self.parse_expr()?);
        }
        if operands.is_empty() {
            return Err(ParseError::MissingOperands { operator, position });
        }

        Ok(self.new_node(NodeKind::Operation(operator, operands)))
    }
}

/// Parses exactly one expression covering the whole token sequence and
/// returns the arena holding the tree along with its root.
pub fn parse(tokens: &[Token], dialect: Dialect) -> Result<(ast::Arena, ast::Id), ParseError> {
    let mut parser = Parser::new(tokens, dialect);
    let root = parser.parse_expr()?;

    if let Some((position, token)) = parser.cursor.advance() {
        return Err(ParseError::TrailingTokens {
            token: token.to_string(),
            position,
        });
    }

    Ok((parser.arena, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::describe, lexer::tokenize};
    use anyhow::Result;
    use rstest::rstest;

    fn parse_word(src: &str) -> Result<String, ParseError> {
        let tokens = tokenize(src);
        let (arena, root) = parse(&tokens, Dialect::Word)?;
        Ok(describe(&arena, root))
    }

    #[rstest]
    #[case("7", "7")]
    #[case("sum 1 2 3", "sum(1, 2, 3)")]
    #[case("div 10 2", "div(10, 2)")]
    #[case("mul 3 sub 2 sum 1 3 4", "mul(3, sub(2, sum(1, 3, 4)))")]
    #[case("sum mul 2 3 4", "sum(mul(2, 3, 4))")]
    #[case("sub 007", "sub(7)")]
    fn parser_should_build_greedy_prefix_trees(#[case] src: &str, #[case] tree: &str) -> Result<()> {
        assert_eq!(parse_word(src)?, tree);
        Ok(())
    }

    #[test]
    fn parser_should_accept_symbolic_dialect() -> Result<()> {
        let tokens = tokenize("* 3 - 2 + 1 3 4");
        let (arena, root) = parse(&tokens, Dialect::Symbolic)?;
        assert_eq!(describe(&arena, root), "mul(3, sub(2, sum(1, 3, 4)))");

        let tokens = tokenize("mul 3 - 2 1");
        let (arena, root) = parse(&tokens, Dialect::Mixed)?;
        assert_eq!(describe(&arena, root), "mul(3, sub(2, 1))");
        Ok(())
    }

    #[test]
    fn parser_should_reject_empty_input() {
        assert_eq!(
            parse_word(""),
            Err(ParseError::UnexpectedEndOfInput { position: 0 })
        );
    }

    #[rstest]
    #[case("mul", Operator::Mul, 0)]
    #[case("sum 1 div", Operator::Div, 2)]
    fn parser_should_reject_operators_without_operands(
        #[case] src: &str,
        #[case] operator: Operator,
        #[case] position: usize,
    ) {
        assert_eq!(
            parse_word(src),
            Err(ParseError::MissingOperands { operator, position })
        );
    }

    #[test]
    fn parser_should_reject_trailing_tokens() {
        assert_eq!(
            parse_word("7 8"),
            Err(ParseError::TrailingTokens {
                token: "8".into(),
                position: 1
            })
        );
    }

    #[test]
    fn parser_should_reject_unknown_tokens() {
        assert_eq!(
            parse_word("sum 1 x"),
            Err(ParseError::UnknownToken {
                token: "x".into(),
                position: 2,
                dialect: Dialect::Word
            })
        );
        // a leading sign is not part of the number pattern
        assert!(matches!(
            parse_word("sum -3 1"),
            Err(ParseError::UnknownToken { position: 1, .. })
        ));
        assert!(matches!(
            parse(&tokenize("+ 1 2"), Dialect::Word),
            Err(ParseError::UnknownToken { position: 0, .. })
        ));
    }

    #[test]
    fn parser_should_reject_numbers_out_of_range() {
        assert_eq!(
            parse_word("sum 1 99999999999999999999"),
            Err(ParseError::MalformedNumber {
                token: "99999999999999999999".into(),
                position: 2
            })
        );
    }

    #[test]
    fn parser_should_be_deterministic() -> Result<()> {
        let tokens = tokenize("div 100 sub 9 mul 2 2 sum 1");
        let (a, ra) = parse(&tokens, Dialect::Word)?;
        let (b, rb) = parse(&tokens, Dialect::Word)?;
        assert_eq!(describe(&a, ra), describe(&b, rb));
        assert_eq!(a.len(), b.len());
        Ok(())
    }

    #[test]
    fn every_node_but_the_root_should_have_one_parent() -> Result<()> {
        let tokens = tokenize("mul 3 sub 2 sum 1 3 4");
        let (arena, root) = parse(&tokens, Dialect::Word)?;
        let mut parents = vec![0; arena.len()];
        for (_, node) in arena.iter() {
            if let NodeKind::Operation(_, args) = &node.kind {
                for a in args {
                    parents[a.index()] += 1;
                }
            }
        }
        for (id, _) in arena.iter() {
            let expected = if id == root { 0 } else { 1 };
            assert_eq!(parents[id.index()], expected);
        }
        Ok(())
    }

    #[test]
    fn cursor_should_only_move_forward() {
        let tokens = ["sum", "1"];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.peek(), Some("sum"));
        assert_eq!(cursor.advance(), Some((0, "sum")));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.advance(), Some((1, "1")));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 2);
    }
}
