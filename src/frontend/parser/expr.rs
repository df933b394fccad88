use super::{ParseError, ParseResult, Parser};
use crate::frontend::ast::{BinOp, Expr, UnOp};
use crate::frontend::token::Token;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Lowest,

    LogicalOr,
    LogicalAnd,

    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,

    Equality,
    Comparison,

    Shift,

    Term,
    Factor,

    Unary,
}

fn binop_prec(binop: BinOp) -> Prec {
    match binop {
        BinOp::LogicalOr => Prec::LogicalOr,
        BinOp::LogicalAnd => Prec::LogicalAnd,

        BinOp::BitwiseOr => Prec::BitwiseOr,
        BinOp::BitwiseXor => Prec::BitwiseXor,
        BinOp::BitwiseAnd => Prec::BitwiseAnd,

        BinOp::Equal | BinOp::NotEqual => Prec::Equality,
        BinOp::Gt | BinOp::Lt | BinOp::GtEq | BinOp::LtEq => Prec::Comparison,

        BinOp::ShiftLeft | BinOp::ShiftRight => Prec::Shift,

        BinOp::Add | BinOp::Sub => Prec::Term,
        BinOp::Mul | BinOp::Div | BinOp::Mod => Prec::Factor,
    }
}

impl Parser {
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        // Assignment is right-associative and is the grammar's only
        // backtracking point: an identifier not followed by `=` is rolled
        // back and re-parsed as the start of a binary expression.
        let start = self.pos;
        if let Token::Identifier(name) = self.peek() {
            self.next();

            if self.eat(Token::Assign) {
                let expr = self.parse_expr()?;
                return Ok(Expr::Assign {
                    name,
                    expr: Box::new(expr),
                });
            }

            self.pos = start;
        }

        self.parse_prec(Prec::Lowest)
    }

    fn parse_prec(&mut self, prec: Prec) -> ParseResult<Expr> {
        let mut expr = self.parse_lhs()?;

        while let Some(op) = self.peek_bin_op(prec) {
            self.next();

            let rhs = self.parse_prec(binop_prec(op))?;

            expr = Expr::BinOp {
                op,
                lhs: Box::new(expr),
                rhs: Box::new(rhs),
            };
        }

        Ok(expr)
    }

    fn parse_lhs(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Token::Integer(n) => {
                self.next();
                Ok(Expr::Constant(n))
            }

            Token::Identifier(name) => {
                self.next();
                Ok(Expr::Var(name))
            }

            Token::Sub => {
                self.next();
                self.parse_unary(UnOp::Negate)
            }

            Token::BitwiseInvert => {
                self.next();
                self.parse_unary(UnOp::BitwiseInvert)
            }

            Token::Bang => {
                self.next();
                self.parse_unary(UnOp::LogicalNot)
            }

            Token::LParen => {
                self.next();
                let expr = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }

            other => Err(ParseError::expected("an expression", other)),
        }
    }

    fn parse_unary(&mut self, op: UnOp) -> ParseResult<Expr> {
        let expr = self.parse_prec(Prec::Unary)?;
        Ok(Expr::UnOp {
            op,
            expr: Box::new(expr),
        })
    }

    fn peek_bin_op(&self, in_prec: Prec) -> Option<BinOp> {
        let op = match self.peek() {
            Token::Add => BinOp::Add,
            Token::Sub => BinOp::Sub,
            Token::Mul => BinOp::Mul,
            Token::Div => BinOp::Div,
            Token::Mod => BinOp::Mod,

            Token::EqEq => BinOp::Equal,
            Token::NotEq => BinOp::NotEqual,
            Token::Gt => BinOp::Gt,
            Token::Lt => BinOp::Lt,
            Token::GtEq => BinOp::GtEq,
            Token::LtEq => BinOp::LtEq,

            Token::LogicalAnd => BinOp::LogicalAnd,
            Token::LogicalOr => BinOp::LogicalOr,

            Token::BitwiseAnd => BinOp::BitwiseAnd,
            Token::BitwiseOr => BinOp::BitwiseOr,
            Token::BitwiseXor => BinOp::BitwiseXor,

            Token::ShiftLeft => BinOp::ShiftLeft,
            Token::ShiftRight => BinOp::ShiftRight,

            _ => return None,
        };

        // all binary operators are left-associative
        (binop_prec(op) > in_prec).then_some(op)
    }
}
