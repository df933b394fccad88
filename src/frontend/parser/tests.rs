use crate::frontend::ast::*;
use crate::frontend::{lex, parse, parse_expression, parse_statement};
use crate::session::Session;

fn expr(source: &str, session: &Session) -> Expr {
    let tokens = lex(source, session).unwrap();
    parse_expression(tokens).unwrap()
}

fn stmt(source: &str, session: &Session) -> Stmt {
    let tokens = lex(source, session).unwrap();
    parse_statement(tokens).unwrap()
}

fn binop(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::BinOp {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unop(op: UnOp, operand: Expr) -> Expr {
    Expr::UnOp {
        op,
        expr: Box::new(operand),
    }
}

#[test]
fn factor_binds_tighter_than_term() {
    let session = Session::default();
    assert_eq!(
        expr("1 + 2 * 3", &session),
        binop(
            BinOp::Add,
            Expr::Constant(1),
            binop(BinOp::Mul, Expr::Constant(2), Expr::Constant(3)),
        )
    );
}

#[test]
fn term_is_left_associative() {
    let session = Session::default();
    assert_eq!(
        expr("8 - 4 - 2", &session),
        binop(
            BinOp::Sub,
            binop(BinOp::Sub, Expr::Constant(8), Expr::Constant(4)),
            Expr::Constant(2),
        )
    );
}

#[test]
fn parens_override_precedence() {
    let session = Session::default();
    assert_eq!(
        expr("(1 + 2) * 3", &session),
        binop(
            BinOp::Mul,
            binop(BinOp::Add, Expr::Constant(1), Expr::Constant(2)),
            Expr::Constant(3),
        )
    );
}

#[test]
fn shift_binds_tighter_than_comparison() {
    let session = Session::default();
    assert_eq!(
        expr("1 < 2 << 3", &session),
        binop(
            BinOp::Lt,
            Expr::Constant(1),
            binop(BinOp::ShiftLeft, Expr::Constant(2), Expr::Constant(3)),
        )
    );
}

// The bitwise operators sit *below* equality in this grammar, unlike C.
#[test]
fn equality_binds_tighter_than_bitwise_and() {
    let session = Session::default();
    assert_eq!(
        expr("1 & 2 == 3", &session),
        binop(
            BinOp::BitwiseAnd,
            Expr::Constant(1),
            binop(BinOp::Equal, Expr::Constant(2), Expr::Constant(3)),
        )
    );
}

#[test]
fn logical_or_is_lowest() {
    let session = Session::default();
    assert_eq!(
        expr("1 || 2 && 3", &session),
        binop(
            BinOp::LogicalOr,
            Expr::Constant(1),
            binop(BinOp::LogicalAnd, Expr::Constant(2), Expr::Constant(3)),
        )
    );
}

#[test]
fn unary_operators_nest() {
    let session = Session::default();
    assert_eq!(
        expr("-~!0", &session),
        unop(
            UnOp::Negate,
            unop(UnOp::BitwiseInvert, unop(UnOp::LogicalNot, Expr::Constant(0))),
        )
    );
}

#[test]
fn unary_binds_tighter_than_factor() {
    let session = Session::default();
    assert_eq!(
        expr("-1 * 2", &session),
        binop(
            BinOp::Mul,
            unop(UnOp::Negate, Expr::Constant(1)),
            Expr::Constant(2),
        )
    );
}

#[test]
fn assignment_is_right_associative() {
    let session = Session::default();
    let a = session.intern("a");
    let b = session.intern("b");

    assert_eq!(
        expr("a = b = 1", &session),
        Expr::Assign {
            name: a,
            expr: Box::new(Expr::Assign {
                name: b,
                expr: Box::new(Expr::Constant(1)),
            }),
        }
    );
}

#[test]
fn identifier_without_assign_rolls_back() {
    let session = Session::default();
    let a = session.intern("a");

    assert_eq!(
        expr("a + 1", &session),
        binop(BinOp::Add, Expr::Var(a), Expr::Constant(1))
    );
}

#[test]
fn comparison_is_not_mistaken_for_assignment() {
    let session = Session::default();
    let a = session.intern("a");

    assert_eq!(
        expr("a == 1", &session),
        binop(BinOp::Equal, Expr::Var(a), Expr::Constant(1))
    );
}

#[test]
fn return_statement() {
    let session = Session::default();
    assert_eq!(stmt("return 2;", &session), Stmt::Return(Expr::Constant(2)));
}

#[test]
fn declaration_with_initializer() {
    let session = Session::default();
    let x = session.intern("x");

    assert_eq!(
        stmt("int x = 1 + 2;", &session),
        Stmt::Declare {
            name: x,
            init: Some(binop(BinOp::Add, Expr::Constant(1), Expr::Constant(2))),
        }
    );
}

#[test]
fn declaration_without_initializer() {
    let session = Session::default();
    let x = session.intern("x");

    assert_eq!(stmt("int x;", &session), Stmt::Declare { name: x, init: None });
}

#[test]
fn expression_statement() {
    let session = Session::default();
    let x = session.intern("x");

    assert_eq!(
        stmt("x = x + 1;", &session),
        Stmt::Expr(Expr::Assign {
            name: x,
            expr: Box::new(binop(BinOp::Add, Expr::Var(x), Expr::Constant(1))),
        })
    );
}

#[test]
fn module_with_multiple_statements() {
    let session = Session::default();
    let tokens = lex("int main() { int a = 1; return a; }", &session).unwrap();
    let module = parse(tokens).unwrap();

    let Item::FuncDecl(func) = module.item;
    assert_eq!(session.lookup_str(func.name), "main");
    assert_eq!(func.statements.len(), 2);
}

#[test]
fn missing_semicolon_names_expected_token() {
    let session = Session::default();
    let tokens = lex("int main() { return 2 }", &session).unwrap();
    let err = parse(tokens).unwrap_err();

    assert_eq!(err.to_string(), "expected `;`, but found `}`");
}

#[test]
fn truncated_input_is_an_error_not_a_hang() {
    let session = Session::default();
    let tokens = lex("int main ( ) { return", &session).unwrap();
    let err = parse(tokens).unwrap_err();

    assert_eq!(err.to_string(), "expected an expression, but found end of input");
}

#[test]
fn garbage_at_expression_position() {
    let session = Session::default();
    let tokens = lex("int main() { return +; }", &session).unwrap();
    let err = parse(tokens).unwrap_err();

    assert_eq!(err.expected, "an expression");
    assert_eq!(err.found, "`+`");
}

#[test]
fn trailing_tokens_after_module_are_rejected() {
    let session = Session::default();
    let tokens = lex("int main() { return 0; } int", &session).unwrap();
    assert!(parse(tokens).is_err());
}
