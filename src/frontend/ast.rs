use crate::session::InternedStr;
use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Module {
    pub item: Item,
}

#[derive(Node!)]
pub enum Item {
    FuncDecl(FuncDecl),
}

#[derive(Node!)]
pub struct FuncDecl {
    pub name: InternedStr,
    pub statements: Vec<Stmt>,
}

#[derive(Node!)]
pub enum Stmt {
    Return(Expr),
    Expr(Expr),
    Declare {
        name: InternedStr,
        init: Option<Expr>,
    },
}

#[derive(Node!)]
pub enum Expr {
    Constant(u64),

    Var(InternedStr),

    UnOp {
        op: UnOp,
        expr: Box<Expr>,
    },

    BinOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Assign {
        name: InternedStr,
        expr: Box<Expr>,
    },
}

#[derive(NodeCopy!)]
pub enum UnOp {
    Negate,
    BitwiseInvert,
    LogicalNot,
}

#[derive(NodeCopy!)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    Equal,
    NotEqual,
    Gt,
    Lt,
    GtEq,
    LtEq,

    LogicalAnd,
    LogicalOr,

    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,

    ShiftLeft,
    ShiftRight,
}
