use crate::session::InternedStr;
use crate::NodeCopy;

#[derive(NodeCopy!)]
pub enum Token {
    Keyword(Keyword),
    Identifier(InternedStr),
    Integer(u64),

    LBrace,
    RBrace,
    LParen,
    RParen,
    Semicolon,

    Add,
    Sub,
    Mul,
    Div,
    Mod,

    Assign,

    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    Bang,
    LogicalAnd,
    LogicalOr,

    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseInvert,

    ShiftLeft,
    ShiftRight,

    Eof,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Int,
    Return,
}

impl Token {
    pub fn token_name(&self) -> &'static str {
        match self {
            Token::Keyword(kw) => match kw {
                Keyword::Int => "keyword `int`",
                Keyword::Return => "keyword `return`",
            },
            Token::Identifier(_) => "identifier",
            Token::Integer(_) => "integer",
            Token::LBrace => "`{`",
            Token::RBrace => "`}`",
            Token::LParen => "`(`",
            Token::RParen => "`)`",
            Token::Semicolon => "`;`",
            Token::Add => "`+`",
            Token::Sub => "`-`",
            Token::Mul => "`*`",
            Token::Div => "`/`",
            Token::Mod => "`%`",
            Token::Assign => "`=`",
            Token::EqEq => "`==`",
            Token::NotEq => "`!=`",
            Token::Lt => "`<`",
            Token::Gt => "`>`",
            Token::LtEq => "`<=`",
            Token::GtEq => "`>=`",
            Token::Bang => "`!`",
            Token::LogicalAnd => "`&&`",
            Token::LogicalOr => "`||`",
            Token::BitwiseAnd => "`&`",
            Token::BitwiseOr => "`|`",
            Token::BitwiseXor => "`^`",
            Token::BitwiseInvert => "`~`",
            Token::ShiftLeft => "`<<`",
            Token::ShiftRight => "`>>`",
            Token::Eof => "end of input",
        }
    }
}
