use super::{
    Attribute, BinaryOp, Call, DictLit, Ident, Index, Input, Lambda, ListLit, NumberLit, Ternary,
    UnaryOp,
};

/// Every expression form HanLang's grammar can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberLit),
    Str(String),
    Bool(bool),
    Nil,
    List(ListLit),
    Dict(DictLit),
    Ident(Ident),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Ternary(Ternary),
    Call(Call),
    Index(Index),
    Attribute(Attribute),
    Input(Input),
    Lambda(Lambda),
}
