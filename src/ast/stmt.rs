use super::{
    Assign, Break, ClassDecl, Continue, Expr, For, FuncDecl, If, Print, Return, Throw, Try,
    VarDecl, While,
};

/// Every statement form HanLang's grammar can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDecl),
    Assign(Assign),
    FuncDecl(FuncDecl),
    Return(Return),
    If(If),
    For(For),
    While(While),
    Break(Break),
    Continue(Continue),
    Print(Print),
    ClassDecl(ClassDecl),
    Try(Try),
    Throw(Throw),
    /// A bare expression used as a statement (e.g. a call for its side effect).
    Expr(Expr),
}
