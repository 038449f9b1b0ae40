use super::{Expr, Stmt};

/// `반복 변수 = 시작 : 끝 { 본문 }` — range bounds are inclusive at both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub var: String,
    pub start: Expr,
    pub end: Expr,
    pub body: Vec<Stmt>,
}
