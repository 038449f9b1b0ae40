use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub target: Box<Expr>,
    pub index: Box<Expr>,
}
