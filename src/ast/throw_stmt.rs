use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Throw {
    pub value: Expr,
}
