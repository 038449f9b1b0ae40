use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub values: Vec<Expr>,
}
