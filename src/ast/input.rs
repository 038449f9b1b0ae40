use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub prompt: Option<Box<Expr>>,
}
