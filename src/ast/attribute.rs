use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub target: Box<Expr>,
    pub attr: String,
}
