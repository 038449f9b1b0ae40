use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub value: Option<Expr>,
    pub is_const: bool,
}
