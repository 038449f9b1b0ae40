use super::Expr;

/// A numeric literal, keeping the Integer/Float distinction the lexer made.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberLit {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListLit {
    pub items: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictLit {
    pub pairs: Vec<(Expr, Expr)>,
}
