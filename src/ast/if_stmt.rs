use super::{Expr, Stmt};

/// `아니면만약` (`elif`) is desugared into a single-statement `else_block`
/// holding a nested `If`, matching the reference parser.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub cond: Expr,
    pub then_block: Vec<Stmt>,
    pub else_block: Option<Vec<Stmt>>,
}
