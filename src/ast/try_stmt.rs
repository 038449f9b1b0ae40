use super::Stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Try {
    pub try_block: Vec<Stmt>,
    pub catch_var: Option<String>,
    pub catch_block: Option<Vec<Stmt>>,
    pub finally_block: Option<Vec<Stmt>>,
}
