use super::Stmt;

/// A class body is parsed as an ordinary block; at execution time only the
/// `함수선언` (function declaration) statements in it become methods, matching
/// the reference interpreter's behavior. The constructor is just the method
/// named `생성`; there is no dedicated constructor node.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub body: Vec<Stmt>,
}
