//! Module for parsing HanLang programs.
//!
//! It contains all structs for the internal representation of HanLang (i.e., the AST).
mod assign;
mod attribute;
mod binary;
mod break_continue;
mod call;
mod class_decl;
mod expr;
mod for_stmt;
mod func_decl;
mod ident;
mod if_stmt;
mod index;
mod input;
mod lambda;
mod literal;
mod print_stmt;
mod return_stmt;
mod stmt;
mod ternary;
mod throw_stmt;
mod try_stmt;
mod unary;
mod var_decl;
mod while_stmt;

pub use self::assign::*;
pub use self::attribute::*;
pub use self::binary::*;
pub use self::break_continue::*;
pub use self::call::*;
pub use self::class_decl::*;
pub use self::expr::*;
pub use self::for_stmt::*;
pub use self::func_decl::*;
pub use self::ident::*;
pub use self::if_stmt::*;
pub use self::index::*;
pub use self::input::*;
pub use self::lambda::*;
pub use self::literal::*;
pub use self::print_stmt::*;
pub use self::return_stmt::*;
pub use self::stmt::*;
pub use self::ternary::*;
pub use self::throw_stmt::*;
pub use self::try_stmt::*;
pub use self::unary::*;
pub use self::var_decl::*;
pub use self::while_stmt::*;

/// A line/column position within a source file, used only for diagnostics.
/// HanLang does not track positions past lexing/parsing (see interpreter errors).
pub type Position = (usize, usize);

/// A whole HanLang program: a flat sequence of top-level statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}
