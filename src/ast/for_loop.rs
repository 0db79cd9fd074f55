use super::{Decl, Expr, Position, Stmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForInit {
    Decl(Decl),
    Expr(Expr),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct For {
    pub init: ForInit,
    pub cond: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Box<Stmt>,
    pub position: Position,
}
