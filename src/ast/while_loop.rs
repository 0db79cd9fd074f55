use super::{Expr, Position, Stmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct While {
    pub cond: Expr,
    pub body: Box<Stmt>,
    pub position: Position,
}
