use super::{Expr, Position, Stmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub cond: Expr,
    pub body: Box<Stmt>,
    pub position: Position,
}
