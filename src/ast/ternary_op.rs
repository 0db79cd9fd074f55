use super::{Expr, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TernaryOp {
    pub cond: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
    pub position: Position,
}
