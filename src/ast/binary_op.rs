use super::{BinaryOperator, Expr, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp {
    pub op: BinaryOperator,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub position: Position,
}
