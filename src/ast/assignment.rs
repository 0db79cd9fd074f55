use super::{AssignOperator, Expr, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub op: AssignOperator,
    pub target: Box<Expr>,
    pub value: Box<Expr>,
    pub position: Position,
}
