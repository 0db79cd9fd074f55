use super::{Expr, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncCall {
    pub callee: String,
    pub args: Vec<Expr>,
    pub position: Position,
}
