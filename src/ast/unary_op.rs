use super::{Expr, Position, UnaryOperator};

/// `prefix` distinguishes `++x` from `x++`; both carry `UnaryOperator::Inc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub operand: Box<Expr>,
    pub prefix: bool,
    pub position: Position,
}
