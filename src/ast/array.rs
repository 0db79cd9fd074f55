use super::{Expr, Position};

/// `base[index]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayRef {
    pub base: Box<Expr>,
    pub index: Box<Expr>,
    pub position: Position,
}
