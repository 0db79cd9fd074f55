use super::{Expr, Position};

/// `base.field` (`arrow == false`) or `base->field` (`arrow == true`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructRef {
    pub base: Box<Expr>,
    pub field: String,
    pub arrow: bool,
    pub position: Position,
}
