use super::{Expr, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    pub name: String,
    pub value: Option<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: Option<String>,
    pub variants: Vec<Enumerator>,
    pub position: Position,
}
