use super::{Position, Stmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub stmts: Vec<Stmt>,
    pub position: Position,
}
