use super::{DeclSpecifiers, Expr, Position};

/// The `(type)` part of a cast, compound literal, or `sizeof(type)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub specifiers: DeclSpecifiers,
    pub pointer_depth: usize,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    pub type_name: TypeName,
    pub operand: Box<Expr>,
    pub position: Position,
}
