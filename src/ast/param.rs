use super::{DeclSpecifiers, Expr, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub specifiers: DeclSpecifiers,
    pub pointer_depth: usize,
    pub name: Option<String>,
    pub array_dims: Vec<Option<Expr>>,
    pub position: Position,
}

/// `paramList` can be empty, `(void)`, or a comma-separated list; `is_void`
/// distinguishes the middle case since it has no `Param` entries either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamList {
    pub params: Vec<Param>,
    pub is_void: bool,
}
