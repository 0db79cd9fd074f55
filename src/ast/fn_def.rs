use super::{Compound, DeclSpecifiers, ParamList, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDef {
    pub specifiers: DeclSpecifiers,
    pub pointer_depth: usize,
    pub name: String,
    pub params: ParamList,
    pub body: Compound,
    pub position: Position,
}
