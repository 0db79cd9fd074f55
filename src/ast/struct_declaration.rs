use super::{DeclSpecifiers, Declarator, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub specifiers: DeclSpecifiers,
    pub declarators: Vec<Declarator>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: Option<String>,
    pub fields: Vec<StructField>,
    pub position: Position,
}
