use super::{Enum, Expr, IdentifierType, Initializer, Position, Struct};

/// What a declaration's base type names: a plain keyword sequence, or an
/// inline `struct`/`enum` (possibly anonymous, possibly also defining the
/// tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpecifier {
    Named(IdentifierType),
    Struct(Struct),
    Enum(Enum),
}

/// Address/access/const qualifiers and `__attribute__` annotations are kept
/// as their literal source spelling; the rewriter never needs to interpret
/// them, only the emitter needs to reproduce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclSpecifiers {
    pub qualifiers: Vec<String>,
    pub type_spec: TypeSpecifier,
    pub position: Position,
}

/// One `*ident[dims]... = init` entry in a (possibly comma-separated)
/// declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator {
    pub pointer_depth: usize,
    pub name: String,
    pub array_dims: Vec<Option<Expr>>,
    pub bitfield: Option<Expr>,
    pub initializer: Option<Initializer>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    pub specifiers: DeclSpecifiers,
    pub declarators: Vec<Declarator>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typedef {
    pub specifiers: DeclSpecifiers,
    pub declarators: Vec<Declarator>,
    pub position: Position,
}
