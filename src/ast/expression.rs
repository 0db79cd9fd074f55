use super::{
    ArrayRef, Assignment, BinaryOp, Cast, Constant, FuncCall, Id, Position, StructRef, TernaryOp,
    TypeName, UnaryOp,
};

/// Every expression form the grammar recognizes. `Unsupported` never comes
/// out of the parser for this grammar (it has no production that would
/// yield one) but exists so the rewriter's AST-wide fallback match arm has
/// somewhere to land a future grammar extension without becoming silently
/// incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Constant(Constant),
    Ident(Id),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Ternary(TernaryOp),
    Assignment(Assignment),
    Cast(Cast),
    Call(FuncCall),
    ArrayRef(ArrayRef),
    StructRef(StructRef),
    Comma(Vec<Expr>, Position),
    CompoundLiteral {
        type_name: TypeName,
        initializer: Initializer,
        position: Position,
    },
    SizeOfType {
        type_name: TypeName,
        position: Position,
    },
    SizeOfExpr {
        operand: Box<Expr>,
        position: Position,
    },
    Unsupported {
        description: String,
        position: Position,
    },
}

impl Expr {
    pub fn position(&self) -> &Position {
        match self {
            Expr::Constant(c) => &c.position,
            Expr::Ident(i) => &i.position,
            Expr::Binary(b) => &b.position,
            Expr::Unary(u) => &u.position,
            Expr::Ternary(t) => &t.position,
            Expr::Assignment(a) => &a.position,
            Expr::Cast(c) => &c.position,
            Expr::Call(c) => &c.position,
            Expr::ArrayRef(a) => &a.position,
            Expr::StructRef(s) => &s.position,
            Expr::Comma(_, position) => position,
            Expr::CompoundLiteral { position, .. } => position,
            Expr::SizeOfType { position, .. } => position,
            Expr::SizeOfExpr { position, .. } => position,
            Expr::Unsupported { position, .. } => position,
        }
    }
}

/// An initializer is either a single expression or a (possibly nested)
/// brace-enclosed list, per `{ ... }` in an initializer-list declarator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    Expr(Expr),
    List(Vec<Initializer>),
}
