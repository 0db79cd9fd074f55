use super::{
    Compound, Decl, Expr, For, If, Position, Pragma, Switch, Typedef, While,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    pub value: Option<Expr>,
    pub position: Position,
}

/// `doWhileStmt` shares `While`'s shape (condition + body) but the emitter
/// needs to tell the two apart, so it gets its own leaf rather than a shared
/// `While` with a `do_while: bool` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoWhile {
    pub body: Box<Stmt>,
    pub cond: Expr,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub value: Expr,
    pub stmts: Vec<Stmt>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Default {
    pub stmts: Vec<Stmt>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Compound(Compound),
    If(If),
    For(For),
    While(While),
    DoWhile(DoWhile),
    Switch(Switch),
    Case(Case),
    Default(Default),
    Return(Return),
    Break(Position),
    Continue(Position),
    Pragma(Pragma),
    Typedef(Typedef),
    Decl(Decl),
    Expr(Expr),
    Empty(Position),
}
