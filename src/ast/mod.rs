//! Abstract syntax tree for the subset of OpenCL C this crate minifies.
//!
//! Every node lives in one of the closed enums below (`Expr`, `Stmt`,
//! `External`, ...), so a rewrite pass that matches exhaustively on them can
//! never silently skip a node kind. Genuinely unsupported constructs
//! (`goto`, labels, unions, ...) still parse into an explicit `Unsupported`
//! leaf so the rewriter can raise the fatal diagnostic the spec calls for,
//! rather than a match simply failing to compile.
mod array;
mod assignment;
mod binary_op;
mod block;
mod call;
mod cast;
mod constant;
mod decl;
mod enum_declaration;
mod expression;
mod fn_def;
mod for_loop;
mod ident;
mod if_statement;
mod node;
mod operators;
mod param;
mod parser;
mod pragma;
mod statement;
mod struct_declaration;
mod struct_ref;
mod switch;
mod ternary_op;
mod types;
mod unary_op;
mod while_loop;

pub use self::array::*;
pub use self::assignment::*;
pub use self::binary_op::*;
pub use self::block::*;
pub use self::call::*;
pub use self::cast::*;
pub use self::constant::*;
pub use self::decl::*;
pub use self::enum_declaration::*;
pub use self::expression::*;
pub use self::fn_def::*;
pub use self::for_loop::*;
pub use self::ident::*;
pub use self::if_statement::*;
pub use self::node::*;
pub use self::operators::*;
pub use self::param::*;
pub use self::parser::*;
pub use self::pragma::*;
pub use self::statement::*;
pub use self::struct_declaration::*;
pub use self::struct_ref::*;
pub use self::switch::*;
pub use self::ternary_op::*;
pub use self::types::*;
pub use self::unary_op::*;
pub use self::while_loop::*;

/// A position within the preprocessed source (file, line, column).
pub type Position = (String, usize, usize);
