//! Expression emission: the precedence table and the parenthesization
//! rules built on top of it.
use crate::ast::{
    BinaryOperator, Constant, ConstantKind, Expr, Initializer,
};

use super::{emit_type_name, push_token};

/// Binding strength, tightest first. Mirrors the grammar's own
/// left-recursive precedence chain (`mulExpr` > `addExpr` > ... > `logOrExpr`).
fn precedence(op: BinaryOperator) -> u8 {
    use BinaryOperator::*;
    match op {
        Mul | Div | Mod => 3,
        Add | Sub => 4,
        Shl | Shr => 5,
        Lt | Le | Gt | Ge => 6,
        Eq | Ne => 7,
        BitAnd => 8,
        BitXor => 9,
        BitOr => 10,
        LogAnd => 11,
        LogOr => 12,
    }
}

/// Anything that binds at least as tightly as a cast or a postfix chain and
/// so never needs wrapping when it sits in an unparenthesized "primary"
/// slot (a unary operand, a cast operand, the base of `a.b`/`a[i]`, ...).
/// Binary/ternary/assignment/comma expressions only ever reach such a slot
/// through source parens that this AST does not retain, so they are always
/// re-wrapped there.
fn is_atom(expr: &Expr) -> bool {
    !matches!(
        expr,
        Expr::Binary(_) | Expr::Ternary(_) | Expr::Assignment(_) | Expr::Comma(_, _)
    )
}

fn emit_primary_operand(expr: &Expr, out: &mut String) {
    if is_atom(expr) {
        emit_expr(expr, out);
    } else {
        out.push('(');
        emit_expr(expr, out);
        out.push(')');
    }
}

/// Left operand gets parens when it binds strictly looser than its parent;
/// right gets parens when it binds looser-or-equal. The asymmetry is
/// deliberate: it reproduces the source's left-associative grouping exactly
/// (so `a==b!=c`, parsed as `(a==b)!=c`, keeps no parens on the left but
/// would need them on the right of an `!=` if it ever nested there).
fn emit_binary_operand(expr: &Expr, parent_prec: u8, is_right: bool, out: &mut String) {
    let child_prec = match expr {
        Expr::Binary(b) => Some(precedence(b.op)),
        Expr::Ternary(_) | Expr::Assignment(_) | Expr::Comma(_, _) => Some(u8::MAX),
        _ => None,
    };
    let needs_parens = match child_prec {
        Some(p) if is_right => p >= parent_prec,
        Some(p) => p > parent_prec,
        None => false,
    };
    if needs_parens {
        out.push('(');
        emit_expr(expr, out);
        out.push(')');
    } else {
        emit_expr(expr, out);
    }
}

/// Comma only ever appears here through source parens this AST loses; wrap
/// it back so assignment's target/value slots stay legal to re-parse.
fn emit_assign_operand(expr: &Expr, out: &mut String) {
    if matches!(expr, Expr::Comma(_, _)) {
        out.push('(');
        emit_expr(expr, out);
        out.push(')');
    } else {
        emit_expr(expr, out);
    }
}

/// Same idea for the ternary's condition and tail; its "then" branch is
/// bounded by `?`/`:` already and never needs this.
fn emit_ternary_operand(expr: &Expr, out: &mut String) {
    if matches!(expr, Expr::Comma(_, _) | Expr::Assignment(_)) {
        out.push('(');
        emit_expr(expr, out);
        out.push(')');
    } else {
        emit_expr(expr, out);
    }
}

pub(super) fn emit_initializer(initializer: &Initializer, out: &mut String) {
    match initializer {
        Initializer::Expr(e) => emit_expr(e, out),
        Initializer::List(items) => {
            out.push('{');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                emit_initializer(item, out);
            }
            out.push('}');
        }
    }
}

fn emit_constant(c: &Constant, out: &mut String) {
    match &c.kind {
        ConstantKind::Int(s) | ConstantKind::Float(s) => push_token(out, s),
        ConstantKind::Char(s) | ConstantKind::Str(s) => push_token(out, s),
        ConstantKind::Bool(b) => push_token(out, if *b { "true" } else { "false" }),
    }
}

pub fn emit_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Constant(c) => emit_constant(c, out),
        Expr::Ident(id) => push_token(out, &id.name),
        Expr::Binary(b) => {
            let prec = precedence(b.op);
            emit_binary_operand(&b.lhs, prec, false, out);
            push_token(out, b.op.as_str());
            emit_binary_operand(&b.rhs, prec, true, out);
        }
        Expr::Unary(u) => {
            if u.prefix {
                push_token(out, u.op.as_str());
                emit_primary_operand(&u.operand, out);
            } else {
                emit_primary_operand(&u.operand, out);
                push_token(out, u.op.as_str());
            }
        }
        Expr::Ternary(t) => {
            emit_ternary_operand(&t.cond, out);
            out.push('?');
            emit_expr(&t.then_expr, out);
            out.push(':');
            emit_ternary_operand(&t.else_expr, out);
        }
        Expr::Assignment(a) => {
            emit_assign_operand(&a.target, out);
            push_token(out, a.op.as_str());
            emit_assign_operand(&a.value, out);
        }
        Expr::Cast(cast) => {
            out.push('(');
            emit_type_name(&cast.type_name, out);
            out.push(')');
            emit_primary_operand(&cast.operand, out);
        }
        Expr::Call(call) => {
            push_token(out, &call.callee);
            out.push('(');
            for (i, arg) in call.args.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                emit_expr(arg, out);
            }
            out.push(')');
        }
        Expr::ArrayRef(a) => {
            emit_primary_operand(&a.base, out);
            out.push('[');
            emit_expr(&a.index, out);
            out.push(']');
        }
        Expr::StructRef(s) => {
            emit_primary_operand(&s.base, out);
            // An empty field marks a no-op full-identity swizzle (§9): the
            // rewriter already reduced `.xyzw` to this rather than leaving
            // it to the emitter to re-detect from text.
            if !s.field.is_empty() {
                out.push_str(if s.arrow { "->" } else { "." });
                push_token(out, &s.field);
            }
        }
        Expr::Comma(items, _) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                emit_expr(item, out);
            }
        }
        Expr::CompoundLiteral { type_name, initializer, .. } => {
            out.push('(');
            emit_type_name(type_name, out);
            out.push(')');
            emit_initializer(initializer, out);
        }
        Expr::SizeOfType { type_name, .. } => {
            push_token(out, "sizeof");
            out.push('(');
            emit_type_name(type_name, out);
            out.push(')');
        }
        Expr::SizeOfExpr { operand, .. } => {
            push_token(out, "sizeof");
            out.push('(');
            emit_expr(operand, out);
            out.push(')');
        }
        Expr::Unsupported { description, position } => {
            let (file, line, col) = position;
            panic!("attempted to emit an unsupported construct ({description}) from {file}:{line}:{col}");
        }
    }
}
