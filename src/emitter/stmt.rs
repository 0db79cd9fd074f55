//! Statement emission: block structure, declaration grouping, and the
//! brace-omission rules for single-statement bodies.
use crate::ast::{
    Case, Compound, Declarator, Default, DoWhile, For, ForInit, If, Pragma, Return, Stmt, Switch,
    While,
};

use super::{emit_decl_group, emit_decl_specifiers, emit_expr, isolate_pragma, push_token};

/// Renders a `DeclSpecifiers` purely to compare two declarations' leading
/// type text for equality; reuses the real emission code so the
/// comparison is exactly "would these print identically", including full
/// struct/enum bodies.
fn decl_specifiers_key(specifiers: &crate::ast::DeclSpecifiers) -> String {
    let mut buf = String::new();
    emit_decl_specifiers(specifiers, &mut buf);
    buf
}

/// Scans for maximal runs of consecutive `Decl` statements whose leading
/// type text matches and folds each run into one combined declaration
/// (`int a=3,b=5;`), mixing pointer and non-pointer declarators freely.
pub(super) fn emit_stmt_list(stmts: &[Stmt], out: &mut String) {
    let mut i = 0;
    while i < stmts.len() {
        if let Stmt::Decl(first) = &stmts[i] {
            let key = decl_specifiers_key(&first.specifiers);
            let mut declarators: Vec<&Declarator> = first.declarators.iter().collect();
            let mut j = i + 1;
            while let Some(Stmt::Decl(next)) = stmts.get(j) {
                if decl_specifiers_key(&next.specifiers) != key {
                    break;
                }
                declarators.extend(next.declarators.iter());
                j += 1;
            }
            emit_decl_group(&first.specifiers, &declarators, out);
            i = j;
        } else {
            emit_stmt(&stmts[i], out);
            i += 1;
        }
    }
}

pub(super) fn emit_compound_braced(compound: &Compound, out: &mut String) {
    out.push('{');
    emit_stmt_list(&compound.stmts, out);
    out.push('}');
}

/// `if(cond) then else tail` doesn't always let the `then` arm drop its
/// braces: when `then` is itself a bare `if` with no `else` of its own,
/// removing braces would make this `else` bind to it instead of the outer
/// `if`, changing which branch it belongs to.
fn ends_in_dangling_if(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::If(i) => match &i.else_branch {
            Some(tail) => ends_in_dangling_if(tail),
            None => true,
        },
        _ => false,
    }
}

/// Collapses a single-statement `Compound` body to the bare statement
/// (dropping the now-redundant braces); anything else, including an
/// already-bare multi-statement compound, keeps its own shape.
fn emit_body(stmt: &Stmt, out: &mut String, guard_dangling_else: bool) {
    match stmt {
        Stmt::Compound(c) if c.stmts.len() == 1 => {
            let inner = &c.stmts[0];
            if guard_dangling_else && ends_in_dangling_if(inner) {
                emit_compound_braced(c, out);
            } else {
                emit_stmt(inner, out);
            }
        }
        Stmt::Compound(c) => emit_compound_braced(c, out),
        other => emit_stmt(other, out),
    }
}

pub(super) fn emit_stmt(stmt: &Stmt, out: &mut String) {
    match stmt {
        Stmt::Compound(c) => emit_compound_braced(c, out),
        Stmt::If(if_stmt) => emit_if(if_stmt, out),
        Stmt::For(f) => emit_for(f, out),
        Stmt::While(w) => emit_while(w, out),
        Stmt::DoWhile(d) => emit_do_while(d, out),
        Stmt::Switch(s) => emit_switch(s, out),
        Stmt::Case(c) => emit_case(c, out),
        Stmt::Default(d) => emit_default(d, out),
        Stmt::Return(r) => emit_return(r, out),
        Stmt::Break(_) => {
            push_token(out, "break");
            out.push(';');
        }
        Stmt::Continue(_) => {
            push_token(out, "continue");
            out.push(';');
        }
        Stmt::Pragma(p) => emit_pragma_stmt(p, out),
        Stmt::Typedef(t) => {
            super::emit_typedef(t, out);
            out.push(';');
        }
        Stmt::Decl(d) => {
            let declarators: Vec<&Declarator> = d.declarators.iter().collect();
            emit_decl_group(&d.specifiers, &declarators, out);
        }
        Stmt::Expr(e) => {
            emit_expr(e, out);
            out.push(';');
        }
        Stmt::Empty(_) => out.push(';'),
    }
}

fn emit_if(if_stmt: &If, out: &mut String) {
    push_token(out, "if");
    out.push('(');
    emit_expr(&if_stmt.cond, out);
    out.push(')');
    emit_body(&if_stmt.then_branch, out, if_stmt.else_branch.is_some());
    if let Some(else_branch) = &if_stmt.else_branch {
        push_token(out, "else");
        match else_branch.as_ref() {
            Stmt::If(_) => emit_stmt(else_branch, out),
            _ => emit_body(else_branch, out, false),
        }
    }
}

fn emit_for(f: &For, out: &mut String) {
    push_token(out, "for");
    out.push('(');
    match &f.init {
        ForInit::Decl(d) => {
            let declarators: Vec<&Declarator> = d.declarators.iter().collect();
            emit_decl_group(&d.specifiers, &declarators, out);
        }
        ForInit::Expr(e) => {
            emit_expr(e, out);
            out.push(';');
        }
        ForInit::None => out.push(';'),
    }
    if let Some(cond) = &f.cond {
        emit_expr(cond, out);
    }
    out.push(';');
    if let Some(step) = &f.step {
        emit_expr(step, out);
    }
    out.push(')');
    emit_body(&f.body, out, false);
}

fn emit_while(w: &While, out: &mut String) {
    push_token(out, "while");
    out.push('(');
    emit_expr(&w.cond, out);
    out.push(')');
    emit_body(&w.body, out, false);
}

fn emit_do_while(d: &DoWhile, out: &mut String) {
    push_token(out, "do");
    emit_body(&d.body, out, false);
    push_token(out, "while");
    out.push('(');
    emit_expr(&d.cond, out);
    out.push(')');
    out.push(';');
}

fn emit_switch(s: &Switch, out: &mut String) {
    push_token(out, "switch");
    out.push('(');
    emit_expr(&s.cond, out);
    out.push(')');
    emit_body(&s.body, out, false);
}

fn emit_case(c: &Case, out: &mut String) {
    push_token(out, "case");
    emit_expr(&c.value, out);
    out.push(':');
    emit_stmt_list(&c.stmts, out);
}

fn emit_default(d: &Default, out: &mut String) {
    push_token(out, "default");
    out.push(':');
    emit_stmt_list(&d.stmts, out);
}

fn emit_return(r: &Return, out: &mut String) {
    push_token(out, "return");
    if let Some(v) = &r.value {
        emit_expr(v, out);
    }
    out.push(';');
}

fn emit_pragma_stmt(p: &Pragma, out: &mut String) {
    let already_isolated = out.is_empty() || out.ends_with('\n');
    isolate_pragma(out, &p.text, already_isolated);
}
