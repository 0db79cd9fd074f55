//! Serializes a rewritten tree back to compact OpenCL C text, per §4.7:
//! no whitespace except where two adjacent tokens would otherwise merge,
//! minimal parenthesization driven by the precedence table in `expr.rs`,
//! and the maximal-run declaration grouping implemented in `stmt.rs`.
mod expr;
mod stmt;

use crate::ast::{
    Declarator, Enum, External, FileAst, FuncDef, ParamList, Struct, TypeName, TypeSpecifier,
    Typedef,
};

pub use expr::emit_expr;
pub(self) use expr::emit_initializer;
pub(self) use stmt::emit_compound_braced;

/// Any symbol character that could fuse with an adjacent one into a longer,
/// different operator (`+` `+` -> `++`, `<` `=` -> `<=`, ...).
const OP_CHARS: &str = "+-*/%=<>!&|^~";

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Appends `token`, inserting a single space first only if omitting it
/// would glue it to the previous token (two word characters in a row, or
/// two operator characters that would read as a single longer operator).
/// Punctuation like `(`, `;`, `,`, `.` never needs this and is pushed with
/// plain `String::push`/`push_str` instead.
pub(self) fn push_token(out: &mut String, token: &str) {
    if let (Some(last), Some(first)) = (out.chars().last(), token.chars().next()) {
        let word_boundary = is_word_char(last) && is_word_char(first);
        let op_boundary = OP_CHARS.contains(last) && OP_CHARS.contains(first);
        if word_boundary || op_boundary {
            out.push(' ');
        }
    }
    out.push_str(token);
}

/// Isolates a pragma's raw text with a newline before (unless at the very
/// start of the buffer or immediately after another pragma) and always one
/// after.
fn isolate_pragma(out: &mut String, text: &str, already_isolated: bool) {
    if !out.is_empty() && !already_isolated {
        out.push('\n');
    }
    out.push_str(text);
    out.push('\n');
}

pub fn emit(file: &FileAst) -> String {
    let mut out = String::new();
    let mut prev_was_pragma = true; // nothing to isolate-from at the start
    for external in &file.externals {
        match external {
            External::Pragma(p) => {
                isolate_pragma(&mut out, &p.text, prev_was_pragma);
                prev_was_pragma = true;
                continue;
            }
            External::FuncDef(f) => emit_func_def(f, &mut out),
            External::Typedef(t) => {
                emit_typedef(t, &mut out);
                out.push(';');
            }
            External::Decl(d) => {
                let declarators: Vec<&Declarator> = d.declarators.iter().collect();
                emit_decl_group(&d.specifiers, &declarators, &mut out);
            }
        }
        prev_was_pragma = false;
    }
    out
}

fn emit_func_def(f: &FuncDef, out: &mut String) {
    emit_decl_specifiers(&f.specifiers, out);
    for _ in 0..f.pointer_depth {
        out.push('*');
    }
    push_token(out, &f.name);
    out.push('(');
    emit_param_list(&f.params, out);
    out.push(')');
    emit_compound_braced(&f.body, out);
}

fn emit_param_list(params: &ParamList, out: &mut String) {
    if params.is_void {
        push_token(out, "void");
        return;
    }
    for (i, p) in params.params.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        emit_decl_specifiers(&p.specifiers, out);
        for _ in 0..p.pointer_depth {
            out.push('*');
        }
        if let Some(name) = &p.name {
            push_token(out, name);
        }
        for dim in &p.array_dims {
            out.push('[');
            if let Some(e) = dim {
                emit_expr(e, out);
            }
            out.push(']');
        }
    }
}

pub(self) fn emit_decl_specifiers(specifiers: &crate::ast::DeclSpecifiers, out: &mut String) {
    for q in &specifiers.qualifiers {
        push_token(out, q);
    }
    emit_type_specifier(&specifiers.type_spec, out);
}

fn emit_type_specifier(type_spec: &TypeSpecifier, out: &mut String) {
    match type_spec {
        TypeSpecifier::Named(identifier_type) => {
            for name in &identifier_type.names {
                push_token(out, name);
            }
        }
        TypeSpecifier::Struct(s) => emit_struct(s, out),
        TypeSpecifier::Enum(e) => emit_enum(e, out),
    }
}

fn emit_struct(s: &Struct, out: &mut String) {
    push_token(out, "struct");
    if let Some(name) = &s.name {
        push_token(out, name);
    }
    if !s.fields.is_empty() {
        out.push('{');
        for field in &s.fields {
            let declarators: Vec<&Declarator> = field.declarators.iter().collect();
            emit_decl_group(&field.specifiers, &declarators, out);
        }
        out.push('}');
    }
}

fn emit_enum(e: &Enum, out: &mut String) {
    push_token(out, "enum");
    if let Some(name) = &e.name {
        push_token(out, name);
    }
    if !e.variants.is_empty() {
        out.push('{');
        for (i, v) in e.variants.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            push_token(out, &v.name);
            if let Some(value) = &v.value {
                out.push('=');
                emit_expr(value, out);
            }
        }
        out.push('}');
    }
}

pub(self) fn emit_type_name(type_name: &TypeName, out: &mut String) {
    emit_decl_specifiers(&type_name.specifiers, out);
    for _ in 0..type_name.pointer_depth {
        out.push('*');
    }
}

fn emit_declarator(d: &Declarator, out: &mut String) {
    for _ in 0..d.pointer_depth {
        out.push('*');
    }
    push_token(out, &d.name);
    for dim in &d.array_dims {
        out.push('[');
        if let Some(e) = dim {
            emit_expr(e, out);
        }
        out.push(']');
    }
    if let Some(bitfield) = &d.bitfield {
        out.push(':');
        emit_expr(bitfield, out);
    }
    if let Some(initializer) = &d.initializer {
        out.push('=');
        emit_initializer(initializer, out);
    }
}

/// Emits one combined `T a,b=init,*c;` for a declarator run sharing a
/// single `DeclSpecifiers`, per §4.7's declaration-grouping rule. Used both
/// for a single `Decl`'s own declarator list and for the multi-statement
/// runs `stmt.rs` pre-scans within a compound.
pub(self) fn emit_decl_group(
    specifiers: &crate::ast::DeclSpecifiers,
    declarators: &[&Declarator],
    out: &mut String,
) {
    emit_decl_specifiers(specifiers, out);
    for (i, d) in declarators.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        emit_declarator(d, out);
    }
    out.push(';');
}

fn emit_typedef(t: &Typedef, out: &mut String) {
    push_token(out, "typedef");
    emit_decl_specifiers(&t.specifiers, out);
    for (i, d) in t.declarators.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        emit_declarator(d, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn roundtrip(source: &str) -> String {
        let file = parser::parse(source, "test.cl").unwrap();
        emit(&file)
    }

    #[test]
    fn emits_empty_kernel() {
        assert_eq!(roundtrip("__kernel void main(){}"), "__kernel void main(){}");
    }

    #[test]
    fn groups_consecutive_decls() {
        assert_eq!(
            roundtrip("__kernel void main(){int a=3;int b=5;}"),
            "__kernel void main(){int a=3,b=5;}"
        );
    }

    #[test]
    fn isolates_pragma_with_newlines() {
        let out = roundtrip("#pragma unroll\n__kernel void main(){}");
        assert_eq!(out, "#pragma unroll\n__kernel void main(){}");
    }
}
