//! Builds the `ast::*` tree from pest's `Pairs<Rule>`. One function per
//! grammar production, named after the rule it consumes; each asserts
//! nothing about its own rule (the caller already matched on it) but fails
//! loudly via `unexpected` if a sub-production shows up in a shape the
//! grammar should never produce.
mod decl;
mod expr;
mod stmt;

use pest::iterators::Pair;

use crate::ast::{External, FileAst, FuncDef, OpenClCParser, Position, Rule};
use crate::error::MinifyError;

/// Parse already-preprocessed OpenCL C source into a translation unit.
/// `file` is only used to stamp diagnostics and error positions.
pub fn parse(source: &str, file: &str) -> Result<FileAst, MinifyError> {
    let mut pairs =
        OpenClCParser::parse_program(source).map_err(|err| MinifyError::Parse(err.to_string()))?;
    let program = pairs
        .next()
        .ok_or_else(|| MinifyError::Parse("empty input".to_owned()))?;

    let mut externals = Vec::new();
    for pair in program.into_inner() {
        if pair.as_rule() == Rule::EOI {
            continue;
        }
        externals.push(build_external(pair, file)?);
    }
    Ok(FileAst::new(externals))
}

fn build_external(pair: Pair<Rule>, file: &str) -> Result<External, MinifyError> {
    let position = pos(&pair, file);
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| MinifyError::Parse(format!("empty external at {}", fmt_pos(&position))))?;
    match inner.as_rule() {
        Rule::funcDef => Ok(External::FuncDef(build_func_def(inner, file)?)),
        Rule::pragma => Ok(External::Pragma(stmt::build_pragma(inner, file))),
        Rule::typedef => Ok(External::Typedef(decl::build_typedef(inner, file)?)),
        Rule::decl => Ok(External::Decl(decl::build_decl(inner, file)?)),
        other => Err(unexpected(other, file, &position)),
    }
}

/// `funcDef = { declSpecifiers ~ pointer* ~ ident ~ "(" ~ paramList ~ ")" ~ compound }`
fn build_func_def(pair: Pair<Rule>, file: &str) -> Result<FuncDef, MinifyError> {
    let position = pos(&pair, file);
    let mut specifiers = None;
    let mut pointer_depth = 0;
    let mut name = None;
    let mut params = None;
    let mut body = None;
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::declSpecifiers => specifiers = Some(decl::build_decl_specifiers(inner_pair, file)?),
            Rule::pointer => pointer_depth += 1,
            Rule::ident => name = Some(inner_pair.as_str().to_owned()),
            Rule::paramList => params = Some(decl::build_param_list(inner_pair, file)?),
            Rule::compound => body = Some(stmt::build_compound(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(FuncDef {
        specifiers: specifiers
            .ok_or_else(|| MinifyError::Parse(format!("funcDef missing declSpecifiers at {}", fmt_pos(&position))))?,
        pointer_depth,
        name: name
            .ok_or_else(|| MinifyError::Parse(format!("funcDef missing name at {}", fmt_pos(&position))))?,
        params: params
            .ok_or_else(|| MinifyError::Parse(format!("funcDef missing paramList at {}", fmt_pos(&position))))?,
        body: body
            .ok_or_else(|| MinifyError::Parse(format!("funcDef missing body at {}", fmt_pos(&position))))?,
        position,
    })
}

fn pos(pair: &Pair<Rule>, file: &str) -> Position {
    let (line, col) = pair.line_col();
    (file.to_owned(), line, col)
}

fn fmt_pos(position: &Position) -> String {
    let (file, line, col) = position;
    format!("{file}:{line}:{col}")
}

fn unexpected(rule: Rule, file: &str, position: &Position) -> MinifyError {
    MinifyError::Parse(format!(
        "{}: unexpected grammar production {rule:?}",
        fmt_pos(position)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TypeSpecifier;

    #[test]
    fn parses_empty_kernel() {
        let file = parse("__kernel void foo(__global float *a) { a[0] = 1.0f; }", "test.cl").unwrap();
        assert_eq!(file.externals.len(), 1);
        match &file.externals[0] {
            External::FuncDef(func_def) => {
                assert_eq!(func_def.name, "foo");
                assert_eq!(func_def.params.params.len(), 1);
            }
            other => panic!("expected a FuncDef, got {other:?}"),
        }
    }

    #[test]
    fn parses_unsigned_int_as_two_keywords() {
        let file = parse("unsigned int g;", "test.cl").unwrap();
        match &file.externals[0] {
            External::Decl(decl) => match &decl.specifiers.type_spec {
                TypeSpecifier::Named(identifier_type) => {
                    assert_eq!(identifier_type.names, vec!["unsigned".to_owned(), "int".to_owned()]);
                }
                other => panic!("expected a Named type spec, got {other:?}"),
            },
            other => panic!("expected a Decl, got {other:?}"),
        }
    }
}
