//! Declarations: specifiers, structs, enums, declarators, params, typedefs.
use pest::iterators::Pair;

use crate::ast::{
    Decl, DeclSpecifiers, Declarator, Enum, Enumerator, IdentifierType, Initializer, Param,
    ParamList, Rule, Struct, StructField, TypeName, TypeSpecifier, Typedef,
};
use crate::error::MinifyError;

use super::{expr, fmt_pos, pos, unexpected};

pub(super) fn build_decl_specifiers(pair: Pair<Rule>, file: &str) -> Result<DeclSpecifiers, MinifyError> {
    let position = pos(&pair, file);
    let mut qualifiers = Vec::new();
    let mut type_spec = None;
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::specifier => qualifiers.push(inner_pair.as_str().trim().to_owned()),
            Rule::typeSpecifier => type_spec = Some(build_type_specifier(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(DeclSpecifiers {
        qualifiers,
        type_spec: type_spec.ok_or_else(|| {
            MinifyError::Parse(format!("declSpecifiers missing a type at {}", fmt_pos(&position)))
        })?,
        position,
    })
}

fn build_type_specifier(pair: Pair<Rule>, file: &str) -> Result<TypeSpecifier, MinifyError> {
    let position = pos(&pair, file);
    let inner = pair.into_inner().next().ok_or_else(|| {
        MinifyError::Parse(format!("empty typeSpecifier at {}", fmt_pos(&position)))
    })?;
    match inner.as_rule() {
        Rule::structSpecifier => Ok(TypeSpecifier::Struct(build_struct_specifier(inner, file)?)),
        Rule::enumSpecifier => Ok(TypeSpecifier::Enum(build_enum_specifier(inner, file)?)),
        Rule::typeKeyword => Ok(TypeSpecifier::Named(IdentifierType::new(
            inner.as_str().split_whitespace().map(str::to_owned).collect(),
            pos(&inner, file),
        ))),
        Rule::ident => Ok(TypeSpecifier::Named(IdentifierType::single(
            inner.as_str().to_owned(),
            pos(&inner, file),
        ))),
        other => Err(unexpected(other, file, &position)),
    }
}

/// `structSpecifier = { "struct" ~ ident? ~ ("{" ~ memberDecl* ~ "}")? }`
fn build_struct_specifier(pair: Pair<Rule>, file: &str) -> Result<Struct, MinifyError> {
    let position = pos(&pair, file);
    let mut name = None;
    let mut fields = Vec::new();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::ident => name = Some(inner_pair.as_str().to_owned()),
            Rule::memberDecl => fields.push(build_member_decl(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(Struct { name, fields, position })
}

/// `memberDecl = { declSpecifiers ~ declarator ~ ("," ~ declarator)* ~ ";" }`
fn build_member_decl(pair: Pair<Rule>, file: &str) -> Result<StructField, MinifyError> {
    let position = pos(&pair, file);
    let mut specifiers = None;
    let mut declarators = Vec::new();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::declSpecifiers => specifiers = Some(build_decl_specifiers(inner_pair, file)?),
            Rule::declarator => declarators.push(build_declarator(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(StructField {
        specifiers: specifiers.ok_or_else(|| {
            MinifyError::Parse(format!("memberDecl missing declSpecifiers at {}", fmt_pos(&position)))
        })?,
        declarators,
        position,
    })
}

/// `enumSpecifier = { "enum" ~ ident? ~ ("{" ~ enumerator ~ ("," ~ enumerator)* ~ ","? ~ "}")? }`
fn build_enum_specifier(pair: Pair<Rule>, file: &str) -> Result<Enum, MinifyError> {
    let position = pos(&pair, file);
    let mut name = None;
    let mut variants = Vec::new();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::ident => name = Some(inner_pair.as_str().to_owned()),
            Rule::enumerator => variants.push(build_enumerator(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(Enum { name, variants, position })
}

fn build_enumerator(pair: Pair<Rule>, file: &str) -> Result<Enumerator, MinifyError> {
    let position = pos(&pair, file);
    let mut name = None;
    let mut value = None;
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::ident => name = Some(inner_pair.as_str().to_owned()),
            Rule::expr => value = Some(expr::build_expr(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(Enumerator {
        name: name.ok_or_else(|| {
            MinifyError::Parse(format!("enumerator missing a name at {}", fmt_pos(&position)))
        })?,
        value,
        position,
    })
}

/// `declarator = { pointer* ~ ident ~ arraySuffix* ~ (":" ~ expr)? ~ ("=" ~ initializer)? }`
pub(super) fn build_declarator(pair: Pair<Rule>, file: &str) -> Result<Declarator, MinifyError> {
    let position = pos(&pair, file);
    let mut pointer_depth = 0;
    let mut name = None;
    let mut array_dims = Vec::new();
    let mut bitfield = None;
    let mut initializer = None;
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::pointer => pointer_depth += 1,
            Rule::ident => name = Some(inner_pair.as_str().to_owned()),
            Rule::arraySuffix => array_dims.push(build_array_suffix(inner_pair, file)?),
            Rule::expr => bitfield = Some(expr::build_expr(inner_pair, file)?),
            Rule::initializer => initializer = Some(build_initializer(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(Declarator {
        pointer_depth,
        name: name.ok_or_else(|| {
            MinifyError::Parse(format!("declarator missing a name at {}", fmt_pos(&position)))
        })?,
        array_dims,
        bitfield,
        initializer,
        position,
    })
}

fn build_array_suffix(pair: Pair<Rule>, file: &str) -> Result<Option<crate::ast::Expr>, MinifyError> {
    match pair.into_inner().next() {
        Some(expr_pair) => Ok(Some(expr::build_expr(expr_pair, file)?)),
        None => Ok(None),
    }
}

/// `initializer = { ("{" ~ (initializer ~ ("," ~ initializer)* ~ ","?)? ~ "}") | assignExpr }`
pub(super) fn build_initializer(pair: Pair<Rule>, file: &str) -> Result<Initializer, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner().peekable();
    match inner.peek().map(|p| p.as_rule()) {
        None => Ok(Initializer::List(Vec::new())),
        Some(Rule::initializer) => {
            let mut items = Vec::new();
            for item_pair in inner {
                items.push(build_initializer(item_pair, file)?);
            }
            Ok(Initializer::List(items))
        }
        Some(Rule::assignExpr) => Ok(Initializer::Expr(expr::build_assign_expr(
            inner.next().unwrap(),
            file,
        )?)),
        Some(other) => Err(unexpected(other, file, &position)),
    }
}

/// `typedef = { "typedef" ~ declSpecifiers ~ declarator ~ ("," ~ declarator)* ~ ";" }`
pub(super) fn build_typedef(pair: Pair<Rule>, file: &str) -> Result<Typedef, MinifyError> {
    let position = pos(&pair, file);
    let mut specifiers = None;
    let mut declarators = Vec::new();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::declSpecifiers => specifiers = Some(build_decl_specifiers(inner_pair, file)?),
            Rule::declarator => declarators.push(build_declarator(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(Typedef {
        specifiers: specifiers.ok_or_else(|| {
            MinifyError::Parse(format!("typedef missing declSpecifiers at {}", fmt_pos(&position)))
        })?,
        declarators,
        position,
    })
}

/// `decl = { declSpecifiers ~ declarator ~ ("," ~ declarator)* ~ ";" }`
pub(super) fn build_decl(pair: Pair<Rule>, file: &str) -> Result<Decl, MinifyError> {
    let position = pos(&pair, file);
    let mut specifiers = None;
    let mut declarators = Vec::new();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::declSpecifiers => specifiers = Some(build_decl_specifiers(inner_pair, file)?),
            Rule::declarator => declarators.push(build_declarator(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(Decl {
        specifiers: specifiers.ok_or_else(|| {
            MinifyError::Parse(format!("decl missing declSpecifiers at {}", fmt_pos(&position)))
        })?,
        declarators,
        position,
    })
}

/// `param = { declSpecifiers ~ (pointer* ~ ident ~ arraySuffix*)? }`
pub(super) fn build_param(pair: Pair<Rule>, file: &str) -> Result<Param, MinifyError> {
    let position = pos(&pair, file);
    let mut specifiers = None;
    let mut pointer_depth = 0;
    let mut name = None;
    let mut array_dims = Vec::new();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::declSpecifiers => specifiers = Some(build_decl_specifiers(inner_pair, file)?),
            Rule::pointer => pointer_depth += 1,
            Rule::ident => name = Some(inner_pair.as_str().to_owned()),
            Rule::arraySuffix => array_dims.push(build_array_suffix(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(Param {
        specifiers: specifiers.ok_or_else(|| {
            MinifyError::Parse(format!("param missing declSpecifiers at {}", fmt_pos(&position)))
        })?,
        pointer_depth,
        name,
        array_dims,
        position,
    })
}

/// `paramList = { "void" | (param ~ ("," ~ param)*)? }`. The literal "void"
/// alternative is tried first by the grammar and leaves no inner pairs, so
/// the only way to tell it apart from an empty list is the matched text.
pub(super) fn build_param_list(pair: Pair<Rule>, file: &str) -> Result<ParamList, MinifyError> {
    if pair.as_str().trim() == "void" {
        return Ok(ParamList { params: Vec::new(), is_void: true });
    }
    let position = pos(&pair, file);
    let mut params = Vec::new();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::param => params.push(build_param(inner_pair, file)?),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(ParamList { params, is_void: false })
}

/// `typeName = { declSpecifiers ~ pointer* }`
pub(super) fn build_type_name(pair: Pair<Rule>, file: &str) -> Result<TypeName, MinifyError> {
    let position = pos(&pair, file);
    let mut specifiers = None;
    let mut pointer_depth = 0;
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::declSpecifiers => specifiers = Some(build_decl_specifiers(inner_pair, file)?),
            Rule::pointer => pointer_depth += 1,
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(TypeName {
        specifiers: specifiers.ok_or_else(|| {
            MinifyError::Parse(format!("typeName missing declSpecifiers at {}", fmt_pos(&position)))
        })?,
        pointer_depth,
        position,
    })
}
