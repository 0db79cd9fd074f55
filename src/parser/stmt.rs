//! Statements, including the block structure and the `for`-loop's
//! three-slot header.
use pest::iterators::Pair;

use crate::ast::{
    Case, Compound, Default, DoWhile, For, ForInit, If, Pragma, Return, Rule, Stmt, Switch, While,
};
use crate::error::MinifyError;

use super::{decl, expr, fmt_pos, pos, unexpected};

/// `compound = { "{" ~ blockItem* ~ "}" }`, `blockItem = { stmt }`.
pub(super) fn build_compound(pair: Pair<Rule>, file: &str) -> Result<Compound, MinifyError> {
    let position = pos(&pair, file);
    let mut stmts = Vec::new();
    for block_item in pair.into_inner() {
        let stmt_pair = block_item.into_inner().next().ok_or_else(|| {
            MinifyError::Parse(format!("empty blockItem at {}", fmt_pos(&position)))
        })?;
        stmts.push(build_stmt(stmt_pair, file)?);
    }
    Ok(Compound { stmts, position })
}

pub(super) fn build_stmt(pair: Pair<Rule>, file: &str) -> Result<Stmt, MinifyError> {
    let position = pos(&pair, file);
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| MinifyError::Parse(format!("empty stmt at {}", fmt_pos(&position))))?;
    match inner.as_rule() {
        Rule::compound => Ok(Stmt::Compound(build_compound(inner, file)?)),
        Rule::ifStmt => Ok(Stmt::If(build_if(inner, file)?)),
        Rule::forStmt => Ok(Stmt::For(build_for(inner, file)?)),
        Rule::whileStmt => Ok(Stmt::While(build_while(inner, file)?)),
        Rule::doWhileStmt => Ok(Stmt::DoWhile(build_do_while(inner, file)?)),
        Rule::switchStmt => Ok(Stmt::Switch(build_switch(inner, file)?)),
        Rule::caseStmt => Ok(Stmt::Case(build_case(inner, file)?)),
        Rule::defaultStmt => Ok(Stmt::Default(build_default(inner, file)?)),
        Rule::returnStmt => Ok(Stmt::Return(build_return(inner, file)?)),
        Rule::breakStmt => Ok(Stmt::Break(pos(&inner, file))),
        Rule::continueStmt => Ok(Stmt::Continue(pos(&inner, file))),
        Rule::pragma => Ok(Stmt::Pragma(build_pragma(inner, file))),
        Rule::typedef => Ok(Stmt::Typedef(decl::build_typedef(inner, file)?)),
        Rule::declStmt => {
            let decl_pair = inner.into_inner().next().ok_or_else(|| {
                MinifyError::Parse(format!("empty declStmt at {}", fmt_pos(&position)))
            })?;
            Ok(Stmt::Decl(decl::build_decl(decl_pair, file)?))
        }
        Rule::emptyStmt => Ok(Stmt::Empty(pos(&inner, file))),
        Rule::exprStmt => {
            let expr_pair = inner.into_inner().next().ok_or_else(|| {
                MinifyError::Parse(format!("empty exprStmt at {}", fmt_pos(&position)))
            })?;
            Ok(Stmt::Expr(expr::build_expr(expr_pair, file)?))
        }
        other => Err(unexpected(other, file, &position)),
    }
}

/// `ifStmt = { "if" ~ "(" ~ expr ~ ")" ~ stmt ~ ("else" ~ stmt)? }`
fn build_if(pair: Pair<Rule>, file: &str) -> Result<If, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let cond = expr::build_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("ifStmt missing a condition at {}", fmt_pos(&position))))?,
        file,
    )?;
    let then_branch = Box::new(build_stmt(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("ifStmt missing a body at {}", fmt_pos(&position))))?,
        file,
    )?);
    let else_branch = match inner.next() {
        Some(p) => Some(Box::new(build_stmt(p, file)?)),
        None => None,
    };
    Ok(If { cond, then_branch, else_branch, position })
}

/// `forStmt = { "for" ~ "(" ~ forInit? ~ ";" ~ expr? ~ ";" ~ expr? ~ ")" ~ stmt }`.
/// Both optional slots between the two `;`s are a bare `expr`, so the first
/// one encountered is the condition and the second is the step.
fn build_for(pair: Pair<Rule>, file: &str) -> Result<For, MinifyError> {
    let position = pos(&pair, file);
    let mut init = ForInit::None;
    let mut cond = None;
    let mut step = None;
    let mut body = None;
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::forInit => init = build_for_init(inner_pair, file)?,
            Rule::expr if cond.is_none() => cond = Some(expr::build_expr(inner_pair, file)?),
            Rule::expr => step = Some(expr::build_expr(inner_pair, file)?),
            Rule::stmt => body = Some(Box::new(build_stmt(inner_pair, file)?)),
            other => return Err(unexpected(other, file, &position)),
        }
    }
    Ok(For {
        init,
        cond,
        step,
        body: body
            .ok_or_else(|| MinifyError::Parse(format!("forStmt missing a body at {}", fmt_pos(&position))))?,
        position,
    })
}

/// `forInit = { decl | expr }`
fn build_for_init(pair: Pair<Rule>, file: &str) -> Result<ForInit, MinifyError> {
    let position = pos(&pair, file);
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| MinifyError::Parse(format!("empty forInit at {}", fmt_pos(&position))))?;
    match inner.as_rule() {
        Rule::decl => Ok(ForInit::Decl(decl::build_decl(inner, file)?)),
        Rule::expr => Ok(ForInit::Expr(expr::build_expr(inner, file)?)),
        other => Err(unexpected(other, file, &position)),
    }
}

fn build_while(pair: Pair<Rule>, file: &str) -> Result<While, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let cond = expr::build_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("whileStmt missing a condition at {}", fmt_pos(&position))))?,
        file,
    )?;
    let body = Box::new(build_stmt(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("whileStmt missing a body at {}", fmt_pos(&position))))?,
        file,
    )?);
    Ok(While { cond, body, position })
}

fn build_do_while(pair: Pair<Rule>, file: &str) -> Result<DoWhile, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let body = Box::new(build_stmt(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("doWhileStmt missing a body at {}", fmt_pos(&position))))?,
        file,
    )?);
    let cond = expr::build_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("doWhileStmt missing a condition at {}", fmt_pos(&position))))?,
        file,
    )?;
    Ok(DoWhile { body, cond, position })
}

fn build_switch(pair: Pair<Rule>, file: &str) -> Result<Switch, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let cond = expr::build_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("switchStmt missing a condition at {}", fmt_pos(&position))))?,
        file,
    )?;
    let body = Box::new(build_stmt(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("switchStmt missing a body at {}", fmt_pos(&position))))?,
        file,
    )?);
    Ok(Switch { cond, body, position })
}

fn build_case(pair: Pair<Rule>, file: &str) -> Result<Case, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let value = expr::build_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("caseStmt missing a value at {}", fmt_pos(&position))))?,
        file,
    )?;
    let mut stmts = Vec::new();
    for stmt_pair in inner {
        stmts.push(build_stmt(stmt_pair, file)?);
    }
    Ok(Case { value, stmts, position })
}

fn build_default(pair: Pair<Rule>, file: &str) -> Result<Default, MinifyError> {
    let position = pos(&pair, file);
    let mut stmts = Vec::new();
    for stmt_pair in pair.into_inner() {
        stmts.push(build_stmt(stmt_pair, file)?);
    }
    Ok(Default { stmts, position })
}

fn build_return(pair: Pair<Rule>, file: &str) -> Result<Return, MinifyError> {
    let position = pos(&pair, file);
    let value = match pair.into_inner().next() {
        Some(expr_pair) => Some(expr::build_expr(expr_pair, file)?),
        None => None,
    };
    Ok(Return { value, position })
}

/// `pragma = ${ "#" ~ " "* ~ "pragma" ~ (!NEWLINE ~ ANY)* }` is
/// compound-atomic, so its whole matched text is kept verbatim; this crate
/// never parses pragma bodies.
pub(super) fn build_pragma(pair: Pair<Rule>, file: &str) -> Pragma {
    let position = pos(&pair, file);
    Pragma { text: pair.as_str().to_owned(), position }
}
