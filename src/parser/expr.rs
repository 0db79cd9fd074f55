//! The expression precedence chain. Two binary-chain shapes appear in the
//! grammar and need different folding: `logOrExpr`/`logAndExpr`/`bitOrExpr`/
//! `bitXorExpr`/`bitAndExpr` fix one literal operator per level and capture
//! only operand pairs, while `eqExpr`/`relExpr`/`shiftExpr`/`addExpr`/
//! `mulExpr` capture an explicit operator pair between each pair of operands.
use std::str::FromStr;

use pest::iterators::Pair;

use crate::ast::{
    ArrayRef, Assignment, AssignOperator, BinaryOp, BinaryOperator, Cast, Constant, ConstantKind,
    Expr, FuncCall, Id, Initializer, Rule, StructRef, TernaryOp, UnaryOp, UnaryOperator,
};
use crate::error::MinifyError;

use super::{decl, fmt_pos, pos, unexpected};

/// `expr = { assignExpr ~ ("," ~ assignExpr)* }`
pub(super) fn build_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut items = Vec::new();
    for inner_pair in pair.into_inner() {
        items.push(build_assign_expr(inner_pair, file)?);
    }
    match items.len() {
        0 => Err(MinifyError::Parse(format!("empty expr at {}", fmt_pos(&position)))),
        1 => Ok(items.pop().unwrap()),
        _ => Ok(Expr::Comma(items, position)),
    }
}

/// `assignExpr = { ternaryExpr ~ (assignOp ~ assignExpr)? }` — right-recursive
/// so `a = b = c` nests as `a = (b = c)`.
pub(super) fn build_assign_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let target = build_ternary_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("empty assignExpr at {}", fmt_pos(&position))))?,
        file,
    )?;
    match inner.next() {
        Some(op_pair) => {
            let op = AssignOperator::from_str(op_pair.as_str())
                .map_err(|e| MinifyError::Parse(format!("{}: {e}", fmt_pos(&position))))?;
            let value = build_assign_expr(
                inner
                    .next()
                    .ok_or_else(|| MinifyError::Parse(format!("assignExpr missing rhs at {}", fmt_pos(&position))))?,
                file,
            )?;
            Ok(Expr::Assignment(Assignment {
                op,
                target: Box::new(target),
                value: Box::new(value),
                position,
            }))
        }
        None => Ok(target),
    }
}

/// `ternaryExpr = { logOrExpr ~ ("?" ~ expr ~ ":" ~ ternaryExpr)? }`
fn build_ternary_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let cond = build_logor_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("empty ternaryExpr at {}", fmt_pos(&position))))?,
        file,
    )?;
    match inner.next() {
        Some(then_pair) => {
            let then_expr = build_expr(then_pair, file)?;
            let else_expr = build_ternary_expr(
                inner.next().ok_or_else(|| {
                    MinifyError::Parse(format!("ternaryExpr missing an else branch at {}", fmt_pos(&position)))
                })?,
                file,
            )?;
            Ok(Expr::Ternary(TernaryOp {
                cond: Box::new(cond),
                then_expr: Box::new(then_expr),
                else_expr: Box::new(else_expr),
                position,
            }))
        }
        None => Ok(cond),
    }
}

/// A binary-chain level whose operator is a bare grammar literal (no named
/// operator rule), so `.into_inner()` yields only operand pairs.
fn build_left_literal(
    pair: Pair<Rule>,
    file: &str,
    op: BinaryOperator,
    build_operand: fn(Pair<Rule>, &str) -> Result<Expr, MinifyError>,
) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let mut expr = build_operand(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("empty operand chain at {}", fmt_pos(&position))))?,
        file,
    )?;
    for rhs_pair in inner {
        let rhs = build_operand(rhs_pair, file)?;
        expr = Expr::Binary(BinaryOp {
            op,
            lhs: Box::new(expr),
            rhs: Box::new(rhs),
            position: position.clone(),
        });
    }
    Ok(expr)
}

/// A binary-chain level with a named operator rule between operands, so
/// `.into_inner()` alternates operand/operator/operand/...
fn build_left_with_op(
    pair: Pair<Rule>,
    file: &str,
    build_operand: fn(Pair<Rule>, &str) -> Result<Expr, MinifyError>,
) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let mut expr = build_operand(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("empty operand chain at {}", fmt_pos(&position))))?,
        file,
    )?;
    while let Some(op_pair) = inner.next() {
        let op = BinaryOperator::from_str(op_pair.as_str())
            .map_err(|e| MinifyError::Parse(format!("{}: {e}", fmt_pos(&position))))?;
        let rhs = build_operand(
            inner
                .next()
                .ok_or_else(|| MinifyError::Parse(format!("operator missing rhs at {}", fmt_pos(&position))))?,
            file,
        )?;
        expr = Expr::Binary(BinaryOp {
            op,
            lhs: Box::new(expr),
            rhs: Box::new(rhs),
            position: position.clone(),
        });
    }
    Ok(expr)
}

fn build_logor_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_literal(pair, file, BinaryOperator::LogOr, build_logand_expr)
}
fn build_logand_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_literal(pair, file, BinaryOperator::LogAnd, build_bitor_expr)
}
fn build_bitor_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_literal(pair, file, BinaryOperator::BitOr, build_bitxor_expr)
}
fn build_bitxor_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_literal(pair, file, BinaryOperator::BitXor, build_bitand_expr)
}
fn build_bitand_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_literal(pair, file, BinaryOperator::BitAnd, build_eq_expr)
}
fn build_eq_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_with_op(pair, file, build_rel_expr)
}
fn build_rel_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_with_op(pair, file, build_shift_expr)
}
fn build_shift_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_with_op(pair, file, build_add_expr)
}
fn build_add_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_with_op(pair, file, build_mul_expr)
}
fn build_mul_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    build_left_with_op(pair, file, build_cast_expr)
}

/// `castExpr = { ("(" ~ typeName ~ ")" ~ castExpr) | unaryExpr }`
fn build_cast_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| MinifyError::Parse(format!("empty castExpr at {}", fmt_pos(&position))))?;
    match first.as_rule() {
        Rule::typeName => {
            let type_name = decl::build_type_name(first, file)?;
            let operand = build_cast_expr(
                inner
                    .next()
                    .ok_or_else(|| MinifyError::Parse(format!("cast missing operand at {}", fmt_pos(&position))))?,
                file,
            )?;
            Ok(Expr::Cast(Cast { type_name, operand: Box::new(operand), position }))
        }
        Rule::unaryExpr => build_unary_expr(first, file),
        other => Err(unexpected(other, file, &position)),
    }
}

/// `unaryExpr = { (prefixOp ~ castExpr) | ("sizeof" ~ "(" ~ typeName ~ ")") | ("sizeof" ~ unaryExpr) | postfixExpr }`
fn build_unary_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| MinifyError::Parse(format!("empty unaryExpr at {}", fmt_pos(&position))))?;
    match first.as_rule() {
        Rule::prefixOp => {
            let op = UnaryOperator::from_str(first.as_str())
                .map_err(|e| MinifyError::Parse(format!("{}: {e}", fmt_pos(&position))))?;
            let operand = build_cast_expr(
                inner
                    .next()
                    .ok_or_else(|| MinifyError::Parse(format!("prefix op missing operand at {}", fmt_pos(&position))))?,
                file,
            )?;
            Ok(Expr::Unary(UnaryOp { op, operand: Box::new(operand), prefix: true, position }))
        }
        Rule::typeName => {
            let type_name = decl::build_type_name(first, file)?;
            Ok(Expr::SizeOfType { type_name, position })
        }
        Rule::unaryExpr => {
            let operand = build_unary_expr(first, file)?;
            Ok(Expr::SizeOfExpr { operand: Box::new(operand), position })
        }
        Rule::postfixExpr => build_postfix_expr(first, file),
        other => Err(unexpected(other, file, &position)),
    }
}

/// `postfixExpr = { primaryExpr ~ postfixOp* }`
fn build_postfix_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let mut expr = build_primary_expr(
        inner
            .next()
            .ok_or_else(|| MinifyError::Parse(format!("empty postfixExpr at {}", fmt_pos(&position))))?,
        file,
    )?;
    for op_pair in inner {
        expr = apply_postfix_op(expr, op_pair, file)?;
    }
    Ok(expr)
}

/// `postfixOp` can be `[expr]`, `(argList)`, `.ident`, `->ident`, `++`, or
/// `--`. The dot and arrow forms both capture a single `ident` pair, so the
/// matched text (not the inner pairs) is what tells them apart.
fn apply_postfix_op(base: Expr, pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let text = pair.as_str();
    match pair.into_inner().next() {
        None => {
            let op = if text == "++" { UnaryOperator::Inc } else { UnaryOperator::Dec };
            Ok(Expr::Unary(UnaryOp { op, operand: Box::new(base), prefix: false, position }))
        }
        Some(p) if p.as_rule() == Rule::expr => {
            let index = build_expr(p, file)?;
            Ok(Expr::ArrayRef(ArrayRef { base: Box::new(base), index: Box::new(index), position }))
        }
        Some(p) if p.as_rule() == Rule::argList => {
            let callee = match &base {
                Expr::Ident(id) => id.name.clone(),
                _ => {
                    return Err(MinifyError::Parse(format!(
                        "{}: call target is not a plain identifier",
                        fmt_pos(&position)
                    )))
                }
            };
            let args = build_arg_list(p, file)?;
            Ok(Expr::Call(FuncCall { callee, args, position }))
        }
        Some(p) if p.as_rule() == Rule::ident => {
            let field = p.as_str().to_owned();
            let arrow = text.starts_with("->");
            Ok(Expr::StructRef(StructRef { base: Box::new(base), field, arrow, position }))
        }
        Some(p) => Err(unexpected(p.as_rule(), file, &position)),
    }
}

/// `argList = { (assignExpr ~ ("," ~ assignExpr)*)? }`
fn build_arg_list(pair: Pair<Rule>, file: &str) -> Result<Vec<Expr>, MinifyError> {
    let mut args = Vec::new();
    for inner_pair in pair.into_inner() {
        args.push(build_assign_expr(inner_pair, file)?);
    }
    Ok(args)
}

/// `primaryExpr = { ("(" ~ expr ~ ")") | ("(" ~ typeName ~ ")" ~ "{" ~ initializer ~ ("," ~ initializer)* ~ ","? ~ "}") | constant | ident }`
fn build_primary_expr(pair: Pair<Rule>, file: &str) -> Result<Expr, MinifyError> {
    let position = pos(&pair, file);
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| MinifyError::Parse(format!("empty primaryExpr at {}", fmt_pos(&position))))?;
    match first.as_rule() {
        Rule::expr => build_expr(first, file),
        Rule::typeName => {
            let type_name = decl::build_type_name(first, file)?;
            let mut items = Vec::new();
            for item_pair in inner {
                items.push(decl::build_initializer(item_pair, file)?);
            }
            Ok(Expr::CompoundLiteral { type_name, initializer: Initializer::List(items), position })
        }
        Rule::constant => Ok(Expr::Constant(build_constant(first, file)?)),
        Rule::ident => Ok(Expr::Ident(Id::new(first.as_str().to_owned(), position))),
        other => Err(unexpected(other, file, &position)),
    }
}

fn build_constant(pair: Pair<Rule>, file: &str) -> Result<Constant, MinifyError> {
    let position = pos(&pair, file);
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| MinifyError::Parse(format!("empty constant at {}", fmt_pos(&position))))?;
    let kind = match inner.as_rule() {
        Rule::integer => ConstantKind::Int(inner.as_str().to_owned()),
        Rule::float => ConstantKind::Float(inner.as_str().to_owned()),
        Rule::charConstant => ConstantKind::Char(inner.as_str().to_owned()),
        Rule::stringConstant => ConstantKind::Str(inner.as_str().to_owned()),
        Rule::boolean => ConstantKind::Bool(inner.as_str() == "true"),
        other => return Err(unexpected(other, file, &position)),
    };
    Ok(Constant::new(kind, position))
}
