use std::str::FromStr;

/// Every infix operator the grammar can produce, grouped roughly by
/// precedence tier (see the emitter's precedence table, which is the single
/// source of truth for parenthesization).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    LogOr,
    LogAnd,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Shl,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl FromStr for BinaryOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "||" => Self::LogOr,
            "&&" => Self::LogAnd,
            "|" => Self::BitOr,
            "^" => Self::BitXor,
            "&" => Self::BitAnd,
            "==" => Self::Eq,
            "!=" => Self::Ne,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::Le,
            ">=" => Self::Ge,
            "<<" => Self::Shl,
            ">>" => Self::Shr,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            other => return Err(format!("unknown binary operator '{other}'")),
        })
    }
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LogOr => "||",
            Self::LogAnd => "&&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// Prefix unary operators. Postfix `++`/`--` share `UnaryOperator::Inc`/`Dec`
/// via `UnaryOp::prefix`, since they're the same operation applied on the
/// other side of the operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Inc,
    Dec,
    Addr,
    Deref,
    Plus,
    Neg,
    BitNot,
    LogNot,
}

impl FromStr for UnaryOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "++" => Self::Inc,
            "--" => Self::Dec,
            "&" => Self::Addr,
            "*" => Self::Deref,
            "+" => Self::Plus,
            "-" => Self::Neg,
            "~" => Self::BitNot,
            "!" => Self::LogNot,
            other => return Err(format!("unknown unary operator '{other}'")),
        })
    }
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Addr => "&",
            Self::Deref => "*",
            Self::Plus => "+",
            Self::Neg => "-",
            Self::BitNot => "~",
            Self::LogNot => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    XorAssign,
    OrAssign,
}

impl FromStr for AssignOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "=" => Self::Assign,
            "+=" => Self::AddAssign,
            "-=" => Self::SubAssign,
            "*=" => Self::MulAssign,
            "/=" => Self::DivAssign,
            "%=" => Self::ModAssign,
            "<<=" => Self::ShlAssign,
            ">>=" => Self::ShrAssign,
            "&=" => Self::AndAssign,
            "^=" => Self::XorAssign,
            "|=" => Self::OrAssign,
            other => return Err(format!("unknown assignment operator '{other}'")),
        })
    }
}

impl AssignOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::AndAssign => "&=",
            Self::XorAssign => "^=",
            Self::OrAssign => "|=",
        }
    }
}
