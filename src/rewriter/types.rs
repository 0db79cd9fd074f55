use super::declaration::DeclRef;

/// The type a `DeclSpecifiers` resolves to, before any declarator's own
/// pointer/array wrapping is applied.
#[derive(Debug, Clone)]
pub enum BaseType {
    Keywords(Vec<String>),
    Struct(DeclRef),
    Enum,
}

impl BaseType {
    /// The keyword spelling of this type, for contexts (function return
    /// types, the built-in catalog) that only care about the type's name,
    /// not its field table.
    pub fn keywords(&self) -> Vec<String> {
        match self {
            BaseType::Keywords(names) => names.clone(),
            BaseType::Struct(decl) => vec![format!("struct {}", decl.borrow().name)],
            BaseType::Enum => vec!["enum".to_owned()],
        }
    }
}

/// The resolved type of an expression or declarator, used to drive struct
/// field lookups and vector-swizzle shortening.
#[derive(Debug, Clone)]
pub enum ResolvedType {
    /// A scalar or vector keyword, e.g. `["float4"]`.
    Scalar(Vec<String>),
    /// A named struct, resolved to its declaration (so field lookups can
    /// reach its `children` map).
    Struct(DeclRef),
    Unknown,
}

impl ResolvedType {
    /// The scalar/vector keyword this type resolves to, if any — used when
    /// passing argument types into the built-in catalog. Pointer markers
    /// appended by declarator rewriting are skipped so `int *` still
    /// reports `int`.
    pub fn scalar_keyword(&self) -> Option<String> {
        match self {
            ResolvedType::Scalar(names) => names.iter().rev().find(|n| n.as_str() != "*").cloned(),
            _ => None,
        }
    }
}

/// Canonicalize `unsigned char|short|int|long` to the short vector-style
/// keyword (`uchar`/`ushort`/`uint`/`ulong`); every other spelling passes
/// through unchanged.
pub fn canonicalize(names: &[String]) -> Vec<String> {
    if names.len() == 2 && names[0] == "unsigned" {
        let mapped = match names[1].as_str() {
            "char" => Some("uchar"),
            "short" => Some("ushort"),
            "int" => Some("uint"),
            "long" => Some("ulong"),
            _ => None,
        };
        if let Some(mapped) = mapped {
            return vec![mapped.to_owned()];
        }
    }
    names.to_vec()
}

/// Vector width of a type keyword like `float4`, or 1 for a scalar.
pub fn vector_width(keyword: &str) -> usize {
    let digits: String = keyword.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(1)
}

pub fn is_vector_component(component: &str) -> bool {
    matches!(
        component,
        "char" | "uchar" | "short" | "ushort" | "int" | "uint" | "long" | "ulong" | "float"
            | "double" | "half"
    )
}

/// `float4` → `("float", 4)`. Returns `None` for non-vector keywords.
pub fn split_vector(keyword: &str) -> Option<(String, usize)> {
    let component: String = keyword.chars().filter(|c| c.is_alphabetic()).collect();
    let width = vector_width(keyword);
    if width > 1 && is_vector_component(&component) {
        Some((component, width))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_unsigned_scalars() {
        assert_eq!(
            canonicalize(&["unsigned".to_owned(), "int".to_owned()]),
            vec!["uint".to_owned()]
        );
        assert_eq!(
            canonicalize(&["float".to_owned()]),
            vec!["float".to_owned()]
        );
    }

    #[test]
    fn splits_vector_keyword() {
        assert_eq!(split_vector("float4"), Some(("float".to_owned(), 4)));
        assert_eq!(split_vector("int"), None);
    }
}
