use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type DeclRef = Rc<RefCell<Declaration>>;

/// What a declaration's type actually is, mirroring the symbol-table entry
/// shapes a declaration can carry: a plain keyword list, the struct
/// definition itself (its fields live in `children`), a cross-reference to
/// the struct that defines a variable's type, or an enum tag/value.
#[derive(Debug, Clone)]
pub enum DeclKind {
    Type(Vec<String>),
    StructDef,
    Struct(DeclRef),
    Enum,
}

/// A symbol-table entry: one user-defined name and the short name it was
/// assigned.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
    pub children: HashMap<String, DeclRef>,
    pub is_definition: bool,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclKind) -> DeclRef {
        Rc::new(RefCell::new(Declaration {
            name: name.into(),
            kind,
            children: HashMap::new(),
            is_definition: false,
        }))
    }
}

/// A renamed user function. `return_type` starts `None` so a struct field
/// access against a call to a function still being visited (recursion,
/// forward reference) can still find the placeholder record without
/// observing a half-built return type; §4.3's two-phase insert finalizes it
/// once the function's header has been fully visited.
#[derive(Debug, Clone)]
pub struct Function {
    pub renamed_name: String,
    pub return_type: Option<Vec<String>>,
    pub args: Vec<(String, String)>,
}

impl Function {
    pub fn placeholder(renamed_name: impl Into<String>) -> Self {
        Function {
            renamed_name: renamed_name.into(),
            return_type: None,
            args: Vec::new(),
        }
    }
}
