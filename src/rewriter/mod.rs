//! The semantic rewriter: walks a parsed translation unit once, assigning
//! every user-defined name a fresh short one and rewriting all references
//! to match, per §4.3.
mod declaration;
mod expr;
mod names;
mod scope;
mod stmt;
mod swizzle;
mod types;

use std::collections::HashMap;

use log::warn;

use crate::ast::{
    Decl, DeclSpecifiers, Declarator, Enum, External, FileAst, FuncDef, IdentifierType, Param,
    Struct, TypeSpecifier, Typedef,
};
use crate::builtins;
use crate::error::{Diagnostic, MinifyError, Severity};

pub use declaration::{DeclKind, DeclRef, Declaration, Function};
pub use scope::Scope;
pub use types::{BaseType, ResolvedType};

/// Caller-supplied knobs for a single rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rename_kernels: bool,
    pub global_postfix: String,
}

impl Config {
    /// A non-empty postfix implies kernel renaming, whether or not the
    /// caller set the flag (§7: configuration conflict is silently
    /// resolved by enabling renaming, not rejected).
    pub fn normalized(mut self) -> Self {
        if !self.global_postfix.is_empty() {
            self.rename_kernels = true;
        }
        self
    }
}

/// Everything the caller needs beyond the rewritten tree itself: the
/// original kernel names (§6), and each function's renamed name plus its
/// argument renaming map, for header emission by a downstream collaborator.
#[derive(Debug, Clone, Default)]
pub struct RewriteOutput {
    pub kernels: Vec<String>,
    pub functions: HashMap<String, Function>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Rewriter {
    scope: Scope,
    functions: HashMap<String, Function>,
    kernels: Vec<String>,
    config: Config,
    diagnostics: Vec<Diagnostic>,
}

impl Rewriter {
    pub fn new(config: Config) -> Self {
        Rewriter {
            scope: Scope::new(),
            functions: HashMap::new(),
            kernels: Vec::new(),
            config: config.normalized(),
            diagnostics: Vec::new(),
        }
    }

    pub fn rewrite(mut self, file: &mut FileAst) -> Result<RewriteOutput, MinifyError> {
        for external in &mut file.externals {
            self.rewrite_external(external)?;
        }
        Ok(RewriteOutput {
            kernels: self.kernels,
            functions: self.functions,
            diagnostics: self.diagnostics,
        })
    }

    fn rewrite_external(&mut self, external: &mut External) -> Result<(), MinifyError> {
        match external {
            External::FuncDef(func_def) => self.rewrite_func_def(func_def),
            External::Pragma(_) => Ok(()),
            External::Typedef(typedef) => self.rewrite_typedef(typedef),
            External::Decl(decl) => self.rewrite_decl(decl),
        }
    }

    fn allocate(&mut self) -> String {
        names::allocate(&self.scope, &self.functions, &self.config.global_postfix)
    }

    pub(super) fn warn(&mut self, message: impl Into<String>, position: &crate::ast::Position) {
        let diagnostic = Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            position: position.clone(),
        };
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn is_kernel(specifiers: &DeclSpecifiers) -> bool {
        specifiers
            .qualifiers
            .iter()
            .any(|q| q == "__kernel" || q == "kernel")
    }

    fn rewrite_func_def(&mut self, func_def: &mut FuncDef) -> Result<(), MinifyError> {
        let original_name = func_def.name.clone();
        let is_kernel = Self::is_kernel(&func_def.specifiers);
        if is_kernel {
            self.kernels.push(original_name.clone());
        }

        let renamed = if is_kernel && !self.config.rename_kernels {
            original_name.clone()
        } else {
            self.allocate()
        };
        func_def.name = renamed.clone();
        self.functions
            .insert(original_name.clone(), Function::placeholder(renamed));

        let base = self.rewrite_decl_specifiers(&mut func_def.specifiers)?;

        self.scope.push();
        let mut args = Vec::new();
        for param in &mut func_def.params.params {
            if let Some(renamed_arg) = self.rewrite_param(param)? {
                args.push(renamed_arg);
            }
        }

        let return_type = base.keywords();

        if let Some(record) = self.functions.get_mut(&original_name) {
            record.return_type = Some(return_type);
            record.args = args;
        }

        for stmt in &mut func_def.body.stmts {
            self.rewrite_stmt(stmt)?;
        }
        self.scope.pop();

        Ok(())
    }

    fn rewrite_param(&mut self, param: &mut Param) -> Result<Option<(String, String)>, MinifyError> {
        let base = self.rewrite_decl_specifiers(&mut param.specifiers)?;
        let Some(original_name) = param.name.clone() else {
            return Ok(None);
        };
        let renamed = self.allocate();
        let decl = Declaration::new(renamed.clone(), base_to_kind(&base, param.pointer_depth));
        self.scope.declare(&original_name, decl);
        param.name = Some(renamed.clone());
        for dim in &mut param.array_dims {
            if let Some(expr) = dim {
                self.rewrite_expr(expr)?;
            }
        }
        Ok(Some((original_name, renamed)))
    }

    fn rewrite_decl(&mut self, decl: &mut Decl) -> Result<(), MinifyError> {
        let base = self.rewrite_decl_specifiers(&mut decl.specifiers)?;
        let is_kernel = Self::is_kernel(&decl.specifiers);

        // Each declarator's initializer must be rewritten before that
        // declarator itself is declared, but *after* any earlier declarator
        // in the same statement — `int a=3,b=a;` needs `a` renamed before
        // `b`'s initializer references it.
        for declarator in &mut decl.declarators {
            self.rewrite_initializer_of(declarator)?;
            self.declare_declarator(declarator, &base, is_kernel)?;
        }
        Ok(())
    }

    fn rewrite_initializer_of(&mut self, declarator: &mut Declarator) -> Result<(), MinifyError> {
        if let Some(initializer) = &mut declarator.initializer {
            self.rewrite_initializer(initializer)?;
        }
        for dim in &mut declarator.array_dims {
            if let Some(expr) = dim {
                self.rewrite_expr(expr)?;
            }
        }
        if let Some(bitfield) = &mut declarator.bitfield {
            self.rewrite_expr(bitfield)?;
        }
        Ok(())
    }

    fn declare_declarator(
        &mut self,
        declarator: &mut Declarator,
        base: &BaseType,
        is_kernel: bool,
    ) -> Result<(), MinifyError> {
        let _ = is_kernel; // kernel prototypes are handled via FuncDef; a bare
                           // __kernel Decl keeps the same renaming path.
        let original_name = declarator.name.clone();
        let renamed = self.allocate();
        let decl = Declaration::new(renamed.clone(), base_to_kind(base, declarator.pointer_depth));
        self.scope.declare(&original_name, decl);
        declarator.name = renamed;
        Ok(())
    }

    fn rewrite_typedef(&mut self, typedef: &mut Typedef) -> Result<(), MinifyError> {
        let base = self.rewrite_decl_specifiers(&mut typedef.specifiers)?;
        for declarator in &mut typedef.declarators {
            self.declare_declarator(declarator, &base, false)?;
        }
        Ok(())
    }

    /// Canonicalizes `unsigned char|short|int|long` to `uchar|ushort|uint|
    /// ulong`, then, if the result names a single user typedef, replaces it
    /// with that typedef's assigned short name. Reserved keywords are never
    /// looked up.
    fn rewrite_identifier_type(&mut self, identifier_type: &mut IdentifierType) -> Vec<String> {
        let canonical = types::canonicalize(&identifier_type.names);
        if let [single] = canonical.as_slice() {
            if !builtins::is_reserved_word(single) {
                if let Some(decl) = self.scope.resolve(single) {
                    let renamed = decl.borrow().name.clone();
                    identifier_type.names = vec![renamed.clone()];
                    return vec![renamed];
                }
            }
        }
        identifier_type.names = canonical.clone();
        canonical
    }

    fn rewrite_decl_specifiers(
        &mut self,
        specifiers: &mut DeclSpecifiers,
    ) -> Result<BaseType, MinifyError> {
        match &mut specifiers.type_spec {
            TypeSpecifier::Named(identifier_type) => {
                Ok(BaseType::Keywords(self.rewrite_identifier_type(identifier_type)))
            }
            TypeSpecifier::Struct(s) => Ok(BaseType::Struct(self.rewrite_struct(s)?)),
            TypeSpecifier::Enum(e) => {
                self.rewrite_enum(e)?;
                Ok(BaseType::Enum)
            }
        }
    }

    fn rewrite_struct(&mut self, structure: &mut Struct) -> Result<DeclRef, MinifyError> {
        let fields_present = !structure.fields.is_empty();
        let Some(name) = structure.name.clone() else {
            return if fields_present {
                self.build_struct_fields(structure)
            } else {
                self.warn("anonymous struct reference with no fields", &structure.position);
                Ok(Declaration::new("", DeclKind::StructDef))
            };
        };

        if !fields_present {
            return if let Some(decl) = self.scope.resolve(&name) {
                structure.name = Some(decl.borrow().name.clone());
                Ok(decl)
            } else {
                self.warn(format!("unresolved struct tag '{name}'"), &structure.position);
                Ok(Declaration::new(name, DeclKind::StructDef))
            };
        }

        let struct_decl = self.build_struct_fields(structure)?;
        let renamed = self.allocate();
        struct_decl.borrow_mut().name = renamed.clone();
        self.scope.declare(&name, struct_decl.clone());
        structure.name = Some(renamed);
        Ok(struct_decl)
    }

    /// Rewrites a struct's field list under two fresh scope frames (per
    /// §4.4), assigning each member a compact index-derived name, and
    /// returns the struct's own (as yet unnamed) declaration with its
    /// `children` populated so later field access can resolve through it.
    fn build_struct_fields(&mut self, structure: &mut Struct) -> Result<DeclRef, MinifyError> {
        let struct_decl = Declaration::new(String::new(), DeclKind::StructDef);
        struct_decl.borrow_mut().is_definition = true;

        self.scope.push();
        self.scope.push();
        let mut field_index = 0u64;
        for field in structure.fields.iter_mut() {
            let base = self.rewrite_decl_specifiers(&mut field.specifiers)?;
            for declarator in &mut field.declarators {
                self.rewrite_initializer_of(declarator)?;
                let original_field_name = declarator.name.clone();
                let compact = names::nth_name(field_index);
                field_index += 1;
                let field_decl =
                    Declaration::new(compact.clone(), base_to_kind(&base, declarator.pointer_depth));
                struct_decl
                    .borrow_mut()
                    .children
                    .insert(original_field_name.clone(), field_decl.clone());
                self.scope.declare(&original_field_name, field_decl);
                declarator.name = compact;
            }
        }
        self.scope.pop();
        self.scope.pop();
        Ok(struct_decl)
    }

    fn rewrite_enum(&mut self, enumeration: &mut Enum) -> Result<(), MinifyError> {
        let has_variants = !enumeration.variants.is_empty();
        if let Some(name) = enumeration.name.clone() {
            if has_variants {
                let renamed = self.allocate();
                let decl = Declaration::new(renamed.clone(), DeclKind::Enum);
                self.scope.declare(&name, decl);
                enumeration.name = Some(renamed);
            } else if let Some(decl) = self.scope.resolve(&name) {
                enumeration.name = Some(decl.borrow().name.clone());
            } else {
                self.warn(format!("unresolved enum tag '{name}'"), &enumeration.position);
            }
        }
        if has_variants {
            for variant in &mut enumeration.variants {
                if let Some(value) = &mut variant.value {
                    self.rewrite_expr(value)?;
                }
                let renamed = self.allocate();
                let decl = Declaration::new(renamed.clone(), DeclKind::Enum);
                self.scope.declare(&variant.name, decl);
                variant.name = renamed;
            }
        }
        Ok(())
    }
}

/// Builds the `DeclKind` for a declarator with base type `base` and the
/// given pointer depth — a plain keyword list gets `*` appended per
/// indirection level, a struct/enum keeps its own shape untouched since
/// pointer-vs-value doesn't change which declaration a field access
/// resolves through.
fn base_to_kind(base: &BaseType, pointer_depth: usize) -> DeclKind {
    match base {
        BaseType::Keywords(keywords) => {
            let mut keywords = keywords.clone();
            for _ in 0..pointer_depth {
                keywords.push("*".to_owned());
            }
            DeclKind::Type(keywords)
        }
        BaseType::Struct(decl_ref) => DeclKind::Struct(decl_ref.clone()),
        BaseType::Enum => DeclKind::Enum,
    }
}
