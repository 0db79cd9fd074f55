use std::collections::HashMap;

use super::declaration::DeclRef;

/// A stack of name → declaration maps. The bottom frame is the global
/// scope; a new frame is pushed on entering each `Compound` and each
/// function, and struct bodies push two (an outer frame carrying the
/// struct's own tag, an inner one for its fields).
#[derive(Debug, Default)]
pub struct Scope {
    frames: Vec<HashMap<String, DeclRef>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            frames: vec![HashMap::new()],
        }
    }

    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    pub fn pop(&mut self) {
        self.frames.pop();
        debug_assert!(!self.frames.is_empty(), "popped the global scope");
    }

    /// 1 for the global scope, growing with each nested push.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn declare(&mut self, original_name: impl Into<String>, decl: DeclRef) {
        self.frames
            .last_mut()
            .expect("scope stack is never empty")
            .insert(original_name.into(), decl);
    }

    /// Resolve `original_name` outer-to-innermost, most-recently-pushed
    /// frame first (i.e. the frame stack read back-to-front).
    pub fn resolve(&self, original_name: &str) -> Option<DeclRef> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(original_name).cloned())
    }

    /// Every assigned short name currently visible on the stack, used by
    /// the name allocator's uniqueness check.
    pub fn assigned_names(&self) -> impl Iterator<Item = String> + '_ {
        self.frames
            .iter()
            .flat_map(|frame| frame.values())
            .map(|decl| decl.borrow().name.clone())
    }
}
