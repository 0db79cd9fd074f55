use super::Position;

/// A type spelled as an ordered list of keywords, e.g. `["unsigned", "int"]`
/// before canonicalization, or `["uint"]` / `["float4"]` after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierType {
    pub names: Vec<String>,
    pub position: Position,
}

impl IdentifierType {
    pub fn new(names: Vec<String>, position: Position) -> Self {
        Self { names, position }
    }

    pub fn single(name: impl Into<String>, position: Position) -> Self {
        Self {
            names: vec![name.into()],
            position,
        }
    }

    /// The single keyword this type resolves to, unless it's a multi-word
    /// specifier like `unsigned int`.
    pub fn as_single(&self) -> Option<&str> {
        match self.names.as_slice() {
            [single] => Some(single.as_str()),
            _ => None,
        }
    }
}
