//! Source-to-source minifier for OpenCL C kernel source: parses a
//! translation unit, renames every user-defined identifier to the shortest
//! name still unique in its scope, and re-serializes the result as compact
//! text.
#[macro_use]
extern crate pest_derive;

use std::collections::HashMap;

pub mod ast;
pub mod builtins;
pub mod emitter;
pub mod error;
pub mod parser;
pub mod rewriter;

use error::{Diagnostic, MinifyError};
use rewriter::{Config, Rewriter};
use serde::Serialize;

/// One renamed function, as a downstream collaborator (e.g. a host-side
/// binding generator) would need to call it: its new short name, and a map
/// from each original parameter name to the name it was renamed to.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FunctionRecord {
    pub renamed: String,
    pub args: HashMap<String, String>,
}

/// Everything produced by a successful [`minify`] call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MinifyOutput {
    /// The minified source text.
    pub source: String,
    /// Original kernel names, in declaration order, whether or not they
    /// were renamed.
    pub kernels: Vec<String>,
    /// Each renamed function, keyed by its original name.
    pub functions: HashMap<String, FunctionRecord>,
    /// Non-fatal findings surfaced during the rewrite (§7); minification
    /// still completed.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses, rewrites, and re-emits `source`. `file` is only used to stamp
/// positions in parse errors and diagnostics.
pub fn minify(source: &str, file: &str, config: Config) -> Result<MinifyOutput, MinifyError> {
    let mut tree = parser::parse(source, file)?;
    let rewrite = Rewriter::new(config).rewrite(&mut tree)?;
    let emitted = emitter::emit(&tree);

    let functions = rewrite
        .functions
        .into_iter()
        .map(|(original_name, function)| {
            let record = FunctionRecord {
                renamed: function.renamed_name,
                args: function.args.into_iter().collect(),
            };
            (original_name, record)
        })
        .collect();

    Ok(MinifyOutput {
        source: emitted,
        kernels: rewrite.kernels,
        functions,
        diagnostics: rewrite.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_empty_kernel() {
        let output =
            minify("__kernel void entry(__global float *a) {}", "test.cl", Config::default()).unwrap();
        assert_eq!(output.kernels, vec!["entry".to_owned()]);
        assert!(output.source.contains("__kernel"));
    }

    #[test]
    fn renames_kernel_with_postfix() {
        let config = Config { rename_kernels: false, global_postfix: "_1".to_owned() };
        let output = minify("__kernel void entry() {}", "test.cl", config).unwrap();
        assert_eq!(output.kernels, vec!["entry".to_owned()]);
        assert!(!output.source.contains("entry"));
        assert!(output.source.contains("_1"));
    }
}
