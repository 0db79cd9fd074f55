use log::error;
use pest::{error::Error as PestError, iterators::Pairs, Parser};

#[derive(Parser)]
#[grammar = "ast/opencl_c.pest"]
pub struct OpenClCParser;

impl OpenClCParser {
    /// Parse already-preprocessed OpenCL C source into the top-level `program` pairs.
    ///
    /// Parse failures are propagated unchanged (§7: "Parse failure (external):
    /// propagated unchanged") rather than aborting the process, since this is a
    /// library entry point and not only the CLI's.
    pub fn parse_program(source: &str) -> Result<Pairs<Rule>, PestError<Rule>> {
        Self::parse(Rule::program, source).map_err(|err| {
            error!("Failed to parse preprocessed OpenCL C source ({err})");
            err
        })
    }
}
