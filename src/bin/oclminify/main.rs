//! # oclminify
//!
//! Thin CLI wrapper around the `oclminify` library: parses a translation
//! unit, rewrites it, and writes the minified source back out.
extern crate oclminify;

mod cli;

use cli::*;

use std::fs;
use std::io::{self, Read, Write};

use log::{error, info};
use oclminify::rewriter::Config;

fn main() {
    let args = Cli::init();

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    let (source, file_name) = match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            let source = fs::read_to_string(path).unwrap_or_else(|err| {
                error!("{}: {err}", path.display());
                std::process::exit(-1);
            });
            (source, path.display().to_string())
        }
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).unwrap_or_else(|err| {
                error!("failed reading stdin: {err}");
                std::process::exit(-1);
            });
            (source, "<stdin>".to_owned())
        }
    };

    info!("minifying {file_name}");

    let config = Config {
        rename_kernels: args.rename_kernels,
        global_postfix: args.global_postfix.clone(),
    };

    let output = oclminify::minify(&source, &file_name, config).unwrap_or_else(|err| {
        error!("{err}");
        std::process::exit(-1);
    });

    if args.compress {
        info!("--compress is accepted but not implemented; the rewrite's own minification is unaffected");
    }
    if let Some(header) = &args.header {
        info!("--header {} is accepted but not implemented; no header was written", header.display());
    }

    let rendered = if args.json {
        serde_json::to_string(&output).unwrap_or_else(|err| {
            error!("failed to serialize output: {err}");
            std::process::exit(-1);
        })
    } else {
        output.source.clone()
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|err| {
                error!("{}: {err}", path.display());
                std::process::exit(-1);
            });
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let _ = writeln!(handle, "{rendered}");
        }
    }
}
