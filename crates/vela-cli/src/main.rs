// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-cli/src/main.rs
// SPDX-FileType: SOURCE
// SPDX-License-Identifier: Apache-2.0
// -------------------------------------------------------------------------
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// -------------------------------------------------------------------------
//! Vela CLI
//!
//! Command-line interface for the Vela compiler front-end. Drives the
//! front-end pipeline (lex, parse, resolve names, compile patterns) over
//! a single source file and reports diagnostics; it does not generate
//! machine code, since that sits behind the `Emitter` seam this
//! workspace leaves to an external backend.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use vela_compiler as compiler;
use vela_compiler::driver::{CompileOptions, Driver};
use vela_parser::lexer::Lexer;
use vela_parser::diagnostics::DiagnosticReporter;
use vela_parser::parser::Parser as VelaParser;
use vela_source::types::SourceManager;

/// The Vela compiler front-end
#[derive(ClapParser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Input file to compile
    #[clap(value_parser)]
    input: Option<PathBuf>,

    /// Output file
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Optimization level
    #[clap(short = 'O', long = "opt-level", default_value_t = 0)]
    opt_level: u8,

    /// Evaluate/interpret the input instead of compiling it
    #[clap(short = 'e', long)]
    evaluate: bool,

    /// Parse only, print the parse tree
    #[clap(short = 'p', long = "parse-only")]
    parse_only: bool,

    /// Compile to an object file
    #[clap(short = 'c', long)]
    compile: bool,

    /// Compile and run
    #[clap(short = 'r', long)]
    run: bool,

    /// Lex only, print the token stream
    #[clap(short = 'l', long = "lex-only")]
    lex_only: bool,

    /// Build as a library
    #[clap(long)]
    lib: bool,

    /// Emit LLVM IR
    #[clap(long = "emit-llvm")]
    emit_llvm: bool,

    /// Show verbose output
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.verbose {
        println!("Vela compiler front-end v{}", compiler::VERSION);
    }

    let Some(input) = args.input.clone() else {
        println!("No input file provided. Use --help for usage information.");
        return Ok(());
    };

    if args.lex_only {
        return lex_file(&input);
    }
    if args.parse_only {
        return parse_file(&input);
    }
    if args.evaluate || args.compile || args.run || args.emit_llvm || args.lib {
        anyhow::bail!(
            "this build only compiles a source file down to checked decision trees; \
             interpretation, object-file emission, and LLVM IR are produced by an \
             external backend this workspace does not include"
        );
    }

    compile_file(&input, &args)
}

fn lex_file(input: &PathBuf) -> Result<()> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read '{}'", input.display()))?;

    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file(input.display().to_string(), source.clone());
    let source_manager = Arc::new(source_manager);
    let reporter = Arc::new(DiagnosticReporter::new(source_manager));

    let lexer = Lexer::new(&source, file_id, reporter);
    for token in lexer {
        println!("{token}");
    }
    Ok(())
}

fn parse_file(input: &PathBuf) -> Result<()> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read '{}'", input.display()))?;

    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file(input.display().to_string(), source.clone());
    let source_manager = Arc::new(source_manager);

    let mut parser = VelaParser::new(&source, file_id, source_manager);
    parser
        .parse_program()
        .with_context(|| format!("failed to parse '{}'", input.display()))?;

    println!("{:#?}", parser.ast());
    Ok(())
}

fn compile_file(input: &PathBuf, args: &Args) -> Result<()> {
    let options =
        CompileOptions { opt_level: args.opt_level, emit_llvm: args.emit_llvm, lib: args.lib };
    let driver = Driver::with_options(options);

    let unit = driver
        .compile_file(input)
        .with_context(|| format!("failed to compile '{}'", input.display()))?;

    if args.verbose {
        println!(
            "Compiled '{}': {} match expression(s) checked for exhaustiveness.",
            input.display(),
            unit.decision_trees.len()
        );
    } else {
        println!("Compiled '{}'.", input.display());
    }

    if let Some(output) = &args.output {
        log::warn!("-o {} has no effect: this build has no object-file backend", output.display());
    }

    Ok(())
}
