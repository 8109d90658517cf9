//! scc - A small C compiler targeting x86-64.
//!
//! Reads one source file and prints the generated Intel-syntax assembly to
//! stdout. `--emit-tokens` and `--emit-ast` stop after the corresponding
//! phase; `--run` assembles and links with the host toolchain, executes the
//! result, and exits with the program's exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use scc_util::diagnostic::{render, Handler};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// A compiler for a small subset of C, emitting x86-64 assembly
#[derive(Parser, Debug)]
#[command(name = "scc")]
#[command(version)]
#[command(about = "Compiles a C subset to x86-64 assembly", long_about = None)]
struct Cli {
    /// Input source file
    input: PathBuf,

    /// Print the token stream and exit
    #[arg(long)]
    emit_tokens: bool,

    /// Print the parsed program and exit
    #[arg(long)]
    emit_ast: bool,

    /// Write the assembly to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Assemble, link, and execute; exits with the program's exit code
    #[arg(long)]
    run: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    ExitCode::from(run(cli))
}

fn run(cli: Cli) -> u8 {
    let source = match std::fs::read_to_string(&cli.input)
        .with_context(|| format!("could not read {}", cli.input.display()))
    {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: {:#}", error);
            return 1;
        },
    };

    if cli.emit_tokens {
        for token in scc_drv::tokenize(&source) {
            println!("{}", token);
        }
        return 0;
    }

    if cli.emit_ast {
        match scc_drv::parse(&source) {
            Ok(program) => {
                print!("{}", scc_par::printer::print_program(&program));
                return 0;
            },
            Err(error) => return report(&error, &source),
        }
    }

    let asm = match scc_drv::compile(&source) {
        Ok(asm) => asm,
        Err(error) => return report(&error, &source),
    };

    if let Some(path) = &cli.output {
        if let Err(error) = scc_drv::toolchain::write_assembly(&asm, path) {
            eprintln!("error: could not write {}: {}", path.display(), error);
            return 1;
        }
    } else if !cli.run {
        print!("{}", asm);
    }

    if cli.run {
        match scc_drv::toolchain::assemble_and_run(&asm) {
            // Linux truncates exit codes to one byte
            Ok(code) => return (code & 0xff) as u8,
            Err(error) => {
                eprintln!("error: {}", error);
                return 1;
            },
        }
    }

    0
}

fn report(error: &scc_drv::CompileError, source: &str) -> u8 {
    let handler = Handler::new();
    scc_drv::report(error, &handler);

    for diagnostic in handler.diagnostics() {
        eprintln!("{}", render(&diagnostic, Some(source)));
    }

    1
}
