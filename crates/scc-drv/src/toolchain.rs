//! Host toolchain invocation.
//!
//! Turns generated assembly into a running process: write the text into a
//! temporary directory, assemble with `as --64`, link with `ld`, execute the
//! binary, and report its exit status. The temporary directory (and
//! everything in it) is removed when the value drops, on success and on
//! error alike.
//!
//! Each external command is echoed to stdout before it runs, so a caller
//! can reproduce the invocation by hand.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use thiserror::Error;
use tracing::debug;

/// Error type for toolchain operations
#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("failed to create temporary build directory: {0}")]
    TempDir(#[source] std::io::Error),

    #[error("failed to write assembly file: {0}")]
    WriteAsm(#[source] std::io::Error),

    #[error("failed to invoke {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed ({status}):\n{stderr}")]
    ToolFailed {
        tool: &'static str,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Result type alias for toolchain operations
pub type Result<T> = std::result::Result<T, ToolchainError>;

/// Assemble, link, and execute the given assembly text.
///
/// Returns the executed program's exit code. A process killed by a signal
/// reports exit code 1.
pub fn assemble_and_run(asm: &str) -> Result<i32> {
    let dir = TempDir::new().map_err(ToolchainError::TempDir)?;
    let asm_path = dir.path().join("out.s");
    let obj_path = dir.path().join("out.o");
    let exe_path = dir.path().join("out");

    std::fs::write(&asm_path, asm).map_err(ToolchainError::WriteAsm)?;

    run_tool(
        "as",
        Command::new("as")
            .arg("--64")
            .arg(&asm_path)
            .arg("-o")
            .arg(&obj_path),
    )?;

    run_tool(
        "ld",
        Command::new("ld").arg(&obj_path).arg("-o").arg(&exe_path),
    )?;

    println!("{}", exe_path.display());
    let status = Command::new(&exe_path)
        .status()
        .map_err(|source| ToolchainError::Spawn {
            tool: "the compiled program",
            source,
        })?;

    debug!("compiled program exited with {}", status);
    Ok(status.code().unwrap_or(1))
}

/// True when both `as` and `ld` are available on this host.
pub fn is_available() -> bool {
    let probe = |tool: &str| {
        Command::new(tool)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    };
    probe("as") && probe("ld")
}

fn run_tool(tool: &'static str, command: &mut Command) -> Result<()> {
    println!("{}", render_command(command));

    let output = command
        .output()
        .map_err(|source| ToolchainError::Spawn { tool, source })?;

    if !output.status.success() {
        return Err(ToolchainError::ToolFailed {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

fn render_command(command: &Command) -> String {
    let mut text = command.get_program().to_string_lossy().into_owned();
    for arg in command.get_args() {
        text.push(' ');
        text.push_str(&arg.to_string_lossy());
    }
    text
}

/// Write assembly to a file, creating parent directories as needed.
pub fn write_assembly(asm: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, asm)
}
