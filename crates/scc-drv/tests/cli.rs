//! CLI end-to-end tests.
//!
//! Exercises the `scc` binary: emit modes, exit codes, error output, and an
//! assemble-and-run round trip when the host toolchain is available.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn scc() -> Command {
    Command::cargo_bin("scc").expect("scc binary should build")
}

fn source_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".c")
        .tempfile()
        .expect("create temp source file");
    file.write_all(content.as_bytes()).expect("write source");
    file
}

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn test_help() {
    scc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version() {
    scc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scc"));
}

#[test]
fn test_missing_input_file() {
    scc()
        .arg("does_not_exist.c")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not read"));
}

#[test]
fn test_compile_to_stdout() {
    let file = source_file("int main() { return 0; }");
    scc()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".intel_syntax noprefix"))
        .stdout(predicate::str::contains("main:"));
}

#[test]
fn test_emit_tokens() {
    let file = source_file("int main() { return 42; }");
    scc()
        .arg(file.path())
        .arg("--emit-tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier 'main'"))
        .stdout(predicate::str::contains("Number 42"))
        .stdout(predicate::str::contains("end of file"));
}

#[test]
fn test_emit_ast() {
    let file = source_file("int main() { return (2 + 3) * 4; }");
    scc()
        .arg(file.path())
        .arg("--emit-ast")
        .assert()
        .success()
        .stdout(predicate::str::contains("int main() {"))
        .stdout(predicate::str::contains("return (2 + 3) * 4;"));
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("out.s");
    let file = source_file("int main() { return 0; }");

    scc()
        .arg(file.path())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("_start:"));
}

#[test]
fn test_parse_error_exits_one() {
    let file = source_file("int main() { return 1 + ; }");
    scc()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("primary expression"));
}

#[test]
fn test_analysis_error_exits_one() {
    let file = source_file("int main() { return x; }");
    scc()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("undeclared variable 'x'"));
}

#[test]
fn test_error_shows_source_line() {
    let file = source_file("int main() {\n    return missing;\n}\n");
    scc()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("return missing;"));
}

#[test]
fn test_compile_demo_sample26() {
    scc()
        .arg(demo("sample26.c"))
        .assert()
        .success()
        .stdout(predicate::str::contains("call getBase"));
}

#[test]
fn test_run_exits_with_program_code() {
    if !scc_drv::toolchain::is_available() {
        eprintln!("skipping: as/ld not on PATH");
        return;
    }

    let file = source_file("int main() { return 2 + 3 * 4; }");
    scc().arg(file.path()).arg("--run").assert().code(14);
}

#[test]
fn test_run_loop_program() {
    if !scc_drv::toolchain::is_available() {
        eprintln!("skipping: as/ld not on PATH");
        return;
    }

    let file = source_file(
        "int main() { int n = 10; int s = 0; while (n > 0) { s = s + n; n = n - 1; } return s; }",
    );
    scc().arg(file.path()).arg("--run").assert().code(55);
}

#[test]
fn test_run_demo_sample26() {
    if !scc_drv::toolchain::is_available() {
        eprintln!("skipping: as/ld not on PATH");
        return;
    }

    scc().arg(demo("sample26.c")).arg("--run").assert().code(43);
}
