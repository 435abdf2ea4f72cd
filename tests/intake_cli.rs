//! Integration tests for the radicado binary

use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn radicado() -> Command {
    let mut cmd = Command::cargo_bin("radicado").unwrap();
    cmd.env_remove("RADICADO_OUTPUT_DIR").env_remove("RUST_LOG");
    cmd
}

fn records(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("ticket_") && n.ends_with(".txt"))
        })
        .collect()
}

#[test]
fn test_successful_intake_writes_record() {
    let temp_dir = TempDir::new().unwrap();

    let assert = radicado()
        .arg("--output-dir")
        .arg(temp_dir.path())
        .arg("--no-color")
        .write_stdin("123\na@b.com\nbilling\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ingrese identificación: "))
        .stdout(predicate::str::contains("Ingrese correo: "))
        .stdout(predicate::str::contains("Ingrese tipo de reclamación: "))
        .stdout(predicate::str::contains("Registro exitoso."));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let caps = Regex::new(r"Radicado generado: (\d+_\d{4})")
        .unwrap()
        .captures(&stdout)
        .expect("reference in output");
    let reference = &caps[1];

    let files = records(temp_dir.path());
    assert_eq!(files.len(), 1);

    let name = files[0].file_name().unwrap().to_str().unwrap();
    assert!(Regex::new(r"^ticket_\d{14}\.txt$").unwrap().is_match(name));

    let content = fs::read_to_string(&files[0]).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], format!("Radicado: {reference}"));
    assert_eq!(lines[1], "Identificación: 123");
    assert_eq!(lines[2], "Correo: a@b.com");
    assert_eq!(lines[3], "Tipo de reclamación: billing");
}

#[test]
fn test_invalid_input_is_retried() {
    let temp_dir = TempDir::new().unwrap();

    radicado()
        .arg("-o")
        .arg(temp_dir.path())
        .write_stdin("12a\n123\nsin-arroba\nx@y\n\nqueja\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrada inválida. Intente nuevamente.").count(3));

    let content = fs::read_to_string(&records(temp_dir.path())[0]).unwrap();
    assert!(content.contains("Identificación: 123\n"));
    assert!(content.contains("Correo: x@y\n"));
    assert!(content.contains("Tipo de reclamación: queja\n"));
}

#[test]
fn test_empty_stdin_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();

    radicado()
        .arg("-o")
        .arg(temp_dir.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error leyendo entrada.").count(1))
        .stderr(predicate::str::contains("Error leyendo entrada.").not())
        .stderr(predicate::str::contains("before identification"));

    assert!(records(temp_dir.path()).is_empty());
}

#[test]
fn test_stdin_closed_mid_intake_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();

    radicado()
        .arg("-o")
        .arg(temp_dir.path())
        .write_stdin("123\na@b.com\n")
        .assert()
        .code(1);

    assert!(records(temp_dir.path()).is_empty());
}

#[test]
fn test_missing_output_dir_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("assets");

    radicado()
        .arg("-o")
        .arg(&missing)
        .arg("--no-color")
        .write_stdin("123\na@b.com\nbilling\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Registro exitoso.").not())
        .stderr(predicate::str::contains("Error al crear el archivo"));

    assert!(!missing.exists());
    assert!(records(temp_dir.path()).is_empty());
}

#[test]
fn test_default_output_dir_is_assets() {
    let temp_dir = TempDir::new().unwrap();
    let assets = temp_dir.path().join("assets");
    fs::create_dir(&assets).unwrap();

    radicado()
        .current_dir(temp_dir.path())
        .write_stdin("1\na@b\nc\n")
        .assert()
        .success();

    assert_eq!(records(&assets).len(), 1);
}

#[test]
fn test_output_dir_from_environment() {
    let temp_dir = TempDir::new().unwrap();

    radicado()
        .current_dir(temp_dir.path())
        .env("RADICADO_OUTPUT_DIR", temp_dir.path())
        .write_stdin("1\na@b\nc\n")
        .assert()
        .success();

    assert_eq!(records(temp_dir.path()).len(), 1);
}

#[test]
fn test_config_file_prompts() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yaml");
    fs::write(
        &config_path,
        format!(
            "output_dir: {}\nprompts:\n  identification: \"ID? \"\n",
            temp_dir.path().display()
        ),
    )
    .unwrap();

    radicado()
        .arg("--config")
        .arg(&config_path)
        .write_stdin("1\na@b\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID? Ingrese correo: "));

    assert_eq!(records(temp_dir.path()).len(), 1);
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let assert = radicado()
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--json")
        .arg("--seed")
        .arg("42")
        .write_stdin("555\nj@s.on\nfacturacion\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Ingrese identificación: "));

    // Prompts are on stderr, so stdout is a single JSON document
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(value["status"], "success");
    assert_eq!(value["ticket"]["identification"], "555");
    assert_eq!(value["ticket"]["email"], "j@s.on");
    assert_eq!(value["ticket"]["complaint_type"], "facturacion");
    assert_eq!(value["radicado"], value["ticket"]["radicado"]);

    let file = PathBuf::from(value["file"].as_str().unwrap());
    let content = fs::read_to_string(file).unwrap();
    assert!(content.starts_with(&format!(
        "Radicado: {}\n",
        value["radicado"].as_str().unwrap()
    )));
}

#[test]
fn test_help_lists_options() {
    radicado()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn test_json_error_keeps_stdout_parseable() {
    let temp_dir = TempDir::new().unwrap();

    let assert = radicado()
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--json")
        .write_stdin("")
        .assert()
        .code(1);

    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["status"], "error");
}

#[test]
fn test_invalid_utf8_line_is_retried() {
    let temp_dir = TempDir::new().unwrap();

    radicado()
        .arg("-o")
        .arg(temp_dir.path())
        .write_stdin(b"\xff\xfe\n123\na@b\nc\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrada inválida. Intente nuevamente.").count(1));

    let content = fs::read_to_string(&records(temp_dir.path())[0]).unwrap();
    assert!(content.contains("Identificación: 123\n"));
}
