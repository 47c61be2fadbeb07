//! End-to-end tests for the feigngen CLI

use anyhow::{bail, Result};
use serde_json::Value as JsonValue;
use std::path::Path;
use std::process::Command;

fn feigngen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_feigngen"));
    // Keep a developer's own configuration out of the test runs.
    cmd.env("FEIGNGEN_CONFIG", "/nonexistent/feigngen.yaml");
    cmd
}

fn run_process(dir: &Path, args: &[&str]) -> Result<JsonValue> {
    let output = feigngen()
        .current_dir(dir)
        .arg("process")
        .args(args)
        .output()?;
    if !output.status.success() {
        bail!(
            "feigngen process failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_options_lists_every_option() -> Result<()> {
    let output = feigngen().arg("options").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("java2 (client): Generates a Java client library."));
    for name in ["useBeanValidation", "clientName", "consulName", "library"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
    assert!(stdout.contains("Netflix Feign"));
    Ok(())
}

#[test]
fn test_process_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let report = run_process(dir.path(), &[])?;

    assert_eq!(report["generator"], "java2");
    assert_eq!(report["templateVariables"]["clientName"], "ApiClient");
    assert_eq!(report["templateVariables"]["jackson"], true);
    assert_eq!(report["context"]["useBeanValidation"], false);
    assert_eq!(report["diagnostics"], serde_json::json!([]));
    assert_eq!(report["supportingFiles"]["files"].as_array().unwrap().len(), 5);
    Ok(())
}

#[test]
fn test_process_with_options_and_models() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("feigngen.yaml"),
        "invokerPackage: com.example.pets\noptions:\n  consulName: pet-service\n",
    )?;
    std::fs::write(
        dir.path().join("models.yaml"),
        "- name: Pet\n  properties: [id, name]\n- name: PetStatus\n  isEnumeration: true\n",
    )?;

    let report = run_process(
        dir.path(),
        &[
            "--config",
            "feigngen.yaml",
            "--models",
            "models.yaml",
            "--opt",
            "clientName=PetClient",
            "--opt",
            "useBeanValidation=TRUE",
        ],
    )?;

    assert_eq!(report["templateVariables"]["clientFileName"], "PetClient.java");
    assert_eq!(report["templateVariables"]["consulName"], "pet-service");
    assert_eq!(report["context"]["useBeanValidation"], true);

    let files = report["supportingFiles"]["files"].as_array().unwrap();
    assert!(files.iter().any(|f| f["destination"] == "PetClient.java"
        && f["folder"] == "src/main/java/com/example/pets"));

    let models = report["models"].as_array().unwrap();
    assert_eq!(models[0]["imports"], serde_json::json!(["JsonProperty"]));
    assert_eq!(models[1]["imports"], serde_json::json!(["JsonCreator"]));
    Ok(())
}

#[test]
fn test_process_unknown_library_is_not_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("models.json"), r#"[{"name": "Pet"}]"#)?;

    let report = run_process(
        dir.path(),
        &["--library", "okhttp-gson", "--models", "models.json"],
    )?;

    assert_eq!(
        report["diagnostics"],
        serde_json::json!(["Unknown library option (-l/--library): okhttp-gson"])
    );
    assert!(report["templateVariables"].get("jackson").is_none());
    assert_eq!(report["models"][0]["imports"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_process_rejects_invalid_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("bad.yaml"), "modelPackage: 'not a package'\n")?;

    let output = feigngen()
        .current_dir(dir.path())
        .args(["process", "--config", "bad.yaml"])
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("modelPackage"));
    Ok(())
}
