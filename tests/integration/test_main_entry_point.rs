// main.rsとエントリーポイントのテスト
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn get_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    if path.ends_with("deps") {
        path.pop(); // remove deps directory
    }
    path.join("construct_bench")
}

#[test]
fn test_cli_help() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("list"));
    assert!(stdout.contains("invoke"));
    assert!(stdout.contains("run"));
}

#[test]
fn test_cli_list_category() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI list test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["list", "--category", "dispatch"])
        .output()
        .expect("Failed to execute list command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("GetSwitchStatement"));
    assert!(stdout.contains("GetDispatchTable"));
    assert!(!stdout.contains("UseTask"));
}

#[test]
fn test_cli_invoke_async_case() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI invoke test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["invoke", "UseTask", "3"])
        .output()
        .expect("Failed to execute invoke command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("UseTask(3) = Float(5)"));
}

#[test]
fn test_cli_invoke_undeclared_argument_fails() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI undeclared argument test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["invoke", "UseExceptions", "7"])
        .output()
        .expect("Failed to execute invoke command");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));

    let output = Command::new(&binary_path)
        .args(["invoke", "UseExceptions", "7", "--allow-undeclared"])
        .output()
        .expect("Failed to execute invoke command");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("= Int(2)"));
}

#[test]
fn test_cli_run_writes_report() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI run test - binary not found");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.json");

    let output = Command::new(&binary_path)
        .args(["run", "--case", "DontUseExceptions", "--preset", "quick", "--quiet"])
        .arg("--output")
        .arg(&output_file)
        .output()
        .expect("Failed to execute run command");

    assert!(output.status.success());
    assert!(output_file.exists());

    let content = fs::read_to_string(&output_file).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["measurements"].as_array().unwrap().len(), 2);
}
