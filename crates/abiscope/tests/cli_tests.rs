// ABIScope - Contract Interface Analyzer
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use tracing::info;

const ERC20: &str = r#"[
    {"type":"function","name":"transfer","stateMutability":"nonpayable",
     "inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],
     "outputs":[{"name":"","type":"bool"}]},
    {"type":"function","name":"balanceOf","stateMutability":"view",
     "inputs":[{"name":"owner","type":"address"}],
     "outputs":[{"name":"","type":"uint256"}]},
    {"type":"constructor","inputs":[{"name":"supply","type":"uint256"}]},
    {"type":"event","name":"Transfer","inputs":[
        {"name":"from","type":"address","indexed":true},
        {"name":"to","type":"address","indexed":true},
        {"name":"value","type":"uint256","indexed":false}]}
]"#;

fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("manifest.json");
    fs::write(&path, content).unwrap();
    path
}

fn abiscope() -> Command {
    let mut cmd = Command::cargo_bin("abiscope").unwrap();
    cmd.env_remove("ABISCOPE_CONFIG");
    cmd
}

#[test]
fn test_help_command() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Testing CLI help command");

    abiscope().arg("--help").assert().success().stdout(predicate::str::contains("ABIScope"));
}

#[test]
fn test_version_command() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    abiscope().arg("--version").assert().success().stdout(predicate::str::contains("abiscope"));
}

#[test]
fn test_missing_subcommand() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    abiscope().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_analyze_outputs_json() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    let output = abiscope().arg("analyze").arg(&manifest).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["readCount"], 1);
    assert_eq!(json["writeCount"], 1);
    assert_eq!(json["functions"][0]["name"], "balanceOf");
    assert_eq!(json["functions"][0]["costEstimate"]["kind"], "no-cost");
}

#[test]
fn test_analyze_from_stdin() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    abiscope()
        .args(["analyze", "-", "--pretty"])
        .write_stdin(ERC20)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"canonicalSignature\": \"transfer(address,uint256)\""));
}

#[test]
fn test_analyze_malformed_manifest() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "{not json");

    abiscope()
        .arg("analyze")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"functions\":[]"));

    abiscope().arg("analyze").arg(&manifest).arg("--strict").assert().failure();
}

#[test]
fn test_analyze_missing_file() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    abiscope()
        .args(["analyze", "/nonexistent/manifest.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read manifest"));
}

#[test]
fn test_signatures() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope().arg("signatures").arg(&manifest).assert().success().stdout(
        "balanceOf(address)\ntransfer(address,uint256)\nTransfer(address,address,uint256)\n",
    );
}

#[test]
fn test_signatures_with_selectors() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope()
        .arg("signatures")
        .arg(&manifest)
        .arg("--selectors")
        .assert()
        .success()
        .stdout(predicate::str::contains("0xa9059cbb transfer(address,uint256)"))
        .stdout(predicate::str::contains(
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef              Transfer(address,address,uint256)",
        ));
}

#[test]
fn test_validate_valid_arguments() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope()
        .arg("validate")
        .arg(&manifest)
        .args(["--function", "transfer"])
        .args(["--arg", "to=0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0"])
        .args(["--arg", "amount=1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

#[test]
fn test_validate_invalid_arguments() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope()
        .arg("validate")
        .arg(&manifest)
        .args(["--function", "transfer(address,uint256)"])
        .args(["--arg", "to=0x1234"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid address"))
        .stdout(predicate::str::contains("amount is required"));
}

#[test]
fn test_validate_constructor() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope()
        .arg("validate")
        .arg(&manifest)
        .args(["--function", "constructor", "--arg", "supply=-5"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Must be a non-negative integer"));
}

#[test]
fn test_validate_unknown_function() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope()
        .arg("validate")
        .arg(&manifest)
        .args(["--function", "mint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_validate_rejects_malformed_arg() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope()
        .arg("validate")
        .arg(&manifest)
        .args(["--function", "transfer", "--arg", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected name=value"));
}

#[test]
fn test_encode() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    abiscope()
        .args(["encode", "--type", "uint256[]", "1, 2"])
        .assert()
        .success()
        .stdout("[\"1\",\"2\"]\n");
}

#[test]
fn test_config_file() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);
    let config = dir.path().join("abiscope.toml");
    fs::write(&config, "[cost]\nbase = 1\nper_input = 1\n").unwrap();

    let output =
        abiscope().arg("analyze").arg(&manifest).arg("--config").arg(&config).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["functions"][1]["costEstimate"]["gas"], 3);
}

#[test]
fn test_config_from_env() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, ERC20);

    abiscope()
        .env("ABISCOPE_CONFIG", dir.path().join("missing.toml"))
        .arg("analyze")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
