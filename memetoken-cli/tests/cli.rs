// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use assert_cmd::Command;

const TOKEN_ARTIFACT: &str = r#"{
    "contractName": "MeMeToken",
    "abi": [
        {
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [
                { "name": "name_", "type": "string" },
                { "name": "symbol_", "type": "string" },
                { "name": "initialSupply", "type": "uint256" },
                { "name": "uniswapRouter", "type": "address" }
            ]
        }
    ],
    "bytecode": "0x6080604052"
}"#;

// Well-known development key, never funded on a real network.
const DEV_KEY: &str = "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

fn memetoken() -> Command {
    Command::cargo_bin("memetoken").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn plan_uses_defaults() {
    let out = stdout_of(memetoken().arg("plan"));
    assert!(out.contains("Module: MeMeTokenDeployer"));
    assert!(out.contains("Contract: MeMeToken"));
    assert!(out.contains("  [0] myMeMeToken\n"));
    assert!(out.contains("  [1] MMTK\n"));
    assert!(out.contains("  [2] 90000000000000000000000000\n"));
    assert!(out.contains("  [3] 0xeE567Fe1712Faf6149d80dA1E6934E354124CfE3\n"));
}

#[test]
fn plan_applies_overrides() {
    let out = stdout_of(memetoken().args([
        "plan",
        "--initial-supply",
        "123",
        "--uniswap-router",
        "not-checked",
    ]));
    assert!(out.contains("  [0] myMeMeToken\n"));
    assert!(out.contains("  [2] 123\n"));
    assert!(out.contains("  [3] not-checked\n"));
}

#[test]
fn plan_reads_parameters_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parameters.json");
    std::fs::write(&path, r#"{ "MeMeTokenDeployer": { "initialSupply": "777" } }"#).unwrap();

    let out = stdout_of(memetoken().arg("plan").arg("--parameters").arg(&path));
    assert!(out.contains("  [2] 777\n"));
}

#[test]
fn malformed_parameters_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parameters.json");
    std::fs::write(&path, "{ oops").unwrap();

    let assert = memetoken()
        .arg("plan")
        .arg("--parameters")
        .arg(&path)
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("malformed parameters file"));
}

#[test]
fn deploy_without_artifact_fails() {
    let dir = tempfile::tempdir().unwrap();
    let assert = memetoken()
        .current_dir(dir.path())
        .args(["deploy", "--private-key", DEV_KEY])
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("failed to read artifact"));
}

#[test]
fn deploy_against_unreachable_node_fails() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("MeMeToken.json");
    std::fs::write(&artifact, TOKEN_ARTIFACT).unwrap();

    memetoken()
        .arg("deploy")
        .arg("--artifact")
        .arg(&artifact)
        .args(["--private-key", DEV_KEY, "--endpoint", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn report_against_unreachable_node_fails() {
    memetoken()
        .args([
            "report",
            "--address",
            "0x5fbdb2315678afecb367f032d93f642f64180aa3",
            "--endpoint",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .code(1);
}
