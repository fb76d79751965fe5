//! CLI tests for vpnhelper
//!
//! These exercise argument parsing and help output through the built binary.
//! None of them reach AWS: every invocation stops at clap.

use assert_cmd::Command;
use predicates::prelude::*;

fn vpnhelper_cmd() -> Command {
    Command::cargo_bin("vpnhelper").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    vpnhelper_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vpc-ids"))
        .stdout(predicate::str::contains("route-tables"))
        .stdout(predicate::str::contains("gateway-config"));
}

#[test]
fn test_version() {
    vpnhelper_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_fails() {
    vpnhelper_cmd().assert().failure();
}

#[test]
fn test_vpc_ids_requires_instance_ids() {
    vpnhelper_cmd()
        .arg("vpc-ids")
        .assert()
        .failure()
        .stderr(predicate::str::contains("INSTANCE_ID"));
}

#[test]
fn test_route_tables_requires_vpc_id() {
    vpnhelper_cmd()
        .arg("route-tables")
        .assert()
        .failure()
        .stderr(predicate::str::contains("VPC_ID"));
}

#[test]
fn test_gateway_config_requires_ip_and_stack() {
    vpnhelper_cmd()
        .args(["gateway-config", "--ip", "203.0.113.10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--stack"));
}

#[test]
fn test_invalid_output_format() {
    vpnhelper_cmd()
        .args(["--output", "xml", "route-tables", "vpc-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_gateway_config_help() {
    vpnhelper_cmd()
        .args(["gateway-config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CustomerGateway"));
}
