// Regression tests for the explorer-path binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn cli() -> Command {
    Command::cargo_bin("explorer-path").unwrap()
}

#[test]
fn cli_encodes_all_fields() {
    cli()
        .args(["encode", "my_job", "x", "--snapshot", "abc123", "--query", "a+b", "--explode"])
        .assert()
        .success()
        .stdout("my_job@abc123~!a%2Bb/x\n");
}

#[test]
fn cli_reports_miette_diagnostics_on_reserved_name() {
    cli()
        .args(["encode", "my/job"])
        .assert()
        .failure()
        .stderr(contains("explorer_path::reserved_character").and(contains("help")));
}

#[test]
fn cli_decodes_to_json() {
    cli()
        .args(["decode", "--json", "my_job@abc123~!some%20query/opA/opB"])
        .assert()
        .success()
        .stdout(
            contains(r#""pipeline_name": "my_job""#)
                .and(contains(r#""snapshot_id": "abc123""#))
                .and(contains(r#""ops_query": "some query""#))
                .and(contains(r#""explode_composites": true"#)),
        );
}

#[test]
fn cli_canonicalize_prints_canonical_form() {
    cli()
        .args(["canonicalize", "my_job~!"])
        .assert()
        .success()
        .stdout(contains("my_job/"));
}

#[test]
fn cli_prints_snapshot_link() {
    cli()
        .args(["snapshot-link", "my_job", "0123456789abcdef"])
        .assert()
        .success()
        .stdout(contains("/snapshots/my_job@0123456789abcdef/").and(contains("01234567")));
}

#[test]
fn cli_strips_snapshot_from_location() {
    cli()
        .args(["strip-snapshot", "/jobs/my_job@abc/op", "my_job@abc/op"])
        .assert()
        .success()
        .stdout("/jobs/my_job/op\n");
}

#[test]
fn cli_leaves_location_without_snapshot() {
    cli()
        .args(["strip-snapshot", "/jobs/my_job/op", "my_job/op"])
        .assert()
        .success()
        .stdout("/jobs/my_job/op\n");
}
