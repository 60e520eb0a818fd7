//! End-to-end tests driving the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fugu_cli() -> Command {
    Command::cargo_bin("fugu-cli").unwrap()
}

#[test]
fn digest_known_answer() {
    fugu_cli()
        .args(["digest", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "a9993e364706816aba3e25717850c26c9cd0d89d",
        ));
}

#[test]
fn digest_utf16_matches_key_derivation_encoding() {
    fugu_cli()
        .args(["digest", "--utf16", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "80575166935eba05081e1ce3ec68734a48d72f32",
        ));
}

#[test]
fn encrypt_with_fixed_iv_is_deterministic() {
    fugu_cli()
        .args([
            "encrypt",
            "Hello, world!",
            "--password",
            "secret",
            "--iv",
            "0123456789abcdef",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "0123456789abcdef16b1ebc5937e91e1d2ba60e50c46d29d",
            "f972ddf20764b7c0e002ea4e27746ed4"
        )));
}

#[test]
fn encrypt_then_decrypt_round_trips() {
    let output = fugu_cli()
        .args(["encrypt", "round trip text", "-p", "hunter2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let encrypted = String::from_utf8(output.stdout).unwrap().trim().to_string();

    fugu_cli()
        .args(["decrypt", &encrypted, "-p", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("round trip text"));
}

#[test]
fn random_ivs_differ_between_runs() {
    let run = || {
        let output = fugu_cli()
            .args(["encrypt", "same text", "-p", "pw"])
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };
    assert_ne!(run(), run());
}

#[test]
fn decrypt_rejects_malformed_input() {
    fugu_cli()
        .args(["decrypt", "zzzz", "-p", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn encrypt_rejects_bad_iv() {
    fugu_cli()
        .args(["encrypt", "text", "-p", "pw", "--iv", "not-hex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid IV"));
}

#[test]
fn selftest_passes() {
    fugu_cli().arg("selftest").assert().success();
}
