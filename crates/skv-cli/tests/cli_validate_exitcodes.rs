use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn validate_ok_exits_0_and_prints_ok() {
    let mut cmd = cargo_bin_cmd!("skv");
    cmd.args(["validate", "pr0cracker", "1f68-190d9"]);

    cmd.assert().success().code(0).stdout("OK\n");
}

#[test]
fn validate_mismatch_exits_2_and_prints_error_to_stderr() {
    let mut cmd = cargo_bin_cmd!("skv");
    cmd.args(["validate", "pr0cracker", "0000-0000"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("serial mismatch for 'pr0cracker'"));
}

#[test]
fn validate_uppercase_serial_is_a_mismatch() {
    let mut cmd = cargo_bin_cmd!("skv");
    cmd.args(["validate", "pr0cracker", "1F68-190D9"]);

    cmd.assert().failure().code(2);
}

#[test]
fn validate_unpadded_serial_is_a_mismatch() {
    let mut cmd = cargo_bin_cmd!("skv");
    cmd.args(["validate", "pr0cracker", "f68-190d9"]);

    cmd.assert().failure().code(2);
}

#[test]
fn validate_json_reports_valid_true() {
    let mut cmd = cargo_bin_cmd!("skv");
    cmd.args(["validate", "pr0cracker", "1f68-190d9", "--json"]);

    cmd.assert()
        .success()
        .code(0)
        .stdout("{\"email\":\"pr0cracker\",\"serial\":\"1f68-190d9\",\"valid\":true}\n");
}

#[test]
fn validate_json_reports_valid_false_and_still_exits_2() {
    let mut cmd = cargo_bin_cmd!("skv");
    cmd.args(["validate", "pr0cracker", "0000-0000", "--json"]);

    cmd.assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("\"valid\":false"));
}
