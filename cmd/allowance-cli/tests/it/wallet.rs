use predicates::prelude::*;

use crate::util::TestEnv;

#[test]
fn create_prints_a_fresh_address() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["wallet", "create"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^0x[0-9a-f]{40}\n$").unwrap());
}

#[test]
fn create_twice_succeeds_with_the_same_address() {
    let sandbox = TestEnv::default();
    let first = sandbox.new_cmd(&["wallet", "create"]).assert().success();
    let address = String::from_utf8(first.get_output().stdout.clone()).unwrap();

    sandbox
        .new_cmd(&["wallet", "create"])
        .assert()
        .success()
        .stdout(address)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn show_reports_a_missing_wallet() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["wallet", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No wallet found"));
}

#[test]
fn create_requires_an_api_key() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["wallet", "create"])
        .env("PARA_API_KEY", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PARA_API_KEY is not set"));
}
