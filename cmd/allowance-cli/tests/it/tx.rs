use predicates::prelude::*;

use crate::util::{TestEnv, ADDR_A, ADDR_B};

#[test]
fn send_within_policy_prints_a_hash() {
    let sandbox = TestEnv::default();
    sandbox.new_cmd(&["wallet", "create"]).assert().success();
    sandbox.store_policy(20, &[]);

    sandbox
        .new_cmd(&["tx", "send", "--to", ADDR_A, "--value-usd", "10"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^0x[0-9a-f]{64}\n$").unwrap());
}

#[test]
fn send_over_the_cap_is_blocked() {
    let sandbox = TestEnv::default();
    sandbox.new_cmd(&["wallet", "create"]).assert().success();
    sandbox.store_policy(20, &[]);

    sandbox
        .new_cmd(&["tx", "send", "--to", ADDR_A, "--value-usd", "21"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Blocked by Para")
                .and(predicate::str::contains("$20 USD per-transaction cap")),
        );
}

#[test]
fn send_off_allowlist_carries_a_review_link() {
    let sandbox = TestEnv::default();
    sandbox.new_cmd(&["wallet", "create"]).assert().success();
    sandbox.store_policy(20, &[ADDR_A]);

    sandbox
        .new_cmd(&["tx", "send", "--to", ADDR_B, "--value-usd", "5"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not on the approved address list")
                .and(predicate::str::contains("app.getpara.com/review/")),
        );
}

#[test]
fn send_without_a_stored_policy_uses_the_demo_cap() {
    let sandbox = TestEnv::default();
    sandbox.new_cmd(&["wallet", "create"]).assert().success();

    // Default demo policy caps at $15.
    sandbox
        .new_cmd(&["tx", "send", "--to", ADDR_A, "--value-usd", "16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("$15 USD per-transaction cap"));

    sandbox
        .new_cmd(&["tx", "send", "--to", ADDR_A, "--value-usd", "15"])
        .assert()
        .success();
}

#[test]
fn send_requires_a_wallet() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["tx", "send", "--to", ADDR_A, "--value-usd", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no wallet found"));
}

#[test]
fn send_rejects_a_malformed_recipient() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["tx", "send", "--to", "0xnope", "--value-usd", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid recipient address"));
}

#[test]
fn send_rejects_a_zero_value() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["tx", "send", "--to", ADDR_A, "--value-usd", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
}
