use predicates::prelude::*;

use crate::util::{TestEnv, ADDR_A, ADDR_B};

#[test]
fn build_without_allowlist_renders_default_rules() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["policy", "build", "--child-email", "kid@test.getpara.com"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("up to $15 USD per transaction")
                .and(predicate::str::contains("Any recipient address is allowed"))
                .and(predicate::str::contains("Contract deployments are blocked")),
        );
}

#[test]
fn build_with_allowlist_lists_each_address() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&[
            "policy",
            "build",
            "--max-value-usd",
            "25",
            "--allowlist",
            ADDR_A,
            "--allowlist",
            ADDR_B,
            "--child-email",
            "kid@test.getpara.com",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2 approved addresses")
                .and(predicate::str::contains(ADDR_A))
                .and(predicate::str::contains(ADDR_B)),
        );
}

#[test]
fn build_json_emits_the_wire_document() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&[
            "policy",
            "build",
            "--json",
            "--allowlist",
            ADDR_A,
            "--child-email",
            "kid@test.getpara.com",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"partnerId\": \"allowance-wallet-beta\"")
                .and(predicate::str::contains("\"INCLUDED_IN\""))
                .and(predicate::str::contains("\"DEPLOY_CONTRACT\"")),
        );
}

#[test]
fn build_rejects_a_malformed_address() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&[
            "policy",
            "build",
            "--allowlist",
            "0x123",
            "--child-email",
            "kid@test.getpara.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid 0x Ethereum address"));
}

#[test]
fn build_rejects_an_out_of_range_value() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&[
            "policy",
            "build",
            "--max-value-usd",
            "1001",
            "--child-email",
            "kid@test.getpara.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most $1000"));
}

#[test]
fn save_then_show_round_trips_the_policy() {
    let sandbox = TestEnv::default();
    sandbox.store_policy(25, &[ADDR_A]);
    assert!(sandbox.slot_path().is_file());

    sandbox
        .new_cmd(&["policy", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Max per transaction: $25 USD")
                .and(predicate::str::contains(ADDR_A)),
        )
        .stderr(predicate::str::contains("Policy set by parent"));
}

#[test]
fn show_falls_back_to_the_demo_policy() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["policy", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max per transaction: $15 USD"))
        .stderr(predicate::str::contains("default demo policy"));
}

#[test]
fn corrupted_slot_reads_as_absent() {
    let sandbox = TestEnv::default();
    let slot = sandbox.slot_path();
    std::fs::create_dir_all(slot.parent().unwrap()).unwrap();
    std::fs::write(&slot, "not json").unwrap();

    sandbox
        .new_cmd(&["policy", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("default demo policy"));
}
