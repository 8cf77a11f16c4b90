use allowance_cli::commands::version::long;

use crate::util::TestEnv;

#[test]
fn version() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd(&["version"])
        .assert()
        .success()
        .stdout(format!("allowance {}\n", long()));
}
