use assert_cmd::Command;
use assert_fs::TempDir;
use std::path::PathBuf;

/// Test addresses in the shape the allowlist validator accepts.
pub const ADDR_A: &str = "0x52908400098527886E0F7030069857D2E4169EE7";
pub const ADDR_B: &str = "0x8617E340B3D01FA5F11F306F4090FD50E238070D";

/// A contained environment for one test: its own temp data dir (via
/// `XDG_DATA_HOME`) and a stand-in API key.
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }
}

impl TestEnv {
    pub fn new_cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("allowance")
            .expect("failed to find local allowance binary");
        cmd.env("XDG_DATA_HOME", self.temp_dir.path())
            .env("PARA_API_KEY", "test-api-key")
            .args(args);
        cmd
    }

    /// Path of the stored-policy slot inside this environment.
    pub fn slot_path(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join("allowance-cli")
            .join("allowance_wallet_policy.json")
    }

    /// Store a policy for a $`max` cap and the given allowlist.
    pub fn store_policy(&self, max: u32, allowlist: &[&str]) {
        let mut args = vec![
            "policy".to_string(),
            "build".to_string(),
            "--max-value-usd".to_string(),
            max.to_string(),
            "--child-email".to_string(),
            "kid@test.getpara.com".to_string(),
            "--save".to_string(),
        ];
        for address in allowlist {
            args.push("--allowlist".to_string());
            args.push((*address).to_string());
        }
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.new_cmd(&args).assert().success();
    }
}
