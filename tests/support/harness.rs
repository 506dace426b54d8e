use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// TestHarness runs the quizrun binary inside an isolated temporary directory.
/// HOME and XDG_CONFIG_HOME point into the directory so no global config on
/// the host leaks into a test.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub quizrun_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("quizrun.md");

        TestHarness {
            dir: temp_dir,
            config_path,
            quizrun_binary: PathBuf::from(env!("CARGO_BIN_EXE_quizrun")),
        }
    }

    /// Creates a test harness with a project config file.
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        fs::write(&harness.config_path, config_content).expect("Failed to write config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the binary with the given arguments, feeding `stdin` to it.
    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        let home = self.path().join("home");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        let mut child = Command::new(&self.quizrun_binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn quizrun");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for quizrun")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
