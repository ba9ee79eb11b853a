use camino::Utf8PathBuf;
use camino_tempfile_ext::camino_tempfile::Utf8TempDir;
use std::{
    collections::HashMap,
    io::Write,
    process::{Command, Stdio},
};

pub struct DebverTest {
    pub temp_dir: Utf8TempDir,
    pub env: HashMap<String, String>,
}

impl DebverTest {
    pub fn new() -> Self {
        let temp_dir = Utf8TempDir::new().expect("Failed to create temporary directory");
        Self {
            temp_dir,
            env: HashMap::new(),
        }
    }

    pub fn debver(&self, args: &[&str]) -> DebverOutput {
        let mut cmd = self.debver_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute debver command");
        DebverOutput { output }
    }

    pub fn debver_with_stdin(&self, args: &[&str], stdin: &str) -> DebverOutput {
        let mut cmd = self.debver_command();
        cmd.args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to spawn debver command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        let output = child
            .wait_with_output()
            .expect("Failed to wait for debver command");
        DebverOutput { output }
    }

    pub fn debver_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_debver"));
        cmd.current_dir(self.temp_dir.path());
        cmd.env_clear().envs(&self.env);
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) -> Utf8PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

pub struct DebverOutput {
    pub output: std::process::Output,
}

impl DebverOutput {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}
