use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to launch {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{status}")]
    Exit {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

impl ToolError {
    /// Captured standard error, empty if the tool never started.
    pub fn stderr(&self) -> &str {
        match self {
            Self::Launch { .. } => "",
            Self::Exit { stderr, .. } => stderr,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// The spdx-sbom-generator executable unpacked into a working directory.
#[derive(Clone, Debug)]
pub struct Tool {
    dir: PathBuf,
}

impl Tool {
    pub const NAME: &'static str = "spdx-sbom-generator";

    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(Self::NAME)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(self.path());
        command.args(args).current_dir(&self.dir);
        command
    }

    /// Runs the tool to completion and captures its output.
    ///
    /// Output is only available once the tool exited, nothing is relayed live.
    pub fn run(&self, args: &[&str]) -> Result<ToolOutput, ToolError> {
        let mut command = self.command(args);
        let _span = tracing::info_span!("invoke", tool = Self::NAME).entered();
        log::debug!("running {:?}", command);
        let output = command.output().map_err(|source| ToolError::Launch {
            path: self.path(),
            source,
        })?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(ToolError::Exit {
                status: output.status,
                stdout,
                stderr,
            });
        }
        Ok(ToolOutput { stdout, stderr })
    }
}
