use crate::download::{self, Download};
use crate::task::TaskRunner;
use crate::tool::Tool;
use crate::Config;
use anyhow::Result;
use std::path::Path;

/// How a run ended once the tool was started.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Success,
    Failed,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
        }
    }
}

/// Fetches the configured release into `dir` and runs it there.
///
/// Fetch failures are returned as errors before the tool is launched. A tool
/// that can't be started or exits non-zero yields [`Status::Failed`].
pub fn run<D: Download>(client: &D, config: &Config, dir: &Path) -> Result<Status> {
    let release = config.release();
    println!("--- VERSION --- {}", config.version());
    println!("--- COMMAND --- {}", config.commands());
    println!("--- URL --- {}", release.url());

    let mut runner = TaskRunner::new(2);
    runner.start_task(format!("Fetch {}", release.artifact()));
    if let Err(err) = download::fetch(client, &release, dir) {
        runner.fail_task();
        return Err(err);
    }
    runner.end_task();

    runner.start_task(format!("Run {}", Tool::NAME));
    let status = match Tool::new(dir).run(&config.args()) {
        Ok(output) => {
            runner.end_task();
            println!("--- OUTPUT ---");
            println!("{}\n{}", output.stdout, output.stderr);
            Status::Success
        }
        Err(err) => {
            runner.fail_task();
            println!(
                "An error occurred during {} operation: {}, stderr: ({})",
                Tool::NAME,
                err,
                err.stderr()
            );
            Status::Failed
        }
    };
    Ok(status)
}
