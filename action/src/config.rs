use crate::download::{Release, DEFAULT_RELEASE_URL};
use clap::Parser;

/// Runs spdx-sbom-generator from a CI job.
///
/// Every input can be passed as a flag or, the way GitHub Actions passes
/// `with:` inputs, as an `INPUT_<NAME>` environment variable.
#[derive(Clone, Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct ActionArgs {
    /// Release of spdx-sbom-generator to run, without the leading `v`.
    #[clap(long = "tool-version", env = "INPUT_VERSION", default_value = "")]
    tool_version: String,
    /// Arguments passed to spdx-sbom-generator, separated by whitespace.
    #[clap(long, env = "INPUT_COMMANDS", default_value = "")]
    commands: String,
    /// Base url the release artifacts are downloaded from.
    #[clap(long, env = "INPUT_RELEASE_URL", default_value = DEFAULT_RELEASE_URL)]
    release_url: String,
}

/// Inputs of a single run, read once at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    version: String,
    commands: String,
    release_url: String,
}

impl Config {
    pub fn new(args: ActionArgs) -> Self {
        Self {
            version: args.tool_version,
            commands: args.commands,
            release_url: args.release_url,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn commands(&self) -> &str {
        &self.commands
    }

    pub fn release(&self) -> Release {
        Release::new(&self.release_url, &self.version)
    }

    /// Splits the command line on runs of whitespace. Quoting is not supported.
    pub fn args(&self) -> Vec<&str> {
        self.commands.split_whitespace().collect()
    }
}
