pub mod command;
mod config;
mod download;
mod task;
mod tool;

#[cfg(test)]
mod testing;

pub use config::{ActionArgs, Config};
pub use download::{fetch, Download, DownloadError, HttpClient, Release, DEFAULT_RELEASE_URL};
pub use tool::{Tool, ToolError, ToolOutput};
pub use unpack::Unpacked;
