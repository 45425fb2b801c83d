use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressFinish, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::io::Read;
use std::path::Path;
use unpack::Unpacked;

pub const DEFAULT_RELEASE_URL: &str =
    "https://github.com/spdx/spdx-sbom-generator/releases/download";

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned status code {status}")]
    Status { url: String, status: StatusCode },
}

/// Opens the body of a remote artifact as a byte stream.
pub trait Download {
    fn download(&self, url: &str) -> Result<Box<dyn Read + '_>>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Download for HttpClient {
    fn download(&self, url: &str) -> Result<Box<dyn Read + '_>> {
        log::info!("downloading {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| DownloadError::Transport {
                url: url.into(),
                source,
            })?;
        if !resp.status().is_success() {
            return Err(DownloadError::Status {
                url: url.into(),
                status: resp.status(),
            }
            .into());
        }
        let file_name = url.rsplit('/').next().unwrap_or(url).to_string();
        let pb = ProgressBar::with_draw_target(resp.content_length(), ProgressDrawTarget::stdout())
            .with_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} {prefix:.bold} [{elapsed}] {wide_bar:.green} {bytes}/{total_bytes} {msg}")?
                    .progress_chars("█▇▆▅▄▃▂▁  ")
            )
            .with_prefix(file_name)
            .with_message("📥 downloading")
            .with_finish(ProgressFinish::WithMessage("📥 downloaded".into()));
        Ok(Box::new(pb.wrap_read(resp)))
    }
}

/// A published spdx-sbom-generator release for linux-386.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Release {
    base_url: String,
    version: String,
}

impl Release {
    const NAME: &'static str = "spdx-sbom-generator";
    const PLATFORM: &'static str = "linux-386";

    pub fn new(base_url: &str, version: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.to_string(),
        }
    }

    pub fn github(version: &str) -> Self {
        Self::new(DEFAULT_RELEASE_URL, version)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn artifact(&self) -> String {
        format!("{}-v{}-{}.tar.gz", Self::NAME, self.version, Self::PLATFORM)
    }

    /// The version is substituted as is, without any escaping.
    pub fn url(&self) -> String {
        format!("{}/v{}/{}", self.base_url, self.version, self.artifact())
    }
}

/// Downloads `release` and streams it into `dest`.
pub fn fetch<D: Download>(client: &D, release: &Release, dest: &Path) -> Result<Unpacked> {
    let url = release.url();
    let _span = tracing::info_span!("fetch", %url).entered();
    let body = client.download(&url)?;
    let unpacked = unpack::unpack_tar_gz(body, dest)
        .with_context(|| format!("failed to unpack {}", release.artifact()))?;
    log::info!(
        "unpacked {}: {} directories, {} files, {} skipped",
        release.artifact(),
        unpacked.dirs,
        unpacked.files,
        unpacked.skipped
    );
    Ok(unpacked)
}
