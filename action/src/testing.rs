use crate::download::{Download, DownloadError};
use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::io::Read;
use tar::{Builder, EntryType, Header};

/// Builds a tar.gz holding regular files, with parent directory entries first.
pub fn tar_gz(files: &[(&str, u32, &[u8])]) -> Vec<u8> {
    let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    let mut dirs: Vec<&str> = vec![];
    for (path, _, _) in files {
        let mut parent = *path;
        while let Some((dir, _)) = parent.rsplit_once('/') {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
            parent = dir;
        }
    }
    dirs.sort_by_key(|dir| dir.len());
    for dir in dirs {
        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::Directory);
        header.set_size(0);
        header.set_mode(0o755);
        builder
            .append_data(&mut header, dir, std::io::empty())
            .unwrap();
    }
    for (path, mode, contents) in files {
        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::Regular);
        header.set_size(contents.len() as u64);
        header.set_mode(*mode);
        builder.append_data(&mut header, path, *contents).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

/// A release archive holding only the tool, as a shell script.
pub fn tool_release(script: &str) -> Vec<u8> {
    tar_gz(&[("spdx-sbom-generator", 0o755, script.as_bytes())])
}

/// Serves a fixed response for every url and records what was requested.
pub struct Fixture {
    response: std::result::Result<Vec<u8>, StatusCode>,
    requested: RefCell<Vec<String>>,
}

impl Fixture {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            response: Ok(body),
            requested: Default::default(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            response: Err(status),
            requested: Default::default(),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Download for Fixture {
    fn download(&self, url: &str) -> Result<Box<dyn Read + '_>> {
        self.requested.borrow_mut().push(url.to_string());
        match &self.response {
            Ok(body) => Ok(Box::new(body.as_slice())),
            Err(status) => Err(DownloadError::Status {
                url: url.to_string(),
                status: *status,
            }
            .into()),
        }
    }
}
