use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::OpenOptions;
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use tar::{Archive, Entry, EntryType};

/// What a single unpack run did to the destination directory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Unpacked {
    /// Directories that did not exist yet and were created.
    pub dirs: usize,
    /// Regular files written.
    pub files: usize,
    /// Entries of any other type.
    pub skipped: usize,
}

/// Unpacks a gzip compressed tar stream into `dest`.
///
/// The stream is decoded lazily, nothing is buffered beyond the current entry.
pub fn unpack_tar_gz<R: Read>(reader: R, dest: &Path) -> Result<Unpacked> {
    unpack_tar(GzDecoder::new(reader), dest)
}

/// Unpacks a tar stream into `dest`, one entry at a time in stream order.
///
/// Directories are only created when nothing exists at their path yet, an existing
/// path is left as is. Regular files are opened for writing without truncation and
/// get the mode stored in the archive. Links, devices and fifos are skipped.
///
/// Entries whose name would resolve outside of `dest` abort the unpack.
pub fn unpack_tar<R: Read>(reader: R, dest: &Path) -> Result<Unpacked> {
    let mut archive = Archive::new(reader);
    let mut unpacked = Unpacked::default();
    for entry in archive.entries().context("failed to read tar entries")? {
        let mut entry = entry.context("failed to read tar entry")?;
        let name = entry
            .path()
            .context("failed to read tar entry path")?
            .into_owned();
        let ty = entry.header().entry_type();
        match ty {
            EntryType::Directory => {
                let target = target_path(dest, &name)?;
                if std::fs::metadata(&target).is_err() {
                    std::fs::create_dir_all(&target).with_context(|| {
                        format!("failed to create directory {}", target.display())
                    })?;
                    unpacked.dirs += 1;
                }
            }
            EntryType::Regular => {
                let target = target_path(dest, &name)?;
                write_file(&mut entry, &target)?;
                unpacked.files += 1;
            }
            _ => {
                log::warn!("skipping {} ({:?})", name.display(), ty);
                unpacked.skipped += 1;
            }
        }
    }
    Ok(unpacked)
}

/// Joins the entry `name` onto `dest`.
///
/// Fails for absolute names and names containing `..`.
pub fn target_path(dest: &Path, name: &Path) -> Result<PathBuf> {
    for component in name.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                anyhow::bail!(
                    "refusing to unpack {} outside of {}",
                    name.display(),
                    dest.display()
                );
            }
        }
    }
    Ok(dest.join(name))
}

fn write_file<R: Read>(entry: &mut Entry<'_, R>, target: &Path) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(false);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        let mode = entry
            .header()
            .mode()
            .with_context(|| format!("invalid mode for {}", target.display()))?;
        options.mode(mode & 0o7777);
    }
    let mut file = options
        .open(target)
        .with_context(|| format!("failed to open {}", target.display()))?;
    let len = std::io::copy(entry, &mut file)
        .with_context(|| format!("failed to write {}", target.display()))?;
    log::debug!("wrote {} ({} bytes)", target.display(), len);
    Ok(())
}
