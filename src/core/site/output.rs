//! Output locations for generated sites
//!
//! A run calls [`SiteOutput::reset`] once, [`SiteOutput::write`] once per file,
//! then [`SiteOutput::commit`]. If any step fails the caller calls
//! [`SiteOutput::abort`] and the previous site stays as it was.

use crate::core::error::{Result, SiteError};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    /// File name relative to the site root
    pub name: String,
    /// File contents
    pub contents: String,
}

impl SiteFile {
    /// Create a file entry
    #[must_use]
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Destination for a generated site
pub trait SiteOutput {
    /// Start a new, empty site
    ///
    /// # Errors
    /// Returns an error if the location cannot be cleared
    fn reset(&mut self) -> Result<()>;

    /// Persist one file of the new site
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn write(&mut self, name: &str, contents: &str) -> Result<()>;

    /// Replace the previous site with everything written since `reset`
    ///
    /// # Errors
    /// Returns an error if the new site cannot be put in place
    fn commit(&mut self) -> Result<()>;

    /// Drop a partially written site
    fn abort(&mut self) {}
}

/// Writes the site to a directory on disk
///
/// Files are written to a staging directory next to the target
/// (`.<name>.staging`). On commit the old directory is moved to
/// `.<name>.previous`, the staging directory renamed into place, and the old
/// copy deleted. If the swap fails the old directory is moved back.
#[derive(Debug, Clone)]
pub struct DirectoryOutput {
    target: PathBuf,
    staging: Option<PathBuf>,
}

impl DirectoryOutput {
    /// Create an output writing to `target`
    #[must_use]
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            staging: None,
        }
    }

    /// Directory the site ends up in
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Hidden sibling of the target: `.<name>.<suffix>`
    fn sibling_path(&self, suffix: &str) -> Result<PathBuf> {
        let name = self.target.file_name().ok_or_else(|| {
            SiteError::io(
                &self.target,
                io::Error::new(io::ErrorKind::InvalidInput, "output path has no directory name"),
            )
        })?;
        let mut sibling = std::ffi::OsString::from(".");
        sibling.push(name);
        sibling.push(".");
        sibling.push(suffix);
        Ok(self.target.with_file_name(sibling))
    }

    fn staging_path(&self) -> Result<PathBuf> {
        self.sibling_path("staging")
    }

    fn backup_path(&self) -> Result<PathBuf> {
        self.sibling_path("previous")
    }
}

fn remove_existing(path: &Path) -> Result<()> {
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    };
    removed.map_err(|e| SiteError::io(path, e))
}

impl SiteOutput for DirectoryOutput {
    fn reset(&mut self) -> Result<()> {
        let staging = self.staging_path()?;
        remove_existing(&staging)?;
        fs::create_dir_all(&staging).map_err(|e| SiteError::io(&staging, e))?;
        self.staging = Some(staging);
        Ok(())
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        let Some(staging) = &self.staging else {
            return Err(SiteError::io(
                &self.target,
                io::Error::other("output location was not reset before writing"),
            ));
        };
        let path = staging.join(name);
        fs::write(&path, contents).map_err(|e| SiteError::io(path, e))
    }

    fn commit(&mut self) -> Result<()> {
        let Some(staging) = self.staging.take() else {
            return Ok(());
        };
        // The old site is moved aside, not deleted, until the new one is in place
        let backup = self.backup_path()?;
        remove_existing(&backup)?;
        let had_previous = match fs::rename(&self.target, &backup) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                self.staging = Some(staging);
                return Err(SiteError::io(&self.target, e));
            }
        };

        if let Err(e) = fs::rename(&staging, &self.target) {
            if had_previous {
                let _ = fs::rename(&backup, &self.target);
            }
            self.staging = Some(staging);
            return Err(SiteError::io(&self.target, e));
        }

        if had_previous {
            remove_existing(&backup)?;
        }
        Ok(())
    }

    fn abort(&mut self) {
        if let Some(staging) = self.staging.take() {
            let _ = fs::remove_dir_all(staging);
        }
    }
}

/// Keeps the site in memory instead of on disk
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    pending: BTreeMap<String, String>,
    files: BTreeMap<String, String>,
}

impl MemoryOutput {
    /// Create an empty output
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed files, keyed by name
    #[must_use]
    pub const fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    /// Contents of one committed file
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl SiteOutput for MemoryOutput {
    fn reset(&mut self) -> Result<()> {
        self.pending.clear();
        Ok(())
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        self.pending.insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.files = std::mem::take(&mut self.pending);
        Ok(())
    }

    fn abort(&mut self) {
        self.pending.clear();
    }
}
