use std::fs;
use std::path::{Path, PathBuf};

use crate::{error::MarkdownError, parsing::markdown_to_html};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to convert {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
}

/// What a [`copy_dir_recursive`] run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files_copied: usize,
    pub dirs_created: usize,
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Mirror `source` into `destination`.
///
/// Directories are created as needed and existing files are overwritten.
/// Files already in `destination` but not in `source` are left alone.
pub fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<CopyStats, IoError> {
    if !source.is_dir() {
        return Err(IoError::NotFound(source.to_path_buf()));
    }

    let mut stats = CopyStats::default();
    copy_dir_inner(source, destination, &mut stats)?;
    log::info!(
        "Copied {} files and created {} directories: {} -> {}",
        stats.files_copied,
        stats.dirs_created,
        source.display(),
        destination.display()
    );
    Ok(stats)
}

fn copy_dir_inner(source: &Path, destination: &Path, stats: &mut CopyStats) -> Result<(), IoError> {
    if !destination.exists() {
        log::debug!("Creating directory: {}", destination.display());
        fs::create_dir_all(destination).map_err(IoError::Io)?;
        stats.dirs_created += 1;
    }

    let entries = fs::read_dir(source).map_err(IoError::Io)?;
    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let from = entry.path();
        let to = destination.join(entry.file_name());

        if from.is_dir() {
            copy_dir_inner(&from, &to, stats)?;
        } else {
            log::debug!("Copying file: {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::Io)?;
            stats.files_copied += 1;
        }
    }

    Ok(())
}

/// Convert one Markdown file to an HTML file
pub fn convert_file(input: &Path, output: &Path) -> Result<(), IoError> {
    let markdown = read_file(input)?;
    let html = markdown_to_html(&markdown).map_err(|source| IoError::Markdown {
        path: input.to_path_buf(),
        source,
    })?;
    write_file(output, &html)?;
    log::info!("Rendered {} -> {}", input.display(), output.display());
    Ok(())
}
