use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    config::{AgentConfig, SCRIPT_DIR_NAME},
    error::{AgentError, Result},
};

/// Finds the script directory holding the key file.
///
/// Tries in order: the explicit `--dir`, the directory cached in the path file and a
/// walk of the search roots. A directory found by the search is
/// written to the path file.
pub fn find_script_dir(config: &AgentConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.dir {
        return Ok(dir.clone());
    }

    if let Some(cached) = read_cached(&config.path_file) {
        if cached.join(&config.key_file).is_file() {
            return Ok(cached);
        }
        tracing::warn!(
            "Cached directory {} has no {}, searching again",
            cached.display(),
            config.key_file
        );
    }

    let found = search(&config.search_roots, &config.key_file, config.max_depth).ok_or_else(
        || AgentError::DirectoryNotFound {
            dir_name: SCRIPT_DIR_NAME.to_string(),
            key_file: config.key_file.clone(),
        },
    )?;

    fs::write(&config.path_file, found.to_string_lossy().as_bytes())?;
    tracing::info!("Found script directory {}", found.display());

    Ok(found)
}

fn read_cached(path_file: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(path_file).ok()?;
    let trimmed = content.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Walks each root in file name order, down to `max_depth` levels below it.
///
/// Unreadable directories are skipped and symbolic links are not followed.
pub fn search(roots: &[PathBuf], key_file: &str, max_depth: usize) -> Option<PathBuf> {
    roots.iter().find_map(|root| {
        WalkDir::new(root)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.ok())
            .find(|entry| {
                entry.file_name() == SCRIPT_DIR_NAME && entry.path().join(key_file).is_file()
            })
            .map(|entry| entry.into_path())
    })
}
