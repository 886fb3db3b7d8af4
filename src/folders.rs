//! Database directory utilities
use std::{
    fs::{create_dir_all, remove_file},
    path::Path,
};

#[cfg(feature = "log")]
use log::{debug, error, info};

use walkdir::WalkDir;

use crate::{error::Error, paths::DATABASE};

/// Yearly directories of the database
pub const YEARLY_FOLDERS: [&str; 8] = [
    "orbit",
    "json",
    "prns",
    "process",
    "all_process",
    "rinex",
    "roti",
    "dcb",
];

/// Outcome of [create_directory]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// Directory (and possible parents) has been created
    Created,
    /// Directory was already present
    AlreadyExists,
}

/// Creates given directory, and its missing parents.
/// An existing directory is not an error, any other failure is.
pub fn create_directory(path: impl AsRef<Path>) -> Result<DirectoryStatus, Error> {
    let path = path.as_ref();
    if path.is_dir() {
        #[cfg(feature = "log")]
        debug!("\"{}\" already exists", path.display());
        return Ok(DirectoryStatus::AlreadyExists);
    }
    create_dir_all(path)?;
    #[cfg(feature = "log")]
    info!("created \"{}\"", path.display());
    Ok(DirectoryStatus::Created)
}

/// Creates the database tree for given year:
/// `database/{folder}/{year}` for every [YEARLY_FOLDERS] entry,
/// plus `database/geo`.
pub fn database_folders(root: impl AsRef<Path>, year: i32) -> Result<(), Error> {
    let database = root.as_ref().join(DATABASE);
    for folder in YEARLY_FOLDERS {
        create_directory(database.join(folder).join(year.to_string()))?;
    }
    create_directory(database.join("geo"))?;
    Ok(())
}

/// Deletes the files of `dir` whose name ends with `extension`.
/// Sub directories are not visited. Returns the number of deleted files.
pub fn delete_files(dir: impl AsRef<Path>, extension: &str) -> Result<usize, Error> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("\"{}\" is not a directory", dir.display()),
        )
        .into());
    }
    let mut deleted = 0;
    let walkdir = WalkDir::new(dir).min_depth(1).max_depth(1);
    for entry in walkdir.into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let fname = entry.file_name().to_string_lossy();
        if !fname.ends_with(extension) {
            continue;
        }
        match remove_file(path) {
            Ok(_) => deleted += 1,
            Err(_e) => {
                #[cfg(feature = "log")]
                error!("failed to delete \"{}\": {}", path.display(), _e);
            },
        }
    }
    Ok(deleted)
}
