//! Local data directory for the CLI's persisted state: the stored policy
//! slot and the simulated wallet record.

use directories::ProjectDirs;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to find project directories")]
    FailedToFindProjectDirs,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";

pub fn project_dir() -> Result<ProjectDirs, Error> {
    std::env::var(XDG_DATA_HOME)
        .map_or_else(
            |_| ProjectDirs::from("org", "allowance-wallet", "allowance-cli"),
            |data_home| ProjectDirs::from_path(PathBuf::from(data_home).join("allowance-cli")),
        )
        .ok_or(Error::FailedToFindProjectDirs)
}

pub fn data_local_dir() -> Result<PathBuf, Error> {
    Ok(project_dir()?.data_local_dir().to_path_buf())
}

/// Like `data_local_dir`, but guaranteed to exist.
pub fn ensure_data_local_dir() -> Result<PathBuf, Error> {
    let dir = data_local_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
