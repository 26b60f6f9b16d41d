//! The session remembered between invocations, kept as `session.json` in
//! the config directory.

use crate::{CliError, CliResult};

use mf_gateway::Session;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const SESSION_FILENAME: &str = "session.json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Default)]
pub struct LoadResult {
    pub session: Option<Session>,
    /// Parse error of a file that existed but could not be read back
    pub corruption_error: Option<String>,
    /// Where the unreadable file was moved to
    pub backup: Option<PathBuf>,
}

pub fn session_path(dir: &Path) -> PathBuf {
    dir.join(SESSION_FILENAME)
}

/// Load the remembered session.
///
/// A missing file and an expired session both yield no session. A corrupted
/// file is moved aside and reported through `corruption_error`.
pub fn load(dir: &Path) -> CliResult<LoadResult> {
    let path = session_path(dir);

    if !path.exists() {
        debug!("No session file at {path:?}");
        return Ok(LoadResult::default());
    }

    let contents = fs::read_to_string(&path).map_err(|e| CliError::session_read(path.clone(), e))?;

    match serde_json::from_str::<Session>(&contents) {
        Ok(session) if is_expired(&session, chrono::Utc::now().timestamp()) => {
            info!("Stored session for {} has expired", session.user.email);
            clear(dir)?;
            Ok(LoadResult::default())
        }
        Ok(session) => {
            debug!("Loaded session for {}", session.user.email);
            Ok(LoadResult {
                session: Some(session),
                ..LoadResult::default()
            })
        }
        Err(e) => {
            warn!("Session file corrupted at {path:?}: {e}");
            let backup = backup_corrupted(dir)?;
            Ok(LoadResult {
                session: None,
                corruption_error: Some(e.to_string()),
                backup,
            })
        }
    }
}

/// Write the session with temp file, fsync, rename.
pub fn save(dir: &Path, session: &Session) -> CliResult<()> {
    fs::create_dir_all(dir).map_err(|e| CliError::session_write(dir.to_path_buf(), e))?;

    let final_path = session_path(dir);
    let temp_path = dir.join(format!("{SESSION_FILENAME}.tmp.{}", std::process::id()));

    let json = serde_json::to_string_pretty(session)?;

    {
        let mut file =
            fs::File::create(&temp_path).map_err(|e| CliError::session_write(temp_path.clone(), e))?;

        file.write_all(json.as_bytes())
            .map_err(|e| CliError::session_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| CliError::session_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, &final_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CliError::session_write(final_path.clone(), e)
    })?;

    info!("Saved session for {}", session.user.email);
    Ok(())
}

/// Remove the session file. Returns whether one existed.
pub fn clear(dir: &Path) -> CliResult<bool> {
    let path = session_path(dir);
    match fs::remove_file(&path) {
        Ok(()) => {
            debug!("Removed session file {path:?}");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CliError::session_write(path, e)),
    }
}

/// Rename `session.json` to `session.json.corrupted.{timestamp}`.
pub fn backup_corrupted(dir: &Path) -> CliResult<Option<PathBuf>> {
    let path = session_path(dir);

    if !path.exists() {
        return Ok(None);
    }

    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let backup_path = dir.join(format!("{SESSION_FILENAME}.corrupted.{timestamp}"));

    fs::rename(&path, &backup_path).map_err(|e| CliError::session_write(path.clone(), e))?;

    warn!("Backed up corrupted session to {backup_path:?}");
    Ok(Some(backup_path))
}

pub fn is_expired(session: &Session, now: i64) -> bool {
    session.expires_at.is_some_and(|expires_at| expires_at <= now)
}
