//! Logging
//!
//! `log` records go to stderr and to `<app>.log` in the app log directory.
//! The previous log is kept as `<app>.log.1` once the file grows past
//! `MAX_LOG_BYTES`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const MAX_LOG_BYTES: u64 = 1024 * 1024;

/// Move an oversized log aside so the new session starts a fresh file
fn rotate(path: &Path) -> std::io::Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_LOG_BYTES => {
            let mut previous = path.as_os_str().to_owned();
            previous.push(".1");
            std::fs::rename(path, PathBuf::from(previous))
        }
        _ => Ok(()),
    }
}

/// Install the global logger. Call once, before anything logs.
pub fn init_logger(log_dir: &Path, app_name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;
    let path = log_dir.join(format!("{}.log", app_name));
    rotate(&path)?;

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()?;

    log::info!("Logging to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_moves_large_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GestionPro.log");
        std::fs::write(&path, vec![b'x'; (MAX_LOG_BYTES + 1) as usize]).unwrap();

        rotate(&path).unwrap();
        assert!(!path.exists());
        assert!(dir.path().join("GestionPro.log.1").exists());
    }

    #[test]
    fn test_rotate_keeps_small_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GestionPro.log");
        std::fs::write(&path, b"small").unwrap();

        rotate(&path).unwrap();
        assert!(path.exists());
    }
}
