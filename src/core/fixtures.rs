//! Recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("YHF_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Writes `<fixture_dir>/<endpoint>_<symbol>.<ext>`.
pub(crate) fn record_fixture(
    endpoint: &str,
    symbol: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let path = record_fixture_in(&fixture_dir(), endpoint, symbol, ext, body)?;
    if env::var("YHF_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("YHF_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}

/// Writes `<dir>/<endpoint>_<symbol>.<ext>`; symbols are sanitized for the filesystem.
fn record_fixture_in(
    dir: &Path,
    endpoint: &str,
    symbol: &str,
    ext: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    fs::create_dir_all(dir)?;

    let safe: String = symbol
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let path = dir.join(format!("{endpoint}_{safe}.{ext}"));
    fs::write(&path, body)?;
    Ok(path)
}
