//! Fixture files for backend seeding tests

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Write `contents` to a fresh temp file.
///
/// `extension` picks the format the loader will use (toml, yaml, json). The file
/// is deleted when the returned guard drops, including when a test panics.
pub fn write_fixture(contents: &str, extension: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = Builder::new()
        .prefix("lockbox-fixture-")
        .suffix(&format!(".{}", extension))
        .tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
