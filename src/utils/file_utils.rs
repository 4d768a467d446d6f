use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use log::debug;

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Read a source unit, replacing invalid UTF-8 rather than failing on it
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Write a string to a file, creating parent directories as needed
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn invalid_utf8_is_decoded_lossily() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("latin1.java");
        fs::write(&path, b"class Caf\xe9 { }")?;

        let text = read_file_to_string(&path)?;
        assert!(text.starts_with("class Caf"));
        assert!(text.contains('\u{FFFD}'));
        Ok(())
    }

    #[test]
    fn write_creates_parent_directories() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out").join("report.txt");

        write_string_to_file(&path, "ok")?;
        assert_eq!(fs::read_to_string(&path)?, "ok");
        Ok(())
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = read_file_to_string("/definitely/not/here.java").unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.java"));
    }
}
