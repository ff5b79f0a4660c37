// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where the shell keeps its settings off-device.

use std::path::{Path, PathBuf};

/// File name of the persisted `ShellConfig`.
pub const CONFIG_FILE: &str = "shell.json";

/// The shell's data directory under `$XDG_DATA_HOME`, else
/// `~/.local/share`, else the system temp dir. Not created here.
pub fn data_dir() -> PathBuf {
    base_dir().join("chessdao")
}

/// Default config location inside [`data_dir`].
pub fn default_config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn base_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg);
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share");
    }
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_in_data_dir() {
        assert_eq!(default_config_path(), data_dir().join("shell.json"));
        assert!(data_dir().ends_with("chessdao"));
    }

    #[test]
    fn ensure_parent_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join(CONFIG_FILE);
        ensure_parent(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn ensure_parent_of_bare_file_name() {
        assert!(ensure_parent(Path::new(CONFIG_FILE)).is_ok());
    }
}
