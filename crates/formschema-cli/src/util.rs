use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::Context;
use formschema::EditorConfig;

/// Read input from file path or stdin.
/// - `-` reads from stdin
/// - anything else reads from that file
pub fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Error reading from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(file).with_context(|| format!("Error reading file {file}"))
    }
}

/// Helper to get display path for error messages
pub fn display_path(file: &str) -> &str {
    if file == "-" { "<stdin>" } else { file }
}

/// Whether error reports written to stderr should carry colors.
pub fn styled_stderr() -> bool {
    io::stderr().is_terminal()
}

/// Load the explicit config file, or discover one from the working directory.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    let config = match path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Error loading config {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Error reading current directory")?;
            EditorConfig::discover(&cwd)?
        }
    };
    tracing::debug!(indent = config.indent, max_depth = config.max_depth, "editor config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path() {
        assert_eq!(display_path("-"), "<stdin>");
        assert_eq!(display_path("schema.json"), "schema.json");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = read_input(missing.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("Error reading file"));
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "indent = 3\nmax-depth = 5\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.indent, 3);
        assert_eq!(config.max_depth, 5);
    }
}
