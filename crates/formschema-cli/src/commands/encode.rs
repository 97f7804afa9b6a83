use formschema::{EditorConfig, Field, encode, to_text};

use crate::util::{display_path, read_input};

#[derive(clap::Args)]
pub struct Args {
    /// Path to a JSON field tree (use - for stdin)
    pub file: String,
}

pub fn run(args: Args, config: &EditorConfig) -> anyhow::Result<()> {
    let contents = read_input(&args.file)?;
    match convert(&contents, display_path(&args.file), config) {
        Ok(output) => println!("{output}"),
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Schema document text for a JSON field tree, or the error to report.
pub fn convert(contents: &str, path: &str, config: &EditorConfig) -> Result<String, String> {
    let fields: Vec<Field> = serde_json::from_str(contents)
        .map_err(|e| format!("Error: {path} is not a field tree: {e}"))?;
    Ok(to_text(&encode(&fields), config.indent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_field_tree() {
        let contents = r#"[{"name": "age", "type": "number", "required": true, "allowNull": false}]"#;
        let output = convert(contents, "fields.json", &EditorConfig::default()).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&output).unwrap(),
            serde_json::json!({
                "type": "object",
                "properties": {"age": {"type": "number"}},
                "required": ["age"]
            })
        );
    }

    #[test]
    fn test_encode_rejects_non_tree() {
        let report = convert(r#"{"type": "object"}"#, "<stdin>", &EditorConfig::default())
            .unwrap_err();
        assert!(report.starts_with("Error: <stdin> is not a field tree"), "{report}");
    }
}
