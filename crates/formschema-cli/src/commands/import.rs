use formschema::report::render_import_error;
use formschema::{EditorConfig, encode, import_declarations, to_text};

use crate::util::{display_path, read_input, styled_stderr};

#[derive(clap::Args)]
pub struct Args {
    /// Path to a declaration file (use - for stdin)
    pub file: String,
    /// Print the imported field tree instead of the schema document
    #[arg(long)]
    pub fields: bool,
}

pub fn run(args: Args, config: &EditorConfig) -> anyhow::Result<()> {
    let contents = read_input(&args.file)?;
    let path = display_path(&args.file);
    match convert(&contents, path, args.fields, config, styled_stderr()) {
        Ok(output) => println!("{output}"),
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Schema document (or field tree) for declaration text, or the annotated
/// report of the first line that failed.
pub fn convert(
    contents: &str,
    path: &str,
    as_fields: bool,
    config: &EditorConfig,
    styled: bool,
) -> Result<String, String> {
    let fields = import_declarations(contents)
        .map_err(|e| render_import_error(&e, contents, path, styled))?;
    if as_fields {
        serde_json::to_string_pretty(&fields)
            .map_err(|e| format!("Error serializing field tree: {e}"))
    } else {
        Ok(to_text(&encode(&fields), config.indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_prints_document() {
        let output = convert(
            "id: string;\ndept: string | null;",
            "user.ts",
            false,
            &EditorConfig::default(),
            false,
        )
        .unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&output).unwrap(),
            serde_json::json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "dept": {"type": ["string", "null"]}
                },
                "required": ["id"]
            })
        );
    }

    #[test]
    fn test_import_failure_is_annotated() {
        let report = convert(
            "id: string;\nbroken line\ndept: string;",
            "user.ts",
            false,
            &EditorConfig::default(),
            false,
        )
        .unwrap_err();
        assert!(report.starts_with("error: expected `name: type`"), "{report}");
        assert!(report.contains("user.ts:2"), "{report}");
        assert!(report.contains("broken line"), "{report}");
    }
}
