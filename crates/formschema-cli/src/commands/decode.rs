use formschema::report::render_syntax_error;
use formschema::{EditorConfig, decode_with_depth, parse_text};

use crate::util::{display_path, read_input, styled_stderr};

#[derive(clap::Args)]
pub struct Args {
    /// Path to a schema document (use - for stdin)
    pub file: String,
    /// Print the field tree on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: Args, config: &EditorConfig) -> anyhow::Result<()> {
    let contents = read_input(&args.file)?;
    let path = display_path(&args.file);
    match convert(&contents, path, args.compact, config, styled_stderr()) {
        Ok(output) => println!("{output}"),
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Field tree JSON for a schema document, or the error report to print.
pub fn convert(
    contents: &str,
    path: &str,
    compact: bool,
    config: &EditorConfig,
    styled: bool,
) -> Result<String, String> {
    let value = parse_text(contents).map_err(|e| render_syntax_error(&e, contents, path, styled))?;
    let fields = decode_with_depth(&value, config.max_depth);
    let output = if compact {
        serde_json::to_string(&fields)
    } else {
        serde_json::to_string_pretty(&fields)
    };
    output.map_err(|e| format!("Error serializing field tree: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_compact() {
        let contents = r#"{"properties": {"dept": {"type": ["string", "null"]}}}"#;
        let output = convert(contents, "s.json", true, &EditorConfig::default(), false).unwrap();
        assert_eq!(
            output,
            r#"[{"name":"dept","type":"string","required":false,"allowNull":true}]"#
        );
    }

    #[test]
    fn test_decode_reports_syntax_error() {
        let contents = "{\n  \"properties\": {\n  oops\n}";
        let report =
            convert(contents, "s.json", false, &EditorConfig::default(), false).unwrap_err();
        assert!(report.starts_with("error:"), "{report}");
        assert!(report.contains("s.json:3"), "{report}");
    }
}
