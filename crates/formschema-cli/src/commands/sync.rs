use formschema::report::render_syntax_error;
use formschema::{EditorConfig, EditorSession, TextSync, to_text};

use crate::util::{display_path, read_input, styled_stderr};

#[derive(clap::Args)]
pub struct Args {
    /// Path to a schema document (use - for stdin)
    pub file: String,
}

pub fn run(args: Args, config: &EditorConfig) -> anyhow::Result<()> {
    let contents = read_input(&args.file)?;
    match convert(&contents, display_path(&args.file), config, styled_stderr()) {
        Ok(output) => println!("{output}"),
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Normalized document text after passing `contents` through a session.
pub fn convert(
    contents: &str,
    path: &str,
    config: &EditorConfig,
    styled: bool,
) -> Result<String, String> {
    let mut session = EditorSession::new(config.clone());

    match session.edit_text(contents) {
        TextSync::Applied => {}
        TextSync::Guarded => {
            tracing::warn!(file = path, "document has no fields, printing the empty schema");
        }
        TextSync::Rejected(e) => return Err(render_syntax_error(&e, contents, path, styled)),
    }

    Ok(to_text(&session.document(), session.config().indent))
}
